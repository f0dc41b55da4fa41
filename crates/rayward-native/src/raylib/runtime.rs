// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The [`NativeRuntime`] implementation over the loaded library.

use std::ffi::CString;
use std::os::raw::c_char;
use std::path::Path;

use rayward_core::error::{ErrorKind, RayError};
use rayward_core::math::{BoundingBox, Camera3D, Color, Vector2, Vector3};
use rayward_core::resources::{
    AnimationInfo, FontInfo, ModelInfo, RawHandle, RenderTargetInfo, ShaderInfo, TextureInfo,
};
use rayward_core::result::RayResult;
use rayward_core::runtime::NativeRuntime;
use rayward_core::state::BlendMode;

use super::library::NativeLibrary;

/// Upper bound on animations read out of a single file in one call.
const MAX_ANIMATIONS_PER_FILE: usize = 32;

/// Output buffer handed to the native text-wrapping export.
const WRAP_TEXT_BUFFER_SIZE: usize = 4096;

/// Marshals a string across the boundary, rejecting interior NUL bytes with
/// the given error kind.
fn c_string(value: &str, kind: ErrorKind) -> RayResult<CString> {
    CString::new(value)
        .map_err(|err| RayError::new(kind, "string contains an interior NUL byte").with_source(err))
}

/// Narrows a coordinate to the `short` range some older exports use.
#[inline]
fn narrow(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// The concrete graphics runtime, backed by the raylib shim library.
///
/// Arguments arrive pre-validated; this type only marshals them into the C
/// ABI and turns sentinel returns (`-1` slots, negative counts) into errors.
#[derive(Debug)]
pub struct RaylibRuntime {
    library: NativeLibrary,
}

impl RaylibRuntime {
    /// Wraps an already-loaded library.
    pub fn new(library: NativeLibrary) -> Self {
        Self { library }
    }

    /// Loads the shared library at `path` and builds the runtime over it.
    pub fn load(path: &Path) -> RayResult<Self> {
        Ok(Self::new(NativeLibrary::load(path)?))
    }
}

impl NativeRuntime for RaylibRuntime {
    fn init_window(&mut self, width: i32, height: i32, title: &str) -> RayResult<()> {
        let title = c_string(title, ErrorKind::Init)?;
        unsafe { (self.library.symbols.init_window)(width, height, title.as_ptr()) };
        Ok(())
    }

    fn close_window(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.close_window)() };
        Ok(())
    }

    fn window_should_close(&mut self) -> RayResult<bool> {
        Ok(unsafe { (self.library.symbols.window_should_close)() })
    }

    fn set_target_fps(&mut self, fps: i32) -> RayResult<()> {
        unsafe { (self.library.symbols.set_target_fps)(fps) };
        Ok(())
    }

    fn frame_time(&mut self) -> RayResult<f32> {
        Ok(unsafe { (self.library.symbols.get_frame_time)() })
    }

    fn begin_drawing(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.begin_drawing)() };
        Ok(())
    }

    fn end_drawing(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.end_drawing)() };
        Ok(())
    }

    fn clear_background(&mut self, color: Color) -> RayResult<()> {
        unsafe { (self.library.symbols.clear_background)(color.to_u32()) };
        Ok(())
    }

    fn begin_mode3d(&mut self, camera: &Camera3D) -> RayResult<()> {
        unsafe {
            (self.library.symbols.begin_mode3d)(
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.target.x,
                camera.target.y,
                camera.target.z,
                camera.up.x,
                camera.up.y,
                camera.up.z,
                camera.fovy,
                camera.projection.to_native(),
            )
        };
        Ok(())
    }

    fn end_mode3d(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.end_mode3d)() };
        Ok(())
    }

    fn begin_shader_mode(&mut self, shader: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.begin_shader_mode)(shader.value()) };
        Ok(())
    }

    fn end_shader_mode(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.end_shader_mode)() };
        Ok(())
    }

    fn begin_blend_mode(&mut self, mode: BlendMode) -> RayResult<()> {
        unsafe { (self.library.symbols.begin_blend_mode)(mode.to_native()) };
        Ok(())
    }

    fn end_blend_mode(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.end_blend_mode)() };
        Ok(())
    }

    fn begin_scissor_mode(&mut self, x: i32, y: i32, width: i32, height: i32) -> RayResult<()> {
        unsafe { (self.library.symbols.begin_scissor_mode)(x, y, width, height) };
        Ok(())
    }

    fn end_scissor_mode(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.end_scissor_mode)() };
        Ok(())
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> RayResult<()> {
        unsafe { (self.library.symbols.draw_pixel)(narrow(x), narrow(y), color.to_u32()) };
        Ok(())
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_line)(
                narrow(x1),
                narrow(y1),
                narrow(x2),
                narrow(y2),
                color.to_u32(),
            )
        };
        Ok(())
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color) -> RayResult<()> {
        unsafe { (self.library.symbols.draw_circle)(narrow(x), narrow(y), radius, color.to_u32()) };
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> RayResult<()> {
        unsafe { (self.library.symbols.draw_rectangle)(x, y, width, height, color.to_u32()) };
        Ok(())
    }

    fn draw_triangle(&mut self, a: Vector2, b: Vector2, c: Vector2, color: Color) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_triangle)(a.x, a.y, b.x, b.y, c.x, c.y, color.into())
        };
        Ok(())
    }

    fn draw_poly(
        &mut self,
        center: Vector2,
        sides: i32,
        radius: f32,
        rotation: f32,
        color: Color,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_poly)(
                center.x,
                center.y,
                sides,
                radius,
                rotation,
                color.to_u32(),
            )
        };
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    ) -> RayResult<()> {
        let text = c_string(text, ErrorKind::Draw)?;
        unsafe { (self.library.symbols.draw_text)(text.as_ptr(), x, y, font_size, color.to_u32()) };
        Ok(())
    }

    fn draw_fps(&mut self, x: i32, y: i32) -> RayResult<()> {
        unsafe { (self.library.symbols.draw_fps)(x, y) };
        Ok(())
    }

    fn draw_cube(
        &mut self,
        position: Vector3,
        width: f32,
        height: f32,
        length: f32,
        color: Color,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_cube)(
                position.x,
                position.y,
                position.z,
                width,
                height,
                length,
                color.to_u32(),
            )
        };
        Ok(())
    }

    fn draw_sphere(&mut self, center: Vector3, radius: f32, color: Color) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_sphere)(center.x, center.y, center.z, radius, color.to_u32())
        };
        Ok(())
    }

    fn draw_grid(&mut self, slices: i32, spacing: f32) -> RayResult<()> {
        unsafe { (self.library.symbols.draw_grid)(slices, spacing) };
        Ok(())
    }

    fn load_texture(&mut self, path: &str) -> RayResult<(RawHandle, TextureInfo)> {
        let c_path = c_string(path, ErrorKind::Ffi)?;
        let slot = unsafe { (self.library.symbols.load_texture)(c_path.as_ptr()) };
        if slot < 0 {
            return Err(RayError::ffi("native texture load failed").with_context(path));
        }
        let info = unsafe {
            TextureInfo {
                width: (self.library.symbols.texture_width)(slot),
                height: (self.library.symbols.texture_height)(slot),
                mipmaps: (self.library.symbols.texture_mipmaps)(slot),
                format: (self.library.symbols.texture_format)(slot),
                file_name: path.to_owned(),
            }
        };
        Ok((RawHandle::new(slot), info))
    }

    fn unload_texture(&mut self, handle: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.unload_texture)(handle.value()) };
        Ok(())
    }

    fn draw_texture(&mut self, handle: RawHandle, x: i32, y: i32, tint: Color) -> RayResult<()> {
        unsafe { (self.library.symbols.draw_texture)(handle.value(), x, y, tint.into()) };
        Ok(())
    }

    fn draw_texture_ex(
        &mut self,
        handle: RawHandle,
        position: Vector2,
        origin: Vector2,
        rotation: f32,
        scale: f32,
        tint: Color,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_texture_pro)(
                handle.value(),
                position.x,
                position.y,
                origin.x,
                origin.y,
                rotation,
                scale,
                tint.into(),
            )
        };
        Ok(())
    }

    fn create_render_target(
        &mut self,
        width: i32,
        height: i32,
    ) -> RayResult<(RawHandle, RenderTargetInfo)> {
        let slot = unsafe { (self.library.symbols.load_render_texture)(width, height) };
        if slot < 0 {
            return Err(RayError::ffi("native render target creation failed")
                .with_context(format!("{width}x{height}")));
        }
        let info = unsafe {
            RenderTargetInfo {
                width: (self.library.symbols.render_texture_width)(slot),
                height: (self.library.symbols.render_texture_height)(slot),
            }
        };
        Ok((RawHandle::new(slot), info))
    }

    fn unload_render_target(&mut self, handle: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.unload_render_texture)(handle.value()) };
        Ok(())
    }

    fn load_model(&mut self, path: &str) -> RayResult<(RawHandle, ModelInfo)> {
        let c_path = c_string(path, ErrorKind::Ffi)?;
        // The export fills [slot, meshCount, materialCount].
        let mut buffer = [0i32; 3];
        let slot =
            unsafe { (self.library.symbols.load_model)(c_path.as_ptr(), buffer.as_mut_ptr()) };
        if slot < 0 {
            return Err(RayError::ffi("native model load failed").with_context(path));
        }
        let bounds = unsafe {
            BoundingBox::new(
                Vector3::new(
                    (self.library.symbols.model_bounds_min_x)(slot),
                    (self.library.symbols.model_bounds_min_y)(slot),
                    (self.library.symbols.model_bounds_min_z)(slot),
                ),
                Vector3::new(
                    (self.library.symbols.model_bounds_max_x)(slot),
                    (self.library.symbols.model_bounds_max_y)(slot),
                    (self.library.symbols.model_bounds_max_z)(slot),
                ),
            )
        };
        let info = ModelInfo {
            mesh_count: buffer[1],
            material_count: buffer[2],
            bounds,
            file_name: path.to_owned(),
        };
        Ok((RawHandle::new(slot), info))
    }

    fn unload_model(&mut self, handle: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.unload_model)(handle.value()) };
        Ok(())
    }

    fn draw_model(
        &mut self,
        handle: RawHandle,
        position: Vector3,
        scale: f32,
        tint: Color,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_model)(handle.value(), position.into(), scale, tint.into())
        };
        Ok(())
    }

    fn draw_model_ex(
        &mut self,
        handle: RawHandle,
        position: Vector3,
        rotation_axis: Vector3,
        rotation_angle: f32,
        scale: Vector3,
        tint: Color,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_model_ex)(
                handle.value(),
                position.into(),
                rotation_axis.into(),
                rotation_angle,
                scale.into(),
                tint.into(),
            )
        };
        Ok(())
    }

    fn draw_model_wires(
        &mut self,
        handle: RawHandle,
        position: Vector3,
        scale: f32,
        tint: Color,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.draw_model_wires)(
                handle.value(),
                position.into(),
                scale,
                tint.into(),
            )
        };
        Ok(())
    }

    fn load_model_animations(&mut self, path: &str) -> RayResult<Vec<(RawHandle, AnimationInfo)>> {
        let c_path = c_string(path, ErrorKind::Ffi)?;
        let mut slots = [0i32; MAX_ANIMATIONS_PER_FILE];
        let count = unsafe {
            (self.library.symbols.load_model_animations)(
                c_path.as_ptr(),
                slots.as_mut_ptr(),
                MAX_ANIMATIONS_PER_FILE as i32,
            )
        };
        if count < 0 {
            return Err(RayError::ffi("native animation load failed").with_context(path));
        }
        let mut animations = Vec::with_capacity(count as usize);
        for (index, &slot) in slots.iter().take(count as usize).enumerate() {
            let info = unsafe {
                AnimationInfo {
                    index: index as i32,
                    frame_count: (self.library.symbols.animation_frame_count)(slot),
                    bone_count: (self.library.symbols.animation_bone_count)(slot),
                    file_name: path.to_owned(),
                }
            };
            animations.push((RawHandle::new(slot), info));
        }
        Ok(animations)
    }

    fn unload_animation(&mut self, handle: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.unload_animation)(handle.value()) };
        Ok(())
    }

    fn update_model_animation(
        &mut self,
        model: RawHandle,
        animation: RawHandle,
        frame: i32,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.update_model_animation)(model.value(), animation.value(), frame)
        };
        Ok(())
    }

    fn load_shader(&mut self, vs_path: &str, fs_path: &str) -> RayResult<(RawHandle, ShaderInfo)> {
        let vs = c_string(vs_path, ErrorKind::Ffi)?;
        let fs = c_string(fs_path, ErrorKind::Ffi)?;
        let slot = unsafe { (self.library.symbols.load_shader)(vs.as_ptr(), fs.as_ptr()) };
        if slot < 0 {
            return Err(RayError::ffi("native shader compilation failed")
                .with_context(format!("{vs_path} + {fs_path}")));
        }
        Ok((
            RawHandle::new(slot),
            ShaderInfo::new(format!("{vs_path} + {fs_path}")),
        ))
    }

    fn load_shader_from_memory(
        &mut self,
        vs_code: &str,
        fs_code: &str,
    ) -> RayResult<(RawHandle, ShaderInfo)> {
        let vs = c_string(vs_code, ErrorKind::Ffi)?;
        let fs = c_string(fs_code, ErrorKind::Ffi)?;
        let slot =
            unsafe { (self.library.symbols.load_shader_from_memory)(vs.as_ptr(), fs.as_ptr()) };
        if slot < 0 {
            return Err(RayError::ffi("native shader compilation failed").with_context("<memory>"));
        }
        Ok((RawHandle::new(slot), ShaderInfo::new("<memory>")))
    }

    fn unload_shader(&mut self, handle: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.unload_shader)(handle.value()) };
        Ok(())
    }

    fn shader_location(&mut self, handle: RawHandle, uniform: &str) -> RayResult<i32> {
        let name = c_string(uniform, ErrorKind::Ffi)?;
        let location =
            unsafe { (self.library.symbols.shader_location)(handle.value(), name.as_ptr()) };
        if location < 0 {
            return Err(
                RayError::ffi("uniform not found in compiled shader").with_context(uniform)
            );
        }
        Ok(location)
    }

    fn set_shader_value_f32(
        &mut self,
        handle: RawHandle,
        location: i32,
        value: f32,
    ) -> RayResult<()> {
        unsafe { (self.library.symbols.set_shader_float)(handle.value(), location, value) };
        Ok(())
    }

    fn set_shader_value_i32(
        &mut self,
        handle: RawHandle,
        location: i32,
        value: i32,
    ) -> RayResult<()> {
        unsafe { (self.library.symbols.set_shader_int)(handle.value(), location, value) };
        Ok(())
    }

    fn set_shader_value_vec3(
        &mut self,
        handle: RawHandle,
        location: i32,
        value: Vector3,
    ) -> RayResult<()> {
        unsafe {
            (self.library.symbols.set_shader_vec3)(
                handle.value(),
                location,
                value.x,
                value.y,
                value.z,
            )
        };
        Ok(())
    }

    fn load_font(&mut self, path: &str, font_size: i32) -> RayResult<(RawHandle, FontInfo)> {
        let c_path = c_string(path, ErrorKind::Ffi)?;
        let slot = unsafe { (self.library.symbols.load_font)(c_path.as_ptr(), font_size) };
        if slot < 0 {
            return Err(RayError::ffi("native font load failed").with_context(path));
        }
        let info = unsafe {
            FontInfo {
                base_size: (self.library.symbols.font_base_size)(slot),
                glyph_count: (self.library.symbols.font_glyph_count)(slot),
                file_name: path.to_owned(),
            }
        };
        Ok((RawHandle::new(slot), info))
    }

    fn unload_font(&mut self, handle: RawHandle) -> RayResult<()> {
        unsafe { (self.library.symbols.unload_font)(handle.value()) };
        Ok(())
    }

    fn draw_text_with_font(
        &mut self,
        handle: RawHandle,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) -> RayResult<()> {
        let text = c_string(text, ErrorKind::Draw)?;
        unsafe {
            (self.library.symbols.draw_text_by_slot)(
                handle.value(),
                text.as_ptr(),
                position.x,
                position.y,
                font_size,
                spacing,
                tint.to_u32(),
            )
        };
        Ok(())
    }

    fn measure_text(
        &mut self,
        handle: RawHandle,
        text: &str,
        font_size: f32,
        spacing: f32,
    ) -> RayResult<Vector2> {
        let c_text = c_string(text, ErrorKind::Ffi)?;
        // The export fills [width, height].
        let mut buffer = [0f32; 2];
        unsafe {
            (self.library.symbols.measure_text)(
                handle.value(),
                c_text.as_ptr(),
                font_size,
                spacing,
                buffer.as_mut_ptr(),
            )
        };
        Ok(Vector2::new(buffer[0], buffer[1]))
    }

    fn wrap_text(
        &mut self,
        handle: RawHandle,
        text: &str,
        font_size: f32,
        spacing: f32,
        max_width: f32,
    ) -> RayResult<String> {
        let c_text = c_string(text, ErrorKind::Ffi)?;
        let mut buffer = vec![0u8; WRAP_TEXT_BUFFER_SIZE];
        let lines = unsafe {
            (self.library.symbols.wrap_text)(
                handle.value(),
                c_text.as_ptr(),
                font_size,
                spacing,
                max_width,
                buffer.as_mut_ptr() as *mut c_char,
                buffer.len() as i32,
            )
        };
        if lines < 0 {
            return Err(RayError::ffi("native text wrap failed"));
        }
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        buffer.truncate(end);
        String::from_utf8(buffer)
            .map_err(|err| RayError::ffi("wrapped text is not valid UTF-8").with_source(err))
    }

    fn is_key_down(&mut self, key: i32) -> RayResult<bool> {
        Ok(unsafe { (self.library.symbols.is_key_down)(narrow(key)) })
    }

    fn is_key_up(&mut self, key: i32) -> RayResult<bool> {
        Ok(unsafe { (self.library.symbols.is_key_up)(narrow(key)) })
    }

    fn key_pressed(&mut self) -> RayResult<i32> {
        let raw = unsafe { (self.library.symbols.get_key_pressed)() };
        // `c_char` is signed on some targets; an empty queue is 0 either way.
        Ok(i32::from(raw).max(0))
    }

    fn is_mouse_button_down(&mut self, button: i32) -> RayResult<bool> {
        Ok(unsafe { (self.library.symbols.is_mouse_button_down)(button) })
    }

    fn mouse_position(&mut self) -> RayResult<(i32, i32)> {
        let x = unsafe { (self.library.symbols.mouse_x)() };
        let y = unsafe { (self.library.symbols.mouse_y)() };
        Ok((x, y))
    }

    fn set_mouse_position(&mut self, x: i32, y: i32) -> RayResult<()> {
        unsafe { (self.library.symbols.set_mouse_position)(x, y) };
        Ok(())
    }

    fn show_cursor(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.show_cursor)() };
        Ok(())
    }

    fn hide_cursor(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.hide_cursor)() };
        Ok(())
    }

    fn enable_cursor(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.enable_cursor)() };
        Ok(())
    }

    fn disable_cursor(&mut self) -> RayResult<()> {
        unsafe { (self.library.symbols.disable_cursor)() };
        Ok(())
    }

    fn is_cursor_hidden(&mut self) -> RayResult<bool> {
        Ok(unsafe { (self.library.symbols.is_cursor_hidden)() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_load_propagates_library_failures() {
        let err = RaylibRuntime::load(Path::new("/nonexistent/libgraphics.so")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Init);
    }

    #[test]
    fn interior_nul_is_rejected_before_the_call() {
        assert_eq!(
            c_string("bad\0path", ErrorKind::Ffi).unwrap_err().kind(),
            ErrorKind::Ffi
        );
        assert!(c_string("fine", ErrorKind::Ffi).is_ok());
    }

    #[test]
    fn narrowing_clamps_to_short_range() {
        assert_eq!(narrow(100), 100);
        assert_eq!(narrow(1_000_000), i16::MAX);
        assert_eq!(narrow(-1_000_000), i16::MIN);
    }
}

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

//! A recording test double for the native runtime.
//!
//! Every method appends its name to a shared call log, so tests can assert
//! not only on results but on exactly which native calls were (or were not)
//! made. Load failures can be injected per family to simulate missing files.

use std::cell::RefCell;
use std::rc::Rc;

use rayward_core::math::{BoundingBox, Camera3D, Color, Vector2, Vector3};
use rayward_core::resources::{
    AnimationInfo, FontInfo, ModelInfo, RawHandle, RenderTargetInfo, ShaderInfo, TextureInfo,
};
use rayward_core::state::BlendMode;
use rayward_core::{NativeRuntime, RayError, RayResult};

/// Shared, inspectable state of a [`RecordingRuntime`].
#[derive(Default)]
pub struct CallLog {
    /// Names of every native call made, in order.
    pub calls: Vec<String>,
    /// When set, the next texture/model/shader/animation load fails.
    pub fail_loads: bool,
    /// When set, `init_window` fails as if the subsystem refused to start.
    pub fail_init: bool,
    /// When set, `end_drawing` and `end_mode3d` fail as draw errors.
    pub fail_frame_ends: bool,
}

impl CallLog {
    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|call| *call == name).count()
    }
}

/// A `NativeRuntime` that records calls and fabricates plausible metadata.
pub struct RecordingRuntime {
    log: Rc<RefCell<CallLog>>,
    next_handle: i32,
}

impl RecordingRuntime {
    /// Creates the double plus a shared handle to its call log.
    pub fn create() -> (Box<RecordingRuntime>, Rc<RefCell<CallLog>>) {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let runtime = Box::new(RecordingRuntime {
            log: Rc::clone(&log),
            next_handle: 0,
        });
        (runtime, log)
    }

    fn record(&self, name: &str) {
        self.log.borrow_mut().calls.push(name.to_string());
    }

    fn next_handle(&mut self) -> RawHandle {
        let handle = RawHandle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn check_load(&self, what: &str) -> RayResult<()> {
        if self.log.borrow().fail_loads {
            Err(RayError::ffi(format!("native {what} load failed")))
        } else {
            Ok(())
        }
    }
}

impl NativeRuntime for RecordingRuntime {
    fn init_window(&mut self, _width: i32, _height: i32, _title: &str) -> RayResult<()> {
        self.record("init_window");
        if self.log.borrow().fail_init {
            Err(RayError::init("native subsystem refused to start"))
        } else {
            Ok(())
        }
    }

    fn close_window(&mut self) -> RayResult<()> {
        self.record("close_window");
        Ok(())
    }

    fn window_should_close(&mut self) -> RayResult<bool> {
        self.record("window_should_close");
        Ok(false)
    }

    fn set_target_fps(&mut self, _fps: i32) -> RayResult<()> {
        self.record("set_target_fps");
        Ok(())
    }

    fn frame_time(&mut self) -> RayResult<f32> {
        self.record("frame_time");
        Ok(0.016)
    }

    fn begin_drawing(&mut self) -> RayResult<()> {
        self.record("begin_drawing");
        Ok(())
    }

    fn end_drawing(&mut self) -> RayResult<()> {
        self.record("end_drawing");
        if self.log.borrow().fail_frame_ends {
            Err(RayError::draw("native end_drawing failed"))
        } else {
            Ok(())
        }
    }

    fn clear_background(&mut self, _color: Color) -> RayResult<()> {
        self.record("clear_background");
        Ok(())
    }

    fn begin_mode3d(&mut self, _camera: &Camera3D) -> RayResult<()> {
        self.record("begin_mode3d");
        Ok(())
    }

    fn end_mode3d(&mut self) -> RayResult<()> {
        self.record("end_mode3d");
        if self.log.borrow().fail_frame_ends {
            Err(RayError::draw("native end_mode3d failed"))
        } else {
            Ok(())
        }
    }

    fn begin_shader_mode(&mut self, _shader: RawHandle) -> RayResult<()> {
        self.record("begin_shader_mode");
        Ok(())
    }

    fn end_shader_mode(&mut self) -> RayResult<()> {
        self.record("end_shader_mode");
        Ok(())
    }

    fn begin_blend_mode(&mut self, _mode: BlendMode) -> RayResult<()> {
        self.record("begin_blend_mode");
        Ok(())
    }

    fn end_blend_mode(&mut self) -> RayResult<()> {
        self.record("end_blend_mode");
        Ok(())
    }

    fn begin_scissor_mode(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) -> RayResult<()> {
        self.record("begin_scissor_mode");
        Ok(())
    }

    fn end_scissor_mode(&mut self) -> RayResult<()> {
        self.record("end_scissor_mode");
        Ok(())
    }

    fn draw_pixel(&mut self, _x: i32, _y: i32, _color: Color) -> RayResult<()> {
        self.record("draw_pixel");
        Ok(())
    }

    fn draw_line(
        &mut self,
        _x1: i32,
        _y1: i32,
        _x2: i32,
        _y2: i32,
        _color: Color,
    ) -> RayResult<()> {
        self.record("draw_line");
        Ok(())
    }

    fn draw_circle(&mut self, _x: i32, _y: i32, _radius: f32, _color: Color) -> RayResult<()> {
        self.record("draw_circle");
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
        _color: Color,
    ) -> RayResult<()> {
        self.record("draw_rectangle");
        Ok(())
    }

    fn draw_triangle(
        &mut self,
        _a: Vector2,
        _b: Vector2,
        _c: Vector2,
        _color: Color,
    ) -> RayResult<()> {
        self.record("draw_triangle");
        Ok(())
    }

    fn draw_poly(
        &mut self,
        _center: Vector2,
        _sides: i32,
        _radius: f32,
        _rotation: f32,
        _color: Color,
    ) -> RayResult<()> {
        self.record("draw_poly");
        Ok(())
    }

    fn draw_text(
        &mut self,
        _text: &str,
        _x: i32,
        _y: i32,
        _font_size: i32,
        _color: Color,
    ) -> RayResult<()> {
        self.record("draw_text");
        Ok(())
    }

    fn draw_fps(&mut self, _x: i32, _y: i32) -> RayResult<()> {
        self.record("draw_fps");
        Ok(())
    }

    fn draw_cube(
        &mut self,
        _position: Vector3,
        _width: f32,
        _height: f32,
        _length: f32,
        _color: Color,
    ) -> RayResult<()> {
        self.record("draw_cube");
        Ok(())
    }

    fn draw_sphere(&mut self, _center: Vector3, _radius: f32, _color: Color) -> RayResult<()> {
        self.record("draw_sphere");
        Ok(())
    }

    fn draw_grid(&mut self, _slices: i32, _spacing: f32) -> RayResult<()> {
        self.record("draw_grid");
        Ok(())
    }

    fn load_texture(&mut self, path: &str) -> RayResult<(RawHandle, TextureInfo)> {
        self.record("load_texture");
        self.check_load("texture")?;
        Ok((
            self.next_handle(),
            TextureInfo {
                width: 64,
                height: 32,
                mipmaps: 1,
                format: 7,
                file_name: path.to_string(),
            },
        ))
    }

    fn unload_texture(&mut self, _handle: RawHandle) -> RayResult<()> {
        self.record("unload_texture");
        Ok(())
    }

    fn draw_texture(&mut self, _handle: RawHandle, _x: i32, _y: i32, _tint: Color) -> RayResult<()> {
        self.record("draw_texture");
        Ok(())
    }

    fn draw_texture_ex(
        &mut self,
        _handle: RawHandle,
        _position: Vector2,
        _origin: Vector2,
        _rotation: f32,
        _scale: f32,
        _tint: Color,
    ) -> RayResult<()> {
        self.record("draw_texture_ex");
        Ok(())
    }

    fn create_render_target(
        &mut self,
        width: i32,
        height: i32,
    ) -> RayResult<(RawHandle, RenderTargetInfo)> {
        self.record("create_render_target");
        self.check_load("render target")?;
        Ok((self.next_handle(), RenderTargetInfo { width, height }))
    }

    fn unload_render_target(&mut self, _handle: RawHandle) -> RayResult<()> {
        self.record("unload_render_target");
        Ok(())
    }

    fn load_model(&mut self, path: &str) -> RayResult<(RawHandle, ModelInfo)> {
        self.record("load_model");
        self.check_load("model")?;
        Ok((
            self.next_handle(),
            ModelInfo {
                mesh_count: 2,
                material_count: 1,
                bounds: BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::ONE),
                file_name: path.to_string(),
            },
        ))
    }

    fn unload_model(&mut self, _handle: RawHandle) -> RayResult<()> {
        self.record("unload_model");
        Ok(())
    }

    fn draw_model(
        &mut self,
        _handle: RawHandle,
        _position: Vector3,
        _scale: f32,
        _tint: Color,
    ) -> RayResult<()> {
        self.record("draw_model");
        Ok(())
    }

    fn draw_model_ex(
        &mut self,
        _handle: RawHandle,
        _position: Vector3,
        _rotation_axis: Vector3,
        _rotation_angle: f32,
        _scale: Vector3,
        _tint: Color,
    ) -> RayResult<()> {
        self.record("draw_model_ex");
        Ok(())
    }

    fn draw_model_wires(
        &mut self,
        _handle: RawHandle,
        _position: Vector3,
        _scale: f32,
        _tint: Color,
    ) -> RayResult<()> {
        self.record("draw_model_wires");
        Ok(())
    }

    fn load_model_animations(&mut self, path: &str) -> RayResult<Vec<(RawHandle, AnimationInfo)>> {
        self.record("load_model_animations");
        self.check_load("animation")?;
        let animations = (0..2)
            .map(|index| {
                (
                    self.next_handle(),
                    AnimationInfo {
                        index,
                        frame_count: 30,
                        bone_count: 4,
                        file_name: path.to_string(),
                    },
                )
            })
            .collect();
        Ok(animations)
    }

    fn unload_animation(&mut self, _handle: RawHandle) -> RayResult<()> {
        self.record("unload_animation");
        Ok(())
    }

    fn update_model_animation(
        &mut self,
        _model: RawHandle,
        _animation: RawHandle,
        _frame: i32,
    ) -> RayResult<()> {
        self.record("update_model_animation");
        Ok(())
    }

    fn load_shader(&mut self, vs_path: &str, fs_path: &str) -> RayResult<(RawHandle, ShaderInfo)> {
        self.record("load_shader");
        self.check_load("shader")?;
        Ok((
            self.next_handle(),
            ShaderInfo::new(format!("{vs_path}+{fs_path}")),
        ))
    }

    fn load_shader_from_memory(
        &mut self,
        _vs_code: &str,
        _fs_code: &str,
    ) -> RayResult<(RawHandle, ShaderInfo)> {
        self.record("load_shader_from_memory");
        self.check_load("shader")?;
        Ok((self.next_handle(), ShaderInfo::new("<memory>")))
    }

    fn unload_shader(&mut self, _handle: RawHandle) -> RayResult<()> {
        self.record("unload_shader");
        Ok(())
    }

    fn shader_location(&mut self, _handle: RawHandle, uniform: &str) -> RayResult<i32> {
        self.log
            .borrow_mut()
            .calls
            .push(format!("shader_location:{uniform}"));
        Ok(7)
    }

    fn set_shader_value_f32(
        &mut self,
        _handle: RawHandle,
        _location: i32,
        _value: f32,
    ) -> RayResult<()> {
        self.record("set_shader_value_f32");
        Ok(())
    }

    fn set_shader_value_i32(
        &mut self,
        _handle: RawHandle,
        _location: i32,
        _value: i32,
    ) -> RayResult<()> {
        self.record("set_shader_value_i32");
        Ok(())
    }

    fn set_shader_value_vec3(
        &mut self,
        _handle: RawHandle,
        _location: i32,
        _value: Vector3,
    ) -> RayResult<()> {
        self.record("set_shader_value_vec3");
        Ok(())
    }

    fn load_font(&mut self, path: &str, font_size: i32) -> RayResult<(RawHandle, FontInfo)> {
        self.record("load_font");
        self.check_load("font")?;
        Ok((
            self.next_handle(),
            FontInfo {
                base_size: font_size,
                glyph_count: 95,
                file_name: path.to_string(),
            },
        ))
    }

    fn unload_font(&mut self, _handle: RawHandle) -> RayResult<()> {
        self.record("unload_font");
        Ok(())
    }

    fn draw_text_with_font(
        &mut self,
        _handle: RawHandle,
        _text: &str,
        _position: Vector2,
        _font_size: f32,
        _spacing: f32,
        _tint: Color,
    ) -> RayResult<()> {
        self.record("draw_text_with_font");
        Ok(())
    }

    fn measure_text(
        &mut self,
        _handle: RawHandle,
        text: &str,
        font_size: f32,
        spacing: f32,
    ) -> RayResult<Vector2> {
        self.record("measure_text");
        // Fixed-advance glyphs keep the fabricated width predictable.
        let advance = font_size / 2.0 + spacing;
        Ok(Vector2::new(text.len() as f32 * advance, font_size))
    }

    fn wrap_text(
        &mut self,
        _handle: RawHandle,
        text: &str,
        _font_size: f32,
        _spacing: f32,
        _max_width: f32,
    ) -> RayResult<String> {
        self.record("wrap_text");
        // One word per line stands in for real measurement-driven wrapping.
        Ok(text.split_whitespace().collect::<Vec<_>>().join("\n"))
    }

    fn is_key_down(&mut self, _key: i32) -> RayResult<bool> {
        self.record("is_key_down");
        Ok(false)
    }

    fn is_key_up(&mut self, _key: i32) -> RayResult<bool> {
        self.record("is_key_up");
        Ok(true)
    }

    fn key_pressed(&mut self) -> RayResult<i32> {
        self.record("key_pressed");
        Ok(0)
    }

    fn is_mouse_button_down(&mut self, _button: i32) -> RayResult<bool> {
        self.record("is_mouse_button_down");
        Ok(false)
    }

    fn mouse_position(&mut self) -> RayResult<(i32, i32)> {
        self.record("mouse_position");
        Ok((100, 50))
    }

    fn set_mouse_position(&mut self, _x: i32, _y: i32) -> RayResult<()> {
        self.record("set_mouse_position");
        Ok(())
    }

    fn show_cursor(&mut self) -> RayResult<()> {
        self.record("show_cursor");
        Ok(())
    }

    fn hide_cursor(&mut self) -> RayResult<()> {
        self.record("hide_cursor");
        Ok(())
    }

    fn enable_cursor(&mut self) -> RayResult<()> {
        self.record("enable_cursor");
        Ok(())
    }

    fn disable_cursor(&mut self) -> RayResult<()> {
        self.record("disable_cursor");
        Ok(())
    }

    fn is_cursor_hidden(&mut self) -> RayResult<bool> {
        self.record("is_cursor_hidden");
        Ok(false)
    }
}

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

//! Loading the native runtime and resolving its exports.

use std::path::Path;

use libloading::Library;
use rayward_core::error::RayError;
use rayward_core::result::RayResult;

use super::symbols::*;

/// Resolves one export and copies out the raw function pointer. The pointer
/// stays valid for as long as the `Library` it came from is alive.
macro_rules! symbol {
    ($lib:expr, $name:literal) => {{
        let found = unsafe { $lib.get(concat!($name, "\0").as_bytes()) }.map_err(|err| {
            RayError::init(format!("native export `{}` is missing", $name)).with_source(err)
        })?;
        *found
    }};
}

/// Every export of the native runtime, resolved.
#[derive(Debug)]
pub(super) struct SymbolTable {
    // Window lifecycle
    pub init_window: InitWindowFn,
    pub close_window: CommandFn,
    pub window_should_close: BoolQueryFn,
    pub set_target_fps: SetTargetFpsFn,
    pub get_frame_time: GetFrameTimeFn,

    // Frame and mode control
    pub begin_drawing: CommandFn,
    pub end_drawing: CommandFn,
    pub clear_background: ClearBackgroundFn,
    pub begin_mode3d: BeginMode3dFn,
    pub end_mode3d: CommandFn,
    pub begin_shader_mode: BeginIntModeFn,
    pub end_shader_mode: CommandFn,
    pub begin_blend_mode: BeginIntModeFn,
    pub end_blend_mode: CommandFn,
    pub begin_scissor_mode: BeginScissorModeFn,
    pub end_scissor_mode: CommandFn,

    // 2D drawing
    pub draw_pixel: DrawPixelFn,
    pub draw_line: DrawLineFn,
    pub draw_circle: DrawCircleFn,
    pub draw_rectangle: DrawRectangleFn,
    pub draw_triangle: DrawTriangleFn,
    pub draw_poly: DrawPolyFn,
    pub draw_text: DrawTextFn,
    pub draw_fps: TwoIntCommandFn,

    // 3D drawing
    pub draw_cube: DrawCubeFn,
    pub draw_sphere: DrawSphereFn,
    pub draw_grid: DrawGridFn,

    // Textures
    pub load_texture: LoadPathToSlotFn,
    pub texture_width: SlotQueryFn,
    pub texture_height: SlotQueryFn,
    pub texture_mipmaps: SlotQueryFn,
    pub texture_format: SlotQueryFn,
    pub unload_texture: UnloadBySlotFn,
    pub draw_texture: DrawTextureFn,
    pub draw_texture_pro: DrawTextureProFn,

    // Render targets
    pub load_render_texture: LoadRenderTextureFn,
    pub render_texture_width: SlotQueryFn,
    pub render_texture_height: SlotQueryFn,
    pub unload_render_texture: UnloadBySlotFn,

    // Models
    pub load_model: LoadModelFn,
    pub model_bounds_min_x: SlotQueryF32Fn,
    pub model_bounds_min_y: SlotQueryF32Fn,
    pub model_bounds_min_z: SlotQueryF32Fn,
    pub model_bounds_max_x: SlotQueryF32Fn,
    pub model_bounds_max_y: SlotQueryF32Fn,
    pub model_bounds_max_z: SlotQueryF32Fn,
    pub unload_model: UnloadBySlotFn,
    pub draw_model: DrawModelFn,
    pub draw_model_ex: DrawModelExFn,
    pub draw_model_wires: DrawModelFn,

    // Animations
    pub load_model_animations: LoadAnimationsFn,
    pub animation_frame_count: SlotQueryFn,
    pub animation_bone_count: SlotQueryFn,
    pub unload_animation: UnloadBySlotFn,
    pub update_model_animation: UpdateAnimationFn,

    // Fonts
    pub load_font: LoadFontFn,
    pub font_base_size: SlotQueryFn,
    pub font_glyph_count: SlotQueryFn,
    pub unload_font: UnloadBySlotFn,
    pub draw_text_by_slot: DrawTextBySlotFn,
    pub measure_text: MeasureTextFn,
    pub wrap_text: WrapTextFn,

    // Shaders
    pub load_shader: LoadShaderFn,
    pub load_shader_from_memory: LoadShaderFn,
    pub unload_shader: UnloadBySlotFn,
    pub shader_location: ShaderLocationFn,
    pub set_shader_float: SetShaderFloatFn,
    pub set_shader_int: SetShaderIntFn,
    pub set_shader_vec3: SetShaderVec3Fn,

    // Input
    pub is_key_down: KeyQueryFn,
    pub is_key_up: KeyQueryFn,
    pub get_key_pressed: GetKeyPressedFn,
    pub is_mouse_button_down: MouseButtonQueryFn,
    pub mouse_x: IntQueryFn,
    pub mouse_y: IntQueryFn,
    pub set_mouse_position: TwoIntCommandFn,
    pub show_cursor: CommandFn,
    pub hide_cursor: CommandFn,
    pub enable_cursor: CommandFn,
    pub disable_cursor: CommandFn,
    pub is_cursor_hidden: BoolQueryFn,
}

/// The native runtime library with every export resolved up front.
///
/// Eager resolution means a misbuilt or outdated native artifact fails at
/// load time with the offending export named, not mid-frame.
#[derive(Debug)]
pub struct NativeLibrary {
    pub(super) symbols: SymbolTable,
    // Dropping the `Library` unmaps the code the symbol table points into,
    // so it must outlive `symbols`.
    _library: Library,
}

impl NativeLibrary {
    /// Loads the shared library at `path` and resolves all exports.
    pub fn load(path: &Path) -> RayResult<Self> {
        let library = unsafe { Library::new(path) }.map_err(|err| {
            RayError::init("failed to load the native graphics library")
                .with_source(err)
                .with_context(path.display().to_string())
        })?;
        log::info!("loaded native graphics library from {}", path.display());

        let symbols = SymbolTable {
            init_window: symbol!(library, "InitWindowWrapper"),
            close_window: symbol!(library, "CloseWindowWrapper"),
            window_should_close: symbol!(library, "WindowShouldCloseWrapper"),
            set_target_fps: symbol!(library, "SetTargetFPSWrapper"),
            get_frame_time: symbol!(library, "GetFrameTimeWrapper"),

            begin_drawing: symbol!(library, "BeginDrawingWrapper"),
            end_drawing: symbol!(library, "EndDrawingWrapper"),
            clear_background: symbol!(library, "ClearBackgroundWrapper"),
            begin_mode3d: symbol!(library, "BeginMode3DWrapper"),
            end_mode3d: symbol!(library, "EndMode3DWrapper"),
            begin_shader_mode: symbol!(library, "BeginShaderModeBySlot"),
            end_shader_mode: symbol!(library, "EndShaderModeWrapper"),
            begin_blend_mode: symbol!(library, "BeginBlendModeWrapper"),
            end_blend_mode: symbol!(library, "EndBlendModeWrapper"),
            begin_scissor_mode: symbol!(library, "BeginScissorModeWrapper"),
            end_scissor_mode: symbol!(library, "EndScissorModeWrapper"),

            draw_pixel: symbol!(library, "DrawPixelWrapper"),
            draw_line: symbol!(library, "DrawLineWrapper"),
            draw_circle: symbol!(library, "DrawCircleWrapper"),
            draw_rectangle: symbol!(library, "DrawRectangleWrapper"),
            draw_triangle: symbol!(library, "DrawTriangleWrapper"),
            draw_poly: symbol!(library, "DrawPolyWrapper"),
            draw_text: symbol!(library, "DrawTextWrapper"),
            draw_fps: symbol!(library, "DrawFPSWrapper"),

            draw_cube: symbol!(library, "DrawCubeWrapper"),
            draw_sphere: symbol!(library, "DrawSphereWrapper"),
            draw_grid: symbol!(library, "DrawGridWrapper"),

            load_texture: symbol!(library, "LoadTextureToSlot"),
            texture_width: symbol!(library, "GetTextureWidthBySlot"),
            texture_height: symbol!(library, "GetTextureHeightBySlot"),
            texture_mipmaps: symbol!(library, "GetTextureMipmapsBySlot"),
            texture_format: symbol!(library, "GetTextureFormatBySlot"),
            unload_texture: symbol!(library, "UnloadTextureBySlot"),
            draw_texture: symbol!(library, "DrawTextureBySlot"),
            draw_texture_pro: symbol!(library, "DrawTextureProBySlot"),

            load_render_texture: symbol!(library, "LoadRenderTextureToSlot"),
            render_texture_width: symbol!(library, "GetRenderTextureColorWidthBySlot"),
            render_texture_height: symbol!(library, "GetRenderTextureColorHeightBySlot"),
            unload_render_texture: symbol!(library, "UnloadRenderTextureBySlot"),

            load_model: symbol!(library, "LoadModelToSlot"),
            model_bounds_min_x: symbol!(library, "GetModelBoundingBoxMinXBySlot"),
            model_bounds_min_y: symbol!(library, "GetModelBoundingBoxMinYBySlot"),
            model_bounds_min_z: symbol!(library, "GetModelBoundingBoxMinZBySlot"),
            model_bounds_max_x: symbol!(library, "GetModelBoundingBoxMaxXBySlot"),
            model_bounds_max_y: symbol!(library, "GetModelBoundingBoxMaxYBySlot"),
            model_bounds_max_z: symbol!(library, "GetModelBoundingBoxMaxZBySlot"),
            unload_model: symbol!(library, "UnloadModelBySlot"),
            draw_model: symbol!(library, "DrawModelBySlot"),
            draw_model_ex: symbol!(library, "DrawModelExBySlot"),
            draw_model_wires: symbol!(library, "DrawModelWiresBySlot"),

            load_model_animations: symbol!(library, "LoadModelAnimationsToSlots"),
            animation_frame_count: symbol!(library, "GetAnimationFrameCountBySlot"),
            animation_bone_count: symbol!(library, "GetAnimationBoneCountBySlot"),
            unload_animation: symbol!(library, "UnloadAnimationBySlot"),
            update_model_animation: symbol!(library, "UpdateModelAnimationBySlot"),

            load_font: symbol!(library, "LoadFontToSlot"),
            font_base_size: symbol!(library, "GetFontBaseSize"),
            font_glyph_count: symbol!(library, "GetFontGlyphCount"),
            unload_font: symbol!(library, "UnloadFontBySlot"),
            draw_text_by_slot: symbol!(library, "DrawTextBySlot"),
            measure_text: symbol!(library, "MeasureTextBySlot"),
            wrap_text: symbol!(library, "WrapTextBySlot"),

            load_shader: symbol!(library, "LoadShaderToSlot"),
            load_shader_from_memory: symbol!(library, "LoadShaderFromMemoryToSlot"),
            unload_shader: symbol!(library, "UnloadShaderBySlot"),
            shader_location: symbol!(library, "GetShaderLocationBySlot"),
            set_shader_float: symbol!(library, "SetShaderValueFloatBySlot"),
            set_shader_int: symbol!(library, "SetShaderValueIntBySlot"),
            set_shader_vec3: symbol!(library, "SetShaderValueVec3BySlot"),

            is_key_down: symbol!(library, "IsKeyDownWrapper"),
            is_key_up: symbol!(library, "IsKeyUpWrapper"),
            get_key_pressed: symbol!(library, "GetKeyPressedWrapper"),
            is_mouse_button_down: symbol!(library, "IsMouseButtonDownWrapper"),
            mouse_x: symbol!(library, "GetMouseXWrapper"),
            mouse_y: symbol!(library, "GetMouseYWrapper"),
            set_mouse_position: symbol!(library, "SetMousePositionWrapper"),
            show_cursor: symbol!(library, "ShowCursorWrapper"),
            hide_cursor: symbol!(library, "HideCursorWrapper"),
            enable_cursor: symbol!(library, "EnableCursorWrapper"),
            disable_cursor: symbol!(library, "DisableCursorWrapper"),
            is_cursor_hidden: symbol!(library, "IsCursorHiddenWrapper"),
        };

        Ok(Self {
            symbols,
            _library: library,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayward_core::error::ErrorKind;

    #[test]
    fn missing_library_is_an_init_error_with_the_path_attached() {
        let err = NativeLibrary::load(Path::new("/nonexistent/libgraphics.so")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Init);
        assert_eq!(err.context(), Some("/nonexistent/libgraphics.so"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

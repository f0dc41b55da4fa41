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

//! The contract for the native graphics runtime.
//!
//! [`NativeRuntime`] is the single seam between the safe layer and the
//! C-ABI graphics library. The concrete implementation lives in
//! `rayward-native`; tests substitute recording doubles. By the time any of
//! these methods is invoked, the arguments have already passed validation and
//! the state machine has approved the operation — implementations only
//! marshal, call, and convert native failure signals into the error taxonomy
//! ([`Ffi`](crate::error::ErrorKind::Ffi) for loads and queries,
//! [`Draw`](crate::error::ErrorKind::Draw) for draw calls,
//! [`Init`](crate::error::ErrorKind::Init) for subsystem startup).

use crate::math::{Camera3D, Color, Vector2, Vector3};
use crate::resources::{
    AnimationInfo, FontInfo, ModelInfo, RawHandle, RenderTargetInfo, ShaderInfo, TextureInfo,
};
use crate::result::RayResult;
use crate::state::BlendMode;

/// The native graphics runtime boundary.
///
/// One method per bound native function. Implementations must never panic on
/// native failure; every abnormal return is converted into an `Err` with the
/// original failure attached as `source` where one exists.
#[allow(clippy::too_many_arguments)]
pub trait NativeRuntime {
    // --- Window lifecycle ---

    /// Opens the native window and starts the graphics subsystem.
    fn init_window(&mut self, width: i32, height: i32, title: &str) -> RayResult<()>;

    /// Closes the native window and shuts the subsystem down.
    fn close_window(&mut self) -> RayResult<()>;

    /// Whether the user requested the window to close.
    fn window_should_close(&mut self) -> RayResult<bool>;

    /// Caps the frame rate.
    fn set_target_fps(&mut self, fps: i32) -> RayResult<()>;

    /// Seconds the last frame took.
    fn frame_time(&mut self) -> RayResult<f32>;

    // --- Frame and mode control ---

    /// Starts a frame.
    fn begin_drawing(&mut self) -> RayResult<()>;

    /// Ends the frame and presents it.
    fn end_drawing(&mut self) -> RayResult<()>;

    /// Fills the frame with a solid color.
    fn clear_background(&mut self, color: Color) -> RayResult<()>;

    /// Enters 3D projection with the given camera.
    fn begin_mode3d(&mut self, camera: &Camera3D) -> RayResult<()>;

    /// Leaves 3D projection.
    fn end_mode3d(&mut self) -> RayResult<()>;

    /// Routes subsequent draws through the given shader.
    fn begin_shader_mode(&mut self, shader: RawHandle) -> RayResult<()>;

    /// Restores the default shader.
    fn end_shader_mode(&mut self) -> RayResult<()>;

    /// Switches the blend equation.
    fn begin_blend_mode(&mut self, mode: BlendMode) -> RayResult<()>;

    /// Restores alpha blending.
    fn end_blend_mode(&mut self) -> RayResult<()>;

    /// Clips subsequent draws to a rectangle.
    fn begin_scissor_mode(&mut self, x: i32, y: i32, width: i32, height: i32) -> RayResult<()>;

    /// Removes the scissor rectangle.
    fn end_scissor_mode(&mut self) -> RayResult<()>;

    // --- 2D drawing ---

    /// Draws a single pixel.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> RayResult<()>;

    /// Draws a line segment.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> RayResult<()>;

    /// Draws a filled circle.
    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color) -> RayResult<()>;

    /// Draws a filled rectangle.
    fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> RayResult<()>;

    /// Draws a filled triangle (counter-clockwise winding).
    fn draw_triangle(&mut self, a: Vector2, b: Vector2, c: Vector2, color: Color) -> RayResult<()>;

    /// Draws a regular polygon.
    fn draw_poly(
        &mut self,
        center: Vector2,
        sides: i32,
        radius: f32,
        rotation: f32,
        color: Color,
    ) -> RayResult<()>;

    /// Draws text with the default font.
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    ) -> RayResult<()>;

    /// Draws the FPS counter.
    fn draw_fps(&mut self, x: i32, y: i32) -> RayResult<()>;

    // --- 3D drawing ---

    /// Draws a filled cube.
    fn draw_cube(
        &mut self,
        position: Vector3,
        width: f32,
        height: f32,
        length: f32,
        color: Color,
    ) -> RayResult<()>;

    /// Draws a filled sphere.
    fn draw_sphere(&mut self, center: Vector3, radius: f32, color: Color) -> RayResult<()>;

    /// Draws a reference grid on the XZ plane.
    fn draw_grid(&mut self, slices: i32, spacing: f32) -> RayResult<()>;

    // --- Textures ---

    /// Loads a texture from disk.
    fn load_texture(&mut self, path: &str) -> RayResult<(RawHandle, TextureInfo)>;

    /// Releases a texture.
    fn unload_texture(&mut self, handle: RawHandle) -> RayResult<()>;

    /// Draws a texture at a position.
    fn draw_texture(&mut self, handle: RawHandle, x: i32, y: i32, tint: Color) -> RayResult<()>;

    /// Draws a texture with origin, rotation, and scale.
    fn draw_texture_ex(
        &mut self,
        handle: RawHandle,
        position: Vector2,
        origin: Vector2,
        rotation: f32,
        scale: f32,
        tint: Color,
    ) -> RayResult<()>;

    // --- Render targets ---

    /// Creates an offscreen render target.
    fn create_render_target(
        &mut self,
        width: i32,
        height: i32,
    ) -> RayResult<(RawHandle, RenderTargetInfo)>;

    /// Releases a render target.
    fn unload_render_target(&mut self, handle: RawHandle) -> RayResult<()>;

    // --- Models ---

    /// Loads a 3D model from disk, including its bounds.
    fn load_model(&mut self, path: &str) -> RayResult<(RawHandle, ModelInfo)>;

    /// Releases a model.
    fn unload_model(&mut self, handle: RawHandle) -> RayResult<()>;

    /// Draws a model with uniform scale.
    fn draw_model(
        &mut self,
        handle: RawHandle,
        position: Vector3,
        scale: f32,
        tint: Color,
    ) -> RayResult<()>;

    /// Draws a model with a rotation axis/angle and per-axis scale.
    fn draw_model_ex(
        &mut self,
        handle: RawHandle,
        position: Vector3,
        rotation_axis: Vector3,
        rotation_angle: f32,
        scale: Vector3,
        tint: Color,
    ) -> RayResult<()>;

    /// Draws a model as wireframe.
    fn draw_model_wires(
        &mut self,
        handle: RawHandle,
        position: Vector3,
        scale: f32,
        tint: Color,
    ) -> RayResult<()>;

    // --- Model animations ---

    /// Loads every animation stored in a file.
    fn load_model_animations(&mut self, path: &str) -> RayResult<Vec<(RawHandle, AnimationInfo)>>;

    /// Releases one animation.
    fn unload_animation(&mut self, handle: RawHandle) -> RayResult<()>;

    /// Advances a model's pose to the given animation frame.
    fn update_model_animation(
        &mut self,
        model: RawHandle,
        animation: RawHandle,
        frame: i32,
    ) -> RayResult<()>;

    // --- Shaders ---

    /// Compiles a shader from vertex/fragment source files.
    fn load_shader(&mut self, vs_path: &str, fs_path: &str) -> RayResult<(RawHandle, ShaderInfo)>;

    /// Compiles a shader from in-memory source strings.
    fn load_shader_from_memory(
        &mut self,
        vs_code: &str,
        fs_code: &str,
    ) -> RayResult<(RawHandle, ShaderInfo)>;

    /// Releases a shader.
    fn unload_shader(&mut self, handle: RawHandle) -> RayResult<()>;

    /// Resolves a uniform name to its native location.
    fn shader_location(&mut self, handle: RawHandle, uniform: &str) -> RayResult<i32>;

    /// Sets a float uniform.
    fn set_shader_value_f32(
        &mut self,
        handle: RawHandle,
        location: i32,
        value: f32,
    ) -> RayResult<()>;

    /// Sets an integer uniform.
    fn set_shader_value_i32(
        &mut self,
        handle: RawHandle,
        location: i32,
        value: i32,
    ) -> RayResult<()>;

    /// Sets a vec3 uniform.
    fn set_shader_value_vec3(
        &mut self,
        handle: RawHandle,
        location: i32,
        value: Vector3,
    ) -> RayResult<()>;

    // --- Fonts ---

    /// Loads a font from disk, rasterized at the given base size.
    fn load_font(&mut self, path: &str, font_size: i32) -> RayResult<(RawHandle, FontInfo)>;

    /// Releases a font.
    fn unload_font(&mut self, handle: RawHandle) -> RayResult<()>;

    /// Draws text with a loaded font.
    fn draw_text_with_font(
        &mut self,
        handle: RawHandle,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) -> RayResult<()>;

    /// Measures the rendered width and height of text.
    fn measure_text(
        &mut self,
        handle: RawHandle,
        text: &str,
        font_size: f32,
        spacing: f32,
    ) -> RayResult<Vector2>;

    /// Re-flows text onto lines no wider than `max_width`.
    fn wrap_text(
        &mut self,
        handle: RawHandle,
        text: &str,
        font_size: f32,
        spacing: f32,
        max_width: f32,
    ) -> RayResult<String>;

    // --- Input ---

    /// Whether a key is currently held.
    fn is_key_down(&mut self, key: i32) -> RayResult<bool>;

    /// Whether a key is currently up.
    fn is_key_up(&mut self, key: i32) -> RayResult<bool>;

    /// The next queued key press, or `0` when the queue is empty.
    fn key_pressed(&mut self) -> RayResult<i32>;

    /// Whether a mouse button is currently held.
    fn is_mouse_button_down(&mut self, button: i32) -> RayResult<bool>;

    /// Current mouse position in window coordinates.
    fn mouse_position(&mut self) -> RayResult<(i32, i32)>;

    /// Warps the mouse cursor.
    fn set_mouse_position(&mut self, x: i32, y: i32) -> RayResult<()>;

    /// Shows the OS cursor.
    fn show_cursor(&mut self) -> RayResult<()>;

    /// Hides the OS cursor.
    fn hide_cursor(&mut self) -> RayResult<()>;

    /// Unlocks the cursor from the window.
    fn enable_cursor(&mut self) -> RayResult<()>;

    /// Locks and hides the cursor for camera control.
    fn disable_cursor(&mut self) -> RayResult<()>;

    /// Whether the OS cursor is hidden.
    fn is_cursor_hidden(&mut self) -> RayResult<bool>;
}

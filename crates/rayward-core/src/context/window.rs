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

//! Window lifecycle operations.

use super::GraphicsContext;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Opens the native window and starts the graphics subsystem.
    ///
    /// Fails with a validation error on non-positive dimensions or an empty
    /// title, a state error if a window is already open, and an init error
    /// if the native subsystem refuses to start.
    pub fn init_window(&mut self, width: i32, height: i32, title: &str) -> RayResult<()> {
        validate::positive_i32("window width", width)?;
        validate::positive_i32("window height", height)?;
        validate::non_empty_str("window title", title)?;
        self.state.enter_initialized()?;
        if let Err(err) = self.runtime.init_window(width, height, title) {
            self.state.enter_closed();
            return Err(err);
        }
        log::info!("window initialized ({width}x{height}, \"{title}\")");
        Ok(())
    }

    /// Closes the window, releasing every live resource first.
    ///
    /// Legal from any initialized state, including mid-frame. Calling it on
    /// an already-closed window is a logged no-op: shutdown paths should not
    /// fail.
    pub fn close_window(&mut self) -> RayResult<()> {
        if !self.state.is_initialized() {
            log::debug!("close_window called on a closed window; ignoring");
            return Ok(());
        }

        self.free_all_resources();
        self.state.enter_closed();
        self.runtime.close_window()?;
        log::info!("window closed");
        Ok(())
    }

    /// Whether the user requested the window to close (close button, ESC).
    pub fn window_should_close(&mut self) -> RayResult<bool> {
        self.state.require_initialized("window_should_close")?;
        self.runtime.window_should_close()
    }

    /// Caps the frame rate.
    pub fn set_target_fps(&mut self, fps: i32) -> RayResult<()> {
        validate::positive_i32("target fps", fps)?;
        self.state.require_initialized("set_target_fps")?;
        self.runtime.set_target_fps(fps)
    }

    /// Seconds the last frame took.
    pub fn frame_time(&mut self) -> RayResult<f32> {
        self.state.require_initialized("frame_time")?;
        self.runtime.frame_time()
    }

    /// Releases every live entry in every registry.
    ///
    /// Native release failures during shutdown are logged and skipped so one
    /// bad handle cannot leak the rest.
    fn free_all_resources(&mut self) {
        for handle in self.shaders.drain_live() {
            if let Err(err) = self.runtime.unload_shader(handle) {
                log::warn!("shader release failed during shutdown: {err}");
            }
        }
        for handle in self.fonts.drain_live() {
            if let Err(err) = self.runtime.unload_font(handle) {
                log::warn!("font release failed during shutdown: {err}");
            }
        }
        for handle in self.animations.drain_live() {
            if let Err(err) = self.runtime.unload_animation(handle) {
                log::warn!("animation release failed during shutdown: {err}");
            }
        }
        for handle in self.models.drain_live() {
            if let Err(err) = self.runtime.unload_model(handle) {
                log::warn!("model release failed during shutdown: {err}");
            }
        }
        for handle in self.render_targets.drain_live() {
            if let Err(err) = self.runtime.unload_render_target(handle) {
                log::warn!("render target release failed during shutdown: {err}");
            }
        }
        for handle in self.textures.drain_live() {
            if let Err(err) = self.runtime.unload_texture(handle) {
                log::warn!("texture release failed during shutdown: {err}");
            }
        }
    }
}

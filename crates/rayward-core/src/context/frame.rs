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

//! Frame and nested draw-mode control.
//!
//! Begin and end transitions flip the state flag before the native call and
//! roll it back if the native side refuses, so the tracked state never runs
//! ahead of the runtime.

use super::GraphicsContext;
use crate::math::{Camera3D, Color};
use crate::registry::Slot;
use crate::result::RayResult;
use crate::state::BlendMode;
use crate::validate;

impl GraphicsContext {
    /// Starts a frame.
    pub fn begin_drawing(&mut self) -> RayResult<()> {
        self.state.enter_drawing()?;
        if let Err(err) = self.runtime.begin_drawing() {
            let _ = self.state.leave_drawing();
            return Err(err);
        }
        Ok(())
    }

    /// Ends the frame and presents it.
    ///
    /// Fails with a state error if any nested mode (3D, shader, blend,
    /// scissor) is still open; the frame stays open in that case.
    pub fn end_drawing(&mut self) -> RayResult<()> {
        self.state.leave_drawing()?;
        if let Err(err) = self.runtime.end_drawing() {
            let _ = self.state.enter_drawing();
            return Err(err);
        }
        Ok(())
    }

    /// Fills the frame with a solid color.
    pub fn clear_background(&mut self, color: Color) -> RayResult<()> {
        self.state.require_drawing("clear_background")?;
        self.runtime.clear_background(color)
    }

    /// Enters 3D projection with the given camera.
    pub fn begin_mode3d(&mut self, camera: &Camera3D) -> RayResult<()> {
        validate::finite_camera(camera)?;
        self.state.enter_mode3d()?;
        if let Err(err) = self.runtime.begin_mode3d(camera) {
            let _ = self.state.leave_mode3d();
            return Err(err);
        }
        Ok(())
    }

    /// Leaves 3D projection.
    pub fn end_mode3d(&mut self) -> RayResult<()> {
        self.state.leave_mode3d()?;
        if let Err(err) = self.runtime.end_mode3d() {
            let _ = self.state.enter_mode3d();
            return Err(err);
        }
        Ok(())
    }

    /// Routes subsequent draws through the shader in `slot`.
    pub fn begin_shader_mode(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_drawing("begin_shader_mode")?;
        let handle = self.shaders.resolve(slot)?.handle;
        self.state.enter_shader_mode()?;
        if let Err(err) = self.runtime.begin_shader_mode(handle) {
            let _ = self.state.leave_shader_mode();
            return Err(err);
        }
        Ok(())
    }

    /// Restores the default shader.
    pub fn end_shader_mode(&mut self) -> RayResult<()> {
        self.state.leave_shader_mode()?;
        if let Err(err) = self.runtime.end_shader_mode() {
            let _ = self.state.enter_shader_mode();
            return Err(err);
        }
        Ok(())
    }

    /// Switches the blend equation.
    pub fn begin_blend_mode(&mut self, mode: BlendMode) -> RayResult<()> {
        self.state.enter_blend_mode()?;
        if let Err(err) = self.runtime.begin_blend_mode(mode) {
            let _ = self.state.leave_blend_mode();
            return Err(err);
        }
        Ok(())
    }

    /// Restores alpha blending.
    pub fn end_blend_mode(&mut self) -> RayResult<()> {
        self.state.leave_blend_mode()?;
        if let Err(err) = self.runtime.end_blend_mode() {
            let _ = self.state.enter_blend_mode();
            return Err(err);
        }
        Ok(())
    }

    /// Clips subsequent draws to a rectangle.
    pub fn begin_scissor_mode(&mut self, x: i32, y: i32, width: i32, height: i32) -> RayResult<()> {
        validate::non_negative_i32("scissor width", width)?;
        validate::non_negative_i32("scissor height", height)?;
        self.state.enter_scissor_mode()?;
        if let Err(err) = self.runtime.begin_scissor_mode(x, y, width, height) {
            let _ = self.state.leave_scissor_mode();
            return Err(err);
        }
        Ok(())
    }

    /// Removes the scissor rectangle.
    pub fn end_scissor_mode(&mut self) -> RayResult<()> {
        self.state.leave_scissor_mode()?;
        if let Err(err) = self.runtime.end_scissor_mode() {
            let _ = self.state.enter_scissor_mode();
            return Err(err);
        }
        Ok(())
    }
}

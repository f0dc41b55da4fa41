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

//! 3D model loading, queries, and drawing.

use super::GraphicsContext;
use crate::math::{Color, Vector3};
use crate::registry::Slot;
use crate::resources::ModelInfo;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Loads a model from disk and returns its slot.
    ///
    /// Mesh/material counts and the bounding box are cached at load time, so
    /// later queries never cross the native boundary.
    pub fn load_model(&mut self, path: &str) -> RayResult<Slot> {
        validate::non_empty_str("model path", path)?;
        self.state.require_initialized("load_model")?;
        let (handle, info) = self.runtime.load_model(path)?;
        Ok(self.models.allocate(handle, info))
    }

    /// Releases the model in `slot`.
    pub fn unload_model(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_initialized("unload_model")?;
        let handle = self.models.free(slot)?;
        self.runtime.unload_model(handle)
    }

    /// Cached metadata for the model in `slot`.
    pub fn model_info(&self, slot: Slot) -> RayResult<&ModelInfo> {
        Ok(&self.models.resolve(slot)?.metadata)
    }

    /// Draws the model in `slot` with uniform scale. Requires 3D mode.
    pub fn draw_model(
        &mut self,
        slot: Slot,
        position: Vector3,
        scale: f32,
        tint: Color,
    ) -> RayResult<()> {
        validate::finite_vec3("model position", position)?;
        validate::non_negative_f32("model scale", scale)?;
        self.state.require_mode3d("draw_model")?;
        let handle = self.models.resolve(slot)?.handle;
        self.runtime.draw_model(handle, position, scale, tint)
    }

    /// Draws the model in `slot` with a rotation axis/angle and per-axis
    /// scale. Requires 3D mode.
    pub fn draw_model_ex(
        &mut self,
        slot: Slot,
        position: Vector3,
        rotation_axis: Vector3,
        rotation_angle: f32,
        scale: Vector3,
        tint: Color,
    ) -> RayResult<()> {
        validate::finite_vec3("model position", position)?;
        validate::finite_vec3("model rotation axis", rotation_axis)?;
        validate::finite_f32("model rotation angle", rotation_angle)?;
        validate::finite_vec3("model scale", scale)?;
        self.state.require_mode3d("draw_model_ex")?;
        let handle = self.models.resolve(slot)?.handle;
        self.runtime
            .draw_model_ex(handle, position, rotation_axis, rotation_angle, scale, tint)
    }

    /// Draws the model in `slot` as wireframe. Requires 3D mode.
    pub fn draw_model_wires(
        &mut self,
        slot: Slot,
        position: Vector3,
        scale: f32,
        tint: Color,
    ) -> RayResult<()> {
        validate::finite_vec3("model position", position)?;
        validate::non_negative_f32("model scale", scale)?;
        self.state.require_mode3d("draw_model_wires")?;
        let handle = self.models.resolve(slot)?.handle;
        self.runtime.draw_model_wires(handle, position, scale, tint)
    }

    /// Number of currently-loaded models.
    pub fn loaded_model_count(&self) -> usize {
        self.models.count()
    }
}

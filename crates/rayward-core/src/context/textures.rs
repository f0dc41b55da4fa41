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

//! Texture loading, queries, and drawing.

use super::GraphicsContext;
use crate::math::{Color, Vector2};
use crate::registry::Slot;
use crate::resources::TextureInfo;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Loads a texture from disk and returns its slot.
    ///
    /// On native failure no slot is allocated and the loaded count is
    /// unchanged.
    pub fn load_texture(&mut self, path: &str) -> RayResult<Slot> {
        validate::non_empty_str("texture path", path)?;
        self.state.require_initialized("load_texture")?;
        let (handle, info) = self.runtime.load_texture(path)?;
        Ok(self.textures.allocate(handle, info))
    }

    /// Releases the texture in `slot`.
    pub fn unload_texture(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_initialized("unload_texture")?;
        let handle = self.textures.free(slot)?;
        self.runtime.unload_texture(handle)
    }

    /// Cached metadata for the texture in `slot`.
    pub fn texture_info(&self, slot: Slot) -> RayResult<&TextureInfo> {
        Ok(&self.textures.resolve(slot)?.metadata)
    }

    /// Draws the texture in `slot` at a position.
    pub fn draw_texture(&mut self, slot: Slot, x: i32, y: i32, tint: Color) -> RayResult<()> {
        self.state.require_drawing("draw_texture")?;
        let handle = self.textures.resolve(slot)?.handle;
        self.runtime.draw_texture(handle, x, y, tint)
    }

    /// Draws the texture in `slot` with origin, rotation, and scale.
    pub fn draw_texture_ex(
        &mut self,
        slot: Slot,
        position: Vector2,
        origin: Vector2,
        rotation: f32,
        scale: f32,
        tint: Color,
    ) -> RayResult<()> {
        validate::finite_vec2("texture position", position)?;
        validate::finite_vec2("texture origin", origin)?;
        validate::finite_f32("texture rotation", rotation)?;
        validate::non_negative_f32("texture scale", scale)?;
        self.state.require_drawing("draw_texture_ex")?;
        let handle = self.textures.resolve(slot)?.handle;
        self.runtime
            .draw_texture_ex(handle, position, origin, rotation, scale, tint)
    }

    /// Number of currently-loaded textures.
    pub fn loaded_texture_count(&self) -> usize {
        self.textures.count()
    }
}

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

//! Offscreen render-target management.

use super::GraphicsContext;
use crate::registry::Slot;
use crate::resources::RenderTargetInfo;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Creates an offscreen render target and returns its slot.
    pub fn load_render_target(&mut self, width: i32, height: i32) -> RayResult<Slot> {
        validate::positive_i32("render target width", width)?;
        validate::positive_i32("render target height", height)?;
        self.state.require_initialized("load_render_target")?;
        let (handle, info) = self.runtime.create_render_target(width, height)?;
        Ok(self.render_targets.allocate(handle, info))
    }

    /// Releases the render target in `slot`.
    pub fn unload_render_target(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_initialized("unload_render_target")?;
        let handle = self.render_targets.free(slot)?;
        self.runtime.unload_render_target(handle)
    }

    /// Cached metadata for the render target in `slot`.
    pub fn render_target_info(&self, slot: Slot) -> RayResult<&RenderTargetInfo> {
        Ok(&self.render_targets.resolve(slot)?.metadata)
    }

    /// Number of currently-live render targets.
    pub fn loaded_render_target_count(&self) -> usize {
        self.render_targets.count()
    }
}

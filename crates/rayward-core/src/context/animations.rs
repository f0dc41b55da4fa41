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

//! Model animation loading and playback.

use super::GraphicsContext;
use crate::error::RayError;
use crate::registry::Slot;
use crate::resources::AnimationInfo;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Loads every animation stored in a file, one slot per animation.
    ///
    /// Returns the slots in file order. On native failure no slots are
    /// allocated.
    pub fn load_model_animations(&mut self, path: &str) -> RayResult<Vec<Slot>> {
        validate::non_empty_str("animation path", path)?;
        self.state.require_initialized("load_model_animations")?;
        let loaded = self.runtime.load_model_animations(path)?;
        Ok(loaded
            .into_iter()
            .map(|(handle, info)| self.animations.allocate(handle, info))
            .collect())
    }

    /// Releases the animation in `slot`.
    pub fn unload_animation(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_initialized("unload_animation")?;
        let handle = self.animations.free(slot)?;
        self.runtime.unload_animation(handle)
    }

    /// Cached metadata for the animation in `slot`.
    pub fn animation_info(&self, slot: Slot) -> RayResult<&AnimationInfo> {
        Ok(&self.animations.resolve(slot)?.metadata)
    }

    /// Advances a model's pose to `frame` of the given animation.
    ///
    /// The frame index is checked against the animation's cached frame count
    /// before the native call.
    pub fn update_model_animation(
        &mut self,
        model_slot: Slot,
        animation_slot: Slot,
        frame: i32,
    ) -> RayResult<()> {
        validate::non_negative_i32("animation frame", frame)?;
        self.state.require_initialized("update_model_animation")?;
        let animation = self.animations.resolve(animation_slot)?;
        if frame >= animation.metadata.frame_count {
            return Err(RayError::validation(format!(
                "animation frame {frame} out of range (animation has {} frames)",
                animation.metadata.frame_count
            )));
        }
        let animation_handle = animation.handle;
        let model_handle = self.models.resolve(model_slot)?.handle;
        self.runtime
            .update_model_animation(model_handle, animation_handle, frame)
    }

    /// Number of currently-loaded animations.
    pub fn loaded_animation_count(&self) -> usize {
        self.animations.count()
    }
}

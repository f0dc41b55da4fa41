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

//! Font loading, text measurement, wrapping, and slot-addressed drawing.
//!
//! Empty text is a no-op for every operation here, matching the native
//! layer: it draws nothing, measures as zero, and wraps to an empty string,
//! without crossing the FFI boundary.

use super::GraphicsContext;
use crate::math::{Color, Vector2};
use crate::registry::Slot;
use crate::resources::FontInfo;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Loads a font from disk, rasterized at `font_size`, and returns its
    /// slot.
    ///
    /// On native failure no slot is allocated and the loaded count is
    /// unchanged.
    pub fn load_font(&mut self, path: &str, font_size: i32) -> RayResult<Slot> {
        validate::non_empty_str("font path", path)?;
        validate::positive_i32("font size", font_size)?;
        self.state.require_initialized("load_font")?;
        let (handle, info) = self.runtime.load_font(path, font_size)?;
        Ok(self.fonts.allocate(handle, info))
    }

    /// Releases the font in `slot`.
    pub fn unload_font(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_initialized("unload_font")?;
        let handle = self.fonts.free(slot)?;
        self.runtime.unload_font(handle)
    }

    /// Cached metadata for the font in `slot`.
    pub fn font_info(&self, slot: Slot) -> RayResult<&FontInfo> {
        Ok(&self.fonts.resolve(slot)?.metadata)
    }

    /// Draws text with the font in `slot`.
    pub fn draw_text_with_font(
        &mut self,
        slot: Slot,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) -> RayResult<()> {
        validate::finite_vec2("text position", position)?;
        validate::positive_f32("font size", font_size)?;
        validate::non_negative_f32("glyph spacing", spacing)?;
        self.state.require_drawing("draw_text_with_font")?;
        let handle = self.fonts.resolve(slot)?.handle;
        if text.is_empty() {
            return Ok(());
        }
        self.runtime
            .draw_text_with_font(handle, text, position, font_size, spacing, tint)
    }

    /// Rendered width and height of `text` with the font in `slot`.
    pub fn measure_text(
        &mut self,
        slot: Slot,
        text: &str,
        font_size: f32,
        spacing: f32,
    ) -> RayResult<Vector2> {
        validate::positive_f32("font size", font_size)?;
        validate::non_negative_f32("glyph spacing", spacing)?;
        self.state.require_initialized("measure_text")?;
        let handle = self.fonts.resolve(slot)?.handle;
        if text.is_empty() {
            return Ok(Vector2::ZERO);
        }
        self.runtime.measure_text(handle, text, font_size, spacing)
    }

    /// Re-flows `text` onto lines no wider than `max_width`, breaking at
    /// word boundaries (and inside words that exceed the width on their
    /// own).
    pub fn wrap_text(
        &mut self,
        slot: Slot,
        text: &str,
        font_size: f32,
        spacing: f32,
        max_width: f32,
    ) -> RayResult<String> {
        validate::positive_f32("font size", font_size)?;
        validate::non_negative_f32("glyph spacing", spacing)?;
        validate::positive_f32("wrap width", max_width)?;
        self.state.require_initialized("wrap_text")?;
        let handle = self.fonts.resolve(slot)?.handle;
        if text.is_empty() {
            return Ok(String::new());
        }
        self.runtime
            .wrap_text(handle, text, font_size, spacing, max_width)
    }

    /// Number of currently-loaded fonts.
    pub fn loaded_font_count(&self) -> usize {
        self.fonts.count()
    }
}

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

//! Native handles and per-family resource metadata.
//!
//! Application code never sees a [`RawHandle`]; it only holds
//! [`Slot`](crate::registry::Slot) indices handed out by the registries. The
//! metadata structs are cached at load time so property queries never have to
//! cross the native boundary again.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::math::BoundingBox;

/// An opaque reference into the native runtime.
///
/// The native layer identifies every resource by a plain integer with no
/// lifetime tracking of its own; this newtype exists so raw identifiers can
/// never be confused with registry [`Slot`](crate::registry::Slot) indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawHandle(i32);

impl RawHandle {
    /// Wraps a native identifier.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The native-side integer, needed only at the FFI boundary.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Metadata cached when a texture is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Texture width in pixels.
    pub width: i32,
    /// Texture height in pixels.
    pub height: i32,
    /// Number of mipmap levels.
    pub mipmaps: i32,
    /// Native pixel format identifier.
    pub format: i32,
    /// The path the texture was loaded from.
    pub file_name: String,
}

/// Metadata cached when a render target is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTargetInfo {
    /// Target width in pixels.
    pub width: i32,
    /// Target height in pixels.
    pub height: i32,
}

/// Metadata cached when a model is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Number of meshes in the model.
    pub mesh_count: i32,
    /// Number of materials in the model.
    pub material_count: i32,
    /// Bounding box computed once at load time.
    pub bounds: BoundingBox,
    /// The path the model was loaded from.
    pub file_name: String,
}

/// Metadata cached when a model animation set is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationInfo {
    /// Index of this animation within its source file.
    pub index: i32,
    /// Number of frames in the animation.
    pub frame_count: i32,
    /// Number of bones the animation drives.
    pub bone_count: i32,
    /// The path the animation set was loaded from.
    pub file_name: String,
}

/// Metadata cached when a font is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Base glyph size the font was rasterized at, in pixels.
    pub base_size: i32,
    /// Number of glyphs in the font atlas.
    pub glyph_count: i32,
    /// The path the font was loaded from.
    pub file_name: String,
}

/// Metadata kept per loaded shader.
///
/// Uniform locations are resolved through the native runtime once and cached
/// here, mirroring the location cache the native wrapper keeps per shader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderInfo {
    /// A human-readable origin: file paths or `"<memory>"`.
    pub origin: String,
    /// Uniform name → native location, filled lazily.
    pub location_cache: HashMap<String, i32>,
}

impl ShaderInfo {
    /// Creates shader metadata with an empty location cache.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            location_cache: HashMap::new(),
        }
    }
}

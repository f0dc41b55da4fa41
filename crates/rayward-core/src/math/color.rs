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

//! An 8-bit RGBA color and its native wire representation.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
///
/// The native boundary takes colors as a packed little-endian `0xAABBGGRR`
/// word; [`to_u32`](Color::to_u32) produces exactly that layout. Channels are
/// `u8`, so a color can never carry a non-finite component.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 = opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const BLANK: Self = Self::new(0, 0, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(230, 41, 55);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    /// The classic raylib background gray.
    pub const RAYWHITE: Self = Self::rgb(245, 245, 245);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Packs the color into the native `0xAABBGGRR` word.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    /// Unpacks a native `0xAABBGGRR` word.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
            a: ((value >> 24) & 0xFF) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_matches_native_layout() {
        let color = Color::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(color.to_u32(), 0x4433_2211);
    }

    #[test]
    fn packing_round_trips() {
        let color = Color::rgb(245, 245, 245);
        assert_eq!(Color::from_u32(color.to_u32()), color);
    }

    #[test]
    fn opaque_constructor_sets_full_alpha() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }
}

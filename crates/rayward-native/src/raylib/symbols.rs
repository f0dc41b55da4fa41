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

//! Function-pointer types and by-value structs of the native C ABI.
//!
//! One alias per distinct signature; exports that share a shape (the
//! `GetTexture*BySlot` queries, the `Unload*BySlot` releases) share an alias.
//! The newer draw exports pass colors and vectors as 4-byte / 12-byte structs
//! instead of unpacked scalars, hence [`NativeColor`] and [`NativeVector3`].

use std::os::raw::c_char;

use rayward_core::math::{Color, Vector3};

/// 8-bit RGBA color, layout-compatible with the native `Color` struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NativeColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Color> for NativeColor {
    #[inline]
    fn from(color: Color) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// Three floats, layout-compatible with the native `Vector3` struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NativeVector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl From<Vector3> for NativeVector3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

// Window lifecycle.
/// `InitWindowWrapper(width, height, title)`
pub type InitWindowFn = unsafe extern "C" fn(i32, i32, *const c_char);
/// `CloseWindowWrapper()`, `BeginDrawingWrapper()`, and every other
/// zero-argument command.
pub type CommandFn = unsafe extern "C" fn();
/// `WindowShouldCloseWrapper()` and `IsCursorHiddenWrapper()`.
pub type BoolQueryFn = unsafe extern "C" fn() -> bool;
/// `SetTargetFPSWrapper(fps)`.
pub type SetTargetFpsFn = unsafe extern "C" fn(i32);
/// `GetFrameTimeWrapper()`.
pub type GetFrameTimeFn = unsafe extern "C" fn() -> f32;

// Frame and mode control.
/// `ClearBackgroundWrapper(color)`.
pub type ClearBackgroundFn = unsafe extern "C" fn(u32);
/// `BeginMode3DWrapper(position, target, up, fovy, projection)`, all vectors
/// unpacked into scalars.
pub type BeginMode3dFn =
    unsafe extern "C" fn(f32, f32, f32, f32, f32, f32, f32, f32, f32, f32, i32);
/// `BeginShaderModeBySlot(slot)` and `BeginBlendModeWrapper(mode)`.
pub type BeginIntModeFn = unsafe extern "C" fn(i32);
/// `BeginScissorModeWrapper(x, y, width, height)`.
pub type BeginScissorModeFn = unsafe extern "C" fn(i32, i32, i32, i32);

// 2D drawing. The early exports narrow coordinates to `short`.
/// `DrawPixelWrapper(x, y, color)`.
pub type DrawPixelFn = unsafe extern "C" fn(i16, i16, u32);
/// `DrawLineWrapper(x1, y1, x2, y2, color)`.
pub type DrawLineFn = unsafe extern "C" fn(i16, i16, i16, i16, u32);
/// `DrawCircleWrapper(x, y, radius, color)`.
pub type DrawCircleFn = unsafe extern "C" fn(i16, i16, f32, u32);
/// `DrawRectangleWrapper(x, y, width, height, color)`.
pub type DrawRectangleFn = unsafe extern "C" fn(i32, i32, i32, i32, u32);
/// `DrawTriangleWrapper(x1, y1, x2, y2, x3, y3, color)`.
pub type DrawTriangleFn = unsafe extern "C" fn(f32, f32, f32, f32, f32, f32, NativeColor);
/// `DrawPolyWrapper(centerX, centerY, sides, radius, rotation, color)`.
pub type DrawPolyFn = unsafe extern "C" fn(f32, f32, i32, f32, f32, u32);
/// `DrawTextWrapper(text, x, y, fontSize, color)`.
pub type DrawTextFn = unsafe extern "C" fn(*const c_char, i32, i32, i32, u32);
/// `DrawFPSWrapper(x, y)` and `SetMousePositionWrapper(x, y)`.
pub type TwoIntCommandFn = unsafe extern "C" fn(i32, i32);

// 3D drawing.
/// `DrawCubeWrapper(x, y, z, width, height, length, color)`.
pub type DrawCubeFn = unsafe extern "C" fn(f32, f32, f32, f32, f32, f32, u32);
/// `DrawSphereWrapper(x, y, z, radius, color)`.
pub type DrawSphereFn = unsafe extern "C" fn(f32, f32, f32, f32, u32);
/// `DrawGridWrapper(slices, spacing)`.
pub type DrawGridFn = unsafe extern "C" fn(i32, f32);

// Slot-addressed resources.
/// `LoadTextureToSlot(fileName)`; `-1` means the load failed.
pub type LoadPathToSlotFn = unsafe extern "C" fn(*const c_char) -> i32;
/// `GetTextureWidthBySlot(slot)` and the other integer slot queries.
pub type SlotQueryFn = unsafe extern "C" fn(i32) -> i32;
/// `GetModelBoundingBoxMinXBySlot(slot)` and the other float slot queries.
pub type SlotQueryF32Fn = unsafe extern "C" fn(i32) -> f32;
/// `UnloadTextureBySlot(slot)` and every other slot release.
pub type UnloadBySlotFn = unsafe extern "C" fn(i32);
/// `DrawTextureBySlot(slot, x, y, tint)`.
pub type DrawTextureFn = unsafe extern "C" fn(i32, i32, i32, NativeColor);
/// `DrawTextureProBySlot(slot, x, y, originX, originY, rotation, scale, tint)`.
pub type DrawTextureProFn =
    unsafe extern "C" fn(i32, f32, f32, f32, f32, f32, f32, NativeColor);
/// `LoadRenderTextureToSlot(width, height)`; `-1` means the load failed.
pub type LoadRenderTextureFn = unsafe extern "C" fn(i32, i32) -> i32;

// Models and animations.
/// `LoadModelToSlot(fileName, outBuffer)`; the buffer receives
/// `[slot, meshCount, materialCount]`, the return is the slot or `-1`.
pub type LoadModelFn = unsafe extern "C" fn(*const c_char, *mut i32) -> i32;
/// `DrawModelBySlot(slot, position, scale, tint)` and the wireframe variant.
pub type DrawModelFn = unsafe extern "C" fn(i32, NativeVector3, f32, NativeColor);
/// `DrawModelExBySlot(slot, position, rotationAxis, rotationAngle, scale, tint)`.
pub type DrawModelExFn =
    unsafe extern "C" fn(i32, NativeVector3, NativeVector3, f32, NativeVector3, NativeColor);
/// `LoadModelAnimationsToSlots(fileName, outSlots, maxCount)`; returns the
/// number of animations loaded or `-1`.
pub type LoadAnimationsFn = unsafe extern "C" fn(*const c_char, *mut i32, i32) -> i32;
/// `UpdateModelAnimationBySlot(modelSlot, animationSlot, frame)`.
pub type UpdateAnimationFn = unsafe extern "C" fn(i32, i32, i32);

// Fonts.
/// `LoadFontToSlot(fileName, fontSize)`; `-1` means the load failed.
pub type LoadFontFn = unsafe extern "C" fn(*const c_char, i32) -> i32;
/// `DrawTextBySlot(slot, text, x, y, fontSize, spacing, color)`.
pub type DrawTextBySlotFn = unsafe extern "C" fn(i32, *const c_char, f32, f32, f32, f32, u32);
/// `MeasureTextBySlot(slot, text, fontSize, spacing, outBuffer)`; the buffer
/// receives `[width, height]`.
pub type MeasureTextFn = unsafe extern "C" fn(i32, *const c_char, f32, f32, *mut f32);
/// `WrapTextBySlot(slot, text, fontSize, spacing, maxWidth, outBuffer,
/// bufferSize)`; returns the wrapped line count or `-1`.
pub type WrapTextFn =
    unsafe extern "C" fn(i32, *const c_char, f32, f32, f32, *mut c_char, i32) -> i32;

// Shaders.
/// `LoadShaderToSlot(vs, fs)` and `LoadShaderFromMemoryToSlot(vs, fs)`.
pub type LoadShaderFn = unsafe extern "C" fn(*const c_char, *const c_char) -> i32;
/// `GetShaderLocationBySlot(slot, uniformName)`; `-1` means not found.
pub type ShaderLocationFn = unsafe extern "C" fn(i32, *const c_char) -> i32;
/// `SetShaderValueFloatBySlot(slot, location, value)`.
pub type SetShaderFloatFn = unsafe extern "C" fn(i32, i32, f32);
/// `SetShaderValueIntBySlot(slot, location, value)`.
pub type SetShaderIntFn = unsafe extern "C" fn(i32, i32, i32);
/// `SetShaderValueVec3BySlot(slot, location, x, y, z)`.
pub type SetShaderVec3Fn = unsafe extern "C" fn(i32, i32, f32, f32, f32);

// Input.
/// `IsKeyDownWrapper(key)` / `IsKeyUpWrapper(key)`; keys travel as `short`.
pub type KeyQueryFn = unsafe extern "C" fn(i16) -> bool;
/// `GetKeyPressedWrapper()`; returns the key as `char`, `0` when the queue
/// is empty.
pub type GetKeyPressedFn = unsafe extern "C" fn() -> c_char;
/// `IsMouseButtonDownWrapper(button)`.
pub type MouseButtonQueryFn = unsafe extern "C" fn(i32) -> bool;
/// `GetMouseXWrapper()` / `GetMouseYWrapper()`.
pub type IntQueryFn = unsafe extern "C" fn() -> i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_color_matches_packed_layout() {
        // The 4-byte struct and the packed word are the same bytes.
        let color = Color::new(0x11, 0x22, 0x33, 0x44);
        let native = NativeColor::from(color);
        let bytes = [native.r, native.g, native.b, native.a];
        assert_eq!(u32::from_le_bytes(bytes), color.to_u32());
    }

    #[test]
    fn native_vector3_has_c_layout() {
        assert_eq!(std::mem::size_of::<NativeVector3>(), 12);
        let v = NativeVector3::from(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
    }
}

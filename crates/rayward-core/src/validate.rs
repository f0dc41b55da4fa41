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

//! Pure pre-flight checks applied before any state check or native call.
//!
//! The native runtime is not guaranteed to validate its own inputs; a NaN
//! handed to the rasterizer or a negative ring count can crash it outright.
//! Every predicate here is side-effect free and returns
//! [`ErrorKind::Validation`](crate::error::ErrorKind::Validation) on failure,
//! so a rejected argument never reaches the FFI boundary.

use crate::error::RayError;
use crate::math::{Camera3D, Vector2, Vector3};
use crate::result::RayResult;

/// Rejects NaN and ±Infinity.
pub fn finite_f32(name: &str, value: f32) -> RayResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RayError::validation(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Rejects non-finite values and negatives.
pub fn non_negative_f32(name: &str, value: f32) -> RayResult<()> {
    finite_f32(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RayError::validation(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

/// Rejects non-finite values and anything not strictly positive.
pub fn positive_f32(name: &str, value: f32) -> RayResult<()> {
    finite_f32(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RayError::validation(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// Rejects negative integer arguments (counts, sizes, font sizes).
pub fn non_negative_i32(name: &str, value: i32) -> RayResult<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(RayError::validation(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

/// Rejects zero and negative integer arguments (window dimensions, side
/// counts).
pub fn positive_i32(name: &str, value: i32) -> RayResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(RayError::validation(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// Rejects empty strings where a non-empty identifier is required (file
/// paths, shader sources, uniform names, window titles).
pub fn non_empty_str(name: &str, value: &str) -> RayResult<()> {
    if value.is_empty() {
        Err(RayError::validation(format!("{name} must not be empty")))
    } else {
        Ok(())
    }
}

/// Checks every component of a 2D vector for finiteness.
pub fn finite_vec2(name: &str, value: Vector2) -> RayResult<()> {
    finite_f32(name, value.x)?;
    finite_f32(name, value.y)
}

/// Checks every component of a 3D vector for finiteness.
pub fn finite_vec3(name: &str, value: Vector3) -> RayResult<()> {
    finite_f32(name, value.x)?;
    finite_f32(name, value.y)?;
    finite_f32(name, value.z)
}

/// Checks a camera description before it is handed to the rasterizer.
///
/// Position, target, and up vector must be finite; the field of view must be
/// a positive finite angle.
pub fn finite_camera(camera: &Camera3D) -> RayResult<()> {
    finite_vec3("camera position", camera.position)?;
    finite_vec3("camera target", camera.target)?;
    finite_vec3("camera up", camera.up)?;
    positive_f32("camera fovy", camera.fovy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::math::CameraProjection;

    #[test]
    fn finite_rejects_nan_and_infinities() {
        assert!(finite_f32("x", 0.0).is_ok());
        assert!(finite_f32("x", -123.5).is_ok());
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = finite_f32("x", bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn non_negative_rejects_negatives_but_allows_zero() {
        assert!(non_negative_f32("radius", 0.0).is_ok());
        assert!(non_negative_f32("radius", 10.0).is_ok());
        assert!(non_negative_f32("radius", -0.1).is_err());
        assert!(non_negative_f32("radius", f32::NAN).is_err());
    }

    #[test]
    fn positive_i32_rejects_zero() {
        assert!(positive_i32("width", 800).is_ok());
        assert!(positive_i32("width", 0).is_err());
        assert!(positive_i32("width", -800).is_err());
    }

    #[test]
    fn non_empty_str_rejects_empty() {
        assert!(non_empty_str("path", "textures/hero.png").is_ok());
        let err = non_empty_str("path", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "path must not be empty");
    }

    #[test]
    fn camera_validation_covers_every_field() {
        let mut camera = Camera3D {
            position: Vector3::new(0.0, 10.0, 10.0),
            target: Vector3::ZERO,
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: 45.0,
            projection: CameraProjection::Perspective,
        };
        assert!(finite_camera(&camera).is_ok());

        camera.target.z = f32::NAN;
        assert!(finite_camera(&camera).is_err());

        camera.target.z = 0.0;
        camera.fovy = 0.0;
        assert!(finite_camera(&camera).is_err());
    }
}

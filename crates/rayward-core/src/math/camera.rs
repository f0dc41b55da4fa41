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

//! The 3D camera description passed to `begin_mode3d`.

use serde::{Deserialize, Serialize};

use super::Vector3;

/// Camera projection kind.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CameraProjection {
    /// Perspective projection; `fovy` is the vertical field of view in
    /// degrees.
    #[default]
    Perspective,
    /// Orthographic projection; `fovy` is the vertical view height in world
    /// units.
    Orthographic,
}

impl CameraProjection {
    /// The integer the native runtime uses for this projection.
    #[inline]
    pub const fn to_native(self) -> i32 {
        match self {
            CameraProjection::Perspective => 0,
            CameraProjection::Orthographic => 1,
        }
    }
}

/// Parameters describing a 3D camera.
///
/// Validated for finiteness before it ever reaches the native rasterizer;
/// see [`validate::finite_camera`](crate::validate::finite_camera).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera3D {
    /// Camera position in world space.
    pub position: Vector3,
    /// The point the camera looks at.
    pub target: Vector3,
    /// The camera's up direction, normally `(0, 1, 0)`.
    pub up: Vector3,
    /// Field of view (perspective, degrees) or view height (orthographic).
    pub fovy: f32,
    /// Projection kind.
    pub projection: CameraProjection,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 10.0, 10.0),
            target: Vector3::ZERO,
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: 45.0,
            projection: CameraProjection::Perspective,
        }
    }
}

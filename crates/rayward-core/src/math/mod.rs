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

//! Minimal value types consumed by the draw surface.
//!
//! This is deliberately not a math library. Only the types the operation
//! surface marshals across the native boundary live here: colors, vectors,
//! the 3D camera description, and axis-aligned bounds.

pub mod camera;
pub mod color;
pub mod vector;

pub use self::camera::{Camera3D, CameraProjection};
pub use self::color::Color;
pub use self::vector::{BoundingBox, Vector2, Vector3};

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

//! The public-facing Software Development Kit (SDK) for rayward.
//! This crate provides a simple and stable surface for applications: load a
//! config, bootstrap a window, and drive a frame loop without touching the
//! FFI crate directly.

pub mod config;
pub mod runner;

pub use config::{AppConfig, WindowConfig};
pub use runner::{bootstrap, run_frames, FrameFlow};

/// Everything an application binary typically imports.
pub mod prelude {
    pub use rayward_core::math::{
        BoundingBox, Camera3D, CameraProjection, Color, Vector2, Vector3,
    };
    pub use rayward_core::state::BlendMode;
    pub use rayward_core::{ErrorKind, GraphicsContext, RayError, RayResult, Slot};
    pub use rayward_native::RaylibRuntime;

    pub use crate::config::{AppConfig, WindowConfig};
    pub use crate::runner::{bootstrap, run_frames, FrameFlow};
}

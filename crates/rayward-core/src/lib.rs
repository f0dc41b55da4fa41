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

//! # Rayward Core
//!
//! The safety layer between application code and a native, C-ABI graphics
//! runtime. The native library is stateful and not memory-safe to call
//! incorrectly: drawing before a frame begins, freeing a handle twice, or
//! passing NaN into the rasterizer are all undefined behavior on its side of
//! the boundary.
//!
//! This crate contains everything with real invariants:
//!
//! - the [`error`] taxonomy and [`result`] combinators every operation uses,
//! - the pure [`validate`] checks that reject bad arguments early,
//! - the per-family slot [`registry`] that turns raw native handles into
//!   lifetime-checked indices,
//! - the window/draw [`state`] machine gating which operations are legal,
//! - the [`runtime`] contract that the sole FFI implementation (in
//!   `rayward-native`) and all test doubles fulfill,
//! - and the [`context`] object tying them together.
//!
//! The model is single-threaded and synchronous: one [`GraphicsContext`] per
//! window, driven by an external frame loop.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod math;
pub mod registry;
pub mod resources;
pub mod result;
pub mod runtime;
pub mod state;
pub mod validate;

pub use context::{GraphicsContext, ResourceDiagnostics};
pub use error::{ErrorKind, RayError};
pub use registry::Slot;
pub use result::RayResult;
pub use runtime::NativeRuntime;

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

//! # Rayward Native
//!
//! The one crate that actually crosses the FFI boundary. It loads the native
//! graphics runtime as a shared library at startup, resolves every exported
//! function eagerly, and implements the
//! [`NativeRuntime`](rayward_core::runtime::NativeRuntime) contract on top of
//! the raw calls.
//!
//! Everything above this crate works with validated arguments and
//! lifetime-checked slots; everything below is a C ABI with sentinel error
//! returns. The code here only marshals between the two.

#![warn(missing_docs)]

pub mod raylib;

pub use raylib::{NativeLibrary, RaylibRuntime};

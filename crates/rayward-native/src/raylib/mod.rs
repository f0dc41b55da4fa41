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

//! Bindings to the raylib-based native runtime.
//!
//! The runtime is a thin C shim over raylib: every export is a free function
//! with scalar arguments, colors travel as packed `0xAABBGGRR` words or
//! 4-byte structs, and resources are addressed by native slot indices with
//! `-1` as the universal failure sentinel.

mod library;
mod runtime;
mod symbols;

pub use library::NativeLibrary;
pub use runtime::RaylibRuntime;

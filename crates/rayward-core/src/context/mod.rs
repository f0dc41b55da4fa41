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

//! The application-facing graphics context.
//!
//! [`GraphicsContext`] owns the native runtime, the window/draw state
//! machine, and one slot registry per resource family. It is an explicit
//! context object rather than a hidden singleton, so tests can run several
//! independent contexts against recording runtimes.
//!
//! Every operation follows the same pipeline: argument validation first,
//! then the state-machine guard, then slot resolution, and only then the
//! native call. A rejected argument or an out-of-sequence call never reaches
//! the native boundary.

mod animations;
mod diagnostics;
mod fonts;
mod frame;
mod input;
mod models;
mod render_targets;
mod shapes;
mod shaders;
mod textures;
mod window;

pub use diagnostics::ResourceDiagnostics;

use crate::registry::SlotRegistry;
use crate::resources::{
    AnimationInfo, FontInfo, ModelInfo, RenderTargetInfo, ShaderInfo, TextureInfo,
};
use crate::runtime::NativeRuntime;
use crate::state::WindowState;

/// Owner of all graphics state: the native runtime, the window/draw state
/// machine, and the per-family slot registries.
///
/// Application code holds slot indices and `RayResult` values only; raw
/// native handles never leave this struct.
pub struct GraphicsContext {
    runtime: Box<dyn NativeRuntime>,
    state: WindowState,
    textures: SlotRegistry<TextureInfo>,
    render_targets: SlotRegistry<RenderTargetInfo>,
    models: SlotRegistry<ModelInfo>,
    animations: SlotRegistry<AnimationInfo>,
    shaders: SlotRegistry<ShaderInfo>,
    fonts: SlotRegistry<FontInfo>,
}

impl GraphicsContext {
    /// Creates a context over the given native runtime.
    ///
    /// The window is not opened yet; call
    /// [`init_window`](GraphicsContext::init_window) first.
    pub fn new(runtime: Box<dyn NativeRuntime>) -> Self {
        Self {
            runtime,
            state: WindowState::new(),
            textures: SlotRegistry::new("texture"),
            render_targets: SlotRegistry::new("render target"),
            models: SlotRegistry::new("model"),
            animations: SlotRegistry::new("animation"),
            shaders: SlotRegistry::new("shader"),
            fonts: SlotRegistry::new("font"),
        }
    }

    /// Read-only view of the window/draw state, for diagnostics.
    pub fn state(&self) -> &WindowState {
        &self.state
    }
}

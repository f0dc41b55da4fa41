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

//! Live-resource diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GraphicsContext;

/// A snapshot of live slot counts per resource family.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceDiagnostics {
    /// Live texture slots.
    pub textures: usize,
    /// Live render-target slots.
    pub render_targets: usize,
    /// Live model slots.
    pub models: usize,
    /// Live animation slots.
    pub animations: usize,
    /// Live shader slots.
    pub shaders: usize,
    /// Live font slots.
    pub fonts: usize,
}

impl ResourceDiagnostics {
    /// Total live slots across every family.
    pub fn total(&self) -> usize {
        self.textures
            + self.render_targets
            + self.models
            + self.animations
            + self.shaders
            + self.fonts
    }
}

impl fmt::Display for ResourceDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "textures={} render_targets={} models={} animations={} shaders={} fonts={}",
            self.textures,
            self.render_targets,
            self.models,
            self.animations,
            self.shaders,
            self.fonts
        )
    }
}

impl GraphicsContext {
    /// Snapshots the live counts of every registry.
    pub fn diagnostics(&self) -> ResourceDiagnostics {
        ResourceDiagnostics {
            textures: self.textures.count(),
            render_targets: self.render_targets.count(),
            models: self.models.count(),
            animations: self.animations.count(),
            shaders: self.shaders.count(),
            fonts: self.fonts.count(),
        }
    }
}

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

//! The window/draw state machine.
//!
//! The native runtime is a global state machine: drawing before a frame
//! begins, or closing a frame while a nested mode is still open, leaves it in
//! an undefined state. [`WindowState`] tracks the nested guards explicitly so
//! every operation can verify its precondition and fail with a
//! [`State`](crate::error::ErrorKind::State) error naming what is missing,
//! before the native layer is touched.

use serde::{Deserialize, Serialize};

use crate::error::RayError;
use crate::result::RayResult;

/// Blend modes accepted by `begin_blend_mode`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlendMode {
    /// Standard alpha blending.
    #[default]
    Alpha,
    /// Additive blending.
    Additive,
    /// Multiplicative blending.
    Multiplied,
    /// Additive, colors doubled.
    AddColors,
    /// Subtractive, colors doubled.
    SubtractColors,
    /// Premultiplied alpha.
    AlphaPremultiply,
}

impl BlendMode {
    /// The native integer identifier for this mode.
    pub const fn to_native(self) -> i32 {
        match self {
            BlendMode::Alpha => 0,
            BlendMode::Additive => 1,
            BlendMode::Multiplied => 2,
            BlendMode::AddColors => 3,
            BlendMode::SubtractColors => 4,
            BlendMode::AlphaPremultiply => 5,
        }
    }
}

/// Nested guard flags for the window/draw lifecycle.
///
/// `initialized` brackets the whole window lifetime, `drawing` brackets a
/// frame, and the four mode flags nest independently inside `drawing`. Each
/// begin must see its matching end before the frame closes.
#[derive(Debug, Default, Clone)]
pub struct WindowState {
    initialized: bool,
    drawing: bool,
    mode3d: bool,
    shader_mode: bool,
    blend_mode: bool,
    scissor_mode: bool,
}

impl WindowState {
    /// A fresh, uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the window has been initialized and not yet closed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a frame is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Whether 3D mode is open.
    pub fn is_mode3d(&self) -> bool {
        self.mode3d
    }

    /// Whether shader mode is open.
    pub fn is_shader_mode(&self) -> bool {
        self.shader_mode
    }

    /// Whether blend mode is open.
    pub fn is_blend_mode(&self) -> bool {
        self.blend_mode
    }

    /// Whether scissor mode is open.
    pub fn is_scissor_mode(&self) -> bool {
        self.scissor_mode
    }

    /// Guard: the window must be initialized.
    pub fn require_initialized(&self, operation: &str) -> RayResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(RayError::state("window is not initialized").with_context(operation.to_string()))
        }
    }

    /// Guard: a frame must be in progress.
    pub fn require_drawing(&self, operation: &str) -> RayResult<()> {
        self.require_initialized(operation)?;
        if self.drawing {
            Ok(())
        } else {
            Err(RayError::state("no frame in progress; call begin_drawing first")
                .with_context(operation.to_string()))
        }
    }

    /// Guard: 3D mode must be open.
    pub fn require_mode3d(&self, operation: &str) -> RayResult<()> {
        self.require_drawing(operation)?;
        if self.mode3d {
            Ok(())
        } else {
            Err(RayError::state("3D mode is not open; call begin_mode3d first")
                .with_context(operation.to_string()))
        }
    }

    /// Transition: window init. Fails if already initialized.
    pub fn enter_initialized(&mut self) -> RayResult<()> {
        if self.initialized {
            return Err(RayError::state("window is already initialized"));
        }
        self.initialized = true;
        Ok(())
    }

    /// Transition: window close. Clears every flag; legal from any
    /// initialized state, including mid-frame.
    pub fn enter_closed(&mut self) {
        *self = Self::default();
    }

    /// Transition: frame begin.
    pub fn enter_drawing(&mut self) -> RayResult<()> {
        self.require_initialized("begin_drawing")?;
        if self.drawing {
            return Err(RayError::state("a frame is already in progress"));
        }
        self.drawing = true;
        Ok(())
    }

    /// Transition: frame end. Every nested mode must already be closed.
    pub fn leave_drawing(&mut self) -> RayResult<()> {
        self.require_drawing("end_drawing")?;
        if let Some(open) = self.open_mode() {
            return Err(RayError::state(format!(
                "cannot end frame while {open} mode is still open"
            )));
        }
        self.drawing = false;
        Ok(())
    }

    /// Transition: 3D mode begin.
    pub fn enter_mode3d(&mut self) -> RayResult<()> {
        self.require_drawing("begin_mode3d")?;
        if self.mode3d {
            return Err(RayError::state("3D mode is already open"));
        }
        self.mode3d = true;
        Ok(())
    }

    /// Transition: 3D mode end.
    pub fn leave_mode3d(&mut self) -> RayResult<()> {
        if !self.mode3d {
            return Err(RayError::state("3D mode is not open"));
        }
        self.mode3d = false;
        Ok(())
    }

    /// Transition: shader mode begin.
    pub fn enter_shader_mode(&mut self) -> RayResult<()> {
        self.require_drawing("begin_shader_mode")?;
        if self.shader_mode {
            return Err(RayError::state("shader mode is already open"));
        }
        self.shader_mode = true;
        Ok(())
    }

    /// Transition: shader mode end.
    pub fn leave_shader_mode(&mut self) -> RayResult<()> {
        if !self.shader_mode {
            return Err(RayError::state("shader mode is not open"));
        }
        self.shader_mode = false;
        Ok(())
    }

    /// Transition: blend mode begin.
    pub fn enter_blend_mode(&mut self) -> RayResult<()> {
        self.require_drawing("begin_blend_mode")?;
        if self.blend_mode {
            return Err(RayError::state("blend mode is already open"));
        }
        self.blend_mode = true;
        Ok(())
    }

    /// Transition: blend mode end.
    pub fn leave_blend_mode(&mut self) -> RayResult<()> {
        if !self.blend_mode {
            return Err(RayError::state("blend mode is not open"));
        }
        self.blend_mode = false;
        Ok(())
    }

    /// Transition: scissor mode begin.
    pub fn enter_scissor_mode(&mut self) -> RayResult<()> {
        self.require_drawing("begin_scissor_mode")?;
        if self.scissor_mode {
            return Err(RayError::state("scissor mode is already open"));
        }
        self.scissor_mode = true;
        Ok(())
    }

    /// Transition: scissor mode end.
    pub fn leave_scissor_mode(&mut self) -> RayResult<()> {
        if !self.scissor_mode {
            return Err(RayError::state("scissor mode is not open"));
        }
        self.scissor_mode = false;
        Ok(())
    }

    fn open_mode(&self) -> Option<&'static str> {
        if self.mode3d {
            Some("3D")
        } else if self.shader_mode {
            Some("shader")
        } else if self.blend_mode {
            Some("blend")
        } else if self.scissor_mode {
            Some("scissor")
        } else {
            None
        }
    }
}

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

//! Keyboard, mouse, and cursor queries.
//!
//! Invalid device queries (key or button codes outside the native range) are
//! classified as [`Input`](crate::error::ErrorKind::Input) errors at the
//! point of failure, not as generic validation errors.

use super::GraphicsContext;
use crate::error::RayError;
use crate::result::RayResult;

/// Highest key code the native keyboard table accepts.
const MAX_KEY_CODE: i32 = 512;
/// Highest mouse button index the native layer accepts.
const MAX_MOUSE_BUTTON: i32 = 6;

fn check_key(key: i32) -> RayResult<()> {
    if (0..=MAX_KEY_CODE).contains(&key) {
        Ok(())
    } else {
        Err(RayError::input(format!(
            "key code {key} out of range 0..={MAX_KEY_CODE}"
        )))
    }
}

fn check_mouse_button(button: i32) -> RayResult<()> {
    if (0..=MAX_MOUSE_BUTTON).contains(&button) {
        Ok(())
    } else {
        Err(RayError::input(format!(
            "mouse button {button} out of range 0..={MAX_MOUSE_BUTTON}"
        )))
    }
}

impl GraphicsContext {
    /// Whether a key is currently held.
    pub fn is_key_down(&mut self, key: i32) -> RayResult<bool> {
        check_key(key)?;
        self.state.require_initialized("is_key_down")?;
        self.runtime.is_key_down(key)
    }

    /// Whether a key is currently up.
    pub fn is_key_up(&mut self, key: i32) -> RayResult<bool> {
        check_key(key)?;
        self.state.require_initialized("is_key_up")?;
        self.runtime.is_key_up(key)
    }

    /// The next queued key press, or `None` when the queue is empty.
    pub fn key_pressed(&mut self) -> RayResult<Option<i32>> {
        self.state.require_initialized("key_pressed")?;
        let key = self.runtime.key_pressed()?;
        Ok(if key == 0 { None } else { Some(key) })
    }

    /// Whether a mouse button is currently held.
    pub fn is_mouse_button_down(&mut self, button: i32) -> RayResult<bool> {
        check_mouse_button(button)?;
        self.state.require_initialized("is_mouse_button_down")?;
        self.runtime.is_mouse_button_down(button)
    }

    /// Current mouse position in window coordinates.
    pub fn mouse_position(&mut self) -> RayResult<(i32, i32)> {
        self.state.require_initialized("mouse_position")?;
        self.runtime.mouse_position()
    }

    /// Warps the mouse cursor.
    pub fn set_mouse_position(&mut self, x: i32, y: i32) -> RayResult<()> {
        self.state.require_initialized("set_mouse_position")?;
        self.runtime.set_mouse_position(x, y)
    }

    /// Shows the OS cursor.
    pub fn show_cursor(&mut self) -> RayResult<()> {
        self.state.require_initialized("show_cursor")?;
        self.runtime.show_cursor()
    }

    /// Hides the OS cursor.
    pub fn hide_cursor(&mut self) -> RayResult<()> {
        self.state.require_initialized("hide_cursor")?;
        self.runtime.hide_cursor()
    }

    /// Unlocks the cursor from the window.
    pub fn enable_cursor(&mut self) -> RayResult<()> {
        self.state.require_initialized("enable_cursor")?;
        self.runtime.enable_cursor()
    }

    /// Locks and hides the cursor for camera control.
    pub fn disable_cursor(&mut self) -> RayResult<()> {
        self.state.require_initialized("disable_cursor")?;
        self.runtime.disable_cursor()
    }

    /// Whether the OS cursor is hidden.
    pub fn is_cursor_hidden(&mut self) -> RayResult<bool> {
        self.state.require_initialized("is_cursor_hidden")?;
        self.runtime.is_cursor_hidden()
    }
}

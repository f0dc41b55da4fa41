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

//! Immediate-mode shape and text drawing.
//!
//! 2D draws require an open frame; 3D draws additionally require 3D mode.

use super::GraphicsContext;
use crate::math::{Color, Vector2, Vector3};
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Draws a single pixel.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> RayResult<()> {
        self.state.require_drawing("draw_pixel")?;
        self.runtime.draw_pixel(x, y, color)
    }

    /// Draws a line segment.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> RayResult<()> {
        self.state.require_drawing("draw_line")?;
        self.runtime.draw_line(x1, y1, x2, y2, color)
    }

    /// Draws a filled circle.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color) -> RayResult<()> {
        validate::non_negative_f32("circle radius", radius)?;
        self.state.require_drawing("draw_circle")?;
        self.runtime.draw_circle(x, y, radius, color)
    }

    /// Draws a filled rectangle.
    pub fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    ) -> RayResult<()> {
        validate::non_negative_i32("rectangle width", width)?;
        validate::non_negative_i32("rectangle height", height)?;
        self.state.require_drawing("draw_rectangle")?;
        self.runtime.draw_rectangle(x, y, width, height, color)
    }

    /// Draws a filled triangle (counter-clockwise winding).
    pub fn draw_triangle(
        &mut self,
        a: Vector2,
        b: Vector2,
        c: Vector2,
        color: Color,
    ) -> RayResult<()> {
        validate::finite_vec2("triangle vertex a", a)?;
        validate::finite_vec2("triangle vertex b", b)?;
        validate::finite_vec2("triangle vertex c", c)?;
        self.state.require_drawing("draw_triangle")?;
        self.runtime.draw_triangle(a, b, c, color)
    }

    /// Draws a regular polygon around `center`.
    pub fn draw_poly(
        &mut self,
        center: Vector2,
        sides: i32,
        radius: f32,
        rotation: f32,
        color: Color,
    ) -> RayResult<()> {
        validate::finite_vec2("polygon center", center)?;
        if sides < 3 {
            return Err(crate::error::RayError::validation(format!(
                "polygon sides must be at least 3, got {sides}"
            )));
        }
        validate::non_negative_f32("polygon radius", radius)?;
        validate::finite_f32("polygon rotation", rotation)?;
        self.state.require_drawing("draw_poly")?;
        self.runtime.draw_poly(center, sides, radius, rotation, color)
    }

    /// Draws text with the default font.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    ) -> RayResult<()> {
        validate::positive_i32("font size", font_size)?;
        self.state.require_drawing("draw_text")?;
        self.runtime.draw_text(text, x, y, font_size, color)
    }

    /// Draws the FPS counter.
    pub fn draw_fps(&mut self, x: i32, y: i32) -> RayResult<()> {
        self.state.require_drawing("draw_fps")?;
        self.runtime.draw_fps(x, y)
    }

    /// Draws a filled cube. Requires 3D mode.
    pub fn draw_cube(
        &mut self,
        position: Vector3,
        width: f32,
        height: f32,
        length: f32,
        color: Color,
    ) -> RayResult<()> {
        validate::finite_vec3("cube position", position)?;
        validate::non_negative_f32("cube width", width)?;
        validate::non_negative_f32("cube height", height)?;
        validate::non_negative_f32("cube length", length)?;
        self.state.require_mode3d("draw_cube")?;
        self.runtime.draw_cube(position, width, height, length, color)
    }

    /// Draws a filled sphere. Requires 3D mode.
    pub fn draw_sphere(&mut self, center: Vector3, radius: f32, color: Color) -> RayResult<()> {
        validate::finite_vec3("sphere center", center)?;
        validate::non_negative_f32("sphere radius", radius)?;
        self.state.require_mode3d("draw_sphere")?;
        self.runtime.draw_sphere(center, radius, color)
    }

    /// Draws a reference grid on the XZ plane. Requires 3D mode.
    pub fn draw_grid(&mut self, slices: i32, spacing: f32) -> RayResult<()> {
        validate::positive_i32("grid slices", slices)?;
        validate::positive_f32("grid spacing", spacing)?;
        self.state.require_mode3d("draw_grid")?;
        self.runtime.draw_grid(slices, spacing)
    }
}

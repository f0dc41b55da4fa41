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

// Rayward Sandbox
// Main binary for testing and demos

use std::env;
use std::path::Path;

use anyhow::Result;
use rayward_sdk::prelude::*;

/// ASCII escape, the exit key the native key queue reports.
const KEY_ESCAPE: i32 = 27;

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))?,
        None => AppConfig::default(),
    };
    log::info!(
        "starting sandbox: {}x{} \"{}\"",
        config.window.width,
        config.window.height,
        config.window.title
    );

    let mut ctx = bootstrap(&config)?;
    let camera = Camera3D::default();
    let mut frames: u64 = 0;

    run_frames(&mut ctx, |ctx| {
        ctx.clear_background(Color::RAYWHITE)?;

        ctx.begin_mode3d(&camera)?;
        ctx.draw_grid(10, 1.0)?;
        ctx.draw_cube(Vector3::ZERO, 2.0, 2.0, 2.0, Color::BLUE)?;
        ctx.draw_sphere(Vector3::new(4.0, 1.0, 0.0), 1.0, Color::RED)?;
        ctx.end_mode3d()?;

        ctx.draw_text("rayward sandbox", 20, 20, 24, Color::BLACK)?;
        ctx.draw_fps(20, 56)?;

        frames += 1;
        if ctx.key_pressed()? == Some(KEY_ESCAPE) {
            return Ok(FrameFlow::Exit);
        }
        Ok(FrameFlow::Continue)
    })?;

    let diagnostics = ctx.diagnostics();
    log::info!("exiting after {frames} frames, releasing {diagnostics}");
    ctx.close_window()?;
    Ok(())
}

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

//! Bootstrap and the standard frame loop.

use rayward_core::error::ErrorKind;
use rayward_core::result::RayResult;
use rayward_core::GraphicsContext;
use rayward_native::RaylibRuntime;

use crate::config::AppConfig;

/// What the frame callback wants to happen next.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameFlow {
    /// Keep looping.
    Continue,
    /// Finish this frame, then leave the loop.
    Exit,
}

/// Loads the native library named by `config` and opens the window.
///
/// The returned context is ready for [`run_frames`]; the caller is expected
/// to `close_window` (or drop the process) when done.
pub fn bootstrap(config: &AppConfig) -> RayResult<GraphicsContext> {
    let runtime = RaylibRuntime::load(&config.library_path)?;
    let mut ctx = GraphicsContext::new(Box::new(runtime));
    ctx.init_window(
        config.window.width,
        config.window.height,
        &config.window.title,
    )?;
    if let Some(fps) = config.window.target_fps {
        ctx.set_target_fps(fps)?;
    }
    Ok(ctx)
}

/// Drives the standard frame loop until the window is closed or the callback
/// asks to exit.
///
/// `begin_drawing` / `end_drawing` bracket every callback invocation. A
/// [`Draw`](ErrorKind::Draw) error from the callback is logged and the loop
/// keeps going; anything else aborts the loop and is returned, since the
/// native runtime can no longer be trusted mid-frame.
pub fn run_frames<F>(ctx: &mut GraphicsContext, mut frame: F) -> RayResult<()>
where
    F: FnMut(&mut GraphicsContext) -> RayResult<FrameFlow>,
{
    while !ctx.window_should_close()? {
        ctx.begin_drawing()?;
        let flow = match frame(ctx) {
            Ok(flow) => flow,
            Err(err) if err.kind() == ErrorKind::Draw => {
                log::warn!("draw call failed, frame continues: {err}");
                FrameFlow::Continue
            }
            Err(err) => return Err(err),
        };
        ctx.end_drawing()?;
        if flow == FrameFlow::Exit {
            break;
        }
    }
    Ok(())
}

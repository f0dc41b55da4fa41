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

//! Resource slot lifecycles through the public context surface.

mod support;

use std::cell::RefCell;
use std::rc::Rc;

use rayward_core::math::Vector2;
use rayward_core::{ErrorKind, GraphicsContext};
use support::{CallLog, RecordingRuntime};

fn initialized_context() -> (GraphicsContext, Rc<RefCell<CallLog>>) {
    let (runtime, log) = RecordingRuntime::create();
    let mut ctx = GraphicsContext::new(runtime);
    ctx.init_window(800, 600, "t").unwrap();
    (ctx, log)
}

#[test]
fn texture_load_resolve_unload_cycle() {
    let (mut ctx, log) = initialized_context();

    let slot = ctx.load_texture("textures/hero.png").unwrap();
    assert_eq!(ctx.loaded_texture_count(), 1);

    let info = ctx.texture_info(slot).unwrap();
    assert_eq!(info.width, 64);
    assert_eq!(info.file_name, "textures/hero.png");

    ctx.unload_texture(slot).unwrap();
    assert_eq!(ctx.loaded_texture_count(), 0);
    assert_eq!(log.borrow().count("unload_texture"), 1);

    // Stale slot after free.
    assert_eq!(
        ctx.texture_info(slot).unwrap_err().kind(),
        ErrorKind::Validation
    );
}

#[test]
fn failed_texture_load_allocates_nothing() {
    let (mut ctx, log) = initialized_context();
    log.borrow_mut().fail_loads = true;

    let err = ctx.load_texture("missing.png").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Ffi);
    assert_eq!(ctx.loaded_texture_count(), 0);

    // The native load was attempted exactly once; nothing else happened.
    assert_eq!(log.borrow().count("load_texture"), 1);
}

#[test]
fn double_unload_is_an_error_and_native_free_runs_once() {
    let (mut ctx, log) = initialized_context();
    let slot = ctx.load_texture("a.png").unwrap();

    ctx.unload_texture(slot).unwrap();
    let err = ctx.unload_texture(slot).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(log.borrow().count("unload_texture"), 1);
}

#[test]
fn freed_slots_are_reused_lowest_first_without_stale_metadata() {
    let (mut ctx, _log) = initialized_context();

    let a = ctx.load_texture("a.png").unwrap();
    let b = ctx.load_texture("b.png").unwrap();
    let c = ctx.load_texture("c.png").unwrap();
    assert!(a < b && b < c);

    ctx.unload_texture(a).unwrap();
    ctx.unload_texture(b).unwrap();

    let reused = ctx.load_texture("d.png").unwrap();
    assert_eq!(reused, a);
    assert_eq!(ctx.texture_info(reused).unwrap().file_name, "d.png");
}

#[test]
fn counts_track_allocates_minus_frees_per_family() {
    let (mut ctx, _log) = initialized_context();

    let t1 = ctx.load_texture("a.png").unwrap();
    let _t2 = ctx.load_texture("b.png").unwrap();
    let m = ctx.load_model("m.obj").unwrap();
    let _rt = ctx.load_render_target(128, 128).unwrap();

    assert_eq!(ctx.loaded_texture_count(), 2);
    assert_eq!(ctx.loaded_model_count(), 1);
    assert_eq!(ctx.loaded_render_target_count(), 1);

    ctx.unload_texture(t1).unwrap();
    ctx.unload_model(m).unwrap();

    let diag = ctx.diagnostics();
    assert_eq!(diag.textures, 1);
    assert_eq!(diag.models, 0);
    assert_eq!(diag.render_targets, 1);
    assert_eq!(diag.total(), 2);
}

#[test]
fn model_metadata_is_cached_at_load_time() {
    let (mut ctx, log) = initialized_context();
    let slot = ctx.load_model("castle.glb").unwrap();

    let calls_before = log.borrow().calls.len();
    let info = ctx.model_info(slot).unwrap();
    assert_eq!(info.mesh_count, 2);
    assert_eq!(info.material_count, 1);
    // Metadata queries never cross the native boundary.
    assert_eq!(log.borrow().calls.len(), calls_before);
}

#[test]
fn animations_get_one_slot_each() {
    let (mut ctx, _log) = initialized_context();
    let model = ctx.load_model("walker.glb").unwrap();
    let animations = ctx.load_model_animations("walker.glb").unwrap();
    assert_eq!(animations.len(), 2);
    assert_eq!(ctx.loaded_animation_count(), 2);

    ctx.update_model_animation(model, animations[0], 10).unwrap();

    // Frame index beyond the cached frame count is rejected early.
    let err = ctx
        .update_model_animation(model, animations[0], 30)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    ctx.unload_animation(animations[0]).unwrap();
    assert_eq!(ctx.loaded_animation_count(), 1);
}

#[test]
fn font_load_measure_wrap_unload_cycle() {
    let (mut ctx, log) = initialized_context();

    let slot = ctx.load_font("fonts/mono.ttf", 32).unwrap();
    assert_eq!(ctx.loaded_font_count(), 1);
    let info = ctx.font_info(slot).unwrap();
    assert_eq!(info.base_size, 32);
    assert_eq!(info.file_name, "fonts/mono.ttf");

    let size = ctx.measure_text(slot, "hello", 32.0, 1.0).unwrap();
    assert!(size.x > 0.0 && size.y > 0.0);

    let wrapped = ctx
        .wrap_text(slot, "lorem ipsum dolor", 32.0, 1.0, 40.0)
        .unwrap();
    assert_eq!(wrapped, "lorem\nipsum\ndolor");

    // Empty text short-circuits without crossing the native boundary.
    let calls_before = log.borrow().calls.len();
    assert_eq!(
        ctx.measure_text(slot, "", 32.0, 1.0).unwrap(),
        Vector2::ZERO
    );
    assert_eq!(ctx.wrap_text(slot, "", 32.0, 1.0, 40.0).unwrap(), "");
    assert_eq!(log.borrow().calls.len(), calls_before);

    ctx.unload_font(slot).unwrap();
    assert_eq!(ctx.loaded_font_count(), 0);
    assert_eq!(log.borrow().count("unload_font"), 1);
    assert_eq!(
        ctx.font_info(slot).unwrap_err().kind(),
        ErrorKind::Validation
    );
}

#[test]
fn shader_uniform_locations_are_cached() {
    let (mut ctx, log) = initialized_context();
    let shader = ctx.load_shader("base.vs", "glow.fs").unwrap();

    let first = ctx.shader_uniform_location(shader, "u_time").unwrap();
    let second = ctx.shader_uniform_location(shader, "u_time").unwrap();
    assert_eq!(first, second);

    // The native lookup ran once; the second answer came from the cache.
    assert_eq!(log.borrow().count("shader_location:u_time"), 1);

    ctx.set_shader_uniform_f32(shader, first, 1.5).unwrap();
    assert_eq!(log.borrow().count("set_shader_value_f32"), 1);
}

#[test]
fn close_window_releases_every_family() {
    let (mut ctx, log) = initialized_context();
    ctx.load_texture("a.png").unwrap();
    ctx.load_texture("b.png").unwrap();
    ctx.load_model("m.obj").unwrap();
    ctx.load_render_target(64, 64).unwrap();
    ctx.load_shader_from_memory("vs", "fs").unwrap();
    ctx.load_model_animations("m.obj").unwrap();
    ctx.load_font("f.ttf", 24).unwrap();

    ctx.close_window().unwrap();

    assert_eq!(ctx.diagnostics().total(), 0);
    let log = log.borrow();
    assert_eq!(log.count("unload_texture"), 2);
    assert_eq!(log.count("unload_model"), 1);
    assert_eq!(log.count("unload_render_target"), 1);
    assert_eq!(log.count("unload_shader"), 1);
    assert_eq!(log.count("unload_animation"), 2);
    assert_eq!(log.count("unload_font"), 1);
}

#[test]
fn slots_are_per_family_namespaces() {
    let (mut ctx, _log) = initialized_context();
    let texture = ctx.load_texture("a.png").unwrap();
    let model = ctx.load_model("m.obj").unwrap();

    // Same numeric index in two families refers to two resources.
    assert_eq!(texture.index(), 0);
    assert_eq!(model.index(), 0);
    assert_eq!(ctx.texture_info(texture).unwrap().file_name, "a.png");
    assert_eq!(ctx.model_info(model).unwrap().file_name, "m.obj");
}

#[test]
fn resource_loads_require_an_initialized_window() {
    let (runtime, _log) = RecordingRuntime::create();
    let mut ctx = GraphicsContext::new(runtime);
    assert_eq!(
        ctx.load_texture("a.png").unwrap_err().kind(),
        ErrorKind::State
    );
    assert_eq!(
        ctx.load_model("m.obj").unwrap_err().kind(),
        ErrorKind::State
    );
}

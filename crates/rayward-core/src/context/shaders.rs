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

//! Shader loading and uniform access.
//!
//! Uniform locations are resolved natively once per (shader, name) pair and
//! cached in the shader's slot metadata.

use super::GraphicsContext;
use crate::math::Vector3;
use crate::registry::Slot;
use crate::result::RayResult;
use crate::validate;

impl GraphicsContext {
    /// Compiles a shader from vertex/fragment source files.
    pub fn load_shader(&mut self, vs_path: &str, fs_path: &str) -> RayResult<Slot> {
        validate::non_empty_str("vertex shader path", vs_path)?;
        validate::non_empty_str("fragment shader path", fs_path)?;
        self.state.require_initialized("load_shader")?;
        let (handle, info) = self.runtime.load_shader(vs_path, fs_path)?;
        Ok(self.shaders.allocate(handle, info))
    }

    /// Compiles a shader from in-memory source strings.
    pub fn load_shader_from_memory(&mut self, vs_code: &str, fs_code: &str) -> RayResult<Slot> {
        validate::non_empty_str("vertex shader source", vs_code)?;
        validate::non_empty_str("fragment shader source", fs_code)?;
        self.state.require_initialized("load_shader_from_memory")?;
        let (handle, info) = self.runtime.load_shader_from_memory(vs_code, fs_code)?;
        Ok(self.shaders.allocate(handle, info))
    }

    /// Releases the shader in `slot`.
    pub fn unload_shader(&mut self, slot: Slot) -> RayResult<()> {
        self.state.require_initialized("unload_shader")?;
        let handle = self.shaders.free(slot)?;
        self.runtime.unload_shader(handle)
    }

    /// Resolves a uniform name to its native location, caching the answer.
    pub fn shader_uniform_location(&mut self, slot: Slot, uniform: &str) -> RayResult<i32> {
        validate::non_empty_str("uniform name", uniform)?;
        self.state.require_initialized("shader_uniform_location")?;
        let entry = self.shaders.resolve_mut(slot)?;
        if let Some(&location) = entry.metadata.location_cache.get(uniform) {
            return Ok(location);
        }
        let handle = entry.handle;
        let location = self.runtime.shader_location(handle, uniform)?;
        self.shaders
            .resolve_mut(slot)?
            .metadata
            .location_cache
            .insert(uniform.to_string(), location);
        Ok(location)
    }

    /// Sets a float uniform on the shader in `slot`.
    pub fn set_shader_uniform_f32(
        &mut self,
        slot: Slot,
        location: i32,
        value: f32,
    ) -> RayResult<()> {
        validate::non_negative_i32("uniform location", location)?;
        validate::finite_f32("uniform value", value)?;
        self.state.require_initialized("set_shader_uniform_f32")?;
        let handle = self.shaders.resolve(slot)?.handle;
        self.runtime.set_shader_value_f32(handle, location, value)
    }

    /// Sets an integer uniform on the shader in `slot`.
    pub fn set_shader_uniform_i32(
        &mut self,
        slot: Slot,
        location: i32,
        value: i32,
    ) -> RayResult<()> {
        validate::non_negative_i32("uniform location", location)?;
        self.state.require_initialized("set_shader_uniform_i32")?;
        let handle = self.shaders.resolve(slot)?.handle;
        self.runtime.set_shader_value_i32(handle, location, value)
    }

    /// Sets a vec3 uniform on the shader in `slot`.
    pub fn set_shader_uniform_vec3(
        &mut self,
        slot: Slot,
        location: i32,
        value: Vector3,
    ) -> RayResult<()> {
        validate::non_negative_i32("uniform location", location)?;
        validate::finite_vec3("uniform value", value)?;
        self.state.require_initialized("set_shader_uniform_vec3")?;
        let handle = self.shaders.resolve(slot)?.handle;
        self.runtime.set_shader_value_vec3(handle, location, value)
    }

    /// Number of currently-loaded shaders.
    pub fn loaded_shader_count(&self) -> usize {
        self.shaders.count()
    }
}

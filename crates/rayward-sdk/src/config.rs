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

//! Application configuration, loaded from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Window parameters for `init_window`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels.
    pub width: i32,
    /// Window height in pixels.
    pub height: i32,
    /// Window title.
    pub title: String,
    /// Frame-rate cap; `None` leaves the rate uncapped.
    pub target_fps: Option<i32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "rayward".to_owned(),
            target_fps: Some(60),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the native graphics shared library.
    pub library_path: PathBuf,
    /// Window parameters.
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from("libgraphics.so"),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads a configuration file; missing fields fall back to defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "window": { "title": "demo" } }"#).unwrap();
        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.library_path, PathBuf::from("libgraphics.so"));
    }

    #[test]
    fn full_config_round_trips_through_json() {
        let config = AppConfig {
            library_path: PathBuf::from("/opt/lib/libray.so"),
            window: WindowConfig {
                width: 1280,
                height: 720,
                title: "game".to_owned(),
                target_fps: None,
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<AppConfig>(&json).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = AppConfig::load(Path::new("/nonexistent/app.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/app.json"));
    }
}

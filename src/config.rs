use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::math::PI;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "flycube".to_string(),
            width: 1200,
            height: 800,
            resizable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Distance travelled per frame while a movement key is held.
    pub move_step: f32,
    pub start_position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: PI / 2.0,
            near: 0.1,
            far: 100.0,
            move_step: 0.08,
            start_position: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub clear_color: [f64; 4],
    /// WGSL file replacing the built-in cube shader.
    pub shader_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            clear_color: [0.1, 0.15, 0.3, 1.0],
            shader_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in '{}'", path.display()))
    }

    /// Config named on the command line or by `FLYCUBE_CONFIG`, else defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        use clap::Parser;

        Self::from_cli(&crate::cli::Cli::parse())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_cli(cli: &crate::cli::Cli) -> anyhow::Result<Self> {
        match &cli.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(path)
            }
            None => {
                log::info!("No config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}

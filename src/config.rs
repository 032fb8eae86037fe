//! Presentation configuration
//!
//! Read once at startup from the platform config directory:
//! - macOS: ~/Library/Application Support/geolinks/config.json
//! - Linux: ~/.config/geolinks/config.json
//! - Windows: %APPDATA%\geolinks\config\config.json

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::coordinates::DEFAULT_GLOBE_RADIUS;
use crate::core::topology::ConnectionMode;
use crate::topology::{ConnectionSettings, ConnectionStyle};

/// Loads [`GlobeConfig`] and seeds the initial connection settings from it.
///
/// Add after `DefaultPlugins` so load messages reach the log.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = GlobeConfig::load_or_default();
        app.insert_resource(ConnectionSettings {
            mode: config.connection_mode,
            style: config.connection_style,
        })
        .insert_resource(config);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    #[default]
    Satellite,
    Dark,
    Light,
}

/// Rendering options, passed through to the visualization plugin untouched
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub map_style: MapStyle,
    pub connection_mode: ConnectionMode,
    pub connection_style: ConnectionStyle,
    pub globe_opacity: f32,
    pub show_graticule: bool,
    pub globe_radius: f64,
    pub arc_segments: u32,
    /// Peak height of a half-globe arc as a fraction of the radius
    pub arc_lift: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            map_style: MapStyle::Satellite,
            connection_mode: ConnectionMode::Star,
            connection_style: ConnectionStyle::Arc,
            globe_opacity: 1.0,
            show_graticule: true,
            globe_radius: DEFAULT_GLOBE_RADIUS,
            arc_segments: 48,
            arc_lift: 0.25,
        }
    }
}

impl GlobeConfig {
    pub fn config_path() -> Result<PathBuf, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "geolinks")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Read a config file. A missing file is not an error and yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, anyhow::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: GlobeConfig = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Platform config, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        let loaded = Self::config_path().and_then(|path| {
            info!("Loading config from {}", path.display());
            Self::load_from(&path)
        });
        match loaded {
            Ok(config) => config,
            Err(err) => {
                warn!("Using default config: {:#}", err);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.globe_opacity.is_finite() {
            self.globe_opacity = 1.0;
        }
        self.globe_opacity = self.globe_opacity.clamp(0.0, 1.0);
        if !self.globe_radius.is_finite() || self.globe_radius <= 0.0 {
            self.globe_radius = DEFAULT_GLOBE_RADIUS;
        }
        self.arc_segments = self.arc_segments.max(1);
        if !self.arc_lift.is_finite() || self.arc_lift < 0.0 {
            self.arc_lift = 0.0;
        }
        self
    }
}

//! Configuration for FrameKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files; sections missing from a file take their defaults.
//!
//! Configuration is organized into logical sections:
//! - Snapping (click tolerance, drawing grid)
//! - Layout presets (member spacing, region vertex count, alignment)
//! - Units (measurement system for typed lengths)

pub use framekit_core::units::MeasurementSystem;
use framekit_core::units::{format_length, parse_length, unit_label};
use framekit_layout::geometry::Point2D;
use framekit_layout::query::snap_to_grid;
use framekit_layout::{AlignmentMode, ClipPolicy, SessionSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "framekit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Click snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappingSettings {
    /// Max distance at which a click reuses an existing node
    pub tolerance: f64,
    /// Drawing grid pitch
    pub grid_spacing: f64,
    /// Round clicks to the grid before node snapping
    pub snap_to_grid: bool,
}

impl Default for SnappingSettings {
    fn default() -> Self {
        Self {
            tolerance: 15.0,
            grid_spacing: 12.0,
            snap_to_grid: false,
        }
    }
}

/// Member layout presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// On-center rafter spacing
    pub rafter_spacing: f64,
    /// On-center joist spacing, also used for every non-rafter kind
    pub joist_spacing: f64,
    /// Picked vertices that complete a region
    pub region_vertex_threshold: usize,
    pub default_alignment: AlignmentMode,
    pub clip_policy: ClipPolicy,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            rafter_spacing: 16.0,
            joist_spacing: 24.0,
            region_vertex_threshold: 4,
            default_alignment: AlignmentMode::default(),
            clip_policy: ClipPolicy::default(),
        }
    }
}

/// Unit preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSettings {
    pub measurement_system: MeasurementSystem,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub snapping: SnappingSettings,
    pub layout: LayoutSettings,
    pub units: UnitSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/framekit/config.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise the defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        require_positive("snapping.tolerance", self.snapping.tolerance)?;
        require_positive("snapping.grid_spacing", self.snapping.grid_spacing)?;
        require_positive("layout.rafter_spacing", self.layout.rafter_spacing)?;
        require_positive("layout.joist_spacing", self.layout.joist_spacing)?;

        if self.layout.region_vertex_threshold < 3 {
            return Err(SettingsError::invalid(
                "layout.region_vertex_threshold",
                format!("must be at least 3, got {}", self.layout.region_vertex_threshold),
            ));
        }

        Ok(())
    }

    /// Engine settings for a new drafting session
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            snap_tolerance: self.snapping.tolerance,
            rafter_spacing: self.layout.rafter_spacing,
            joist_spacing: self.layout.joist_spacing,
            region_vertex_threshold: self.layout.region_vertex_threshold,
            alignment: self.layout.default_alignment,
            clip_policy: self.layout.clip_policy,
        }
    }

    /// Applies grid snapping to a raw click when enabled
    pub fn snap_point(&self, p: Point2D) -> Point2D {
        if self.snapping.snap_to_grid {
            snap_to_grid(p, self.snapping.grid_spacing)
        } else {
            p
        }
    }

    /// Parses a typed length in the configured measurement system
    pub fn parse_length(&self, input: &str) -> SettingsResult<f64> {
        parse_length(input, self.units.measurement_system)
            .map_err(|reason| SettingsError::invalid("length", reason))
    }

    /// Formats an engine length with its unit label
    pub fn format_length(&self, value: f64) -> String {
        let system = self.units.measurement_system;
        format!("{} {}", format_length(value, system), unit_label(system))
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn require_positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be > 0, got {}", value)))
    }
}

//! FrameKit Settings Crate
//!
//! Session tolerances, layout presets and unit preferences, loadable from
//! JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, LayoutSettings, SnappingSettings, UnitSettings};
pub use error::{SettingsError, SettingsResult};

//! # FrameKit
//!
//! Structural framing layout for multi-storey drafting: closed regions from
//! picked points, evenly spaced rafters and joists clipped to those
//! regions, and the spatial queries that snap clicks to existing nodes and
//! members.
//!
//! ## Architecture
//!
//! FrameKit is organized as a workspace with multiple crates:
//!
//! 1. **framekit-core** - Error types, length units, identifier sequences
//! 2. **framekit-layout** - Geometry kernel, regions, queries, layout, registry, session
//! 3. **framekit-settings** - Configuration files and validation
//! 4. **framekit** - Demo binary and logging setup

pub use framekit_core::units;
pub use framekit_core::{Error, GeometryError, RegistryError, Result, SessionError};

pub use framekit_layout::{
    generate, generate_with, AlignmentMode, AlignmentPolicy, Centerline, ClipPolicy,
    DraftingSession, Member, MemberId, MemberKind, Node, NodeId, Point2D, Region, RegionId,
    Registry, SessionSettings,
};

pub use framekit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("FRAMEKIT_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, keeping stdout for reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

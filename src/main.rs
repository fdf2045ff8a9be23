use std::path::PathBuf;

use anyhow::Context;
use framekit::{
    init_logging, units, AlignmentMode, Config, DraftingSession, MemberKind, Point2D, BUILD_DATE,
    VERSION,
};

/// Corners of the sample roof, in click order.
const TEST_ROOF: [(f64, f64); 4] = [(50.0, 50.0), (220.0, 25.0), (300.0, 400.0), (480.0, 175.0)];

/// Beams drawn along the roof outline, as indices into `TEST_ROOF`.
const TEST_ROOF_BEAMS: [(usize, usize); 4] = [(0, 2), (2, 3), (3, 1), (1, 0)];

/// Where the layout click lands: inside the roof, next to the first-to-second corner beam.
const LAYOUT_CLICK: (f64, f64) = (150.0, 60.0);

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(version = VERSION, built = BUILD_DATE, "FrameKit layout demo");

    let config = load_config()?;

    println!("FrameKit {} ({})", VERSION, BUILD_DATE);
    println!(
        "snap tolerance {}, rafters at {}",
        config.format_length(config.snapping.tolerance),
        config.format_length(config.layout.rafter_spacing),
    );

    for mode in AlignmentMode::ALL {
        let mut settings = config.session_settings();
        settings.alignment = mode;
        let mut session = DraftingSession::new(settings);

        draw_test_roof(&mut session, &config)?;

        let click = config.snap_point(Point2D::new(LAYOUT_CLICK.0, LAYOUT_CLICK.1));
        match session.lay_out_members(click, MemberKind::Rafter) {
            Ok(rafters) => {
                let registry = session.registry();
                let lengths: Vec<f64> = rafters
                    .iter()
                    .filter_map(|id| registry.member(id))
                    .map(|m| m.length())
                    .collect();
                let total: f64 = lengths.iter().sum();
                let longest = lengths.iter().copied().fold(0.0, f64::max);
                println!(
                    "{:<22} {:>3} rafters, {} total, longest {}",
                    mode.to_string(),
                    rafters.len(),
                    config.format_length(total),
                    units::format_feet_inches(longest)
                );
            }
            Err(err) => {
                tracing::warn!(%mode, error = %err, "Layout failed");
                println!("{:<22} failed: {}", mode.to_string(), err);
            }
        }
    }

    Ok(())
}

/// Config from the first argument, else the platform default path, else defaults.
fn load_config() -> anyhow::Result<Config> {
    if let Some(arg) = std::env::args_os().nth(1) {
        let path = PathBuf::from(arg);
        return Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match Config::default_config_path() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Using default config path");
            Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Falling back to default settings");
            Ok(Config::default())
        }
    }
}

/// Picks the roof region and draws a beam along each side.
fn draw_test_roof(session: &mut DraftingSession, config: &Config) -> anyhow::Result<()> {
    let corner = |i: usize| config.snap_point(Point2D::new(TEST_ROOF[i].0, TEST_ROOF[i].1));

    for i in 0..TEST_ROOF.len() {
        session.pick_region_vertex(corner(i))?;
    }
    // Thresholds above four leave the roof in the preview
    if session.preview().len() >= 3 {
        session.finish_region()?;
    }

    for (from, to) in TEST_ROOF_BEAMS {
        session.click_member(corner(from), MemberKind::Beam)?;
        session.click_member(corner(to), MemberKind::Beam)?;
    }

    Ok(())
}

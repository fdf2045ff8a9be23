//! Layout engine.
//!
//! Generates evenly spaced, parallel centerlines across a region. Lines are
//! laid out in a local frame (global axes, or axes aligned with a reference
//! edge), centered within the region's extent along the spacing axis, then
//! mapped back to world coordinates and trimmed to the boundary.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use framekit_core::GeometryError;

use crate::clipper::{trim_with, ClipPolicy};
use crate::geometry::Point2D;
use crate::model::Region;

/// A generated member centerline, start to end.
pub type Centerline = (Point2D, Point2D);

/// Upper bound on candidate lines per layout call.
pub const MAX_CANDIDATE_LINES: usize = 10_000;

/// Direction rule for generated centerlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AlignmentPolicy {
    /// Lines run along X, spaced along Y.
    Horizontal,
    /// Lines run along Y, spaced along X.
    Vertical,
    /// Lines run perpendicular to the edge, spaced along it.
    PerpendicularToEdge { start: Point2D, end: Point2D },
    /// Lines run parallel to the edge, spaced away from it.
    ParallelToEdge { start: Point2D, end: Point2D },
}

impl AlignmentPolicy {
    pub fn mode(&self) -> AlignmentMode {
        match self {
            AlignmentPolicy::Horizontal => AlignmentMode::Horizontal,
            AlignmentPolicy::Vertical => AlignmentMode::Vertical,
            AlignmentPolicy::PerpendicularToEdge { .. } => AlignmentMode::PerpendicularToEdge,
            AlignmentPolicy::ParallelToEdge { .. } => AlignmentMode::ParallelToEdge,
        }
    }
}

/// An alignment policy without its reference edge, as selected in settings
/// before the user has clicked anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMode {
    Horizontal,
    Vertical,
    #[default]
    PerpendicularToEdge,
    ParallelToEdge,
}

impl AlignmentMode {
    pub const ALL: [AlignmentMode; 4] = [
        AlignmentMode::Horizontal,
        AlignmentMode::Vertical,
        AlignmentMode::PerpendicularToEdge,
        AlignmentMode::ParallelToEdge,
    ];

    pub fn requires_reference_edge(&self) -> bool {
        matches!(
            self,
            AlignmentMode::PerpendicularToEdge | AlignmentMode::ParallelToEdge
        )
    }

    /// Completes the mode into a policy. Edge modes return `None` without an
    /// edge; axis modes ignore it.
    pub fn with_edge(&self, edge: Option<(Point2D, Point2D)>) -> Option<AlignmentPolicy> {
        match self {
            AlignmentMode::Horizontal => Some(AlignmentPolicy::Horizontal),
            AlignmentMode::Vertical => Some(AlignmentPolicy::Vertical),
            AlignmentMode::PerpendicularToEdge => {
                edge.map(|(start, end)| AlignmentPolicy::PerpendicularToEdge { start, end })
            }
            AlignmentMode::ParallelToEdge => {
                edge.map(|(start, end)| AlignmentPolicy::ParallelToEdge { start, end })
            }
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlignmentMode::Horizontal => "horizontal",
            AlignmentMode::Vertical => "vertical",
            AlignmentMode::PerpendicularToEdge => "perpendicular_to_edge",
            AlignmentMode::ParallelToEdge => "parallel_to_edge",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "horizontal" => Ok(AlignmentMode::Horizontal),
            "vertical" => Ok(AlignmentMode::Vertical),
            "perpendiculartoedge" | "perpendicular" => Ok(AlignmentMode::PerpendicularToEdge),
            "paralleltoedge" | "parallel" => Ok(AlignmentMode::ParallelToEdge),
            _ => Err(format!("Unknown alignment mode: {}", s)),
        }
    }
}

/// Orthonormal frame the candidate lines are laid out in.
#[derive(Debug, Clone, Copy)]
struct LocalFrame {
    origin: Vector2<f64>,
    primary: Vector2<f64>,
    secondary: Vector2<f64>,
}

impl LocalFrame {
    fn global() -> Self {
        Self {
            origin: Vector2::zeros(),
            primary: Vector2::x(),
            secondary: Vector2::y(),
        }
    }

    fn along_edge(start: Point2D, end: Point2D) -> Result<Self, GeometryError> {
        let origin = to_vector(start);
        let direction = to_vector(end) - origin;
        let length = direction.norm();
        if !(length.is_finite() && length > 0.0) {
            return Err(GeometryError::DegenerateEdge);
        }
        let primary = direction / length;
        Ok(Self {
            origin,
            primary,
            secondary: Vector2::new(-primary.y, primary.x),
        })
    }

    fn for_policy(policy: &AlignmentPolicy) -> Result<Self, GeometryError> {
        match *policy {
            AlignmentPolicy::Horizontal | AlignmentPolicy::Vertical => Ok(Self::global()),
            AlignmentPolicy::PerpendicularToEdge { start, end }
            | AlignmentPolicy::ParallelToEdge { start, end } => Self::along_edge(start, end),
        }
    }

    fn to_local(&self, p: Point2D) -> (f64, f64) {
        let d = to_vector(p) - self.origin;
        (d.dot(&self.primary), d.dot(&self.secondary))
    }

    fn to_world(&self, a: f64, b: f64) -> Point2D {
        to_point(self.origin + self.primary * a + self.secondary * b)
    }
}

fn to_vector(p: Point2D) -> Vector2<f64> {
    Vector2::new(p.x, p.y)
}

fn to_point(v: Vector2<f64>) -> Point2D {
    Point2D::new(v.x, v.y)
}

/// Generates centerlines trimmed with the permissive clip policy.
pub fn generate(
    region: &Region,
    spacing: f64,
    policy: AlignmentPolicy,
) -> Result<Vec<Centerline>, GeometryError> {
    generate_with(region, spacing, policy, ClipPolicy::Permissive)
}

/// Generates centerlines and trims them with `clip`.
pub fn generate_with(
    region: &Region,
    spacing: f64,
    policy: AlignmentPolicy,
    clip: ClipPolicy,
) -> Result<Vec<Centerline>, GeometryError> {
    let candidates = candidate_lines(region, spacing, policy)?;
    let lines = trim_with(&candidates, region.vertices(), clip);

    tracing::debug!(
        region = %region.id(),
        mode = %policy.mode(),
        spacing,
        candidates = candidates.len(),
        lines = lines.len(),
        "Generated layout"
    );
    Ok(lines)
}

/// Untrimmed candidate lines spanning the region's extent in the local frame.
///
/// Fails with `InvalidSpacing` for non-finite or non-positive spacing,
/// `DegenerateEdge` for a zero-length reference edge, and `TooManyLines`
/// when the spacing is too fine for the region.
pub fn candidate_lines(
    region: &Region,
    spacing: f64,
    policy: AlignmentPolicy,
) -> Result<Vec<Centerline>, GeometryError> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(GeometryError::InvalidSpacing { spacing });
    }

    let frame = LocalFrame::for_policy(&policy)?;
    if region.vertices().is_empty() {
        return Ok(Vec::new());
    }

    let (mut min_a, mut max_a) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_b, mut max_b) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in region.vertices() {
        let (a, b) = frame.to_local(v);
        min_a = min_a.min(a);
        max_a = max_a.max(a);
        min_b = min_b.min(b);
        max_b = max_b.max(b);
    }

    // Spaced along the primary axis, lines run along the secondary, and vice versa
    let along_primary = matches!(
        policy,
        AlignmentPolicy::Vertical | AlignmentPolicy::PerpendicularToEdge { .. }
    );
    let (span_min, span_max) = if along_primary {
        (min_a, max_a)
    } else {
        (min_b, max_b)
    };

    let offsets = centered_offsets(span_min, span_max, spacing)?;

    Ok(offsets
        .into_iter()
        .map(|offset| {
            if along_primary {
                (frame.to_world(offset, min_b), frame.to_world(offset, max_b))
            } else {
                (frame.to_world(min_a, offset), frame.to_world(max_a, offset))
            }
        })
        .collect())
}

/// Offsets `spacing` apart, centered within `[span_min, span_max]`.
///
/// A zero-width span yields its midpoint once.
fn centered_offsets(span_min: f64, span_max: f64, spacing: f64) -> Result<Vec<f64>, GeometryError> {
    let span = (span_max - span_min).max(0.0);
    let count = (span / spacing).floor() + 1.0;
    if !count.is_finite() || count > MAX_CANDIDATE_LINES as f64 {
        return Err(GeometryError::TooManyLines {
            count: if count.is_finite() { count as usize } else { usize::MAX },
            limit: MAX_CANDIDATE_LINES,
        });
    }

    let count = count as usize;
    let used = (count - 1) as f64 * spacing;
    let start = span_min + (span - used) / 2.0;
    Ok((0..count).map(|i| start + i as f64 * spacing).collect())
}

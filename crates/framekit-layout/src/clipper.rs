//! Boundary clipper.
//!
//! Restricts candidate centerlines to a polygon by intersecting each one
//! with every boundary edge and keeping the span between the first and last
//! hit, in edge order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::geometry::{polygon_edges, segment_intersect, Point2D, POINT_EPSILON};
use crate::layout::Centerline;

/// What to do with a candidate that does not cross the boundary twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipPolicy {
    /// Keep the candidate unchanged.
    #[default]
    Permissive,
    /// Drop the candidate.
    Strict,
}

impl fmt::Display for ClipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipPolicy::Permissive => write!(f, "permissive"),
            ClipPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for ClipPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(ClipPolicy::Permissive),
            "strict" => Ok(ClipPolicy::Strict),
            _ => Err(format!("Unknown clip policy: {}", s)),
        }
    }
}

/// Trims each line to the polygon with the permissive policy.
pub fn trim(lines: &[Centerline], polygon: &[Point2D]) -> Vec<Centerline> {
    trim_with(lines, polygon, ClipPolicy::Permissive)
}

/// Trims each line to the polygon.
///
/// When the first and last boundary intersections coincide (including the
/// case of no intersections at all) the line is passed through unchanged or
/// dropped, depending on `policy`.
pub fn trim_with(lines: &[Centerline], polygon: &[Point2D], policy: ClipPolicy) -> Vec<Centerline> {
    let edges = polygon_edges(polygon);

    lines
        .iter()
        .filter_map(|&(start, end)| {
            let hits: SmallVec<[Point2D; 4]> = edges
                .iter()
                .filter_map(|&(a, b)| segment_intersect(start, end, a, b, true))
                .collect();

            match (hits.first(), hits.last()) {
                (Some(&first), Some(&last)) if !first.approx_eq(&last, POINT_EPSILON) => {
                    Some((first, last))
                }
                _ => match policy {
                    ClipPolicy::Permissive => Some((start, end)),
                    ClipPolicy::Strict => None,
                },
            }
        })
        .collect()
}

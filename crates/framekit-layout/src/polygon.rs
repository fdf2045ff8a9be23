//! Polygon builder.
//!
//! Turns an unordered set of picked vertices into a closed, clockwise
//! [`Region`]. Building is pure apart from drawing one number from the
//! supplied [`IdSequence`], and only once the input has been accepted.

use framekit_core::{GeometryError, IdSequence};

use crate::geometry::{order_clockwise, Point2D, POINT_EPSILON};
use crate::model::{Node, Region, RegionId};

/// Builds a region from picked nodes on a single floor.
///
/// Fails with `InvalidRegion` when fewer than three distinct locations are
/// supplied or when the nodes span more than one floor. Collinear input is
/// accepted.
pub fn build_region(nodes: &[Node], ids: &mut dyn IdSequence) -> Result<Region, GeometryError> {
    let Some(first) = nodes.first() else {
        return Err(GeometryError::invalid_region("no vertices picked"));
    };

    let floor = first.floor;
    if let Some(stray) = nodes.iter().find(|n| n.floor != floor) {
        return Err(GeometryError::invalid_region(format!(
            "node {} is on floor {}, expected floor {}",
            stray.id, stray.floor, floor
        )));
    }

    let points: Vec<Point2D> = nodes.iter().map(|n| n.location).collect();
    build_region_from_points(&points, floor, ids)
}

/// Builds a region directly from locations.
pub fn build_region_from_points(
    points: &[Point2D],
    floor: i32,
    ids: &mut dyn IdSequence,
) -> Result<Region, GeometryError> {
    let distinct = count_distinct(points);
    if distinct < 3 {
        return Err(GeometryError::invalid_region(format!(
            "need at least 3 distinct vertices, got {}",
            distinct
        )));
    }

    let ring = dedup_ring(order_clockwise(points));

    let id = RegionId(format!("r{}", ids.next_id()));
    tracing::debug!(region = %id, floor, vertices = ring.len(), "Built region");
    Ok(Region::from_ring(id, ring, floor))
}

fn count_distinct(points: &[Point2D]) -> usize {
    let mut seen: Vec<Point2D> = Vec::with_capacity(points.len());
    for p in points {
        if !seen.iter().any(|s| s.approx_eq(p, POINT_EPSILON)) {
            seen.push(*p);
        }
    }
    seen.len()
}

// Coincident points share an angle about the centroid, so after ordering any
// duplicates are adjacent (or straddle the wrap).
fn dedup_ring(mut ring: Vec<Point2D>) -> Vec<Point2D> {
    ring.dedup_by(|b, a| a.approx_eq(b, POINT_EPSILON));
    while ring.len() > 1 && ring[0].approx_eq(&ring[ring.len() - 1], POINT_EPSILON) {
        ring.pop();
    }
    ring
}

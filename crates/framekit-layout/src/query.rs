//! Spatial queries used to snap user input and pick reference edges.
//!
//! All searches are linear scans over caller-supplied collections. Ties go
//! to the first minimal candidate in iteration order.

use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::point;
use lyon::path::FillRule;

use crate::geometry::{distance, project_onto_segment, Point2D};
use crate::model::{Member, Node, Region};

/// Flattening tolerance handed to lyon. Region outlines are straight lines,
/// so it only matters for points sitting on an edge.
const HIT_TEST_TOLERANCE: f32 = 0.01;

/// Nearest node on `floor` within `tolerance` of `p` (inclusive).
pub fn nearest_node<'a>(
    p: Point2D,
    nodes: impl IntoIterator<Item = &'a Node>,
    floor: i32,
    tolerance: f64,
) -> Option<&'a Node> {
    nodes
        .into_iter()
        .filter(|n| n.floor == floor)
        .map(|n| (distance(p, n.location), n))
        .fold(None, keep_first_minimum)
        .filter(|(d, _)| *d <= tolerance)
        .map(|(_, n)| n)
}

/// Member whose centerline passes within `tolerance` of `p`, closest first.
pub fn nearest_member<'a>(
    p: Point2D,
    members: impl IntoIterator<Item = &'a Member>,
    tolerance: f64,
) -> Option<&'a Member> {
    closest_on_members(p, members)
        .filter(|(d, _, _)| *d <= tolerance)
        .map(|(_, _, m)| m)
}

/// Closest point on any member and the member it lies on.
///
/// Has no distance cutoff, so it returns `None` only for an empty input.
pub fn nearest_point_on_any_member<'a>(
    p: Point2D,
    members: impl IntoIterator<Item = &'a Member>,
) -> Option<(Point2D, &'a Member)> {
    closest_on_members(p, members).map(|(_, proj, m)| (proj, m))
}

fn closest_on_members<'a>(
    p: Point2D,
    members: impl IntoIterator<Item = &'a Member>,
) -> Option<(f64, Point2D, &'a Member)> {
    let mut best: Option<(f64, Point2D, &'a Member)> = None;
    for member in members {
        let (a, b) = member.segment();
        let proj = project_onto_segment(p, a, b);
        let d = distance(p, proj);
        if best.map_or(true, |(best_d, _, _)| d < best_d) {
            best = Some((d, proj, member));
        }
    }
    best
}

/// First region, in storage order, whose filled outline contains `p`.
///
/// Uses the even-odd rule so self-intersecting outlines agree with
/// [`crate::geometry::point_in_polygon`]. Regions whose f64 bounds exclude
/// `p` are skipped. The hit test runs in f32, with the point and the outline
/// shifted to the region's lower bound, so its precision depends on the
/// region's size rather than its distance from the origin.
pub fn region_containing<'a>(
    p: Point2D,
    regions: impl IntoIterator<Item = &'a Region>,
) -> Option<&'a Region> {
    regions.into_iter().find(|region| {
        let (min_x, min_y, max_x, max_y) = region.bounds();
        if p.x < min_x || p.x > max_x || p.y < min_y || p.y > max_y {
            return false;
        }
        let at = point((p.x - min_x) as f32, (p.y - min_y) as f32);
        let path = region.to_path_relative_to(Point2D::new(min_x, min_y));
        hit_test_path(&at, path.iter(), FillRule::EvenOdd, HIT_TEST_TOLERANCE)
    })
}

/// Closest point on any edge of `region` (closing edge included), with the
/// edge it lies on, if within `tolerance`.
pub fn nearest_point_on_region_edge(
    p: Point2D,
    region: &Region,
    tolerance: f64,
) -> Option<(Point2D, (Point2D, Point2D))> {
    region
        .edges()
        .into_iter()
        .map(|(a, b)| {
            let proj = project_onto_segment(p, a, b);
            (distance(p, proj), (proj, (a, b)))
        })
        .fold(None, keep_first_minimum)
        .filter(|(d, _)| *d <= tolerance)
        .map(|(_, hit)| hit)
}

/// Whether some member already spans `a`-`b`, in either direction.
pub fn edge_has_member<'a>(
    a: Point2D,
    b: Point2D,
    members: impl IntoIterator<Item = &'a Member>,
    tolerance: f64,
) -> bool {
    let near = |x: Point2D, y: Point2D| distance(x, y) <= tolerance;
    members.into_iter().any(|m| {
        let (s, e) = m.segment();
        (near(s, a) && near(e, b)) || (near(s, b) && near(e, a))
    })
}

/// Rounds `p` to the nearest grid intersection. Non-positive or non-finite
/// spacing leaves the point unchanged.
pub fn snap_to_grid(p: Point2D, spacing: f64) -> Point2D {
    if !(spacing.is_finite() && spacing > 0.0) {
        return p;
    }
    Point2D::new(
        (p.x / spacing).round() * spacing,
        (p.y / spacing).round() * spacing,
    )
}

fn keep_first_minimum<T>(best: Option<(f64, T)>, candidate: (f64, T)) -> Option<(f64, T)> {
    match best {
        Some(b) if b.0 <= candidate.0 => Some(b),
        _ => Some(candidate),
    }
}

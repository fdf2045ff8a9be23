//! Geometry kernel.
//!
//! Point and vector arithmetic plus the handful of primitives every other
//! component builds on: projection onto a segment, segment intersection,
//! ray-casting containment and centroid-angle ordering.
//!
//! [`segment_intersect`] is the only intersection routine in the crate. The
//! boundary clipper and every query route through it so that a single
//! epsilon governs parallel detection and on-segment tests.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Determinant magnitude below which two lines are treated as parallel, and
/// the slack allowed on the segment parameters `t` and `u`.
pub const INTERSECT_EPSILON: f64 = 1e-8;

/// Distance below which two points are considered numerically identical.
pub const POINT_EPSILON: f64 = 1e-9;

/// A point (or vector) in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        distance(*self, *other)
    }

    pub fn dot(&self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero vector.
    pub fn normalized(&self) -> Option<Point2D> {
        let len = self.length();
        if len < POINT_EPSILON {
            None
        } else {
            Some(Point2D::new(self.x / len, self.y / len))
        }
    }

    /// The vector rotated 90 degrees: `(-y, x)`.
    pub fn perpendicular(&self) -> Point2D {
        Point2D::new(-self.y, self.x)
    }

    pub fn approx_eq(&self, other: &Point2D, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
    Point2D::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Orthogonal projection of `p` onto segment `ab`, clamped to the segment.
///
/// A zero-length segment projects everything onto `a`.
pub fn project_onto_segment(p: Point2D, a: Point2D, b: Point2D) -> Point2D {
    let ab = b - a;
    let ab2 = ab.dot(ab);
    if ab2 == 0.0 {
        return a;
    }

    let t = ((p - a).dot(ab) / ab2).clamp(0.0, 1.0);
    a + ab * t
}

/// Intersection of the lines through `p1p2` and `q1q2`.
///
/// Returns `None` when the lines are parallel or coincident. With
/// `require_on_segments`, the intersection must also lie on both segments
/// (within [`INTERSECT_EPSILON`] of their parameter range); otherwise it may
/// fall anywhere on the infinite extensions.
pub fn segment_intersect(
    p1: Point2D,
    p2: Point2D,
    q1: Point2D,
    q2: Point2D,
    require_on_segments: bool,
) -> Option<Point2D> {
    let d1 = p2 - p1;
    let d2 = q2 - q1;

    let denom = d1.cross(d2);
    if denom.abs() < INTERSECT_EPSILON {
        return None;
    }

    let offset = q1 - p1;
    let t = offset.cross(d2) / denom;
    let u = offset.cross(d1) / denom;

    if require_on_segments {
        let range = -INTERSECT_EPSILON..=1.0 + INTERSECT_EPSILON;
        if !range.contains(&t) || !range.contains(&u) {
            return None;
        }
    }

    Some(p1 + d1 * t)
}

/// Ray-casting parity test over the closed ring `vertices`.
pub fn point_in_polygon(p: Point2D, vertices: &[Point2D]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if ((vi.y > p.y) != (vj.y > p.y))
            && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Arithmetic mean of the points, or `None` for an empty slice.
pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum = points.iter().fold(Point2D::ORIGIN, |acc, p| acc + *p);
    Some(Point2D::new(sum.x / n, sum.y / n))
}

/// Orders points by their angle about the centroid, ascending.
///
/// In screen coordinates (Y down) ascending `atan2` is clockwise. Ties keep
/// their input order. Only meaningful for point sets that are star-shaped
/// from their centroid.
pub fn order_clockwise(points: &[Point2D]) -> Vec<Point2D> {
    order_clockwise_by(points.to_vec(), |p| *p)
}

/// [`order_clockwise`] for arbitrary items carrying a location.
pub fn order_clockwise_by<T, F>(items: Vec<T>, location: F) -> Vec<T>
where
    F: Fn(&T) -> Point2D,
{
    let locations: Vec<Point2D> = items.iter().map(&location).collect();
    let Some(center) = centroid(&locations) else {
        return items;
    };

    let mut keyed: Vec<(f64, T)> = locations
        .iter()
        .zip(items)
        .map(|(p, item)| ((p.y - center.y).atan2(p.x - center.x), item))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Constrains `cursor` to the line through `origin` perpendicular to the
/// edge `edge_start -> edge_end`.
///
/// A zero-length edge has no perpendicular, so the cursor is returned as is.
pub fn project_perpendicular(
    origin: Point2D,
    cursor: Point2D,
    edge_start: Point2D,
    edge_end: Point2D,
) -> Point2D {
    let Some(edge_dir) = (edge_end - edge_start).normalized() else {
        return cursor;
    };
    let perp = edge_dir.perpendicular();
    let length = (cursor - origin).dot(perp);
    origin + perp * length
}

/// The closed edge list of a vertex ring, wrapping last to first.
pub fn polygon_edges(vertices: &[Point2D]) -> Vec<(Point2D, Point2D)> {
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| (vertices[i], vertices[(i + 1) % n]))
        .collect()
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use framekit_core::GeometryError;

use super::{MemberKind, Node, NodeId};
use crate::geometry::{distance, project_onto_segment, Point2D, POINT_EPSILON};

/// Registry-assigned member identifier, e.g. `R7` or `RB2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl MemberId {
    /// Builds the ID for the `sequence`th member of the given kind.
    pub fn for_kind(kind: MemberKind, sequence: u64) -> Self {
        MemberId(format!("{}{}", kind.id_prefix(), sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A structural member spanning two nodes.
///
/// Endpoints are canonical: columns run from the higher floor (`start`) to
/// the lower floor (`end`); every other kind runs from the endpoint with the
/// smaller X (then smaller Y) to the other. Endpoint geometry is captured at
/// construction; nodes never move, so it cannot go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub kind: MemberKind,
    pub start: NodeId,
    pub end: NodeId,
    start_point: Point2D,
    end_point: Point2D,
    start_floor: i32,
    end_floor: i32,
}

impl Member {
    /// Creates a member between two nodes, reordering them canonically.
    ///
    /// Fails with `InvalidMember` when a column's nodes share a floor or when
    /// any other member's endpoints coincide.
    pub fn new(id: MemberId, kind: MemberKind, a: &Node, b: &Node) -> Result<Self, GeometryError> {
        let (start, end) = if kind.is_vertical() {
            match a.floor.cmp(&b.floor) {
                Ordering::Equal => {
                    return Err(GeometryError::invalid_member(format!(
                        "{} {} has both ends on floor {}",
                        kind, id, a.floor
                    )));
                }
                Ordering::Greater => (a, b),
                Ordering::Less => (b, a),
            }
        } else {
            if a.location.approx_eq(&b.location, POINT_EPSILON) {
                return Err(GeometryError::invalid_member(format!(
                    "{} {} has coincident endpoints at ({}, {})",
                    kind, id, a.location.x, a.location.y
                )));
            }
            match canonical_order(a.location, b.location) {
                Ordering::Greater => (b, a),
                _ => (a, b),
            }
        };

        Ok(Self {
            id,
            kind,
            start: start.id.clone(),
            end: end.id.clone(),
            start_point: start.location,
            end_point: end.location,
            start_floor: start.floor,
            end_floor: end.floor,
        })
    }

    /// The member's floor: the start node's floor (the upper floor for columns).
    pub fn floor(&self) -> i32 {
        self.start_floor
    }

    /// `(start floor, end floor)`; differ only for columns.
    pub fn floors(&self) -> (i32, i32) {
        (self.start_floor, self.end_floor)
    }

    pub fn start_point(&self) -> Point2D {
        self.start_point
    }

    pub fn end_point(&self) -> Point2D {
        self.end_point
    }

    pub fn segment(&self) -> (Point2D, Point2D) {
        (self.start_point, self.end_point)
    }

    /// Plan length. Zero for columns.
    pub fn length(&self) -> f64 {
        distance(self.start_point, self.end_point)
    }

    pub fn connects(&self, node: &NodeId) -> bool {
        &self.start == node || &self.end == node
    }

    /// Whether `p` lies within `tolerance` of the member's centerline.
    pub fn contains_point(&self, p: Point2D, tolerance: f64) -> bool {
        let proj = project_onto_segment(p, self.start_point, self.end_point);
        distance(p, proj) <= tolerance
    }
}

// Ascending X, then ascending Y
fn canonical_order(a: Point2D, b: Point2D) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

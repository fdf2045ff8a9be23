use lyon::math::point;
use lyon::path::Path;
use serde::Serialize;
use std::fmt;

use super::{Node, NodeId};
use crate::geometry::{point_in_polygon, polygon_edges, Point2D};

/// Registry-assigned region identifier, e.g. `r3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionId(pub String);

impl RegionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A closed, clockwise-ordered polygon on one floor.
///
/// Regions are only produced by [`crate::polygon::build_region`] and never
/// change afterwards, so the vertex ring is exposed read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    id: RegionId,
    vertices: Vec<Point2D>,
    floor: i32,
}

impl Region {
    pub(crate) fn from_ring(id: RegionId, vertices: Vec<Point2D>, floor: i32) -> Self {
        Self {
            id,
            vertices,
            floor,
        }
    }

    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    /// Boundary edges, including the closing edge from last to first vertex.
    pub fn edges(&self) -> Vec<(Point2D, Point2D)> {
        polygon_edges(&self.vertices)
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.vertices.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), v| {
                (min_x.min(v.x), min_y.min(v.y), max_x.max(v.x), max_y.max(v.y))
            },
        )
    }

    /// Ray-casting containment over the vertex ring.
    pub fn contains(&self, p: Point2D) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// The region outline as a closed lyon path.
    pub fn to_path(&self) -> Path {
        self.to_path_relative_to(Point2D::new(0.0, 0.0))
    }

    /// The outline translated so that `origin` maps to zero.
    ///
    /// lyon stores f32 coordinates. Subtracting in f64 first keeps the
    /// outline precise when the region sits far from the drawing origin.
    pub fn to_path_relative_to(&self, origin: Point2D) -> Path {
        let local = |v: &Point2D| point((v.x - origin.x) as f32, (v.y - origin.y) as f32);
        let mut builder = Path::builder();
        let mut iter = self.vertices.iter();
        if let Some(first) = iter.next() {
            builder.begin(local(first));
            for v in iter {
                builder.line_to(local(v));
            }
            builder.close();
        }
        builder.build()
    }
}

/// Vertices picked so far for a region that does not exist yet.
///
/// Nodes are kept in arrival order and de-duplicated by identity, not by
/// location.
#[derive(Debug, Clone, Default)]
pub struct PreviewPolygon {
    nodes: Vec<Node>,
}

impl PreviewPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node. Returns `false` if the same node was already picked.
    pub fn push(&mut self, node: Node) -> bool {
        if self.contains_node(&node.id) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Picked locations in arrival order.
    pub fn points(&self) -> Vec<Point2D> {
        self.nodes.iter().map(|n| n.location).collect()
    }

    /// Outline to draw while picking: the picked points with the first one
    /// repeated at the end once there are at least two.
    pub fn ring(&self) -> Vec<Point2D> {
        let mut ring = self.points();
        if ring.len() >= 2 {
            ring.push(ring[0]);
        }
        ring
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

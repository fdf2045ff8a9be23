use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Point2D;

/// Registry-assigned node identifier, e.g. `N12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A located connection point on one floor.
///
/// Nodes are compared by [`NodeId`] only. Two nodes at the same location are
/// still distinct entities; proximity matching goes through
/// [`crate::query::nearest_node`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub location: Point2D,
    pub floor: i32,
}

impl Node {
    pub fn new(id: NodeId, location: Point2D, floor: i32) -> Self {
        Self {
            id,
            location,
            floor,
        }
    }
}

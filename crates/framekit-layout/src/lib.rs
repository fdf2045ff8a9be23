//! # FrameKit Layout
//!
//! The 2D structural-layout geometry engine. It turns picked points into
//! closed regions, fills regions with evenly spaced parallel members and
//! answers the spatial queries used to snap clicks and choose reference
//! edges.
//!
//! ## Components
//!
//! ```text
//! geometry   Point2D, projection, intersection, containment, ordering
//!   ├── polygon    picked vertices -> clockwise Region
//!   ├── query      nearest node / member, region under a point
//!   └── layout     candidate lines in a local frame
//!         └── clipper   trim candidates to the region boundary
//!
//! registry   nodes, members, regions, adjacency, ID sequences
//!   └── session    click-driven drafting workflow
//! ```
//!
//! All engine lengths are in inches on a single plane; the floor is an
//! integer attribute of nodes and regions, not a coordinate.
//!
//! ## Usage
//!
//! ```rust
//! use framekit_layout::{generate, AlignmentPolicy, Point2D};
//! use framekit_layout::polygon::build_region_from_points;
//! use framekit_core::CounterSequence;
//!
//! let mut ids = CounterSequence::new();
//! let square = [
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(96.0, 0.0),
//!     Point2D::new(96.0, 96.0),
//!     Point2D::new(0.0, 96.0),
//! ];
//! let region = build_region_from_points(&square, 0, &mut ids).unwrap();
//! let rafters = generate(&region, 16.0, AlignmentPolicy::Vertical).unwrap();
//! assert_eq!(rafters.len(), 7);
//! ```

pub mod clipper;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod polygon;
pub mod query;
pub mod registry;
pub mod session;

pub use clipper::{trim, trim_with, ClipPolicy};
pub use geometry::Point2D;
pub use layout::{
    candidate_lines, generate, generate_with, AlignmentMode, AlignmentPolicy, Centerline,
    MAX_CANDIDATE_LINES,
};
pub use model::{Member, MemberId, MemberKind, Node, NodeId, PreviewPolygon, Region, RegionId};
pub use polygon::{build_region, build_region_from_points};
pub use registry::Registry;
pub use session::{DraftingSession, SessionSettings};

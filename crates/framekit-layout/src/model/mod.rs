//! Structural entities: nodes, members, regions and member kinds.

mod kind;
mod member;
mod node;
mod region;

pub use kind::MemberKind;
pub use member::{Member, MemberId};
pub use node::{Node, NodeId};
pub use region::{PreviewPolygon, Region, RegionId};

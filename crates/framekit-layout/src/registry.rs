//! Member/node registry.
//!
//! Owns every node, member and region of a drawing, assigns their IDs from
//! injected sequences and tracks which members meet at each node.

use std::collections::HashMap;

use framekit_core::{CounterSequence, IdSequence, RegistryError, Result};

use crate::geometry::Point2D;
use crate::model::{Member, MemberId, MemberKind, Node, NodeId, Region, RegionId};
use crate::polygon::build_region;

#[derive(Debug)]
pub struct Registry {
    nodes: Vec<Node>,
    members: Vec<Member>,
    regions: Vec<Region>,
    node_index: HashMap<NodeId, usize>,
    member_index: HashMap<MemberId, usize>,
    adjacency: HashMap<NodeId, Vec<MemberId>>,
    node_ids: Box<dyn IdSequence>,
    member_ids: Box<dyn IdSequence>,
    region_ids: Box<dyn IdSequence>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry with counters starting at 1.
    pub fn new() -> Self {
        Self::with_sequences(
            Box::new(CounterSequence::new()),
            Box::new(CounterSequence::new()),
            Box::new(CounterSequence::new()),
        )
    }

    /// Creates an empty registry drawing IDs from the given sequences.
    pub fn with_sequences(
        node_ids: Box<dyn IdSequence>,
        member_ids: Box<dyn IdSequence>,
        region_ids: Box<dyn IdSequence>,
    ) -> Self {
        Self {
            nodes: Vec::new(),
            members: Vec::new(),
            regions: Vec::new(),
            node_index: HashMap::new(),
            member_index: HashMap::new(),
            adjacency: HashMap::new(),
            node_ids,
            member_ids,
            region_ids,
        }
    }

    pub fn add_node(&mut self, location: Point2D, floor: i32) -> NodeId {
        let id = NodeId(format!("N{}", self.node_ids.next_id()));
        tracing::debug!(node = %id, x = location.x, y = location.y, floor, "Added node");
        self.node_index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node::new(id.clone(), location, floor));
        id
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_on_floor(&self, floor: i32) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.floor == floor)
    }

    fn require_node(&self, id: &NodeId) -> Result<&Node> {
        self.node(id).ok_or_else(|| {
            RegistryError::NodeNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Adds a member between two registered nodes.
    ///
    /// The member number is consumed only when the member is accepted.
    pub fn add_member(&mut self, kind: MemberKind, start: &NodeId, end: &NodeId) -> Result<MemberId> {
        let a = self.require_node(start)?;
        let b = self.require_node(end)?;

        let id = MemberId::for_kind(kind, self.member_ids.peek());
        let member = Member::new(id.clone(), kind, a, b)?;
        self.member_ids.next_id();

        tracing::debug!(member = %id, %kind, start = %member.start, end = %member.end, "Added member");
        for node in [&member.start, &member.end] {
            self.adjacency
                .entry(node.clone())
                .or_default()
                .push(id.clone());
        }
        self.member_index.insert(id.clone(), self.members.len());
        self.members.push(member);
        Ok(id)
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.member_index.get(id).map(|&i| &self.members[i])
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn members_on_floor(&self, floor: i32) -> impl Iterator<Item = &Member> + '_ {
        self.members.iter().filter(move |m| m.floor() == floor)
    }

    /// Members that start or end at `node`, in insertion order.
    pub fn connected_members(&self, node: &NodeId) -> &[MemberId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Builds and stores a region from registered nodes.
    pub fn add_region(&mut self, node_ids: &[NodeId]) -> Result<RegionId> {
        let nodes = node_ids
            .iter()
            .map(|id| self.require_node(id).cloned())
            .collect::<Result<Vec<Node>>>()?;

        let region = build_region(&nodes, self.region_ids.as_mut())?;
        let id = region.id().clone();
        tracing::info!(region = %id, floor = region.floor(), vertices = region.vertices().len(), "Added region");
        self.regions.push(region);
        Ok(id)
    }

    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id() == id)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn regions_on_floor(&self, floor: i32) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(move |r| r.floor() == floor)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.members.is_empty() && self.regions.is_empty()
    }

    /// Discards every entity. ID sequences keep counting, so IDs are never
    /// reused within a registry's lifetime.
    pub fn clear(&mut self) {
        tracing::info!(
            nodes = self.nodes.len(),
            members = self.members.len(),
            regions = self.regions.len(),
            "Clearing registry"
        );
        self.nodes.clear();
        self.members.clear();
        self.regions.clear();
        self.node_index.clear();
        self.member_index.clear();
        self.adjacency.clear();
    }

    /// Discards every entity and rewinds the ID sequences.
    pub fn reset(&mut self) {
        self.clear();
        self.node_ids.reset();
        self.member_ids.reset();
        self.region_ids.reset();
    }
}

//! Drafting session.
//!
//! The click-driven workflow of the drafting tool without any UI: each
//! click is snapped to a node, accumulated into a pending member or a
//! preview polygon, and finally registered. Layout clicks pick a reference
//! edge and a region, generate centerlines and register one member per line.

use framekit_core::{Result, SessionError};

use crate::clipper::ClipPolicy;
use crate::geometry::Point2D;
use crate::layout::{generate_with, AlignmentMode};
use crate::model::{MemberId, MemberKind, NodeId, PreviewPolygon, RegionId};
use crate::query::{nearest_node, nearest_point_on_any_member, region_containing};
use crate::registry::Registry;

/// Tolerances and presets fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Max distance at which a click reuses an existing node.
    pub snap_tolerance: f64,
    pub rafter_spacing: f64,
    pub joist_spacing: f64,
    /// Picked vertices that complete a region automatically.
    pub region_vertex_threshold: usize,
    pub alignment: AlignmentMode,
    pub clip_policy: ClipPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            snap_tolerance: 15.0,
            rafter_spacing: 16.0,
            joist_spacing: 24.0,
            region_vertex_threshold: 4,
            alignment: AlignmentMode::default(),
            clip_policy: ClipPolicy::default(),
        }
    }
}

impl SessionSettings {
    /// Layout spacing for a kind: the rafter preset for rafters, the joist
    /// preset for everything else.
    pub fn spacing_for(&self, kind: MemberKind) -> f64 {
        match kind {
            MemberKind::Rafter => self.rafter_spacing,
            _ => self.joist_spacing,
        }
    }
}

#[derive(Debug)]
pub struct DraftingSession {
    settings: SessionSettings,
    registry: Registry,
    floor: i32,
    pending_start: Option<NodeId>,
    preview: PreviewPolygon,
}

impl Default for DraftingSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl DraftingSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_registry(settings, Registry::new())
    }

    pub fn with_registry(settings: SessionSettings, registry: Registry) -> Self {
        Self {
            settings,
            registry,
            floor: 0,
            pending_start: None,
            preview: PreviewPolygon::new(),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Switches the active floor. Half-finished members and regions belong
    /// to the old floor and are discarded.
    pub fn set_floor(&mut self, floor: i32) {
        if floor != self.floor {
            tracing::debug!(from = self.floor, to = floor, "Changing floor");
            self.pending_start = None;
            self.preview.clear();
        }
        self.floor = floor;
    }

    pub fn current_floor(&self) -> i32 {
        self.floor
    }

    pub fn pending_start(&self) -> Option<&NodeId> {
        self.pending_start.as_ref()
    }

    pub fn cancel_pending(&mut self) {
        self.pending_start = None;
    }

    pub fn preview(&self) -> &PreviewPolygon {
        &self.preview
    }

    /// Snaps `p` to a node on the current floor, creating one if none is
    /// within the snap tolerance.
    pub fn resolve_node(&mut self, p: Point2D) -> NodeId {
        self.resolve_node_on(p, self.floor)
    }

    fn resolve_node_on(&mut self, p: Point2D, floor: i32) -> NodeId {
        match nearest_node(p, self.registry.nodes(), floor, self.settings.snap_tolerance) {
            Some(node) => node.id.clone(),
            None => self.registry.add_node(p, floor),
        }
    }

    /// Two-click member placement. The first click records a pending start
    /// node and returns `None`; the second registers the member. Columns are
    /// placed with a single click via [`DraftingSession::add_column`].
    pub fn click_member(&mut self, p: Point2D, kind: MemberKind) -> Result<Option<MemberId>> {
        if kind.is_vertical() {
            return self.add_column(p).map(Some);
        }

        let node = self.resolve_node(p);
        match self.pending_start.take() {
            None => {
                tracing::debug!(node = %node, %kind, "Member start picked");
                self.pending_start = Some(node);
                Ok(None)
            }
            Some(start) => {
                let id = self.registry.add_member(kind, &start, &node)?;
                Ok(Some(id))
            }
        }
    }

    /// Places a column from the current floor down to the floor below.
    pub fn add_column(&mut self, p: Point2D) -> Result<MemberId> {
        if self.floor <= 0 {
            return Err(SessionError::NoFloorBelow { floor: self.floor }.into());
        }

        let top = self.resolve_node_on(p, self.floor);
        let bottom = self.resolve_node_on(p, self.floor - 1);
        self.registry.add_member(MemberKind::Column, &top, &bottom)
    }

    /// Adds a vertex to the preview polygon. Once the vertex threshold is
    /// reached the region is built and its ID returned.
    pub fn pick_region_vertex(&mut self, p: Point2D) -> Result<Option<RegionId>> {
        let id = self.resolve_node(p);
        if let Some(node) = self.registry.node(&id) {
            if !self.preview.push(node.clone()) {
                tracing::debug!(node = %id, "Vertex already picked");
            }
        }

        if self.preview.len() >= self.settings.region_vertex_threshold {
            self.finish_region().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Builds a region from the vertices picked so far and resets the
    /// preview. Needs at least three vertices.
    pub fn finish_region(&mut self) -> Result<RegionId> {
        if self.preview.len() < 3 {
            return Err(SessionError::NotEnoughVertices {
                picked: self.preview.len(),
            }
            .into());
        }

        let ids: Vec<NodeId> = self.preview.nodes().iter().map(|n| n.id.clone()).collect();
        self.preview.clear();
        self.registry.add_region(&ids)
    }

    /// Lays out members of `kind` across the region under `p`, spaced by the
    /// preset for that kind.
    pub fn lay_out_members(&mut self, p: Point2D, kind: MemberKind) -> Result<Vec<MemberId>> {
        let spacing = self.settings.spacing_for(kind);
        self.lay_out_members_with_spacing(p, kind, spacing)
    }

    /// Lays out members of `kind` across the region under `p`.
    ///
    /// The member nearest `p` on the current floor is the reference edge for
    /// edge-aligned modes; columns have no plan direction and are ignored.
    /// Each centerline gets two new nodes so members land exactly where
    /// [`generate_with`] put them.
    pub fn lay_out_members_with_spacing(
        &mut self,
        p: Point2D,
        kind: MemberKind,
        spacing: f64,
    ) -> Result<Vec<MemberId>> {
        let floor = self.floor;
        let mode = self.settings.alignment;

        let in_plan = self
            .registry
            .members_on_floor(floor)
            .filter(|m| !m.kind.is_vertical());
        let edge = nearest_point_on_any_member(p, in_plan).map(|(_, member)| member.segment());
        let policy = mode
            .with_edge(edge)
            .ok_or(SessionError::NoReferenceEdge { floor })?;

        let region = region_containing(p, self.registry.regions_on_floor(floor)).ok_or(
            SessionError::NoRegionAtPoint {
                x: p.x,
                y: p.y,
                floor,
            },
        )?;
        let region_id = region.id().clone();
        let lines = generate_with(region, spacing, policy, self.settings.clip_policy)?;

        let mut created = Vec::with_capacity(lines.len());
        for (a, b) in lines {
            let start = self.registry.add_node(a, floor);
            let end = self.registry.add_node(b, floor);
            created.push(self.registry.add_member(kind, &start, &end)?);
        }

        tracing::info!(
            region = %region_id,
            %kind,
            %mode,
            spacing,
            members = created.len(),
            "Laid out members"
        );
        Ok(created)
    }

    /// Discards all entities and any half-finished input.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.pending_start = None;
        self.preview.clear();
    }
}

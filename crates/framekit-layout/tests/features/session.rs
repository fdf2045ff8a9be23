use framekit_core::{Error, SessionError};
use framekit_layout::geometry::Point2D;
use framekit_layout::{
    generate, AlignmentMode, AlignmentPolicy, Centerline, DraftingSession, MemberId, MemberKind,
    Registry, SessionSettings,
};

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

const ROOF: [(f64, f64); 4] = [(50.0, 50.0), (300.0, 400.0), (480.0, 175.0), (220.0, 25.0)];

fn session_with(alignment: AlignmentMode) -> DraftingSession {
    DraftingSession::new(SessionSettings {
        alignment,
        ..SessionSettings::default()
    })
}

fn draw_square(session: &mut DraftingSession, size: f64) {
    for pick in [p(0.0, 0.0), p(size, 0.0), p(size, size), p(0.0, size)] {
        session.pick_region_vertex(pick).unwrap();
    }
}

fn same_point(a: Point2D, b: Point2D) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

/// Each member spans exactly its centerline, in either direction.
fn assert_members_follow(session: &DraftingSession, ids: &[MemberId], lines: &[Centerline]) {
    assert_eq!(ids.len(), lines.len());
    for (id, &(a, b)) in ids.iter().zip(lines) {
        let (s, e) = session.registry().member(id).unwrap().segment();
        assert!(
            (same_point(s, a) && same_point(e, b)) || (same_point(s, b) && same_point(e, a)),
            "{} spans {:?}-{:?}, expected {:?}-{:?}",
            id,
            s,
            e,
            a,
            b
        );
    }
}

fn draw_roof(session: &mut DraftingSession) {
    for (x, y) in ROOF {
        session.pick_region_vertex(p(x, y)).unwrap();
    }
    for i in 0..ROOF.len() {
        let (x1, y1) = ROOF[i];
        let (x2, y2) = ROOF[(i + 1) % ROOF.len()];
        assert!(session.click_member(p(x1, y1), MemberKind::Beam).unwrap().is_none());
        assert!(session.click_member(p(x2, y2), MemberKind::Beam).unwrap().is_some());
    }
}

#[test]
fn test_two_click_beam() {
    let mut session = DraftingSession::default();
    assert_eq!(session.click_member(p(0.0, 0.0), MemberKind::Beam).unwrap(), None);
    assert!(session.pending_start().is_some());

    let id = session
        .click_member(p(120.0, 4.0), MemberKind::Beam)
        .unwrap()
        .unwrap();
    assert_eq!(id.as_str(), "B1");
    assert!(session.pending_start().is_none());

    // Third click starts a new member at the snapped end node
    assert_eq!(session.click_member(p(125.0, 0.0), MemberKind::Purlin).unwrap(), None);
    session.click_member(p(120.0, 200.0), MemberKind::Purlin).unwrap();
    assert_eq!(session.registry().nodes().len(), 3);
}

#[test]
fn test_second_click_on_start_node_is_rejected() {
    let mut session = DraftingSession::default();
    session.click_member(p(10.0, 10.0), MemberKind::Beam).unwrap();
    let err = session.click_member(p(14.0, 12.0), MemberKind::Beam).unwrap_err();
    assert!(err.is_invalid_member());
    assert!(session.pending_start().is_none());
    assert!(session.registry().members().is_empty());
}

#[test]
fn test_column_needs_floor_below() {
    let mut session = DraftingSession::default();
    let err = session.add_column(p(10.0, 10.0)).unwrap_err();
    assert!(matches!(
        err,
        Error::Session(SessionError::NoFloorBelow { floor: 0 })
    ));
    assert!(session.registry().nodes().is_empty());
}

#[test]
fn test_column_spans_current_and_lower_floor() {
    let mut session = DraftingSession::default();
    let base = session.resolve_node(p(100.0, 100.0));

    session.set_floor(1);
    let id = session
        .click_member(p(104.0, 97.0), MemberKind::Column)
        .unwrap()
        .unwrap();

    let column = session.registry().member(&id).unwrap();
    assert_eq!(column.floors(), (1, 0));
    assert_eq!(column.end, base);
    assert_eq!(session.registry().connected_members(&base), &[id.clone()]);
}

#[test]
fn test_region_built_at_vertex_threshold() {
    let mut session = DraftingSession::default();
    let picks = [p(0.0, 0.0), p(96.0, 0.0), p(96.0, 96.0)];
    for pick in picks {
        assert_eq!(session.pick_region_vertex(pick).unwrap(), None);
    }
    // Re-picking a vertex does not count towards the threshold
    assert_eq!(session.pick_region_vertex(p(2.0, 1.0)).unwrap(), None);
    assert_eq!(session.preview().len(), 3);

    let region = session.pick_region_vertex(p(0.0, 96.0)).unwrap().unwrap();
    assert_eq!(region.as_str(), "r1");
    assert!(session.preview().is_empty());
    assert_eq!(session.registry().regions().len(), 1);
}

#[test]
fn test_finish_region_early() {
    let mut session = DraftingSession::default();
    for pick in [p(0.0, 0.0), p(96.0, 0.0), p(48.0, 80.0)] {
        session.pick_region_vertex(pick).unwrap();
    }
    let region = session.finish_region().unwrap();
    let region = session.registry().region(&region).unwrap();
    assert_eq!(region.vertices().len(), 3);
}

#[test]
fn test_perpendicular_layout_on_roof() {
    let mut session = session_with(AlignmentMode::PerpendicularToEdge);
    draw_roof(&mut session);
    let beams = session.registry().members().len();

    let rafters = session
        .lay_out_members(p(150.0, 60.0), MemberKind::Rafter)
        .unwrap();
    assert!(rafters.len() > 10);

    let registry = session.registry();
    assert_eq!(registry.members().len(), beams + rafters.len());
    for id in &rafters {
        let member = registry.member(id).unwrap();
        assert_eq!(member.kind, MemberKind::Rafter);
        assert_eq!(member.floor(), 0);
        assert!(member.length() > 0.0);
    }
}

#[test]
fn test_horizontal_layout_needs_no_reference() {
    let mut session = session_with(AlignmentMode::Horizontal);
    for pick in [p(0.0, 0.0), p(96.0, 0.0), p(96.0, 96.0), p(0.0, 96.0)] {
        session.pick_region_vertex(pick).unwrap();
    }

    let joists = session
        .lay_out_members(p(48.0, 48.0), MemberKind::FloorJoist)
        .unwrap();
    assert_eq!(joists.len(), 5);
    assert_eq!(joists[0].as_str(), "J1");
    // Four corners plus two fresh nodes per line, boundary lines included
    assert_eq!(session.registry().nodes().len(), 14);
}

#[test]
fn test_edge_layout_without_members_fails() {
    let mut session = session_with(AlignmentMode::ParallelToEdge);
    for pick in [p(0.0, 0.0), p(96.0, 0.0), p(96.0, 96.0), p(0.0, 96.0)] {
        session.pick_region_vertex(pick).unwrap();
    }
    let err = session
        .lay_out_members(p(48.0, 48.0), MemberKind::Rafter)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Session(SessionError::NoReferenceEdge { floor: 0 })
    ));
}

#[test]
fn test_layout_outside_any_region_fails() {
    let mut session = session_with(AlignmentMode::PerpendicularToEdge);
    draw_roof(&mut session);
    let err = session
        .lay_out_members(p(900.0, 900.0), MemberKind::Rafter)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Session(SessionError::NoRegionAtPoint { floor: 0, .. })
    ));

    // Regions are floor-scoped
    session.set_floor(1);
    assert!(session.lay_out_members(p(150.0, 60.0), MemberKind::Rafter).is_err());
}

#[test]
fn test_narrow_region_keeps_every_line() {
    let mut registry = Registry::new();
    let corners: Vec<_> = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 100.0), p(0.0, 100.0)]
        .into_iter()
        .map(|pt| registry.add_node(pt, 0))
        .collect();
    registry.add_region(&corners).unwrap();

    let settings = SessionSettings {
        alignment: AlignmentMode::Horizontal,
        ..SessionSettings::default()
    };
    let mut session = DraftingSession::with_registry(settings, registry);

    // Both ends of every line sit within the snap tolerance of each other
    let joists = session
        .lay_out_members(p(5.0, 50.0), MemberKind::CeilingJoist)
        .unwrap();
    let region = &session.registry().regions()[0];
    let lines = generate(region, 24.0, AlignmentPolicy::Horizontal).unwrap();
    assert_eq!(lines.len(), 5);
    assert_members_follow(&session, &joists, &lines);
    assert_eq!(session.registry().nodes().len(), 4 + 2 * lines.len());
}

#[test]
fn test_layout_members_match_generated_lines() {
    let mut session = session_with(AlignmentMode::Vertical);
    draw_square(&mut session, 100.0);

    let rafters = session
        .lay_out_members(p(50.0, 50.0), MemberKind::Rafter)
        .unwrap();
    let region = &session.registry().regions()[0];
    let lines = generate(region, 16.0, AlignmentPolicy::Vertical).unwrap();
    assert_members_follow(&session, &rafters, &lines);

    // Outer rafters stay 2 inches in from the walls
    let mut xs: Vec<f64> = rafters
        .iter()
        .map(|id| session.registry().member(id).unwrap().start_point().x)
        .collect();
    xs.sort_by(f64::total_cmp);
    assert!((xs[0] - 2.0).abs() < 1e-9);
    assert!((xs[xs.len() - 1] - 98.0).abs() < 1e-9);
}

#[test]
fn test_spacing_below_snap_tolerance() {
    let mut session = session_with(AlignmentMode::Vertical);
    draw_square(&mut session, 96.0);

    let rafters = session
        .lay_out_members_with_spacing(p(48.0, 48.0), MemberKind::Rafter, 12.0)
        .unwrap();
    let region = &session.registry().regions()[0];
    let lines = generate(region, 12.0, AlignmentPolicy::Vertical).unwrap();
    assert_members_follow(&session, &rafters, &lines);

    let mut xs: Vec<f64> = rafters
        .iter()
        .map(|id| session.registry().member(id).unwrap().start_point().x)
        .collect();
    xs.sort_by(f64::total_cmp);
    let expected: Vec<f64> = (0..=8).map(|i| i as f64 * 12.0).collect();
    assert_eq!(xs.len(), expected.len());
    for (x, e) in xs.iter().zip(&expected) {
        assert!((x - e).abs() < 1e-9, "x = {}, expected {}", x, e);
    }
}

#[test]
fn test_columns_are_not_reference_edges() {
    let mut session = session_with(AlignmentMode::PerpendicularToEdge);
    session.set_floor(1);
    draw_square(&mut session, 200.0);
    session.click_member(p(0.0, 0.0), MemberKind::Beam).unwrap();
    session.click_member(p(200.0, 0.0), MemberKind::Beam).unwrap();
    session.add_column(p(100.0, 100.0)).unwrap();

    let rafters = session
        .lay_out_members(p(105.0, 100.0), MemberKind::Rafter)
        .unwrap();
    assert_eq!(rafters.len(), 13);
    for id in &rafters {
        let (a, b) = session.registry().member(id).unwrap().segment();
        // Perpendicular to the beam along y = 0
        assert!((a.x - b.x).abs() < 1e-9);
        assert!(((a.y - b.y).abs() - 200.0).abs() < 1e-9);
    }
}

#[test]
fn test_spacing_override() {
    let mut session = session_with(AlignmentMode::Vertical);
    for pick in [p(0.0, 0.0), p(96.0, 0.0), p(96.0, 96.0), p(0.0, 96.0)] {
        session.pick_region_vertex(pick).unwrap();
    }
    let studs = session
        .lay_out_members_with_spacing(p(48.0, 48.0), MemberKind::Wall, 48.0)
        .unwrap();
    assert_eq!(studs.len(), 3);
    assert!(session
        .lay_out_members_with_spacing(p(48.0, 48.0), MemberKind::Wall, 0.0)
        .unwrap_err()
        .is_geometry_error());
}

#[test]
fn test_clear_discards_everything() {
    let mut session = DraftingSession::default();
    session.click_member(p(0.0, 0.0), MemberKind::Beam).unwrap();
    session.pick_region_vertex(p(200.0, 200.0)).unwrap();
    session.clear();

    assert!(session.registry().is_empty());
    assert!(session.pending_start().is_none());
    assert!(session.preview().is_empty());
}

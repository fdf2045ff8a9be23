use framekit_core::CounterSequence;
use framekit_layout::geometry::Point2D;
use framekit_layout::{MemberKind, NodeId, Registry};

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

#[test]
fn test_member_counter_shared_across_kinds() {
    let mut reg = Registry::new();
    let a = reg.add_node(p(0.0, 0.0), 1);
    let b = reg.add_node(p(50.0, 0.0), 1);
    let c = reg.add_node(p(50.0, 0.0), 0);

    let ids: Vec<String> = [
        reg.add_member(MemberKind::Beam, &a, &b).unwrap(),
        reg.add_member(MemberKind::Column, &c, &b).unwrap(),
        reg.add_member(MemberKind::CeilingJoist, &b, &a).unwrap(),
        reg.add_member(MemberKind::RoofBrace, &a, &b).unwrap(),
    ]
    .iter()
    .map(|id| id.to_string())
    .collect();
    assert_eq!(ids, vec!["B1", "C2", "J3", "RB4"]);
}

#[test]
fn test_column_floor_ordering_through_registry() {
    let mut reg = Registry::new();
    let low = reg.add_node(p(20.0, 20.0), 0);
    let high = reg.add_node(p(20.0, 20.0), 2);

    let id = reg.add_member(MemberKind::Column, &low, &high).unwrap();
    let column = reg.member(&id).unwrap();
    assert_eq!(column.start, high);
    assert_eq!(column.end, low);
    assert_eq!(column.floors(), (2, 0));
    assert_eq!(reg.members_on_floor(2).count(), 1);
    assert_eq!(reg.members_on_floor(0).count(), 0);
}

#[test]
fn test_region_from_registered_nodes() {
    let mut reg = Registry::new();
    let ids: Vec<NodeId> = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]
        .into_iter()
        .map(|pt| reg.add_node(pt, 3))
        .collect();

    let region = reg.add_region(&ids).unwrap();
    assert_eq!(region.as_str(), "r1");
    assert_eq!(reg.regions_on_floor(3).count(), 1);
    assert_eq!(reg.region(&region).unwrap().vertices().len(), 3);
}

#[test]
fn test_region_with_unknown_node() {
    let mut reg = Registry::new();
    let a = reg.add_node(p(0.0, 0.0), 0);
    let b = reg.add_node(p(10.0, 0.0), 0);
    let err = reg
        .add_region(&[a, b, NodeId("N9".into())])
        .unwrap_err();
    assert!(err.is_registry_error());
    assert!(reg.regions().is_empty());
}

#[test]
fn test_degenerate_region_surfaces_geometry_error() {
    let mut reg = Registry::new();
    let a = reg.add_node(p(0.0, 0.0), 0);
    let b = reg.add_node(p(10.0, 0.0), 0);
    let c = reg.add_node(p(10.0, 0.0), 0);
    let err = reg.add_region(&[a, b, c]).unwrap_err();
    assert!(err.is_invalid_region());
}

#[test]
fn test_injected_sequences() {
    let mut reg = Registry::with_sequences(
        Box::new(CounterSequence::starting_at(100)),
        Box::new(CounterSequence::starting_at(7)),
        Box::new(CounterSequence::new()),
    );
    let a = reg.add_node(p(0.0, 0.0), 0);
    let b = reg.add_node(p(1.0, 0.0), 0);
    assert_eq!(a.as_str(), "N100");
    assert_eq!(reg.add_member(MemberKind::Wall, &a, &b).unwrap().as_str(), "W7");
}

#[test]
fn test_missing_member_lookup() {
    let reg = Registry::new();
    assert!(reg.member(&framekit_layout::MemberId("B1".into())).is_none());
    assert!(reg.node(&NodeId("N1".into())).is_none());
}

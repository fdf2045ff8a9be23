use framekit_layout::geometry::{
    centroid, midpoint, order_clockwise, point_in_polygon, project_onto_segment,
    segment_intersect, Point2D,
};

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

#[test]
fn test_point_arithmetic() {
    let a = p(3.0, 4.0);
    let b = p(1.0, -2.0);
    assert_eq!(a + b, p(4.0, 2.0));
    assert_eq!(a - b, p(2.0, 6.0));
    assert_eq!(a * 2.0, p(6.0, 8.0));
    assert_eq!(-a, p(-3.0, -4.0));
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.dot(b), -5.0);
    assert_eq!(a.cross(b), -10.0);
    assert_eq!(p(0.0, 0.0).normalized(), None);
    assert_eq!(midpoint(a, b), p(2.0, 1.0));
}

#[test]
fn test_intersection_of_crossing_diagonals() {
    let hit = segment_intersect(p(0.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(4.0, 0.0), true).unwrap();
    assert!(hit.approx_eq(&p(2.0, 2.0), 1e-9));
}

#[test]
fn test_collinear_overlap_is_none() {
    // Collinear segments have a zero determinant, never an error
    assert_eq!(
        segment_intersect(p(0.0, 0.0), p(10.0, 10.0), p(5.0, 5.0), p(15.0, 15.0), true),
        None
    );
}

#[test]
fn test_near_miss_respects_epsilon() {
    // Ends 1e-3 short of the crossing line
    let a = p(0.0, 0.0);
    let b = p(4.999, 0.0);
    assert!(segment_intersect(a, b, p(5.0, -1.0), p(5.0, 1.0), true).is_none());
    assert!(segment_intersect(a, b, p(5.0, -1.0), p(5.0, 1.0), false).is_some());
}

#[test]
fn test_projection_onto_diagonal() {
    let proj = project_onto_segment(p(0.0, 10.0), p(0.0, 0.0), p(10.0, 10.0));
    assert!(proj.approx_eq(&p(5.0, 5.0), 1e-9));
}

#[test]
fn test_point_in_concave_polygon() {
    // U shape opening upwards in screen space
    let u = [
        p(0.0, 0.0),
        p(30.0, 0.0),
        p(30.0, 30.0),
        p(20.0, 30.0),
        p(20.0, 10.0),
        p(10.0, 10.0),
        p(10.0, 30.0),
        p(0.0, 30.0),
    ];
    assert!(point_in_polygon(p(5.0, 20.0), &u));
    assert!(point_in_polygon(p(25.0, 20.0), &u));
    assert!(!point_in_polygon(p(15.0, 20.0), &u));
    assert!(point_in_polygon(p(15.0, 5.0), &u));
}

#[test]
fn test_order_clockwise_is_idempotent() {
    let roof = [p(50.0, 50.0), p(300.0, 400.0), p(480.0, 175.0), p(220.0, 25.0)];
    let once = order_clockwise(&roof);
    let twice = order_clockwise(&once);
    assert_eq!(once, twice);
    assert_eq!(
        once,
        vec![p(50.0, 50.0), p(220.0, 25.0), p(480.0, 175.0), p(300.0, 400.0)]
    );
}

#[test]
fn test_centroid() {
    assert_eq!(centroid(&[]), None);
    assert_eq!(
        centroid(&[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 2.0), p(0.0, 2.0)]),
        Some(p(2.0, 1.0))
    );
}

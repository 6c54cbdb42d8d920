use strut_core::traits::{BoundingBox, Reversible};
use strut_core::{StrutError, Tolerance};
use strut_geometry::{Curve, Line, Polygon, Polyline, TransformCurves};
use strut_math::{DVec3, Plane, Point3, Transform, Vector3, VectorExt};

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

fn assert_near(actual: Point3, expected: Point3) {
    assert!(
        actual.is_almost_equal_within(expected, Tolerance::loose()),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_segment_parameterization() {
    let start = dvec3(1.0, -2.0, 0.5);
    let end = dvec3(-3.0, 4.0, 2.5);
    let line = Line::new(start, end).unwrap();

    assert_eq!(line.point_at(0.0).unwrap(), start);
    assert_eq!(line.point_at(1.0).unwrap(), end);
    assert_near(line.point_at(0.5).unwrap(), (start + end) * 0.5);
    assert!((line.length() - start.distance(end)).abs() < 1e-12);
}

#[test]
fn test_segment_with_equal_endpoints_fails() {
    let p = dvec3(2.0, 2.0, 2.0);
    assert!(matches!(Line::new(p, p), Err(StrutError::DegenerateGeometry(_))));
}

#[test]
fn test_unit_polyline() {
    let polyline = Polyline::new(vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)]).unwrap();
    assert_eq!(polyline.length(), 1.0);
    assert_near(polyline.point_at(0.5).unwrap(), dvec3(0.5, 0.0, 0.0));
}

#[test]
fn test_almost_equal_vertices_fail() {
    let nearly = dvec3(1.0, 1.0, 1e-11);
    let vertices = vec![Point3::ZERO, dvec3(1.0, 1.0, 0.0), dvec3(2.0, 0.0, 0.0), nearly];
    assert_eq!(
        Polyline::new(vertices.clone()).unwrap_err(),
        StrutError::DuplicateVertex { first: 1, second: 3 }
    );
    assert_eq!(
        Polygon::new(vertices).unwrap_err(),
        StrutError::DuplicateVertex { first: 1, second: 3 }
    );
}

#[test]
fn test_loose_tolerance_rejects_more() {
    let vertices = vec![Point3::ZERO, dvec3(1e-6, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)];
    assert!(Polyline::new(vertices.clone()).is_ok());
    assert!(Polyline::with_tolerance(vertices, Tolerance::loose()).is_err());
}

#[test]
fn test_double_reversal() {
    let curves: Vec<Curve> = vec![
        Line::new(Point3::ZERO, dvec3(1.0, 2.0, 3.0)).unwrap().into(),
        Polyline::new(vec![Point3::ZERO, Vector3::X, dvec3(1.0, 1.0, 0.0), Vector3::Y])
            .unwrap()
            .into(),
        Polygon::rectangle(3.0, 2.0, Point3::ZERO).unwrap().into(),
    ];
    for curve in curves {
        let once = curve.reversed();
        assert_ne!(once.vertices(), curve.vertices());
        assert_eq!(once.reversed().vertices(), curve.vertices());
    }
}

#[test]
fn test_intersections() {
    let line = Line::new(Point3::ZERO, dvec3(5.0, 0.0, 0.0)).unwrap();

    let through = Plane::new(dvec3(2.5, 0.0, 0.0), Vector3::X);
    assert_eq!(line.intersect(&through), Some(dvec3(2.5, 0.0, 0.0)));

    let beyond = Plane::new(dvec3(5.1, 0.0, 0.0), Vector3::X);
    assert_eq!(line.intersect(&beyond), None);

    let vertical = Line::new(Point3::ZERO, Vector3::Z).unwrap();
    assert_eq!(vertical.intersect(&beyond), None);
}

#[test]
fn test_intersection_at_endpoint() {
    let line = Line::new(Point3::ZERO, dvec3(5.0, 0.0, 0.0)).unwrap();
    let plane = Plane::new(dvec3(5.0, 3.0, -1.0), Vector3::X);
    assert_eq!(line.intersect(&plane), Some(dvec3(5.0, 0.0, 0.0)));
}

#[test]
fn test_parameter_out_of_range_for_all_kinds() {
    let curves: Vec<Curve> = vec![
        Line::new(Point3::ZERO, Vector3::X).unwrap().into(),
        Polyline::new(vec![Point3::ZERO, Vector3::X, Vector3::Y]).unwrap().into(),
        Polygon::new(vec![Point3::ZERO, Vector3::X, Vector3::Y]).unwrap().into(),
    ];
    for curve in &curves {
        for u in [-0.1, 1.5] {
            assert_eq!(curve.point_at(u), Err(StrutError::ParameterRange(u)));
            assert_eq!(curve.transform_at(u), Err(StrutError::ParameterRange(u)));
        }
    }
}

#[test]
fn test_bounds_of_transformed_curve() {
    let rect: Curve = Polygon::rectangle(2.0, 4.0, Point3::ZERO).unwrap().into();
    let moved = Transform::from_translation(dvec3(10.0, 0.0, 5.0)).of_curve(&rect);
    let bounds = moved.bounds();
    assert_near(bounds.min, dvec3(9.0, -2.0, 5.0));
    assert_near(bounds.max, dvec3(11.0, 2.0, 5.0));
    assert_near(bounds.center(), dvec3(10.0, 0.0, 5.0));
}

#[test]
fn test_point_at_is_monotonic_along_polyline() {
    let polyline = Polyline::new(vec![
        Point3::ZERO,
        dvec3(2.0, 0.0, 0.0),
        dvec3(2.0, 3.0, 0.0),
        dvec3(-1.0, 3.0, 4.0),
    ])
    .unwrap();
    let total = polyline.length();
    let mut previous = polyline.start();
    let mut walked = 0.0;
    for i in 1..=40 {
        let p = polyline.point_at(i as f64 / 40.0).unwrap();
        walked += previous.distance(p);
        previous = p;
        // Chords never exceed arc length; within a segment they are equal.
        assert!(walked <= total * (i as f64 / 40.0) + 1e-9);
    }
    assert_near(previous, polyline.end());
}

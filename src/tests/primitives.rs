use crate::math::{self, EPSILON};

fn v(x: f64, y: f64) -> [f64; 2] {
    [x, y]
}

#[test]
fn orientation() {
    assert_eq!(math::orientation(&v(0., 0.), &v(0., 1.), &v(1., 1.)), -1.);
    assert_eq!(math::orientation(&v(0., 0.), &v(1., 0.), &v(1., 1.)), 1.);
    assert_eq!(math::orientation(&v(0., 0.), &v(1., 1.), &v(2., 2.)), 0.);
}

#[test]
fn points_equal() {
    assert!(math::points_equal(&v(1., 1.), &v(1. + EPSILON / 2., 1. - EPSILON / 2.)));
    assert!(!math::points_equal(&v(1., 1.), &v(1. + EPSILON * 2., 1.)));
}

#[test]
fn point_on_line() {
    assert!(math::point_on_line(&v(5., 5.), &v(0., 0.), &v(1., 1.)));
    assert!(!math::point_on_line(&v(5., 6.), &v(0., 0.), &v(1., 1.)));
    // Vertical lines only compare x
    assert!(math::point_on_line(&v(3., 100.), &v(3., 0.), &v(3., 1.)));
    assert!(!math::point_on_line(&v(4., 0.5), &v(3., 0.), &v(3., 1.)));
}

#[test]
fn point_on_segment() {
    assert!(math::point_on_segment(&v(0.5, 0.5), &v(1., 1.), &v(0., 0.)));
    assert!(math::point_on_segment(&v(1., 1.), &v(0., 0.), &v(1., 1.)));
    assert!(!math::point_on_segment(&v(2., 2.), &v(0., 0.), &v(1., 1.)));
    assert!(!math::point_on_segment(&v(4., 0.5), &v(3., 0.), &v(3., 1.)));
}

#[test]
fn hit_ray() {
    // The hit lies beyond the ray's defining segment
    assert_eq!(math::hit_ray(&v(0., 0.), &v(1., 0.), &v(5., -1.), &v(5., 1.)), Some([5., 0.]));
    // Behind the ray's origin
    assert_eq!(math::hit_ray(&v(0., 0.), &v(1., 0.), &v(-5., -1.), &v(-5., 1.)), None);
    // Between p1 and p2 is not past p2
    assert_eq!(math::hit_ray(&v(0., 0.), &v(10., 0.), &v(5., -1.), &v(5., 1.)), None);
    // Misses the target segment
    assert_eq!(math::hit_ray(&v(0., 0.), &v(1., 0.), &v(5., 1.), &v(5., 2.)), None);
    // Parallel
    assert_eq!(math::hit_ray(&v(0., 0.), &v(1., 0.), &v(0., 1.), &v(1., 1.)), None);
}

#[test]
fn hit_segment() {
    assert_eq!(math::hit_segment(&v(0., 0.), &v(10., 0.), &v(5., -1.), &v(5., 1.)), Some([5., 0.]));
    assert_eq!(math::hit_segment(&v(0., 0.), &v(1., 0.), &v(5., -1.), &v(5., 1.)), None);
    // Collinear overlap is not reported
    assert_eq!(math::hit_segment(&v(0., 0.), &v(2., 0.), &v(1., 0.), &v(3., 0.)), None);
    // Shared endpoints are
    assert_eq!(math::hit_segment(&v(0., 0.), &v(1., 1.), &v(1., 1.), &v(2., 0.)), Some([1., 1.]));
}

//! Geometric primitives shared by separation and validation.
//!
//! Every comparison is made with a fixed slack of [EPSILON], so points closer
//! than that on both axes are treated as the same point.

use num_traits::{NumCast, Zero, real::Real};

use crate::Vertex;

/// The tolerance used by all comparisons in this module
pub const EPSILON: f64 = 0.00001;

#[inline(always)]
pub(crate) fn epsilon<C: Real>() -> C {
    <C as NumCast>::from(EPSILON).unwrap_or_else(C::epsilon)
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// The result is negative when `a -> b -> c` turns clockwise, positive when it turns
/// counter-clockwise, and exactly zero for collinear points. In a clockwise polygon a
/// positive value at `b` marks a reflex vertex.
pub fn orientation<V: Vertex>(a: &V, b: &V, c: &V) -> V::Coordinate {
    a.x() * b.y() + b.x() * c.y() + c.x() * a.y() - a.y() * b.x() - b.y() * c.x() - c.y() * a.x()
}

/// `true` if `p` and `q` are within [EPSILON] of each other on both axes
pub fn points_equal<V: Vertex>(p: &V, q: &V) -> bool {
    let eps = epsilon();
    (p.x() - q.x()).abs() < eps && (p.y() - q.y()).abs() < eps
}

/// `true` if `p` lies on the infinite line through `a` and `b`.
///
/// A (nearly) vertical line is tested by comparing x coordinates only.
pub fn point_on_line<V: Vertex>(p: &V, a: &V, b: &V) -> bool {
    let eps = epsilon();
    if (b.x() - a.x()).abs() > eps {
        let slope = (b.y() - a.y()) / (b.x() - a.x());
        let line_y = slope * (p.x() - a.x()) + a.y();
        (line_y - p.y()).abs() < eps
    } else {
        (p.x() - a.x()).abs() < eps
    }
}

/// `true` if `p` lies on the segment `a`-`b`: inside its bounding box (with [EPSILON]
/// slack, in either bound order) and on its line.
pub fn point_on_segment<V: Vertex>(p: &V, a: &V, b: &V) -> bool {
    let eps = epsilon();
    between(p.x(), a.x(), b.x(), eps) && between(p.y(), a.y(), b.y(), eps) && point_on_line(p, a, b)
}

#[inline(always)]
fn between<C: Real>(v: C, bound0: C, bound1: C, eps: C) -> bool {
    (bound0 + eps >= v && v >= bound1 - eps) || (bound0 - eps <= v && v <= bound1 + eps)
}

/// Intersection of the infinite lines `p1`-`p2` and `q1`-`q2`, or `None` if they are parallel
fn line_intersection<V: Vertex>(p1: &V, p2: &V, q1: &V, q2: &V) -> Option<V> {
    let (dx_pq, dy_pq) = (q1.x() - p1.x(), q1.y() - p1.y());
    let (dx_p, dy_p) = (p2.x() - p1.x(), p2.y() - p1.y());
    let (dx_q, dy_q) = (q2.x() - q1.x(), q2.y() - q1.y());
    let denominator = dy_p * dx_q - dx_p * dy_q;

    // Parallel and collinear pairs are never reported as hits
    if denominator.is_zero() {
        return None;
    }

    let a = (dx_q * dy_pq - dy_q * dx_pq) / denominator;
    Some(V::new(p1.x() + a * dx_p, p1.y() + a * dy_p))
}

/// Casts a ray from `p1` through `p2` against the segment `q1`-`q2`.
///
/// The hit is accepted when it lies on `q1`-`q2` and `p2` lies between `p1` and the hit,
/// i.e. the hit is at or beyond `p2` along the ray. Unlike [hit_segment], the hit does not
/// need to lie on `p1`-`p2`.
pub fn hit_ray<V: Vertex>(p1: &V, p2: &V, q1: &V, q2: &V) -> Option<V> {
    let hit = line_intersection(p1, p2, q1, q2)?;
    if point_on_segment(p2, p1, &hit) && point_on_segment(&hit, q1, q2) {
        Some(hit)
    } else {
        None
    }
}

/// Intersects the segments `p1`-`p2` and `q1`-`q2`.
///
/// The hit is accepted only when it lies on both segments.
pub fn hit_segment<V: Vertex>(p1: &V, p2: &V, q1: &V, q2: &V) -> Option<V> {
    let hit = line_intersection(p1, p2, q1, q2)?;
    if point_on_segment(&hit, p1, p2) && point_on_segment(&hit, q1, q2) {
        Some(hit)
    } else {
        None
    }
}

//! Clockwise test polygons, in a y-up coordinate system

use super::vtest::VTest;

fn polygon(vs: &[(f32, f32)]) -> Vec<VTest> {
    vs.iter().copied().map(VTest::from).collect()
}

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (0.0, 1.0).into(),
        (1.0, 1.0).into(),
        (1.0, 0.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (-2.0, -2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (2.0, 2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

pub fn l_shape() -> Vec<VTest> {
    polygon(&[(0., 0.), (0., 10.), (5., 10.), (5., 5.), (10., 5.), (10., 0.)])
}

pub fn u_shape() -> Vec<VTest> {
    polygon(&[(0., 0.), (0., 10.), (3., 10.), (3., 3.), (7., 3.), (7., 10.), (10., 10.), (10., 0.)])
}

pub fn comb() -> Vec<VTest> {
    polygon(&[(0., 0.), (0., 10.), (2., 10.), (2., 2.), (4., 2.), (4., 10.), (6., 10.), (6., 2.), (8., 2.), (8., 10.), (10., 10.), (10., 0.)])
}

pub fn tee() -> Vec<VTest> {
    polygon(&[(0., 10.), (10., 10.), (10., 8.), (6., 8.), (6., 0.), (4., 0.), (4., 8.), (0., 8.)])
}

pub fn cross() -> Vec<VTest> {
    polygon(&[(3., 0.), (3., 3.), (0., 3.), (0., 6.), (3., 6.), (3., 9.), (6., 9.), (6., 6.), (9., 6.), (9., 3.), (6., 3.), (6., 0.)])
}

pub fn chevron() -> Vec<VTest> {
    polygon(&[(5., 10.), (10., 0.), (5., 5.), (0., 0.)])
}

/// An L shape with an extra vertex exactly where the cut from its notch lands
pub fn step_with_vertex() -> Vec<VTest> {
    polygon(&[(0., 0.), (0., 10.), (5., 10.), (5., 5.), (10., 5.), (10., 0.), (5., 0.)])
}

/// Self-intersecting, and so not separable
pub fn bowtie() -> Vec<VTest> {
    polygon(&[(0., 0.), (10., 10.), (10., 0.), (0., 10.)])
}

/// Every valid polygon, paired with its area
pub fn all() -> Vec<(Vec<VTest>, f32)> {
    vec![
        (square(), 1.),
        (star(), 8.),
        (half_frame(), 0.095),
        (l_shape(), 75.),
        (u_shape(), 72.),
        (comb(), 68.),
        (tee(), 36.),
        (cross(), 45.),
        (chevron(), 25.),
        (step_with_vertex(), 75.),
    ]
}

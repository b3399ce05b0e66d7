use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Polygon, Vertex, formats, math};

use super::util::{self, VTest};

fn signed_area<V: Vertex>(vs: &[V]) -> f64 {
    let origin = V::new(num_traits::zero(), num_traits::zero());
    let doubled: f64 = (0..vs.len())
        .map(|i| math::orientation(&origin, &vs[i], &vs[(i + 1) % vs.len()]).to_f64().unwrap())
        .sum();
    doubled / 2.
}

fn is_convex_clockwise<V: Vertex>(vs: &[V]) -> bool {
    let n = vs.len();
    n >= 3 && (0..n).all(|i| math::orientation(&vs[i], &vs[(i + 1) % n], &vs[(i + 2) % n]) <= num_traits::zero())
}

fn reflex_count<V: Vertex>(vs: &[V]) -> usize {
    let n = vs.len();
    (0..n).filter(|&i| math::orientation(&vs[(i + n - 1) % n], &vs[i], &vs[(i + 1) % n]) > num_traits::zero()).count()
}

#[test]
fn separate() {
    for (polygon, area) in util::polygon::all() {
        let pieces = polygon.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");

        assert!(!pieces.is_empty());
        assert!(pieces.len() <= reflex_count(&polygon) + 1, "Too many pieces for {:?}: {:?}", polygon, pieces);
        for piece in &pieces {
            assert!(is_convex_clockwise(piece), "Piece is not convex: {:?}", piece);
        }
        let total: f64 = pieces.iter().map(|piece| signed_area(piece)).sum();
        assert!((total + area as f64).abs() < 1e-4, "Area mismatch for {:?}: {}", polygon, total);
    }
}

#[test]
fn convex_unchanged() {
    let polygon = util::polygon::square();
    let pieces = polygon.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    assert_eq!(pieces, vec![polygon]);
}

#[test]
fn l_shape() {
    let pieces = util::polygon::l_shape().separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    let expected: Vec<Vec<VTest>> = vec![
        vec![(0., 0.).into(), (0., 10.).into(), (5., 10.).into(), (5., 0.).into()],
        vec![(5., 0.).into(), (5., 5.).into(), (10., 5.).into(), (10., 0.).into()],
    ];
    assert_eq!(pieces, expected);
}

#[test]
fn coincident_vertices() {
    let polygon = vec![[0f64, 0.], [0., 10.], [10., 10.], [10., 10.000001], [10., 0.]];
    let pieces = polygon.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].len(), 4);
}

#[test]
fn collinear_vertices() {
    let polygon = vec![[0f64, 0.], [0., 5.], [0., 10.], [10., 10.], [10., 0.], [5., 0.]];
    let pieces = polygon.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    assert_eq!(pieces, vec![polygon]);
}

#[test]
fn regular_polygons() {
    for n in 3..=100 {
        let mut p = Vec::new();
        for nn in 0..n {
            let scalar = 100.;

            let theta = std::f64::consts::PI * 2. * (nn as f64) / (n as f64);
            let (x, y) = theta.sin_cos();
            p.push([x * scalar, y * scalar]);
        }

        let pieces = p.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].len(), n);
    }
}

#[test]
fn random_star_polygons() {
    let mut rng = StdRng::seed_from_u64(0x5e9a_7a7e);
    for _ in 0..500 {
        let n = rng.gen_range(4..=32);
        let step = std::f64::consts::PI * 2. / n as f64;
        let polygon: Vec<[f64; 2]> = (0..n)
            .map(|k| {
                let theta = (k as f64 + rng.gen_range(-0.4..0.4)) * step;
                let r = rng.gen_range(10.0..100.0);
                let (x, y) = theta.sin_cos();
                [x * r, y * r]
            })
            .collect();

        assert!(polygon.validate().is_valid(), "Generated an invalid polygon: {:?}", polygon);
        let pieces = polygon.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");

        assert!(pieces.len() <= reflex_count(&polygon) + 1);
        for piece in &pieces {
            assert!(is_convex_clockwise(piece), "Piece is not convex: {:?}", piece);
        }
        let area = signed_area(&polygon);
        let total: f64 = pieces.iter().map(|piece| signed_area(piece)).sum();
        assert!((total - area).abs() <= 1e-9 * area.abs(), "Area mismatch for {:?}", polygon);
    }
}

use crate::{Polygon, formats};

use super::util::{self, VTest};

#[test]
// A cut which ends exactly on an existing vertex must not leave that vertex twice in a piece
fn cut_through_vertex() {
    let pieces = util::polygon::step_with_vertex().separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    let expected: Vec<Vec<VTest>> = vec![
        vec![(5., 0.).into(), (0., 0.).into(), (0., 10.).into(), (5., 10.).into()],
        vec![(5., 0.).into(), (5., 5.).into(), (10., 5.).into(), (10., 0.).into()],
    ];
    assert_eq!(pieces, expected);
}

#[test]
// The reflex vertex is the first vertex of the polygon, so the cut walk wraps around
fn reflex_at_start() {
    let polygon = vec![[5f64, 5.], [10., 5.], [10., 0.], [0., 0.], [0., 10.], [5., 10.]];
    let pieces = polygon.separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    assert_eq!(pieces.len(), 2);
    assert!(pieces.iter().all(|piece| piece.len() == 4));
}

#[test]
fn thin_frame() {
    let pieces = util::polygon::half_frame().separate(formats::PiecesFormat::new(Vec::<Vec<_>>::new())).expect("Separation failed");
    assert_eq!(pieces.len(), 2);
}

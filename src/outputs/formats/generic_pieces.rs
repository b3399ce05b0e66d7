use std::marker::PhantomData;

use crate::{Piece, Pieces};

pub(crate) struct GenericPieces<PS: Pieces, V>
where PS::Piece: Piece<V> {
    pieces: PS,
    current_piece: Option<PS::Piece>,
    initial_piece_count: usize,
    _phantom: PhantomData<V>,
}

impl<PS: Pieces, V> GenericPieces<PS, V> 
where PS::Piece: Piece<V> {
    pub fn new(pieces: PS) -> Self {
        let initial_piece_count = pieces.len();
        Self {
            pieces,
            current_piece: None,
            initial_piece_count,
            _phantom: PhantomData,
        }
    }

    pub fn new_piece(&mut self, v0: V, v1: V, v2: V) {
        if let Some(prev_piece) = self.current_piece.replace(PS::Piece::new(v0, v1, v2)) {
            self.pieces.push(prev_piece);
        }
    }

    pub fn extend_piece(&mut self, v: V) {
        if let Some(piece) = &mut self.current_piece {
            piece.push(v);
        }
    }

    pub fn build(mut self) -> PS {
        if let Some(piece) = self.current_piece.take() {
            self.pieces.push(piece);
        }
        self.pieces
    }

    pub fn fail(mut self) {
        self.pieces.truncate(self.initial_piece_count);
    }
}

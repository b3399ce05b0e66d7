use std::marker::PhantomData;

use crate::{Piece, Pieces, PieceFormat, PieceBuilder, SeparationError, Vertex};

use super::GenericPieces;

/// A [PieceFormat] which collects each piece's vertices into a [Pieces] collection,
/// such as `&mut Vec<Vec<V>>`.
/// 
/// If separation fails, any pieces already added to the collection are removed again.
#[derive(Debug)]
pub struct PiecesFormat<V: Vertex, PS: Pieces>
where PS::Piece: Piece<V> {
    pieces: PS,
    _phantom: PhantomData<V>,
}

impl<V: Vertex, PS: Pieces> PiecesFormat<V, PS>
where PS::Piece: Piece<V> {
    /// Create a format which stores its output in the given [Pieces]
    pub fn new(pieces: PS) -> Self {
        Self { pieces, _phantom: PhantomData }
    }
}

impl<V: Vertex, PS: Pieces> PieceFormat<V> for PiecesFormat<V, PS>
where PS::Piece: Piece<V> {
    type Builder = PiecesBuilder<V, PS>;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as PieceBuilder<V>>::Error> {
        Ok(PiecesBuilder { pieces: GenericPieces::new(self.pieces) })
    }
}

pub struct PiecesBuilder<V: Vertex, PS: Pieces>
where PS::Piece: Piece<V> {
    pieces: GenericPieces<PS, V>,
}

impl<V: Vertex, PS: Pieces> PieceBuilder<V> for PiecesBuilder<V, PS>
where PS::Piece: Piece<V> {
    type Output = PS;
    type Error = std::convert::Infallible;

    fn new_piece(&mut self, v0: V, v1: V, v2: V) -> Result<(), Self::Error> {
        self.pieces.new_piece(v0, v1, v2);
        Ok(())
    }

    fn extend_piece(&mut self, v: V) -> Result<(), Self::Error> {
        self.pieces.extend_piece(v);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.pieces.build())
    }

    fn fail(self, _error: &SeparationError<Self::Error>) {
        self.pieces.fail();
    }
}

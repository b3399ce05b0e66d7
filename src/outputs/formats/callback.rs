use std::{error, marker::PhantomData};

use crate::{PieceFormat, PieceBuilder, SeparationError, Vertex};

/// A [PieceFormat] which hands every completed piece to a callback, e.g. to create a
/// collision shape for it.
/// 
/// An error returned by the callback stops separation and is returned as
/// [SeparationError::PieceBuilder]. Pieces already passed to the callback are not revoked
/// when separation fails.
pub struct CallbackFormat<V: Vertex, E: error::Error, F: FnMut(&[V]) -> Result<(), E>> {
    callback: F,
    _phantom: PhantomData<(V, E)>,
}

impl<V: Vertex, E: error::Error, F: FnMut(&[V]) -> Result<(), E>> CallbackFormat<V, E, F> {
    /// Create a format which calls `callback` once per piece
    pub fn new(callback: F) -> Self {
        Self { callback, _phantom: PhantomData }
    }
}

impl<V: Vertex, E: error::Error, F: FnMut(&[V]) -> Result<(), E>> PieceFormat<V> for CallbackFormat<V, E, F> {
    type Builder = CallbackBuilder<V, E, F>;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as PieceBuilder<V>>::Error> {
        Ok(CallbackBuilder {
            callback: self.callback,
            current_piece: Vec::new(),
            piece_count: 0,
            _phantom: PhantomData,
        })
    }
}

pub struct CallbackBuilder<V: Vertex, E: error::Error, F: FnMut(&[V]) -> Result<(), E>> {
    callback: F,
    current_piece: Vec<V>,
    piece_count: usize,
    _phantom: PhantomData<E>,
}

impl<V: Vertex, E: error::Error, F: FnMut(&[V]) -> Result<(), E>> CallbackBuilder<V, E, F> {
    fn flush(&mut self) -> Result<(), E> {
        if !self.current_piece.is_empty() {
            (self.callback)(&self.current_piece)?;
            self.current_piece.clear();
            self.piece_count += 1;
        }
        Ok(())
    }
}

impl<V: Vertex, E: error::Error, F: FnMut(&[V]) -> Result<(), E>> PieceBuilder<V> for CallbackBuilder<V, E, F> {
    /// The number of pieces passed to the callback
    type Output = usize;
    type Error = E;

    fn new_piece(&mut self, v0: V, v1: V, v2: V) -> Result<(), Self::Error> {
        self.flush()?;
        self.current_piece.extend([v0, v1, v2]);
        Ok(())
    }

    fn extend_piece(&mut self, v: V) -> Result<(), Self::Error> {
        self.current_piece.push(v);
        Ok(())
    }

    fn build(mut self) -> Result<Self::Output, Self::Error> {
        self.flush()?;
        Ok(self.piece_count)
    }

    fn fail(self, _error: &SeparationError<Self::Error>) { }
}

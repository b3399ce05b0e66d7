use std::marker::PhantomData;

use crate::{PieceFormat, PieceBuilder, PolygonWinding, SeparationError, Vertex};

/// Wrapper which reverses the winding of a [PieceFormat]
pub struct ReversePieceFormat<V: Vertex, PF: PieceFormat<V>>(PF, PhantomData<V>);

impl<V: Vertex, PF: PieceFormat<V>> ReversePieceFormat<V, PF> {
    pub(crate) fn new(format: PF) -> Self {
        Self(format, PhantomData)
    }
}

impl<V: Vertex, PF: PieceFormat<V>> PieceFormat<V> for ReversePieceFormat<V, PF> {
    type Builder = ReversePieceBuilder<V, PF::Builder>;

    fn initialize(self) -> Result<Self::Builder, <Self::Builder as PieceBuilder<V>>::Error> {
        let builder = self.0.initialize()?;
        Ok(ReversePieceBuilder(builder, PhantomData))
    }
}

/// Wrapper which reverses the winding of a [PieceBuilder]
pub struct ReversePieceBuilder<V: Vertex, PB: PieceBuilder<V>>(PB, PhantomData<V>);

impl<V: Vertex, PB: PieceBuilder<V>> PieceBuilder<V> for ReversePieceBuilder<V, PB> {
    type Output = PB::Output;
    type Error = PB::Error;

    const WINDING: PolygonWinding = PB::WINDING.reverse();

    fn new_piece(&mut self, v0: V, v1: V, v2: V) -> Result<(), Self::Error> {
        self.0.new_piece(v0, v1, v2)
    }

    fn extend_piece(&mut self, v: V) -> Result<(), Self::Error> {
        self.0.extend_piece(v)
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        self.0.build()
    }

    fn fail(self, error: &SeparationError<Self::Error>) {
        self.0.fail(error);
    }
}

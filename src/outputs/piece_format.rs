use std::error;

use crate::{PolygonWinding, SeparationError, Vertex, formats::ReversePieceFormat};

/// Describes the construction and layout of the convex pieces of a separation
pub trait PieceFormat<V: Vertex> {
    /// The type responsible for receiving the pieces.
    /// 
    /// This type can be `Self`, if you choose to implement both [PieceFormat] and [PieceBuilder] on the same type.
    type Builder: PieceBuilder<V> + Sized;

    /// Constructs a [PieceFormat::Builder] before the first piece is emitted.
    fn initialize(self) -> Result<Self::Builder, <Self::Builder as PieceBuilder<V>>::Error>;

    /// Constructs a [PieceFormat] with the opposite [PolygonWinding]
    fn reverse_winding(self) -> ReversePieceFormat<V, Self>
    where Self: Sized {
        ReversePieceFormat::new(self)
    }
}

/// Receives the convex pieces of a separation, one vertex at a time
pub trait PieceBuilder<V: Vertex>: Sized {
    /// The pieces output type
    type Output;
    /// The error type when the builder fails
    type Error: error::Error;

    /// The winding direction this builder expects for pieces
    const WINDING: PolygonWinding = PolygonWinding::Clockwise;

    /// Starts a new piece with its first three vertices
    fn new_piece(&mut self, v0: V, v1: V, v2: V) -> Result<(), Self::Error>;
    /// Appends the next vertex to the current piece
    fn extend_piece(&mut self, v: V) -> Result<(), Self::Error>;

    /// Called when separation has completed to get the resulting output
    fn build(self) -> Result<Self::Output, Self::Error>;

    /// Called when separation encounters an error.
    /// 
    /// Any required cleanup (e.g. removing the pieces already added to an existing [Vec]) should be done here
    fn fail(self, error: &SeparationError<Self::Error>);
}

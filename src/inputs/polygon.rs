use std::ops;

use crate::{PieceBuilder, PieceFormat, SeparationError, Validation, VertexIndex, separation::SeparationState, validation};

use super::vertex::Vertex;

/// An indexable polygon's vertices
pub trait Polygon {
    /// The type of vertices of the polygon
    type Vertex: Vertex;
    /// A type used to uniquely identify a [Vertex] (e.g. [usize] for a [Vec<\[f32; 2\]>](Vec))
    type Index: VertexIndex;
    /// The [Iterator] type that [Polygon::iter_indices] returns
    type Iter<'i>: Iterator<Item=Self::Index>
    where Self: 'i;

    /// Provides the number of vertices of the polygon.
    fn vertex_count(&self) -> usize;

    /// Iterate through the [Polygon::Index]es of the polygon's vertices.
    /// Indices must be returned in clockwise order without repeating the initial index.
    ///
    /// At least 3 indices must be yielded, otherwise separation will fail.
    fn iter_indices(&self) -> Self::Iter<'_>;

    /// Get the [Polygon::Vertex] uniquely identified by the [Polygon::Index] value
    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex;

    /// Check whether the polygon is clockwise and free of overlapping edges.
    ///
    /// This costs O(n²) segment tests, so it is meant for diagnosing input which fails
    /// to separate rather than for routine use.
    fn validate(&self) -> Validation {
        validation::validate(self)
    }

    /// Separate the polygon into convex pieces in the layout specified by `format`
    fn separate<PF: PieceFormat<Self::Vertex>>(&self, format: PF) -> Result<<PF::Builder as PieceBuilder<Self::Vertex>>::Output, SeparationError<<PF::Builder as PieceBuilder<Self::Vertex>>::Error>> {
        SeparationState::new(self).separate(format)
    }
}

impl<V: Vertex> Polygon for Vec<V> {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = ops::Range<usize>
    where Self: 'i;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn iter_indices(&self) -> Self::Iter<'_> {
        0..self.len()
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        &self[index]
    }
}

impl<V: Vertex> Polygon for [V] {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = ops::Range<usize>
    where Self: 'i;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn iter_indices(&self) -> Self::Iter<'_> {
        0..self.len()
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        &self[index]
    }
}

impl<V: Vertex, const N: usize> Polygon for [V; N] {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = ops::Range<usize>
    where Self: 'i;

    fn vertex_count(&self) -> usize {
        N
    }

    fn iter_indices(&self) -> Self::Iter<'_> {
        0..N
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        &self[index]
    }
}

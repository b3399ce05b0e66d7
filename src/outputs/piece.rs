use smallvec::{Array, SmallVec};

/// A convex polygon with vertices of type `V`
pub trait Piece<V> {
    /// Initialize the piece with its first three vertices.
    fn new(v0: V, v1: V, v2: V) -> Self;

    /// Add the next vertex `v` of the piece
    fn push(&mut self, v: V);
}

impl<V> Piece<V> for Vec<V> {
    fn new(v0: V, v1: V, v2: V) -> Self {
        vec![v0, v1, v2]
    }

    fn push(&mut self, v: V) {
        self.push(v)
    }
}

impl<A: Array> Piece<A::Item> for SmallVec<A> {
    fn new(v0: A::Item, v1: A::Item, v2: A::Item) -> Self {
        let mut piece = SmallVec::new();
        piece.extend([v0, v1, v2]);
        piece
    }

    fn push(&mut self, v: A::Item) {
        self.push(v)
    }
}

/// A collection of multiple [Piece]s.
pub trait Pieces {
    /// The type of the individual [Piece]s
    type Piece;

    /// The number of [Piece]s
    fn len(&self) -> usize;

    /// Remove newly added [Piece]s until there are only `len` remaining
    fn truncate(&mut self, len: usize);

    /// Add a new [Piece]
    fn push(&mut self, piece: Self::Piece);

    /// Returns `true` if the collection contains no [Piece]s
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> Pieces for Vec<P> {
    type Piece = P;

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    fn push(&mut self, piece: Self::Piece) {
        self.push(piece)
    }
}

impl<PS: Pieces> Pieces for &mut PS {
    type Piece = PS::Piece;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn truncate(&mut self, len: usize) {
        (**self).truncate(len)
    }

    fn push(&mut self, piece: Self::Piece) {
        (**self).push(piece)
    }
}

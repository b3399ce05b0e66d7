use std::fmt;

use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{Coords, Polygon, Vertex, idx::{Idx, SliceExt}, math};

pub(crate) type FragmentIdx<C> = Idx<Coords<C>>;

/// A clockwise polygon which has not yet been checked for convexity
#[derive(Clone)]
pub(crate) struct Fragment<C: Real> {
    id: usize,
    vertices: SmallVec<[Coords<C>; 8]>,
}

impl<C: Real> Fragment<C> {
    pub fn new(id: usize, vertices: SmallVec<[Coords<C>; 8]>) -> Self {
        Self { id, vertices }
    }

    /// Builds the initial fragment, collapsing runs of coincident neighbours into their first vertex
    pub fn from_polygon<P: Polygon + ?Sized>(polygon: &P) -> Self
    where P::Vertex: Vertex<Coordinate=C> {
        let mut vertices: SmallVec<[Coords<C>; 8]> = SmallVec::with_capacity(polygon.vertex_count());
        for index in polygon.iter_indices() {
            let c = Coords::from_vertex(polygon.get_vertex(index));
            if !vertices.last().map_or(false, |last| math::points_equal(last, &c)) {
                vertices.push(c);
            }
        }
        while vertices.len() > 1 && math::points_equal(&vertices[0], &vertices[vertices.len() - 1]) {
            vertices.pop();
        }
        Self::new(0, vertices)
    }

    #[cfg(feature = "debugging")]
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn vertices(&self) -> &[Coords<C>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Finds the first vertex `p1` whose successor `p2` is reflex, scanning in vertex order.
    ///
    /// Returns `None` if the fragment is convex.
    pub fn find_reflex(&self) -> Option<FragmentIdx<C>> {
        let vs = self.vertices();
        vs.iter_index().find(|&i1| {
            let i2 = i1.next_wrapped(vs);
            let i3 = i2.next_wrapped(vs);
            math::orientation(&vs[i1], &vs[i2], &vs[i3]) > C::zero()
        })
    }

    /// Shoelace area, negative for clockwise fragments
    pub fn signed_area(&self) -> C {
        let vs = self.vertices();
        let origin = Coords::new(C::zero(), C::zero());
        let doubled = vs.iter_index()
            .map(|i| math::orientation(&origin, &vs[i], &vs[i.next_wrapped(vs)]))
            .fold(C::zero(), |sum, a| sum + a);
        doubled / (C::one() + C::one())
    }

    /// A sliver left behind by a cut which landed on an existing vertex
    pub fn is_degenerate(&self) -> bool {
        self.len() < 3 || self.signed_area().abs() < math::epsilon()
    }
}

impl<C: Real> fmt::Debug for Fragment<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("id", &self.id)
            .field("vertices", &self.vertices.as_slice())
            .finish()
    }
}

impl<C: Real> fmt::Display for Fragment<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{} [", self.id)?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

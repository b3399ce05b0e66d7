use std::fmt;

use num_traits::real::Real;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
/// Separation creates new vertices where a cut meets the boundary, so a `Vertex`
/// must also be constructible from its coordinates.
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// Create a vertex at the given coordinates
    fn new(x: Self::Coordinate, y: Self::Coordinate) -> Self
    where Self: Sized;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

#[derive(Clone, Copy, PartialEq)]
pub(crate) struct Coords<C: Real>([C; 2]);

impl<C: Real> Coords<C> {
    pub fn from_vertex<V: Vertex<Coordinate=C>>(v: &V) -> Self {
        Self([v.x(), v.y()])
    }

    pub fn into_vertex<V: Vertex<Coordinate=C>>(self) -> V {
        V::new(self.x(), self.y())
    }

    pub fn distance_squared(&self, other: &Self) -> C {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    #[cfg(feature = "debugging")]
    pub fn to_f32(&self) -> [f32; 2] {
        [self.x().to_f32().unwrap_or(0.0), self.y().to_f32().unwrap_or(0.0)]
    }
}

impl<C: Real> Vertex for Coords<C> {
    type Coordinate = C;

    #[inline(always)]
    fn new(x: C, y: C) -> Self {
        Self([x, y])
    }

    #[inline(always)]
    fn x(&self) -> C { self.0[0] }

    #[inline(always)]
    fn y(&self) -> C { self.0[1] }
}

impl<C: Real> fmt::Debug for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coords");
        if let Some(x) = self.x().to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y().to_f64() {
            tuple.field(&y);
        }
        tuple.finish()
    }
}

impl<C: Real> fmt::Display for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x().to_f64(), self.y().to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Coords<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C: fmt::Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn new(x: C, y: C) -> Self {
        [x, y]
    }

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: fmt::Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn new(x: C, y: C) -> Self {
        (x, y)
    }

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

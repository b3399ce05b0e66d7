/// The order the vertices of an output piece are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PolygonWinding {
    Clockwise,
    Counterclockwise,
}

impl PolygonWinding {
    /// The opposite winding
    pub const fn reverse(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }
}

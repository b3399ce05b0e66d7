mod polygon;
pub use polygon::Polygon;
mod vertex;
pub use vertex::Vertex;
pub(crate) use vertex::Coords;
mod vertex_index;
pub use vertex_index::VertexIndex;

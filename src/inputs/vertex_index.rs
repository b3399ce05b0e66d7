/// A type which can be used to index a specific [Vertex](crate::Vertex).
/// Automatically implemented for all [Eq] + [Clone] types
pub trait VertexIndex: Eq + Clone { }

impl<T> VertexIndex for T 
where T: Eq + Clone
{ }

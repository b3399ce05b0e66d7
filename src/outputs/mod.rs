pub mod formats;

mod piece;
pub use piece::{Piece, Pieces};
mod piece_format;
pub use piece_format::{PieceFormat, PieceBuilder};
mod polygon_winding;
pub use polygon_winding::PolygonWinding;

//! Predefined implementations of [PieceFormat](crate::PieceFormat) and [PieceBuilder](crate::PieceBuilder)

mod generic_pieces;
pub(crate) use generic_pieces::GenericPieces;
mod pieces;
pub use pieces::{PiecesFormat, PiecesBuilder};
mod callback;
pub use callback::{CallbackFormat, CallbackBuilder};
mod reverse_piece;
pub use reverse_piece::{ReversePieceFormat, ReversePieceBuilder};

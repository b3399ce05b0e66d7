//! Separation of simple, clockwise polygons into convex pieces.
//!
//! ```
//! use separate::{Polygon, formats::PiecesFormat};
//!
//! let l_shape = vec![[0f64, 0.], [0., 10.], [5., 10.], [5., 5.], [10., 5.], [10., 0.]];
//! let mut pieces = Vec::<Vec<[f64; 2]>>::new();
//! l_shape.separate(PiecesFormat::new(&mut pieces)).expect("Separation failed");
//! assert_eq!(pieces.len(), 2);
//! ```

mod idx;
pub mod math;
mod fragment;
mod separation;
mod validation;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub(crate) mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{DecompositionFailure, FailureCause, SeparationError};
pub use validation::Validation;

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

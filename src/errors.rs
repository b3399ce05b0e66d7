use std::{error, fmt};

use backtrace::Backtrace;

/// The step of separation which could not be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FailureCause {
    /// No edge was hit by the ray cast through a reflex vertex
    NoSplitFound,
    /// Walking the boundary to build a fragment ended before it started
    CutWalkExhausted,
    /// More splits were attempted than any valid polygon of the input size could require
    SplitLimitExceeded,
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoSplitFound => "no split found",
            Self::CutWalkExhausted => "cut walk exhausted",
            Self::SplitLimitExceeded => "split limit exceeded",
        })
    }
}

/// The polygon could not be separated into convex pieces.
///
/// This means the input violated the clockwise, simple polygon precondition in a way that
/// [Polygon::validate](crate::Polygon::validate) would usually have reported.
#[derive(Debug)]
pub struct DecompositionFailure {
    pub cause: FailureCause,
    pub msg: String,
    pub backtrace: Backtrace,
}

impl DecompositionFailure {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(cause: FailureCause, msg: impl Into<String>) -> Self {
        Self {
            cause,
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for DecompositionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to separate into convex parts ({}): {}\n{:?}", self.cause, self.msg, self.backtrace)
    }
}

impl error::Error for DecompositionFailure { }

/// Describes an error which occurred during separation
#[derive(Debug)]
#[non_exhaustive]
pub enum SeparationError<BError: error::Error> {
    /// A polygon was encountered with fewer than 3 distinct vertices
    NotEnoughVertices(usize),
    /// No valid split could be found for a non-convex fragment
    DecompositionFailure(DecompositionFailure),
    /// The [PieceBuilder](crate::PieceBuilder) returned an error.
    PieceBuilder(BError),
}

impl<BError: error::Error> SeparationError<BError> {
    #[inline(always)]
    pub(crate) fn failure(cause: FailureCause, msg: impl Into<String>) -> Self {
        Self::DecompositionFailure(DecompositionFailure::new(cause, msg))
    }

    /// The [FailureCause], if this is a [SeparationError::DecompositionFailure]
    pub fn failure_cause(&self) -> Option<FailureCause> {
        match self {
            Self::DecompositionFailure(failure) => Some(failure.cause),
            _ => None,
        }
    }
}

impl<BError: error::Error> From<BError> for SeparationError<BError> {
    fn from(e: BError) -> Self {
        Self::PieceBuilder(e)
    }
}

impl<BError: error::Error> fmt::Display for SeparationError<BError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::DecompositionFailure(error) => fmt::Display::fmt(error, f),
            Self::PieceBuilder(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<BError: error::Error> error::Error for SeparationError<BError> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::DecompositionFailure(error) => Some(error),
            Self::PieceBuilder(error) => error.source(), // This should be Some(error), but that forces restricting BError to 'static.
            _ => None,
        }
    }
}

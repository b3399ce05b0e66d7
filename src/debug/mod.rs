//! Diagnostic output of the separation steps, enabled with the `debugging` feature.
//!
//! Output is configured through environment variables, see [env].

pub(crate) mod env;
pub(crate) mod svg;

pub mod polygon;
mod vtest;

pub use vtest::VTest;

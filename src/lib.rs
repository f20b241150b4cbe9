pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod keyword;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{PrimeshError, Result};

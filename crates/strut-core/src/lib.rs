//! Strut core types: errors, tolerances, and shared traits.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, StrutError};
pub use tolerance::Tolerance;

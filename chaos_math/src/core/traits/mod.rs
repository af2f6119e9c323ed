//! Core/common traits for use in chaos_math.
mod fuzzy_eq;
mod scalar;
mod vector2ref;

pub use fuzzy_eq::FuzzyEq;
pub use scalar::Scalar;
pub use vector2ref::*;

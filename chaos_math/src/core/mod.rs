//! Core traits shared by the vector types.
pub mod traits;

//! The [Vector2] type, its swizzle views and its computed properties.
mod property;
mod swizzle;
mod vector2;

pub use property::*;
pub use swizzle::*;
pub use vector2::*;

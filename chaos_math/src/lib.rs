//! This crate provides a generic 2D vector, [Vector2](crate::vector::Vector2), whose components can
//! be read and written through several named swizzle views (`x`/`i`, `xy`, `yx`, ...) that all alias
//! the same backing storage, along with computed properties (`magnitude`, `normalized`) that are
//! derived from the live vector state every time they are read.
//!
//! # Examples
//!
//! ```
//! use chaos_math::vector::Vector2;
//!
//! let mut v = Vector2::new(1, 2);
//! v.yx_mut().set(Vector2::new(10, 20));
//! assert_eq!(v.x(), 20);
//! assert_eq!(v.y(), 10);
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v.normalized(), Vector2::new(0.6, 0.8));
//! ```
#![forbid(unsafe_code)]

pub mod core;
pub mod vector;

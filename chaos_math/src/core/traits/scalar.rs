use num_traits::NumAssign;
use std::fmt::{Debug, Display};

/// Numeric type that may be used as the component type of a [Vector2](crate::vector::Vector2).
///
/// Implemented for all the primitive integer and floating point types. Arithmetic carried out on
/// vector components (including overflow, rounding and division by zero) is always the native
/// arithmetic of the primitive type.
pub trait Scalar: NumAssign + Copy + PartialOrd + Default + Debug + Display {
    /// Square root of `self`.
    ///
    /// For integer types the root is taken in `f64` and truncated back to `Self`.
    fn sqrt(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

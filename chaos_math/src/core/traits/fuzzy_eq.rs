/// Approximate equality for floating point values and vectors of them.
pub trait FuzzyEq<Rhs = Self>: Sized + Copy {
    /// Scalar type of the epsilon used in comparisons.
    type Epsilon: Copy;

    /// Default epsilon used by [FuzzyEq::fuzzy_eq].
    fn fuzzy_epsilon() -> Self::Epsilon;

    /// Returns true if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Rhs, fuzzy_epsilon: Self::Epsilon) -> bool;

    /// Fuzzy equal comparison using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Rhs) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq_float {
    ($t:ty, $eps:expr) => {
        impl FuzzyEq for $t {
            type Epsilon = $t;

            #[inline]
            fn fuzzy_epsilon() -> $t {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: $t, fuzzy_epsilon: $t) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq_float!(f32, 1e-5);
impl_fuzzy_eq_float!(f64, 1e-8);

#[cfg(test)]
mod tests {
    use super::FuzzyEq;

    #[test]
    fn fuzzy_eq_within_epsilon() {
        assert!(0.1f64.fuzzy_eq(0.1 + 1e-10));
        assert!(!0.1f64.fuzzy_eq(0.1 + 1e-6));
        assert!(1.0f32.fuzzy_eq(1.0 + 1e-7));
    }

    #[test]
    fn fuzzy_eq_custom_epsilon() {
        assert!(1.0f64.fuzzy_eq_eps(1.05, 0.1));
        assert!(!1.0f64.fuzzy_eq_eps(1.2, 0.1));
    }

    #[test]
    fn nan_is_never_fuzzy_eq() {
        assert!(!f64::NAN.fuzzy_eq(f64::NAN));
    }
}

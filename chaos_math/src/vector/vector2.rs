use super::{
    ComputedProperty, Magnitude, Normalized, Property, ScalarSwizzle, ScalarSwizzleRef, Swizzle2,
    Swizzle2Mut,
};
use crate::core::traits::{FuzzyEq, Scalar, Vector2Ref};
use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic two component vector.
///
/// Components live in a single backing array of two slots. Every accessor, whether it returns a
/// plain value ([Vector2::x]), a single slot view ([Vector2::x_mut]) or a two slot swizzle view
/// ([Vector2::yx], [Vector2::yx_mut]), reads or writes that same array.
///
/// | slot | read  | read only view | mutable view | synonyms |
/// |------|-------|----------------|--------------|----------|
/// | 0    | `x()` | `x_view()`     | `x_mut()`    | `i`      |
/// | 1    | `y()` | `y_view()`     | `y_mut()`    | `j`      |
///
/// Two slot views: `xx`, `xy`, `yx`, `yy` and their `_mut` forms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector2<T = f64> {
    data: [T; 2],
}

macro_rules! scalar_swizzle_accessors {
    ($($get:ident, $get_view:ident, $get_mut:ident => $idx:literal;)+) => {
        $(
            #[doc = concat!("Value of component slot ", stringify!($idx), ".")]
            #[inline]
            pub fn $get(&self) -> T {
                self.data[$idx]
            }

            #[doc = concat!("Read only view of component slot ", stringify!($idx), ".")]
            #[inline]
            pub fn $get_view(&self) -> ScalarSwizzleRef<'_, T, $idx> {
                ScalarSwizzleRef::new(&self.data)
            }

            #[doc = concat!("Mutable view of component slot ", stringify!($idx), ".")]
            #[inline]
            pub fn $get_mut(&mut self) -> ScalarSwizzle<'_, T, $idx> {
                ScalarSwizzle::new(&mut self.data)
            }
        )+
    };
}

macro_rules! vector_swizzle_accessors {
    ($($get:ident, $get_mut:ident => $a:literal, $b:literal;)+) => {
        $(
            #[doc = concat!(
                "Read only view of component slots (", stringify!($a), ", ", stringify!($b), ")."
            )]
            #[inline]
            pub fn $get(&self) -> Swizzle2<'_, T, $a, $b> {
                Swizzle2::new(&self.data)
            }

            #[doc = concat!(
                "Mutable view of component slots (", stringify!($a), ", ", stringify!($b), ")."
            )]
            #[inline]
            pub fn $get_mut(&mut self) -> Swizzle2Mut<'_, T, $a, $b> {
                Swizzle2Mut::new(&mut self.data)
            }
        )+
    };
}

impl<T> Vector2<T>
where
    T: Scalar,
{
    /// Create a new vector from its two components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { data: [x, y] }
    }

    /// Create a new vector with both components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Vector2::new(value, value)
    }

    /// Create a new vector with both components zero.
    #[inline]
    pub fn zero() -> Self {
        Vector2::splat(T::zero())
    }

    scalar_swizzle_accessors! {
        x, x_view, x_mut => 0;
        i, i_view, i_mut => 0;
        y, y_view, y_mut => 1;
        j, j_view, j_mut => 1;
    }

    vector_swizzle_accessors! {
        xx, xx_mut => 0, 0;
        xy, xy_mut => 0, 1;
        yx, yx_mut => 1, 0;
        yy, yy_mut => 1, 1;
    }

    /// Length of the vector, recomputed from the current components on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chaos_math::vector::*;
    /// let mut v = Vector2::new(3.0, 4.0);
    /// assert_eq!(v.magnitude(), 5.0);
    /// *v.x_mut() = 0.0;
    /// assert_eq!(v.magnitude(), 4.0);
    /// // integer vectors truncate the root
    /// assert_eq!(Vector2::new(1, 1).magnitude(), 1);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> T {
        Magnitude::compute(self)
    }

    /// The vector divided by its [magnitude](Vector2::magnitude).
    ///
    /// A zero length float vector yields `NaN` components.
    ///
    /// # Panics
    ///
    /// Panics for zero length vectors of an integer component type (integer division by zero).
    #[inline]
    pub fn normalized(&self) -> Self {
        Normalized::compute(self)
    }

    /// Bind the computed property `P` to this vector.
    #[inline]
    pub fn property<P>(&self) -> Property<'_, Self, P>
    where
        P: ComputedProperty<Self>,
    {
        Property::new(self)
    }
}

impl<T> Default for Vector2<T>
where
    T: Scalar,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Vector2Ref for Vector2<T>
where
    T: Scalar,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    fn y(&self) -> T {
        self.data[1]
    }
}

impl<T> fmt::Display for Vector2<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.data[0], self.data[1])
    }
}

macro_rules! impl_vector_op {
    ($Op:ident $op:ident $OpAssign:ident $op_assign:ident) => {
        impl<T> $Op for Vector2<T>
        where
            T: Scalar,
        {
            type Output = Vector2<T>;

            #[inline]
            fn $op(mut self, rhs: Vector2<T>) -> Vector2<T> {
                $OpAssign::<Vector2<T>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T> $OpAssign for Vector2<T>
        where
            T: Scalar,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector2<T>) {
                self.data[0].$op_assign(rhs.data[0]);
                self.data[1].$op_assign(rhs.data[1]);
            }
        }
    };
}

impl_vector_op!(Add add AddAssign add_assign);
impl_vector_op!(Sub sub SubAssign sub_assign);
impl_vector_op!(Mul mul MulAssign mul_assign);
impl_vector_op!(Div div DivAssign div_assign);

macro_rules! impl_vector_scalar_op {
    ($Op:ident $op:ident $OpAssign:ident $op_assign:ident) => {
        impl<T> $Op<T> for Vector2<T>
        where
            T: Scalar,
        {
            type Output = Vector2<T>;

            #[inline]
            fn $op(mut self, rhs: T) -> Vector2<T> {
                $OpAssign::<T>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T> $OpAssign<T> for Vector2<T>
        where
            T: Scalar,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                self.data[0].$op_assign(rhs);
                self.data[1].$op_assign(rhs);
            }
        }
    };
}

impl_vector_scalar_op!(Mul mul MulAssign mul_assign);
impl_vector_scalar_op!(Div div DivAssign div_assign);

impl<T> Neg for Vector2<T>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Vector2<T>;

    #[inline]
    fn neg(self) -> Vector2<T> {
        Vector2::new(-self.data[0], -self.data[1])
    }
}

impl<T> num_traits::Zero for Vector2<T>
where
    T: Scalar,
{
    #[inline]
    fn zero() -> Self {
        Vector2::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data[0].is_zero() && self.data[1].is_zero()
    }
}

impl<T> FuzzyEq for Vector2<T>
where
    T: Scalar + FuzzyEq<Epsilon = T>,
{
    type Epsilon = T;

    #[inline]
    fn fuzzy_epsilon() -> T {
        T::fuzzy_epsilon()
    }

    #[inline]
    fn fuzzy_eq_eps(&self, other: Vector2<T>, fuzzy_epsilon: T) -> bool {
        self.data[0].fuzzy_eq_eps(other.data[0], fuzzy_epsilon)
            && self.data[1].fuzzy_eq_eps(other.data[1], fuzzy_epsilon)
    }
}

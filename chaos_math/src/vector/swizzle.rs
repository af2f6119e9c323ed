use super::Vector2;
use crate::core::traits::{Scalar, Vector2Ref};
use std::{
    fmt,
    ops::{AddAssign, Deref, DerefMut, DivAssign, MulAssign, SubAssign},
};

/// Mutable view of the single component slot `I` of a [Vector2].
///
/// Obtained through [Vector2::x_mut], [Vector2::i_mut], [Vector2::y_mut] or [Vector2::j_mut].
/// Synonymous accessors (`x`/`i`, `y`/`j`) produce the same view type over the same slot, so
/// writing through one is immediately visible through the other.
///
/// # Examples
///
/// ```
/// # use chaos_math::vector::*;
/// let mut v = Vector2::new(1, 2);
/// *v.i_mut() += 4;
/// assert_eq!(v.x(), 5);
/// let mut y = v.y_mut();
/// y *= 3;
/// assert_eq!(y.post_inc(), 6);
/// assert_eq!(v.j(), 7);
/// ```
#[derive(Debug)]
pub struct ScalarSwizzle<'a, T, const I: usize> {
    data: &'a mut [T; 2],
}

impl<'a, T, const I: usize> ScalarSwizzle<'a, T, I>
where
    T: Scalar,
{
    #[inline]
    pub(crate) fn new(data: &'a mut [T; 2]) -> Self {
        ScalarSwizzle { data }
    }

    /// Current value of the slot.
    #[inline]
    pub fn get(&self) -> T {
        self.data[I]
    }

    /// Write `value` to the slot and return the stored value.
    #[inline]
    pub fn set(&mut self, value: T) -> T {
        self.data[I] = value;
        self.data[I]
    }

    /// Prefix increment, returns the incremented value.
    #[inline]
    pub fn pre_inc(&mut self) -> T {
        self.data[I] += T::one();
        self.data[I]
    }

    /// Postfix increment, returns the value held before incrementing.
    #[inline]
    pub fn post_inc(&mut self) -> T {
        let old = self.data[I];
        self.data[I] += T::one();
        old
    }

    /// Prefix decrement, returns the decremented value.
    #[inline]
    pub fn pre_dec(&mut self) -> T {
        self.data[I] -= T::one();
        self.data[I]
    }

    /// Postfix decrement, returns the value held before decrementing.
    #[inline]
    pub fn post_dec(&mut self) -> T {
        let old = self.data[I];
        self.data[I] -= T::one();
        old
    }
}

impl<'a, T, const I: usize> Deref for ScalarSwizzle<'a, T, I> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.data[I]
    }
}

impl<'a, T, const I: usize> DerefMut for ScalarSwizzle<'a, T, I> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data[I]
    }
}

/// Read only view of the single component slot `I` of a [Vector2].
///
/// Obtained through [Vector2::x_view], [Vector2::i_view], [Vector2::y_view] or
/// [Vector2::j_view]. Mainly useful as the right hand side of a compound assignment through a
/// [ScalarSwizzle], since it only needs a shared borrow of its vector and can be reused.
///
/// # Examples
///
/// ```
/// # use chaos_math::vector::*;
/// let mut a = Vector2::new(1, 2);
/// let b = Vector2::new(10, 20);
/// let by = b.y_view();
/// let mut ax = a.x_mut();
/// ax += by;
/// ax += by;
/// assert_eq!(a.x(), 41);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarSwizzleRef<'a, T, const I: usize> {
    data: &'a [T; 2],
}

impl<'a, T, const I: usize> ScalarSwizzleRef<'a, T, I>
where
    T: Scalar,
{
    #[inline]
    pub(crate) fn new(data: &'a [T; 2]) -> Self {
        ScalarSwizzleRef { data }
    }

    /// Current value of the slot.
    #[inline]
    pub fn get(&self) -> T {
        self.data[I]
    }
}

impl<'a, T, const I: usize> Deref for ScalarSwizzleRef<'a, T, I> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.data[I]
    }
}

macro_rules! impl_scalar_swizzle_op {
    ($OpAssign:ident $op_assign:ident) => {
        impl<'a, T, const I: usize> $OpAssign<T> for ScalarSwizzle<'a, T, I>
        where
            T: Scalar,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                self.data[I].$op_assign(rhs);
            }
        }

        impl<'a, 'b, 'c, T, const I: usize, const J: usize>
            $OpAssign<&'c ScalarSwizzle<'b, T, J>> for ScalarSwizzle<'a, T, I>
        where
            T: Scalar,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: &'c ScalarSwizzle<'b, T, J>) {
                self.data[I].$op_assign(rhs.get());
            }
        }

        impl<'a, 'b, T, const I: usize, const J: usize> $OpAssign<ScalarSwizzleRef<'b, T, J>>
            for ScalarSwizzle<'a, T, I>
        where
            T: Scalar,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: ScalarSwizzleRef<'b, T, J>) {
                self.data[I].$op_assign(rhs.get());
            }
        }
    };
}

impl_scalar_swizzle_op!(AddAssign add_assign);
impl_scalar_swizzle_op!(SubAssign sub_assign);
impl_scalar_swizzle_op!(MulAssign mul_assign);
impl_scalar_swizzle_op!(DivAssign div_assign);

/// Read only view of the component slots `(A, B)` of a [Vector2].
///
/// Obtained through [Vector2::xx], [Vector2::xy], [Vector2::yx] or [Vector2::yy]. The view's first
/// logical component is slot `A` and its second is slot `B`.
///
/// Comparing two views with `==` compares the physical storage slots `0` and `1` of the vectors
/// they borrow, regardless of which slots either view selects. Use [Swizzle2::components_eq] to
/// compare the selected components instead.
///
/// # Examples
///
/// ```
/// # use chaos_math::vector::*;
/// let v = Vector2::new(1, 2);
/// assert_eq!(v.yx().to_vector(), Vector2::new(2, 1));
/// // storage equality, the selectors are not taken into account
/// assert!(v.xy() == v.yx());
/// assert!(!v.xy().components_eq(&v.yx()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Swizzle2<'a, T, const A: usize, const B: usize> {
    data: &'a [T; 2],
}

impl<'a, T, const A: usize, const B: usize> Swizzle2<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    pub(crate) fn new(data: &'a [T; 2]) -> Self {
        Swizzle2 { data }
    }

    /// Read the view into a new vector `(slot[A], slot[B])`.
    #[inline]
    pub fn to_vector(&self) -> Vector2<T> {
        Vector2::new(self.data[A], self.data[B])
    }

    /// Index aware comparison: true if the components selected by `self` equal the components
    /// selected by `other`, in order.
    #[inline]
    pub fn components_eq<const C: usize, const D: usize>(
        &self,
        other: &Swizzle2<'_, T, C, D>,
    ) -> bool {
        self.data[A] == other.data[C] && self.data[B] == other.data[D]
    }
}

impl<'a, 'b, T, const A: usize, const B: usize, const C: usize, const D: usize>
    PartialEq<Swizzle2<'b, T, C, D>> for Swizzle2<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    fn eq(&self, other: &Swizzle2<'b, T, C, D>) -> bool {
        self.data[0] == other.data[0] && self.data[1] == other.data[1]
    }
}

impl<'a, T, const A: usize, const B: usize> Vector2Ref for Swizzle2<'a, T, A, B>
where
    T: Scalar,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.data[A]
    }

    #[inline]
    fn y(&self) -> T {
        self.data[B]
    }
}

impl<'a, T, const A: usize, const B: usize> From<Swizzle2<'a, T, A, B>> for Vector2<T>
where
    T: Scalar,
{
    #[inline]
    fn from(view: Swizzle2<'a, T, A, B>) -> Self {
        view.to_vector()
    }
}

impl<'a, T, const A: usize, const B: usize> fmt::Display for Swizzle2<'a, T, A, B>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.data[A], self.data[B])
    }
}

/// Mutable view of the component slots `(A, B)` of a [Vector2].
///
/// Obtained through [Vector2::xx_mut], [Vector2::xy_mut], [Vector2::yx_mut] or
/// [Vector2::yy_mut].
///
/// Scaling the view with `*=` or `/=` scales both storage slots of the vector, whichever slots
/// the view selects. Equality against other views is storage equality, as for [Swizzle2].
///
/// # Examples
///
/// ```
/// # use chaos_math::vector::*;
/// let mut v = Vector2::new(1, 2);
/// v.yx_mut().set(Vector2::new(10, 20));
/// assert_eq!(v, Vector2::new(20, 10));
///
/// let mut yy = v.yy_mut();
/// yy *= 2;
/// assert_eq!(v, Vector2::new(40, 20));
/// ```
#[derive(Debug)]
pub struct Swizzle2Mut<'a, T, const A: usize, const B: usize> {
    data: &'a mut [T; 2],
}

impl<'a, T, const A: usize, const B: usize> Swizzle2Mut<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    pub(crate) fn new(data: &'a mut [T; 2]) -> Self {
        Swizzle2Mut { data }
    }

    /// Write `vec` through the view and return it.
    ///
    /// The first component of `vec` is written to slot `A`, then the second component is written
    /// to slot `B`. When the view repeats a slot (`xx`, `yy`) the second write wins, e.g. after
    /// `v.xx_mut().set(w)` slot `0` holds `w.y()` and slot `1` is unchanged.
    #[inline]
    pub fn set(&mut self, vec: Vector2<T>) -> Vector2<T> {
        self.data[A] = vec.x();
        self.data[B] = vec.y();
        vec
    }

    /// Read the view into a new vector `(slot[A], slot[B])`.
    #[inline]
    pub fn to_vector(&self) -> Vector2<T> {
        Vector2::new(self.data[A], self.data[B])
    }

    /// Reborrow as a read only view over the same slots.
    #[inline]
    pub fn as_view(&self) -> Swizzle2<'_, T, A, B> {
        Swizzle2::new(&*self.data)
    }
}

impl<'a, T, const A: usize, const B: usize> MulAssign<T> for Swizzle2Mut<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.data[0] *= rhs;
        self.data[1] *= rhs;
    }
}

impl<'a, T, const A: usize, const B: usize> DivAssign<T> for Swizzle2Mut<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.data[0] /= rhs;
        self.data[1] /= rhs;
    }
}

impl<'a, T, const A: usize, const B: usize> Vector2Ref for Swizzle2Mut<'a, T, A, B>
where
    T: Scalar,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.data[A]
    }

    #[inline]
    fn y(&self) -> T {
        self.data[B]
    }
}

impl<'a, 'b, T, const A: usize, const B: usize, const C: usize, const D: usize>
    PartialEq<Swizzle2Mut<'b, T, C, D>> for Swizzle2Mut<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    fn eq(&self, other: &Swizzle2Mut<'b, T, C, D>) -> bool {
        self.as_view() == other.as_view()
    }
}

impl<'a, 'b, T, const A: usize, const B: usize, const C: usize, const D: usize>
    PartialEq<Swizzle2<'b, T, C, D>> for Swizzle2Mut<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    fn eq(&self, other: &Swizzle2<'b, T, C, D>) -> bool {
        self.as_view() == *other
    }
}

impl<'a, 'b, T, const A: usize, const B: usize, const C: usize, const D: usize>
    PartialEq<Swizzle2Mut<'b, T, C, D>> for Swizzle2<'a, T, A, B>
where
    T: Scalar,
{
    #[inline]
    fn eq(&self, other: &Swizzle2Mut<'b, T, C, D>) -> bool {
        *self == other.as_view()
    }
}

use super::Vector2;
use crate::core::traits::{Scalar, Vector2Ref};
use std::{fmt, marker::PhantomData};

/// A read only value derived from a vector every time it is read.
///
/// Implementations must not cache: `compute` reads the owner's current components on each call.
pub trait ComputedProperty<V>
where
    V: Vector2Ref,
{
    /// Type of the derived value.
    type Output;
    /// Derive the value from the current state of `owner`.
    fn compute(owner: &V) -> Self::Output;
}

/// Length of a vector, `sqrt(x * x + y * y)`.
///
/// For integer component types the square root is truncated, see [Scalar::sqrt].
#[derive(Debug, Clone, Copy, Default)]
pub struct Magnitude;

impl<V> ComputedProperty<V> for Magnitude
where
    V: Vector2Ref,
{
    type Output = V::Num;

    #[inline]
    fn compute(owner: &V) -> V::Num {
        let x = owner.x();
        let y = owner.y();
        (x * x + y * y).sqrt()
    }
}

/// Unit length vector pointing in the same direction as the owner.
///
/// There is no zero length guard. A zero length float vector normalizes to `NaN` components and a
/// zero length integer vector panics on the division by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalized;

impl<V> ComputedProperty<V> for Normalized
where
    V: Vector2Ref,
{
    type Output = Vector2<V::Num>;

    #[inline]
    fn compute(owner: &V) -> Vector2<V::Num> {
        let x = owner.x();
        let y = owner.y();
        let mag = Magnitude::compute(owner);
        Vector2::new(x, y) / mag
    }
}

/// Computed property `P` bound to a single owner.
///
/// The binding is a shared borrow taken when the property is created, so the owner cannot be
/// mutated, moved or dropped while the property is alive, and the property can never be re-bound
/// to another owner. Every [Property::get] recomputes from the owner's current state.
///
/// There is no way to write through a property:
///
/// ```compile_fail
/// # use chaos_math::vector::*;
/// let v = Vector2::new(3.0, 4.0);
/// let mut magnitude = v.property::<Magnitude>();
/// magnitude.set(1.0);
/// ```
///
/// Nor can its owner change underneath it:
///
/// ```compile_fail
/// # use chaos_math::vector::*;
/// let mut v = Vector2::new(3.0, 4.0);
/// let magnitude = v.property::<Magnitude>();
/// *v.x_mut() = 6.0;
/// assert_eq!(magnitude.get(), 5.0);
/// ```
///
/// # Examples
///
/// ```
/// # use chaos_math::vector::*;
/// let v = Vector2::new(3.0, 4.0);
/// let magnitude = v.property::<Magnitude>();
/// let normalized = v.property::<Normalized>();
/// assert_eq!(magnitude.get(), 5.0);
/// assert_eq!(normalized.get(), Vector2::new(0.6, 0.8));
/// ```
pub struct Property<'a, V, P> {
    owner: &'a V,
    _property: PhantomData<P>,
}

impl<'a, V, P> Property<'a, V, P>
where
    V: Vector2Ref,
    P: ComputedProperty<V>,
{
    /// Bind the property to `owner` for the lifetime of the borrow.
    #[inline]
    pub fn new(owner: &'a V) -> Self {
        Property {
            owner,
            _property: PhantomData,
        }
    }

    /// Compute the property from the owner's current state.
    #[inline]
    pub fn get(&self) -> P::Output {
        P::compute(self.owner)
    }

    /// The owner this property is bound to.
    #[inline]
    pub fn owner(&self) -> &'a V {
        self.owner
    }
}

impl<'a, V, P> Clone for Property<'a, V, P> {
    #[inline]
    fn clone(&self) -> Self {
        Property {
            owner: self.owner,
            _property: PhantomData,
        }
    }
}

impl<'a, V, P> Copy for Property<'a, V, P> {}

impl<'a, V, P> fmt::Debug for Property<'a, V, P>
where
    V: Vector2Ref,
    P: ComputedProperty<V>,
    P::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.get()).finish()
    }
}


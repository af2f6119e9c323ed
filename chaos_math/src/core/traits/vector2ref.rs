use super::Scalar;

/// Read access to the two logical components of a 2D vector or vector view.
///
/// Computed properties are written against this trait so they can be evaluated over a
/// [Vector2](crate::vector::Vector2) as well as over a read only swizzle view of one.
pub trait Vector2Ref {
    type Num: Scalar;
    /// First logical component.
    fn x(&self) -> Self::Num;
    /// Second logical component.
    fn y(&self) -> Self::Num;
}

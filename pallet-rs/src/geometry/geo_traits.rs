/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Collisions are strict: two shapes that only share a boundary do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

use crate::geometry::Orientation;
use crate::geometry::primitives::Rect;

/// A carton placed on the pallet: its (spacing-inflated) footprint and the orientation it was placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub orientation: Orientation,
}

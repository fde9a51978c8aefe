use crate::geometry::primitives::Rect;
use crate::{Area, Dim};
use std::fmt::{Display, Formatter};

/// Best-Short-Side-Fit score of placing a footprint inside a free rectangle.
///
/// Lower is better. Fields are compared lexicographically in declaration order:
/// the leftover along the tighter side, then along the looser side, then the size of the free rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BssfScore {
    pub short_fit: Dim,
    pub long_fit: Dim,
    pub free_area: Area,
}

impl BssfScore {
    /// Scores placing a `w` x `h` footprint in `free_rect`.
    /// The footprint must fit (see [`Rect::fits`]).
    pub fn new(free_rect: &Rect, w: Dim, h: Dim) -> Self {
        debug_assert!(free_rect.fits(w, h));
        let leftover_w = free_rect.w - w;
        let leftover_h = free_rect.h - h;
        Self {
            short_fit: Dim::min(leftover_w, leftover_h),
            long_fit: Dim::max(leftover_w, leftover_h),
            free_area: free_rect.area(),
        }
    }
}

impl Display for BssfScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.short_fit, self.long_fit, self.free_area)
    }
}

use std::fmt::{Display, Formatter};

use crate::geometry::geo_traits::CollidesWith;
use crate::{Area, Dim};
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle, anchored at its lower-left corner `(x, y)` with extent `w` x `h`.
///
/// A `Rect` is a plain value: every operation below returns new rectangles and never mutates its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: Dim,
    pub y: Dim,
    pub w: Dim,
    pub h: Dim,
}

impl Rect {
    pub fn try_new(x: Dim, y: Dim, w: Dim, h: Dim) -> Result<Self> {
        ensure!(w > 0 && h > 0, "invalid rectangle, w: {w}, h: {h}");
        ensure!(
            x.checked_add(w).is_some() && y.checked_add(h).is_some(),
            "rectangle exceeds the coordinate range, x: {x}, y: {y}, w: {w}, h: {h}"
        );
        Ok(Rect { x, y, w, h })
    }

    pub fn x_max(&self) -> Dim {
        self.x + self.w
    }

    pub fn y_max(&self) -> Dim {
        self.y + self.h
    }

    pub fn area(&self) -> Area {
        self.w as Area * self.h as Area
    }

    /// Returns true if a `w` x `h` footprint fits inside `self` (ignoring position).
    #[inline(always)]
    pub fn fits(&self, w: Dim, h: Dim) -> bool {
        w <= self.w && h <= self.h
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    /// Degenerate intersections (zero width or height) yield `None`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = Dim::max(a.x, b.x);
        let y_min = Dim::max(a.y, b.y);
        let x_max = Dim::min(a.x_max(), b.x_max());
        let y_max = Dim::min(a.y_max(), b.y_max());
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x: x_min,
                y: y_min,
                w: x_max - x_min,
                h: y_max - y_min,
            })
        } else {
            None
        }
    }

    /// Returns the parts of `self` that lie outside of `other`.
    ///
    /// The pieces are, in order: the left and right strips (full height of `self`)
    /// followed by the bottom and top strips (width of the intersection).
    /// Together with the intersection they partition `self` exactly.
    /// If `self` and `other` do not intersect, `self` is returned unchanged.
    pub fn subtract(&self, other: &Rect) -> Vec<Rect> {
        let Some(inter) = Rect::intersection(*self, *other) else {
            return vec![*self];
        };

        let candidates = [
            //left
            Rect {
                x: self.x,
                y: self.y,
                w: inter.x - self.x,
                h: self.h,
            },
            //right
            Rect {
                x: inter.x_max(),
                y: self.y,
                w: self.x_max() - inter.x_max(),
                h: self.h,
            },
            //bottom
            Rect {
                x: inter.x,
                y: self.y,
                w: inter.w,
                h: inter.y - self.y,
            },
            //top
            Rect {
                x: inter.x,
                y: inter.y_max(),
                w: inter.w,
                h: self.y_max() - inter.y_max(),
            },
        ];

        candidates
            .into_iter()
            .filter(|r| r.w > 0 && r.h > 0)
            .collect()
    }

    /// Returns true if `other` lies entirely within `self` (shared boundaries included).
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x_max() >= other.x_max()
            && self.y_max() >= other.y_max()
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[x: {}, y: {}, w: {}, h: {}]", self.x, self.y, self.w, self.h)
    }
}

use crate::geometry::primitives::Rect;
use crate::{Area, Dim};
use anyhow::{Result, ensure};

/// Rectangular loading surface of a pallet. One layer of cartons is packed onto this footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pallet {
    /// Extent along the x-axis
    pub length: Dim,
    /// Extent along the y-axis
    pub width: Dim,
}

impl Pallet {
    pub fn try_new(length: Dim, width: Dim) -> Result<Self> {
        ensure!(
            length > 0 && width > 0,
            "pallet dimensions must be strictly positive, length: {length}, width: {width}"
        );
        Ok(Self { length, width })
    }

    /// The full footprint of the pallet, anchored at the origin.
    pub fn footprint(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            w: self.length,
            h: self.width,
        }
    }

    pub fn area(&self) -> Area {
        self.footprint().area()
    }
}

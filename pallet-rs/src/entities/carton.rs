use crate::{Area, Dim};
use anyhow::{Result, ensure};

/// Footprint of the carton type being palletised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carton {
    pub length: Dim,
    pub width: Dim,
}

impl Carton {
    pub fn try_new(length: Dim, width: Dim) -> Result<Self> {
        ensure!(
            length > 0 && width > 0,
            "carton dimensions must be strictly positive, length: {length}, width: {width}"
        );
        Ok(Self { length, width })
    }

    pub fn is_square(&self) -> bool {
        self.length == self.width
    }

    pub fn area(&self) -> Area {
        self.length as Area * self.width as Area
    }
}

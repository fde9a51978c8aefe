use serde::{Deserialize, Serialize};

use crate::Dim;

/// The two footprints a carton can be placed in.
///
/// The declaration order doubles as the tie-break priority: `Unrotated < Rotated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Length along the x-axis, width along the y-axis
    Unrotated,
    /// Turned by 90°: width along the x-axis, length along the y-axis
    Rotated,
}

impl Orientation {
    /// Footprint `(w, h)` of a `length` x `width` carton in this orientation.
    pub fn footprint(self, length: Dim, width: Dim) -> (Dim, Dim) {
        match self {
            Orientation::Unrotated => (length, width),
            Orientation::Rotated => (width, length),
        }
    }

    pub fn is_rotated(self) -> bool {
        matches!(self, Orientation::Rotated)
    }
}

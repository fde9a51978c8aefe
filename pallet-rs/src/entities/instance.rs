use crate::entities::{Carton, Pallet};
use crate::geometry::Orientation;
use crate::{Area, Dim};
use anyhow::{Context, Result};
use itertools::Itertools;

/// A single pallet layer to be packed: the pallet, the carton type and the placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerInstance {
    pub pallet: Pallet,
    pub carton: Carton,
    /// Whether cartons may be turned by 90°
    pub allow_rotation: bool,
    /// Margin added to both the length and the width of every carton footprint
    pub spacing: Dim,
}

/// Footprint of a carton in a specific orientation, spacing included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientedFootprint {
    pub orientation: Orientation,
    pub w: Dim,
    pub h: Dim,
}

impl OrientedFootprint {
    pub fn area(&self) -> Area {
        self.w as Area * self.h as Area
    }
}

impl LayerInstance {
    pub fn try_new(
        pallet: Pallet,
        carton: Carton,
        allow_rotation: bool,
        spacing: Dim,
    ) -> Result<Self> {
        carton
            .length
            .checked_add(spacing)
            .zip(carton.width.checked_add(spacing))
            .with_context(|| {
                format!(
                    "spacing {spacing} overflows the carton footprint ({} x {})",
                    carton.length, carton.width
                )
            })?;
        Ok(Self {
            pallet,
            carton,
            allow_rotation,
            spacing,
        })
    }

    /// The footprints a carton can be placed in, in tie-break priority order.
    ///
    /// The spacing is folded into the carton's own length and width,
    /// so no margin is reserved along the pallet's leading edges.
    /// Square cartons only have a single orientation.
    pub fn orientations(&self) -> Vec<OrientedFootprint> {
        let length = self.carton.length + self.spacing;
        let width = self.carton.width + self.spacing;

        let allowed = match self.allow_rotation && !self.carton.is_square() {
            true => vec![Orientation::Unrotated, Orientation::Rotated],
            false => vec![Orientation::Unrotated],
        };

        allowed
            .into_iter()
            .map(|orientation| {
                let (w, h) = orientation.footprint(length, width);
                OrientedFootprint { orientation, w, h }
            })
            .collect_vec()
    }

    /// Upper bound on the number of cartons that can be placed in a single layer:
    /// the pallet area divided by the smallest footprint area.
    pub fn placement_upper_bound(&self) -> usize {
        let min_area = self
            .orientations()
            .iter()
            .map(|o| o.area())
            .min()
            .unwrap_or(Area::MAX);
        usize::try_from(self.pallet.area() / min_area).unwrap_or(usize::MAX)
    }
}

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use itertools::Itertools;

/// Unoccupied area of a layer, tracked as a list of free rectangles.
///
/// The list is neither minimal nor disjoint: residues of different free rectangles may overlap.
/// Every free rectangle is disjoint from all placements made so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeSpace {
    rects: Vec<Rect>,
}

impl FreeSpace {
    /// Free space of an empty layer: a single rectangle spanning the whole footprint.
    pub fn new(footprint: Rect) -> Self {
        Self {
            rects: vec![footprint],
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns the free space that remains after `placed` has been occupied.
    ///
    /// Free rectangles disjoint from `placed` are kept as is, the others are replaced by their
    /// residues (see [`Rect::subtract`]). Relative order is preserved.
    pub fn carve(&self, placed: &Rect) -> FreeSpace {
        let rects = self
            .rects
            .iter()
            .flat_map(|fr| match fr.collides_with(placed) {
                false => vec![*fr],
                true => fr.subtract(placed),
            })
            .collect_vec();

        FreeSpace { rects }
    }
}

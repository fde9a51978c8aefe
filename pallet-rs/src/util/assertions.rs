use crate::entities::{LayerInstance, Placement};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the packer
//Used in debug_assert!() blocks

/// No two placed footprints overlap and every one of them lies within the pallet.
pub fn placements_are_valid(instance: &LayerInstance, placements: &[Placement]) -> bool {
    let pallet = instance.pallet.footprint();

    for p in placements {
        if !pallet.contains(&p.rect) {
            error!("placement {} is not contained in pallet {}", p.rect, pallet);
            return false;
        }
    }

    for (a, b) in placements.iter().tuple_combinations() {
        if a.rect.collides_with(&b.rect) {
            error!("placements {} and {} overlap", a.rect, b.rect);
            return false;
        }
    }

    true
}

/// None of the free rectangles overlap with an already placed footprint.
pub fn free_rects_are_vacant(free_rects: &[Rect], placements: &[Placement]) -> bool {
    for fr in free_rects {
        if let Some(p) = placements.iter().find(|p| p.rect.collides_with(fr)) {
            error!("free rectangle {} overlaps placement {}", fr, p.rect);
            return false;
        }
    }
    true
}

/// The pieces produced by [`Rect::subtract`] together with the intersection add up to the original area.
pub fn subtraction_conserves_area(a: &Rect, b: &Rect, pieces: &[Rect]) -> bool {
    let inter_area = Rect::intersection(*a, *b).map_or(0, |i| i.area());
    let pieces_area = pieces.iter().map(|r| r.area()).sum::<crate::Area>();
    inter_area + pieces_area == a.area()
}

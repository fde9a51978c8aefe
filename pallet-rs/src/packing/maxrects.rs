use std::time::Instant;

use crate::entities::{LayerInstance, LayerSolution, OrientedFootprint, Placement};
use crate::geometry::Orientation;
use crate::geometry::primitives::Rect;
use crate::packing::free_space::FreeSpace;
use crate::packing::score::BssfScore;
use crate::util::PackConfig;
use crate::util::assertions;
use log::{debug, info, warn};

/// State of the [`MaxRectsPacker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackState {
    /// More cartons may still fit
    Searching,
    /// No orientation fits any free rectangle anymore (or the iteration cap was hit)
    Done,
}

/// A feasible (free rectangle, orientation) pair considered during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the free rectangle in the current free list
    pub free_idx: usize,
    pub footprint: OrientedFootprint,
    pub score: BssfScore,
}

impl Candidate {
    /// Total order used to pick the best candidate.
    /// Ties on the score go to the lowest free rectangle index, then to the unrotated orientation.
    fn selection_key(&self) -> (BssfScore, usize, Orientation) {
        (self.score, self.free_idx, self.footprint.orientation)
    }
}

/// Greedy MaxRects packer using Best-Short-Side-Fit scoring.
///
/// Every round, all feasible (free rectangle, orientation) pairs are scored, the best one is placed
/// at the origin of its free rectangle and the free space is rebuilt around it.
pub struct MaxRectsPacker {
    pub instance: LayerInstance,
    pub config: PackConfig,
    orientations: Vec<OrientedFootprint>,
    free_space: FreeSpace,
    placements: Vec<Placement>,
    state: PackState,
    truncated: bool,
}

impl MaxRectsPacker {
    pub fn new(instance: LayerInstance, config: PackConfig) -> Self {
        Self {
            orientations: instance.orientations(),
            free_space: FreeSpace::new(instance.pallet.footprint()),
            placements: vec![],
            state: PackState::Searching,
            truncated: false,
            instance,
            config,
        }
    }

    pub fn state(&self) -> PackState {
        self.state
    }

    pub fn free_space(&self) -> &FreeSpace {
        &self.free_space
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Packs the layer until no carton fits anymore.
    pub fn solve(&mut self) -> LayerSolution {
        let start = Instant::now();

        while self.step().is_some() {}

        let solution = LayerSolution {
            pallet: self.instance.pallet,
            placements: self.placements.clone(),
            truncated: self.truncated,
        };

        info!(
            "[MRP] packed {} cartons in {:.3}ms, density: {:.3}%, {} free rectangles left",
            solution.n_placed(),
            start.elapsed().as_secs_f64() * 1000.0,
            solution.density(&self.instance) * 100.0,
            self.free_space.len()
        );

        solution
    }

    /// Performs a single round: places one carton and returns it, or returns `None` once [`PackState::Done`].
    pub fn step(&mut self) -> Option<Placement> {
        if self.state == PackState::Done {
            return None;
        }

        let Some(best) = self.best_candidate() else {
            debug!("[MRP] no orientation fits any of the {} free rectangles", self.free_space.len());
            self.state = PackState::Done;
            return None;
        };

        if let Some(cap) = self.config.max_iterations {
            if self.placements.len() >= cap {
                warn!("[MRP] iteration cap of {cap} reached, stopping search");
                self.truncated = true;
                self.state = PackState::Done;
                return None;
            }
        }

        let free_rect = self.free_space.rects()[best.free_idx];
        let placement = Placement {
            rect: Rect {
                x: free_rect.x,
                y: free_rect.y,
                w: best.footprint.w,
                h: best.footprint.h,
            },
            orientation: best.footprint.orientation,
        };

        self.placements.push(placement);
        self.free_space = self.free_space.carve(&placement.rect);

        debug!(
            "[MRP] placing carton {} at {} ({:?}), score: {}",
            self.placements.len(),
            placement.rect,
            placement.orientation,
            best.score
        );

        debug_assert!(assertions::placements_are_valid(&self.instance, &self.placements));
        debug_assert!(assertions::free_rects_are_vacant(self.free_space.rects(), &self.placements));
        debug_assert!(self.placements.len() <= self.instance.placement_upper_bound());

        Some(placement)
    }

    /// All feasible (free rectangle, orientation) pairs, in enumeration order:
    /// free rectangles in list order, orientations in priority order.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.free_space
            .rects()
            .iter()
            .enumerate()
            .flat_map(move |(free_idx, fr)| {
                self.orientations
                    .iter()
                    .filter(move |o| fr.fits(o.w, o.h))
                    .map(move |o| Candidate {
                        free_idx,
                        footprint: *o,
                        score: BssfScore::new(fr, o.w, o.h),
                    })
            })
    }

    fn best_candidate(&self) -> Option<Candidate> {
        self.candidates().min_by_key(Candidate::selection_key)
    }
}

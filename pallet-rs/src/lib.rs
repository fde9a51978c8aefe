//! Greedy layer packing of identical cartons on a rectangular pallet footprint.
//!
//! Free space is tracked as a list of (possibly overlapping) rectangles, MaxRects style,
//! and every placement is chosen with the Best-Short-Side-Fit rule.

/// Geometric primitives and the rectangle algebra used by the packer
pub mod geometry;

/// Entities to model a single pallet layer
pub mod entities;

/// The MaxRects packing engine and its placement scorer
pub mod packing;

/// Importing layer instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Length unit used throughout the library. Lengths are exact integers (millimetres by convention).
pub type Dim = u64;

/// Area unit, wide enough to hold the product of any two [`Dim`]s.
pub type Area = u128;

#[doc(inline)]
pub use packing::pack_layer;

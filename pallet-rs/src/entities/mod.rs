mod carton;
mod instance;
mod pallet;
mod placement;
mod solution;

#[doc(inline)]
pub use carton::Carton;
#[doc(inline)]
pub use instance::LayerInstance;
#[doc(inline)]
pub use instance::OrientedFootprint;
#[doc(inline)]
pub use pallet::Pallet;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use solution::LayerSolution;

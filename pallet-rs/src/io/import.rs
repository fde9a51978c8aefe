use crate::Dim;
use crate::entities::{Carton, LayerInstance, Pallet};
use crate::io::ext_repr::{ExtCarton, ExtLayerInstance, ExtPallet};
use anyhow::{Context, Result, ensure};
use float_cmp::approx_eq;

/// Largest length accepted from an external representation.
pub const MAX_DIM: Dim = 1_000_000_000;

/// Converts an [`ExtLayerInstance`] into a validated [`LayerInstance`].
pub fn import_instance(ext_instance: &ExtLayerInstance) -> Result<LayerInstance> {
    let pallet = import_pallet(&ext_instance.pallet)?;
    let carton = import_carton(&ext_instance.carton)?;
    let spacing = import_spacing(ext_instance.spacing)?;
    LayerInstance::try_new(pallet, carton, ext_instance.allow_rotation, spacing)
}

pub fn import_pallet(ext_pallet: &ExtPallet) -> Result<Pallet> {
    Pallet::try_new(
        import_length("pallet length", ext_pallet.length)?,
        import_length("pallet width", ext_pallet.width)?,
    )
}

pub fn import_carton(ext_carton: &ExtCarton) -> Result<Carton> {
    Carton::try_new(
        import_length("carton length", ext_carton.length)?,
        import_length("carton width", ext_carton.width)?,
    )
}

/// Lengths must be finite, strictly positive and a whole number of units.
pub fn import_length(name: &str, value: f64) -> Result<Dim> {
    ensure!(value.is_finite(), "{name} must be finite, got {value}");
    ensure!(value > 0.0, "{name} must be strictly positive, got {value}");
    to_dim(value).with_context(|| format!("invalid {name}"))
}

/// Same as [`import_length`], except that a spacing of zero is allowed.
pub fn import_spacing(value: f64) -> Result<Dim> {
    ensure!(value.is_finite(), "spacing must be finite, got {value}");
    ensure!(value >= 0.0, "spacing must not be negative, got {value}");
    to_dim(value).context("invalid spacing")
}

fn to_dim(value: f64) -> Result<Dim> {
    let rounded = value.round();
    ensure!(
        approx_eq!(f64, value, rounded, ulps = 2),
        "{value} is not a whole number of units"
    );
    ensure!(
        rounded <= MAX_DIM as f64,
        "{value} exceeds the maximum of {MAX_DIM}"
    );
    Ok(rounded as Dim)
}

mod layer_to_svg;
pub mod svg_util;

#[doc(inline)]
pub use layer_to_svg::layer_to_svg;

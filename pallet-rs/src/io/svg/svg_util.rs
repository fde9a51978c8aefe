use crate::Dim;
use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Print the placement index in the center of each carton
    #[serde(default = "default_true")]
    pub labels: bool,
    ///Draw the actual carton outline inside its footprint when a spacing is configured
    #[serde(default = "default_true")]
    pub carton_outlines: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
            carton_outlines: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub pallet_fill: Color,
    pub carton_fill: Color,
    pub rotated_carton_fill: Color,
    pub label_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        pallet_fill: Color(0xCC, 0x82, 0x4A),
        carton_fill: Color(0xFF, 0xC8, 0x79),
        rotated_carton_fill: Color(0xE8, 0xA8, 0x5C),
        label_color: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        pallet_fill: Color(0xD3, 0xD3, 0xD3),
        carton_fill: Color(0x9A, 0x9A, 0x9A),
        rotated_carton_fill: Color(0x7A, 0x7A, 0x7A),
        label_color: Color(0x00, 0x00, 0x00),
    };

    pub const SKY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 1.5,
        pallet_fill: Color(0xFF, 0xFF, 0xFF),
        carton_fill: Color(0x87, 0xCE, 0xEB), // SKYBLUE
        rotated_carton_fill: Color(0x5F, 0xAE, 0xD3),
        label_color: Color(0x00, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Path data of `rect`, with the y-axis flipped so that the origin lies in the lower-left corner
/// of a canvas that is `canvas_height` high.
pub fn rect_data(rect: &Rect, canvas_height: Dim) -> Data {
    let x_min = rect.x as f32;
    let x_max = rect.x_max() as f32;
    let y_top = canvas_height.saturating_sub(rect.y_max()) as f32;
    let y_bottom = canvas_height.saturating_sub(rect.y) as f32;
    Data::new()
        .move_to((x_min, y_top))
        .line_to((x_max, y_top))
        .line_to((x_max, y_bottom))
        .line_to((x_min, y_bottom))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

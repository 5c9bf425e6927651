//! Font color parsing.
//!
//! Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and a set of common CSS color
//! names. The result is an opaque-by-default `Rgba<u8>`.

use image::Rgba;

use crate::error::{CertgenError, Result};

pub fn parse_color(s: &str) -> Result<Rgba<u8>> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    parse_named(s)
}

fn parse_hex(hex: &str) -> Result<Rgba<u8>> {
    let invalid = || CertgenError::InvalidConfig(format!("invalid hex color: #{}", hex));

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        // #rgb -> #rrggbb
        3 => Ok(Rgba([
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
            255,
        ])),
        6 => Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255])),
        8 => Ok(Rgba([
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        ])),
        _ => Err(invalid()),
    }
}

fn parse_named(name: &str) -> Result<Rgba<u8>> {
    let rgb: [u8; 3] = match name.to_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "navy" => [0, 0, 128],
        "maroon" => [128, 0, 0],
        "teal" => [0, 128, 128],
        "gold" => [255, 215, 0],
        "silver" => [192, 192, 192],
        "gray" | "grey" => [128, 128, 128],
        "darkgray" | "darkgrey" => [169, 169, 169],
        "darkblue" => [0, 0, 139],
        "darkgreen" => [0, 100, 0],
        "darkred" => [139, 0, 0],
        "indigo" => [75, 0, 130],
        "crimson" => [220, 20, 60],
        "goldenrod" => [218, 165, 32],
        "saddlebrown" => [139, 69, 19],
        _ => {
            return Err(CertgenError::InvalidConfig(format!(
                "unknown color name: {}",
                name
            )))
        }
    };

    Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

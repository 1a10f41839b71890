//! Background color selection.

use std::fmt;

use image::{Rgba, RgbaImage};

use crate::error::ProcessingError;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Dark gray used when the source's corner pixel is fully transparent.
pub const DEFAULT_BACKGROUND: Color = Color::new(30, 30, 30, 255);

/// Fully transparent black, the fill of the foreground canvas.
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Returns true if the alpha channel is zero.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Picks the background color from the top-left pixel of the source.
///
/// A fully transparent corner falls back to [`DEFAULT_BACKGROUND`]. Any other
/// corner color is used verbatim, alpha included, so a semi-transparent corner
/// yields a semi-transparent background.
pub fn select_background(source: &RgbaImage) -> Result<Color, ProcessingError> {
    let corner = source
        .get_pixel_checked(0, 0)
        .ok_or(ProcessingError::EmptySource)?;

    let color = Color::from(*corner);
    if color.is_transparent() {
        log::debug!("corner pixel {color} is transparent, using {DEFAULT_BACKGROUND}");
        Ok(DEFAULT_BACKGROUND)
    } else {
        log::debug!("sampled background color {color}");
        Ok(color)
    }
}

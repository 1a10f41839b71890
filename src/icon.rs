//! Pixel-space value types and the rendered adaptive icon set.
//!
//! An Android adaptive icon is delivered as two layers (foreground and
//! background) plus a flattened fallback for launchers that cannot
//! composite layers themselves.

use image::RgbaImage;

use crate::color::Color;
use crate::layout::Geometry;

/// A rectangle defined in pixel coordinates.
///
/// Used to describe the region of a canvas covered by the pasted
/// foreground content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the canvas
    pub x: u32,
    /// Y offset from the top edge of the canvas
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns true if the pixel at (px, py) lies inside the rectangle.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the size of an image.
    pub fn of(image: &RgbaImage) -> Self {
        Self::new(image.width(), image.height())
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns the larger of the two dimensions.
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The three rendered canvases of an adaptive icon.
///
/// Produced by [`IconAdapter::render`](crate::IconAdapter::render) and
/// written to disk by [`IconAdapter::save`](crate::IconAdapter::save).
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveIconSet {
    /// Solid fill of [`color`](Self::color).
    pub background: RgbaImage,

    /// Resized source centered on a transparent canvas.
    pub foreground: RgbaImage,

    /// Resized source centered on the background fill.
    pub padded: RgbaImage,

    /// The background color that was selected from the source.
    pub color: Color,

    /// Scale, resized size and paste offsets used for the foreground.
    pub geometry: Geometry,
}

impl AdaptiveIconSet {
    /// Returns the canvas region covered by the resized source.
    pub fn content_bounds(&self) -> RectPx {
        self.geometry.paste_rect()
    }
}

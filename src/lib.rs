//! adaptive-icon: Android adaptive icon layers from a single source image
//!
//! This crate derives the three assets an Android launcher icon needs from one
//! square-ish source image:
//!
//! - a solid **background** layer in the color of the source's top-left pixel
//! - a **foreground** layer with the source scaled into the 264 px safe zone
//!   and centered on a transparent 432 px canvas
//! - a **padded** fallback with the foreground flattened onto the background
//!
//! # Example
//!
//! ```
//! use adaptive_icon::{IconAdapter, TARGET_SIZE};
//! use image::{Rgba, RgbaImage};
//!
//! let source = RgbaImage::from_pixel(100, 200, Rgba([255, 0, 0, 255]));
//! let icons = IconAdapter::render(&source).unwrap();
//!
//! assert_eq!(icons.background.dimensions(), (TARGET_SIZE, TARGET_SIZE));
//! assert_eq!(icons.geometry.offset_x, 150);
//! ```
//!
//! Use [`IconAdapter::run`] to read `assets/game_icon.png` and write the three
//! layers next to it.

mod adapter;
mod color;
mod compose;
mod error;
mod icon;
mod layout;

pub use adapter::{IconAdapter, IconPaths};
pub use color::{select_background, Color, DEFAULT_BACKGROUND, TRANSPARENT};
pub use compose::{filled_canvas, paste_masked, resample};
pub use error::{ensure_png_support, Error, ProcessingError};
pub use icon::{AdaptiveIconSet, RectPx, SizePx};
pub use layout::{Geometry, SAFE_DIAMETER, TARGET_SIZE};

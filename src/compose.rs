//! Canvas creation, resampling and masked pasting.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::icon::SizePx;
use crate::layout::TARGET_SIZE;

// ============================================================================
// Canvases
// ============================================================================

/// Creates a `TARGET_SIZE` x `TARGET_SIZE` canvas uniformly filled with `color`.
pub fn filled_canvas(color: Color) -> RgbaImage {
    RgbaImage::from_pixel(TARGET_SIZE, TARGET_SIZE, color.into())
}

// ============================================================================
// Resampling
// ============================================================================

/// Resamples `source` to exactly `size` with a Lanczos3 filter.
pub fn resample(source: &RgbaImage, size: SizePx) -> RgbaImage {
    imageops::resize(source, size.width, size.height, FilterType::Lanczos3)
}

// ============================================================================
// Compositing
// ============================================================================

/// Pastes `src` onto `dest` at (x, y), using the source's own alpha as mask.
///
/// Every destination channel, alpha included, is interpolated towards the
/// source channel by `mask / 255`. A fully opaque source pixel replaces the
/// destination pixel and a fully transparent one leaves it untouched. Pixels
/// falling outside `dest` are skipped.
pub fn paste_masked(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let (dx, dy) = (x + sx, y + sy);
        let Some(dst_pixel) = dest.get_pixel_mut_checked(dx, dy) else {
            continue;
        };
        *dst_pixel = mask_blend(*src_pixel, *dst_pixel);
    }
}

/// Blends `dst` towards `src` by the source alpha, channel by channel.
fn mask_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let mask = u32::from(src[3]);
    match mask {
        0 => dst,
        255 => src,
        _ => {
            let blend = |s: u8, d: u8| -> u8 {
                ((u32::from(s) * mask + u32::from(d) * (255 - mask) + 127) / 255) as u8
            };
            Rgba([
                blend(src[0], dst[0]),
                blend(src[1], dst[1]),
                blend(src[2], dst[2]),
                blend(src[3], dst[3]),
            ])
        }
    }
}

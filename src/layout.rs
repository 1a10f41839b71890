//! Canvas constants and foreground placement.

use crate::error::ProcessingError;
use crate::icon::{RectPx, SizePx};

/// Edge length of every output canvas.
pub const TARGET_SIZE: u32 = 432;

/// Diameter of the launcher's guaranteed-visible circle on a
/// [`TARGET_SIZE`] canvas.
pub const SAFE_DIAMETER: u32 = 264;

/// Placement of the resized source on a target canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// `SAFE_DIAMETER / max(width, height)` of the source.
    pub scale: f64,
    /// Size of the resampled source.
    pub size: SizePx,
    /// Left offset of the pasted source.
    pub offset_x: u32,
    /// Top offset of the pasted source.
    pub offset_y: u32,
}

impl Geometry {
    /// Fits a source of the given size into the safe zone and centers it.
    ///
    /// Dimensions are floored, never rounded. The floor is taken on the exact
    /// rational `dim * SAFE_DIAMETER / max_side`, so the larger side always
    /// maps to exactly [`SAFE_DIAMETER`].
    pub fn fit(source: SizePx) -> Result<Self, ProcessingError> {
        if source.is_empty() {
            return Err(ProcessingError::EmptySource);
        }

        let max_side = u64::from(source.max_side());
        let floor_scaled = |dim: u32| (u64::from(dim) * u64::from(SAFE_DIAMETER) / max_side) as u32;
        let size = SizePx::new(floor_scaled(source.width), floor_scaled(source.height));

        if size.is_empty() {
            return Err(ProcessingError::DegenerateResize {
                width: source.width,
                height: source.height,
            });
        }

        let geometry = Self {
            scale: f64::from(SAFE_DIAMETER) / max_side as f64,
            size,
            offset_x: (TARGET_SIZE - size.width) / 2,
            offset_y: (TARGET_SIZE - size.height) / 2,
        };
        log::debug!(
            "scale {:.4}: {}x{} -> {}x{} at ({}, {})",
            geometry.scale,
            source.width,
            source.height,
            size.width,
            size.height,
            geometry.offset_x,
            geometry.offset_y
        );
        Ok(geometry)
    }

    /// Returns the canvas region the resized source is pasted into.
    pub fn paste_rect(&self) -> RectPx {
        RectPx::new(self.offset_x, self.offset_y, self.size.width, self.size.height)
    }
}

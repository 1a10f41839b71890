//! Error types for adaptive icon generation.

use std::path::PathBuf;

use image::{ImageError, ImageFormat};
use thiserror::Error;

/// Outcome of a failed run.
///
/// Only [`Error::MissingDependency`] is fatal to the process; everything else
/// is reported and the run ends normally.
#[derive(Debug, Error)]
pub enum Error {
    /// The linked imaging library cannot read and write the required format.
    #[error("{format:?} support not found in the image library; rebuild `image` with the `png` feature")]
    MissingDependency { format: ImageFormat },

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl Error {
    /// Returns true if the process should exit with a failure status.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingDependency { .. })
    }
}

/// Failure while loading, rendering or saving an icon.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("source image has no pixels")]
    EmptySource,

    #[error("source image {width}x{height} is too thin to fit the safe zone")]
    DegenerateResize { width: u32, height: u32 },

    #[error("failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Checks that the imaging library can both decode and encode PNG.
pub fn ensure_png_support() -> Result<(), Error> {
    let format = ImageFormat::Png;
    if format.reading_enabled() && format.writing_enabled() {
        Ok(())
    } else {
        Err(Error::MissingDependency { format })
    }
}

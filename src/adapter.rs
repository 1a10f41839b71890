//! Adaptive icon generation from a single source image.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::color::{self, Color, TRANSPARENT};
use crate::compose::{filled_canvas, paste_masked, resample};
use crate::error::{ensure_png_support, Error, ProcessingError};
use crate::icon::{AdaptiveIconSet, SizePx};
use crate::layout::Geometry;

// ============================================================================
// IconPaths
// ============================================================================

/// Locations of the source icon and the three generated layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub input: PathBuf,
    pub foreground: PathBuf,
    pub background: PathBuf,
    pub padded: PathBuf,
}

impl IconPaths {
    const INPUT: &'static str = "assets/game_icon.png";
    const FOREGROUND: &'static str = "assets/game_icon_adaptive_foreground.png";
    const BACKGROUND: &'static str = "assets/game_icon_adaptive_background.png";
    const PADDED: &'static str = "assets/game_icon_padded.png";

    /// Returns the standard `assets/` layout rooted at `root`.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input: root.join(Self::INPUT),
            foreground: root.join(Self::FOREGROUND),
            background: root.join(Self::BACKGROUND),
            padded: root.join(Self::PADDED),
        }
    }

    /// Returns the output paths in the order they are written.
    pub fn outputs(&self) -> [&Path; 3] {
        [&self.background, &self.foreground, &self.padded]
    }
}

impl Default for IconPaths {
    /// The standard layout relative to the working directory.
    fn default() -> Self {
        Self {
            input: PathBuf::from(Self::INPUT),
            foreground: PathBuf::from(Self::FOREGROUND),
            background: PathBuf::from(Self::BACKGROUND),
            padded: PathBuf::from(Self::PADDED),
        }
    }
}

// ============================================================================
// IconAdapter
// ============================================================================

/// Derives Android adaptive icon layers from one source icon.
///
/// # Outputs
///
/// 1. **Background** - a solid fill of the source's top-left color
/// 2. **Foreground** - the source scaled into the safe zone, centered on a
///    transparent canvas
/// 3. **Padded** - the foreground flattened onto the background
///
/// # Example
///
/// ```no_run
/// use adaptive_icon::{IconAdapter, IconPaths};
///
/// let adapter = IconAdapter::new(IconPaths::default());
/// match adapter.run() {
///     Ok(icons) => println!("background {}", icons.color),
///     Err(err) => eprintln!("{err}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconAdapter {
    paths: IconPaths,
}

impl IconAdapter {
    pub fn new(paths: IconPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &IconPaths {
        &self.paths
    }

    /// Generates and writes all three layers.
    ///
    /// Layers are written in order (background, foreground, padded) and the
    /// first failure stops the run. Files written before the failure are
    /// left in place.
    pub fn run(&self) -> Result<AdaptiveIconSet, Error> {
        ensure_png_support()?;

        let source = self.load()?;

        let (color, background) = background_layer(&source)?;
        self.write(&background, &self.paths.background)?;
        log::info!(
            "Created {} with color {color}",
            self.paths.background.display()
        );

        let (geometry, resized) = fit_source(&source)?;

        let foreground = foreground_layer(&resized, &geometry);
        self.write(&foreground, &self.paths.foreground)?;
        log::info!("Created {}", self.paths.foreground.display());

        let padded = padded_layer(&resized, &geometry, color);
        self.write(&padded, &self.paths.padded)?;
        log::info!("Created {}", self.paths.padded.display());

        Ok(AdaptiveIconSet {
            background,
            foreground,
            padded,
            color,
            geometry,
        })
    }

    /// Decodes the source icon as RGBA.
    pub fn load(&self) -> Result<RgbaImage, ProcessingError> {
        let path = &self.paths.input;
        if !path.exists() {
            return Err(ProcessingError::MissingInput { path: path.clone() });
        }

        let image = image::open(path).map_err(|source| ProcessingError::Decode {
            path: path.clone(),
            source,
        })?;
        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(image.into_rgba8())
    }

    /// Renders all three layers in memory without touching the filesystem.
    pub fn render(source: &RgbaImage) -> Result<AdaptiveIconSet, ProcessingError> {
        let (color, background) = background_layer(source)?;
        let (geometry, resized) = fit_source(source)?;

        Ok(AdaptiveIconSet {
            background,
            foreground: foreground_layer(&resized, &geometry),
            padded: padded_layer(&resized, &geometry, color),
            color,
            geometry,
        })
    }

    /// Writes previously rendered layers to their output paths.
    pub fn save(&self, icons: &AdaptiveIconSet) -> Result<(), ProcessingError> {
        self.write(&icons.background, &self.paths.background)?;
        self.write(&icons.foreground, &self.paths.foreground)?;
        self.write(&icons.padded, &self.paths.padded)?;
        Ok(())
    }

    fn write(&self, image: &RgbaImage, path: &Path) -> Result<(), ProcessingError> {
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| ProcessingError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

// ============================================================================
// Layers
// ============================================================================

fn background_layer(source: &RgbaImage) -> Result<(Color, RgbaImage), ProcessingError> {
    let color = color::select_background(source)?;
    Ok((color, filled_canvas(color)))
}

fn fit_source(source: &RgbaImage) -> Result<(Geometry, RgbaImage), ProcessingError> {
    let geometry = Geometry::fit(SizePx::of(source))?;
    let resized = resample(source, geometry.size);
    Ok((geometry, resized))
}

fn foreground_layer(resized: &RgbaImage, geometry: &Geometry) -> RgbaImage {
    let mut canvas = filled_canvas(TRANSPARENT);
    paste_masked(&mut canvas, resized, geometry.offset_x, geometry.offset_y);
    canvas
}

fn padded_layer(resized: &RgbaImage, geometry: &Geometry, color: Color) -> RgbaImage {
    let mut canvas = filled_canvas(color);
    paste_masked(&mut canvas, resized, geometry.offset_x, geometry.offset_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_BACKGROUND;
    use crate::layout::{SAFE_DIAMETER, TARGET_SIZE};
    use image::Rgba;
    use std::fs;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn workspace_with(source: Option<&RgbaImage>) -> (TempDir, IconAdapter) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        let paths = IconPaths::in_dir(dir.path());
        if let Some(source) = source {
            source.save(&paths.input).unwrap();
        }
        (dir, IconAdapter::new(paths))
    }

    #[test]
    fn default_paths_are_fixed() {
        let paths = IconPaths::default();
        assert_eq!(paths.input, Path::new("assets/game_icon.png"));
        assert_eq!(
            paths.foreground,
            Path::new("assets/game_icon_adaptive_foreground.png")
        );
        assert_eq!(
            paths.background,
            Path::new("assets/game_icon_adaptive_background.png")
        );
        assert_eq!(paths.padded, Path::new("assets/game_icon_padded.png"));
    }

    #[test]
    fn tall_red_source() {
        let source = RgbaImage::from_pixel(100, 200, RED);
        let icons = IconAdapter::render(&source).unwrap();

        assert_eq!(icons.color.as_tuple(), (255, 0, 0, 255));
        assert_eq!(icons.geometry.size, SizePx::new(132, 264));
        assert_eq!((icons.geometry.offset_x, icons.geometry.offset_y), (150, 0));

        assert_eq!(icons.background.dimensions(), (TARGET_SIZE, TARGET_SIZE));
        assert!(icons.background.pixels().all(|p| *p == RED));

        let block = icons.content_bounds();
        for (x, y, pixel) in icons.foreground.enumerate_pixels() {
            let expected = if block.contains(x, y) { RED } else { CLEAR };
            assert_eq!(*pixel, expected, "foreground pixel ({x}, {y})");
        }
    }

    #[test]
    fn transparent_corner_uses_default_background() {
        let mut source = RgbaImage::from_pixel(50, 50, Rgba([0, 200, 0, 255]));
        source.put_pixel(0, 0, CLEAR);

        let icons = IconAdapter::render(&source).unwrap();

        assert_eq!(icons.color, DEFAULT_BACKGROUND);
        assert!(icons
            .background
            .pixels()
            .all(|p| p.0 == [30, 30, 30, 255]));
    }

    #[test]
    fn padded_matches_background_outside_and_source_inside() {
        let mut source = RgbaImage::from_pixel(64, 32, Rgba([0, 0, 255, 255]));
        source.put_pixel(0, 0, Rgba([10, 20, 30, 255]));

        let icons = IconAdapter::render(&source).unwrap();
        let rect = icons.content_bounds();
        assert_eq!(rect.width, SAFE_DIAMETER);
        assert_eq!(rect.height, 132);

        let resized = resample(&source, icons.geometry.size);
        for (x, y, pixel) in icons.padded.enumerate_pixels() {
            if rect.contains(x, y) {
                assert_eq!(*pixel, *resized.get_pixel(x - rect.x, y - rect.y));
                assert_eq!(*pixel, *icons.foreground.get_pixel(x, y));
            } else {
                assert_eq!(*pixel, *icons.background.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn run_writes_three_png_layers() {
        let source = RgbaImage::from_pixel(100, 200, RED);
        let (_dir, adapter) = workspace_with(Some(&source));

        let icons = adapter.run().unwrap();

        for path in adapter.paths().outputs() {
            let written = image::open(path).unwrap().into_rgba8();
            assert_eq!(written.dimensions(), (TARGET_SIZE, TARGET_SIZE));
        }
        let padded = image::open(&adapter.paths().padded).unwrap().into_rgba8();
        assert_eq!(padded, icons.padded);
        let foreground = image::open(&adapter.paths().foreground)
            .unwrap()
            .into_rgba8();
        assert_eq!(foreground, icons.foreground);
    }

    #[test]
    fn save_round_trips_rendered_layers() {
        let source = RgbaImage::from_pixel(40, 40, Rgba([9, 9, 9, 255]));
        let (_dir, adapter) = workspace_with(None);

        let icons = IconAdapter::render(&source).unwrap();
        adapter.save(&icons).unwrap();

        let background = image::open(&adapter.paths().background)
            .unwrap()
            .into_rgba8();
        assert_eq!(background, icons.background);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let (_dir, adapter) = workspace_with(None);

        let err = adapter.run().unwrap_err();

        assert!(!err.is_fatal());
        match err {
            Error::Processing(ProcessingError::MissingInput { path }) => {
                assert_eq!(path, adapter.paths().input);
            }
            other => panic!("unexpected error: {other}"),
        }
        for path in adapter.paths().outputs() {
            assert!(!path.exists(), "{} should not exist", path.display());
        }
    }

    #[test]
    fn corrupt_input_is_a_decode_error() {
        let (_dir, adapter) = workspace_with(None);
        fs::write(&adapter.paths().input, b"not a png").unwrap();

        let err = adapter.run().unwrap_err();

        assert!(matches!(
            err,
            Error::Processing(ProcessingError::Decode { .. })
        ));
        assert!(!adapter.paths().background.exists());
    }

    #[test]
    fn unwritable_output_is_an_encode_error() {
        let source = RgbaImage::from_pixel(10, 10, RED);
        let dir = tempfile::tempdir().unwrap();
        let mut paths = IconPaths::in_dir(dir.path());
        fs::create_dir_all(paths.input.parent().unwrap()).unwrap();
        source.save(&paths.input).unwrap();
        paths.foreground = dir.path().join("missing").join("fg.png");
        let adapter = IconAdapter::new(paths);

        let err = adapter.run().unwrap_err();

        assert!(matches!(
            err,
            Error::Processing(ProcessingError::Encode { ref path, .. })
                if path == &adapter.paths().foreground
        ));
        // Steps before the failure completed, steps after it did not.
        assert!(adapter.paths().background.exists());
        assert!(!adapter.paths().padded.exists());
    }
}

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageOutputFormat};
use log::{debug, info, warn};

use crate::{
    autotile::{Layout, Role},
    descriptor::{sprite_name, write_descriptor, TileDescriptor},
    error::SliceError,
    slicer::{grid_dimensions, slice_image},
};

/// Settings for a single extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Base name used for every output file and the descriptor id
    pub tile: String,
    /// Slice edge length in pixels
    pub tile_size: u32,
    /// Skip writing `<tile>.json`
    pub skip_json: bool,
    /// Run written PNGs through oxipng
    pub optimise: bool,
}

impl ExtractOptions {
    pub fn new(tile: impl Into<String>, tile_size: u32) -> Self {
        ExtractOptions {
            tile: tile.into(),
            tile_size,
            skip_json: false,
            optimise: false,
        }
    }
}

/// What an extraction run wrote
#[derive(Debug)]
pub struct ExtractSummary {
    pub layout: Layout,
    pub images: Vec<PathBuf>,
    pub descriptor: Option<PathBuf>,
}

pub struct AutotileExtractor {
    image_path: PathBuf,
    image: DynamicImage,
}

impl AutotileExtractor {
    /// Decode the autotile sheet at `image_path`
    pub fn new<P: AsRef<Path>>(image_path: P) -> Result<Self, SliceError> {
        let image_path = image_path.as_ref().to_path_buf();
        let image = image::open(&image_path)?;
        Ok(AutotileExtractor { image_path, image })
    }

    pub fn from_image(image: DynamicImage) -> Self {
        AutotileExtractor {
            image_path: PathBuf::new(),
            image,
        }
    }

    /// Slice the sheet and write one PNG per role, plus the descriptor
    /// unless `options.skip_json` is set.
    pub fn extract(&self, options: &ExtractOptions, output_dir: &Path) -> Result<ExtractSummary, SliceError> {
        let slices = slice_image(&self.image, options.tile_size)?;
        let (cols, rows) = grid_dimensions(self.image.width(), self.image.height(), options.tile_size);
        debug!(
            "{} is {}x{}, {} columns by {} rows of {}px",
            self.image_path.display(),
            self.image.width(),
            self.image.height(),
            cols,
            rows,
            options.tile_size
        );

        // Resolve before touching the filesystem so an unsupported sheet writes nothing
        let layout = Layout::from_slice_count(slices.len())?;
        info!("Using {} layout", layout);

        fs::create_dir_all(output_dir)?;

        let images = self.write_slices(&slices, layout, options, output_dir)?;

        let descriptor = if options.skip_json {
            None
        } else {
            let path = write_descriptor(&TileDescriptor::new(&options.tile), output_dir)?;
            info!("Wrote {}", path.display());
            Some(path)
        };

        Ok(ExtractSummary {
            layout,
            images,
            descriptor,
        })
    }

    fn write_slices(
        &self,
        slices: &[DynamicImage],
        layout: Layout,
        options: &ExtractOptions,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, SliceError> {
        let mut written = Vec::with_capacity(Role::ALL.len());

        for (role, index) in layout.entries() {
            let slice = slices.get(index).ok_or(SliceError::IndexOutOfRange {
                role,
                index,
                len: slices.len(),
            })?;

            let path = output_dir.join(format!("{}.png", sprite_name(&options.tile, role)));
            if options.optimise {
                save_optimised_png(slice, &path)?;
            } else {
                slice.save(&path)?;
            }
            debug!("{} <- slice {}", path.display(), index);
            written.push(path);
        }

        Ok(written)
    }
}

/// Encode `image` as PNG in memory, shrink it with oxipng and write the result.
/// Falls back to the plain encoding when oxipng rejects it.
fn save_optimised_png(image: &DynamicImage, path: &Path) -> Result<(), SliceError> {
    let mut encoded = Vec::new();
    image.write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Png)?;

    let mut options = oxipng::Options::from_preset(2);
    options.bit_depth_reduction = true;
    options.interlace = None;

    let bytes = oxipng::optimize_from_memory(&encoded, &options).unwrap_or_else(|e| {
        warn!("oxipng could not shrink {}: {}. Writing it unoptimised.", path.display(), e);
        encoded
    });
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn sheet(cols: u32, rows: u32, size: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(cols * size, rows * size, |x, y| {
            Rgba([(x / size) as u8, (y / size) as u8, 128, 255])
        }))
    }

    #[test]
    fn unsupported_sheet_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let extractor = AutotileExtractor::from_image(sheet(5, 4, 2));

        let result = extractor.extract(&ExtractOptions::new("floor", 2), &out);
        assert!(matches!(result, Err(SliceError::UnsupportedLayout(20))));
        assert!(!out.exists());
    }

    #[test]
    fn large_layout_picks_mapped_cells() {
        let dir = TempDir::new().unwrap();
        let extractor = AutotileExtractor::from_image(sheet(8, 6, 3));
        let mut options = ExtractOptions::new("wall", 3);
        options.skip_json = true;

        let summary = extractor.extract(&options, dir.path()).unwrap();
        assert_eq!(summary.layout, Layout::Slices48);
        assert_eq!(summary.images.len(), 16);
        assert!(summary.descriptor.is_none());

        // t_connection_w is cell 27: column 3, row 3
        let img = image::open(dir.path().join("wall_t_connection_w.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img.get_pixel(1, 1), &Rgba([3, 3, 128, 255]));
    }

    #[test]
    fn optimised_output_keeps_pixels() {
        let dir = TempDir::new().unwrap();
        let extractor = AutotileExtractor::from_image(sheet(4, 4, 4));
        let mut options = ExtractOptions::new("grass", 4);
        options.optimise = true;

        extractor.extract(&options, dir.path()).unwrap();

        // center is cell 5: column 1, row 1
        let img = image::open(dir.path().join("grass_center.png")).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0), &Rgba([1, 1, 128, 255]));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 17);
    }

    #[test]
    fn sixteen_bit_slices_round_trip() {
        let dir = TempDir::new().unwrap();
        let pixel = Rgba([0x1234u16, 0xABCD, 0x0101, 0xFFFF]);
        let extractor = AutotileExtractor::from_image(DynamicImage::ImageRgba16(ImageBuffer::from_pixel(8, 8, pixel)));

        for optimise in [false, true] {
            let mut options = ExtractOptions::new("deep", 2);
            options.optimise = optimise;
            extractor.extract(&options, dir.path()).unwrap();

            // oxipng may drop the opaque alpha channel but never the 16-bit depth
            let img = image::open(dir.path().join("deep_center.png")).unwrap();
            if !optimise {
                assert_eq!(img.color(), ColorType::Rgba16);
            }
            assert_eq!(img.to_rgba16().get_pixel(1, 1), &pixel, "optimise = {}", optimise);
        }
    }
}

//! Cuts a source sheet into equal square slices in raster order.

use image::DynamicImage;

use crate::error::SliceError;

/// Number of `(columns, rows)` a `width` x `height` image yields at `size`.
/// Partial trailing cells count as a column or row.
pub fn grid_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    (width.div_ceil(size), height.div_ceil(size))
}

/// Crop `image` into `size` x `size` slices, row 0 left to right, then row 1, ...
///
/// Slices keep the colour type and bit depth of the source. Slices at the
/// right or bottom edge of an image that is not an exact multiple of `size`
/// are clipped to the image bounds.
pub fn slice_image(image: &DynamicImage, size: u32) -> Result<Vec<DynamicImage>, SliceError> {
    if size == 0 {
        return Err(SliceError::InvalidTileSize);
    }

    let (width, height) = (image.width(), image.height());
    let (cols, rows) = grid_dimensions(width, height, size);
    let mut slices = Vec::with_capacity(cols as usize * rows as usize);

    for y in (0..height).step_by(size as usize) {
        for x in (0..width).step_by(size as usize) {
            slices.push(image.crop_imm(x, y, size, size));
        }
    }

    Ok(slices)
}

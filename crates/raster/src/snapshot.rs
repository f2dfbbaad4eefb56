//! PNG capture of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! in-memory surface can drop the `image` dependency.

use crate::Raster;
use ambient_core::error::FieldError;
use std::path::Path;

/// Writes the raster's pixel buffer as a PNG image.
///
/// Returns `FieldError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), FieldError> {
    let w = u32::try_from(raster.width()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster.data().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}

use std::path::Path;

use image::{DynamicImage, RgbImage};

use crate::error::{BakeError, Result};

/// Loads an image whose texels encode vectors. Only RGB and RGBA sources are
/// accepted; alpha is dropped.
pub fn load_rgb(path: &Path) -> Result<RgbImage>
{
    if !path.exists() {
        return Err(BakeError::MissingSource { path: path.to_path_buf() });
    }
    let img = image::open(path)?;
    to_rgb(&img, path)
}

pub fn to_rgb(img: &DynamicImage, path: &Path) -> Result<RgbImage>
{
    let channels = img.color().channel_count();
    if channels != 3 && channels != 4 {
        return Err(BakeError::UnsupportedChannels { path: path.to_path_buf(), channels });
    }
    Ok(img.to_rgb8())
}

//! Half-vectors distributed after the Ashikhmin-Shirley lobe, tabulated over a
//! uniform texel grid so Hammersley points can be used directly as texel indices.

use std::path::Path;

use image::{DynamicImage, RgbImage, Rgba, RgbaImage};

use crate::codec::{decode_vec3, encode_vec4};
use crate::config::Shininess;
use crate::error::{BakeError, Result};
use crate::naming::ArtifactName;
use crate::sampling::sample_half_vector;
use crate::texture;
use crate::vec3::Vec3;

pub const STEM: &str = "halfVectorSampling";

/// Constant stored in the alpha channel. It is not a density.
pub const ALPHA_PLACEHOLDER: f32 = 1.0;

pub fn file_name(s: Shininess) -> ArtifactName
{
    ArtifactName::new(STEM).with_shininess(s)
}

#[derive(Clone, Debug, PartialEq)]
pub struct HalfVectorTable {
    pub width: u32,
    pub height: u32,
    /// Row-major, row 0 at the top of the image.
    pub texels: Vec<Vec3>,
}

impl HalfVectorTable {
    pub fn bake(size: u32, s: &Shininess) -> Result<HalfVectorTable>
    {
        if size == 0 {
            return Err(BakeError::degenerate("half-vector table size must be positive"));
        }
        let scale = 1.0 / size as f32;
        let mut texels = Vec::with_capacity(size as usize * size as usize);
        for j in 0..size {
            // v grows from the bottom of the image
            let v = (size - j - 1) as f32 * scale;
            for i in 0..size {
                let u = i as f32 * scale;
                texels.push(sample_half_vector(u, v, s));
            }
        }
        Ok(HalfVectorTable { width: size, height: size, texels })
    }

    pub fn fetch(&self, x: u32, y: u32) -> Vec3
    {
        self.texels[x as usize + self.width as usize * y as usize]
    }

    pub fn is_empty(&self) -> bool
    {
        self.texels.is_empty() || self.width == 0 || self.height == 0
    }

    /// Texel addressed by a point of the unit square.
    pub fn texel_for_sample(&self, x1: f32, x2: f32) -> (u32, u32)
    {
        let x = ((x1 * self.width as f32) as u32).min(self.width.saturating_sub(1));
        let y = ((x2 * self.height as f32) as u32).min(self.height.saturating_sub(1));
        (x, y)
    }

    pub fn to_image(&self) -> RgbaImage
    {
        RgbaImage::from_fn(self.width, self.height, |i, j| {
            let mut c = encode_vec4(&self.fetch(i, j), ALPHA_PLACEHOLDER);
            if c[3] == 0 {
                c[3] = 1;
            }
            Rgba(c)
        })
    }

    fn from_rgb(rgb: &RgbImage) -> HalfVectorTable
    {
        let texels = rgb.pixels().map(|p| decode_vec3(&p.0)).collect();
        HalfVectorTable { width: rgb.width(), height: rgb.height(), texels }
    }

    pub fn from_image(img: &DynamicImage, path: &Path) -> Result<HalfVectorTable>
    {
        Ok(Self::from_rgb(&texture::to_rgb(img, path)?))
    }

    pub fn load(path: &Path) -> Result<HalfVectorTable>
    {
        Ok(Self::from_rgb(&texture::load_rgb(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bake_covers_every_texel() {
        let table = HalfVectorTable::bake(16, &Shininess::new(1.5, 100.0)).expect("bake");
        assert_eq!(table.texels.len(), 256);
        for h in &table.texels {
            assert!((h.length() - 1.0).abs() < 1e-5);
            assert!(h.z >= 0.0);
        }
    }

    #[test]
    fn bottom_left_texel_is_the_normal() {
        // u = 0 and v = 0 give phi = 0 and cos(theta) = 1
        let table = HalfVectorTable::bake(8, &Shininess::new(10.0, 10.0)).expect("bake");
        assert_eq!(table.fetch(0, 7), Vec3::Z);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(HalfVectorTable::bake(0, &Shininess::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn image_round_trip_stays_within_quantization() {
        let table = HalfVectorTable::bake(32, &Shininess::new(4.0, 64.0)).expect("bake");
        let img = DynamicImage::ImageRgba8(table.to_image());
        let decoded = HalfVectorTable::from_image(&img, Path::new("mem.png")).expect("decode");
        assert_eq!((decoded.width, decoded.height), (32, 32));
        for (a, b) in table.texels.iter().zip(&decoded.texels) {
            for (x, y) in [(a.x, b.x), (a.y, b.y), (a.z, b.z)] {
                assert!((x - y).abs() <= 1.0 / 127.5 + 1e-6);
            }
        }
    }

    #[test]
    fn alpha_holds_the_placeholder() {
        let table = HalfVectorTable::bake(4, &Shininess::new(1.0, 1.0)).expect("bake");
        assert!(table.to_image().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn empty_table_maps_samples_to_origin() {
        let table = HalfVectorTable { width: 0, height: 0, texels: Vec::new() };
        assert!(table.is_empty());
        assert_eq!(table.texel_for_sample(0.7, 0.2), (0, 0));
    }

    #[test]
    fn samples_map_inside_the_table() {
        let table = HalfVectorTable::bake(4, &Shininess::new(1.0, 1.0)).expect("bake");
        assert_eq!(table.texel_for_sample(0.0, 0.0), (0, 0));
        assert_eq!(table.texel_for_sample(0.99, 0.5), (3, 2));
        assert_eq!(table.texel_for_sample(1.0, 1.0), (3, 3));
    }
}

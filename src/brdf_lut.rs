//! Split-sum pre-integration of the Ashikhmin-Shirley specular term.
//!
//! For a view direction `V` the Fresnel-weighted reflectance integral is split
//! into `F0 * scale + bias`. Half-vectors are drawn from a baked
//! [`HalfVectorTable`], so the lobe's density cancels and each sample adds
//! `F(V.H) * N.L / max(N.V, N.L)`.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};

use crate::codec::{decode_unit, encode_unit};
use crate::config::Shininess;
use crate::error::{BakeError, Result};
use crate::hammersley::hammersley;
use crate::half_vector::HalfVectorTable;
use crate::naming::ArtifactName;
use crate::texture;
use crate::vec3::{dot, reflect, Vec3};

pub const STEM: &str = "brdfIntegration";

pub fn file_name(s: Shininess) -> ArtifactName
{
    ArtifactName::new(STEM).with_shininess(s)
}

/// How a LUT texel `(u, v)` selects the tangent-space view vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewSampling {
    /// `v = sqrt(N.V)`, `u` the azimuth over the first quadrant.
    #[default]
    Angular,
    /// `u = T.V`, `v = B.V`; `N.V` completes the unit vector and is 0 outside the disk.
    TangentDisk,
}

impl ViewSampling {
    pub fn view_vector(self, u: f32, v: f32) -> Vec3
    {
        match self {
            ViewSampling::Angular => {
                let n_v = (v * v).clamp(0.0, 1.0);
                let s_theta = (1.0 - n_v * n_v).sqrt();
                let phi = u * FRAC_PI_2;
                Vec3::new(phi.cos() * s_theta, phi.sin() * s_theta, n_v).normalize()
            }
            ViewSampling::TangentDisk => {
                let n_v = (1.0 - u * u - v * v).max(0.0).sqrt();
                Vec3::new(u, v, n_v).try_normalize().unwrap_or(Vec3::Z)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BrdfLookupEntry {
    pub scale: f32,
    pub bias: f32,
}

/// Integrates the split-sum coefficients for a unit view vector.
///
/// Fails on zero samples or an empty half-vector table.
pub fn integrate_view(view_dir: Vec3, table: &HalfVectorTable, sample_count: u32) -> Result<BrdfLookupEntry>
{
    if sample_count == 0 {
        return Err(BakeError::degenerate("sample count must be positive"));
    }
    if table.is_empty() {
        return Err(BakeError::degenerate("half-vector table is empty"));
    }
    let n_v = view_dir.z;
    let mut scale = 0.0;
    let mut bias = 0.0;
    for s in 0..sample_count {
        let xi = hammersley(s, sample_count);
        let (x, y) = table.texel_for_sample(xi[0], xi[1]);
        let h = table.fetch(x, y);
        let light_dir = match reflect(&view_dir, &h).try_normalize() {
            Some(l) => l,
            None => continue,
        };
        let n_l = light_dir.z.max(0.0);
        if n_l > 0.0
        {
            // clamped so the base of the Fresnel power is never negative
            let v_h = dot(&view_dir, &h).clamp(0.0, 1.0);
            let reduced = n_l / n_v.max(n_l);
            let fc = (1.0 - v_h).powf(5.0);
            scale += (1.0 - fc) * reduced;
            bias += fc * reduced;
        }
    }
    Ok(BrdfLookupEntry { scale: scale / sample_count as f32, bias: bias / sample_count as f32 })
}

pub fn integrate(view_param: (f32, f32), sampling: ViewSampling, table: &HalfVectorTable, sample_count: u32) -> Result<BrdfLookupEntry>
{
    let view_dir = sampling.view_vector(view_param.0, view_param.1);
    integrate_view(view_dir, table, sample_count)
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrdfLookupTable {
    pub width: u32,
    pub height: u32,
    /// Row-major, row 0 at the top of the image.
    pub entries: Vec<BrdfLookupEntry>,
}

impl BrdfLookupTable {
    pub fn bake(table: &HalfVectorTable, size: u32, sample_count: u32, sampling: ViewSampling) -> Result<BrdfLookupTable>
    {
        if size == 0 || sample_count == 0 {
            return Err(BakeError::degenerate("lookup size and sample count must be positive"));
        }
        let scale = 1.0 / size as f32;
        let mut entries = Vec::with_capacity(size as usize * size as usize);
        for j in 0..size {
            log::debug!("Working on row {} of {}", j + 1, size);
            let v = (size - j - 1) as f32 * scale;
            for i in 0..size {
                let u = i as f32 * scale;
                entries.push(integrate((u, v), sampling, table, sample_count)?);
            }
        }
        Ok(BrdfLookupTable { width: size, height: size, entries })
    }

    pub fn get(&self, x: u32, y: u32) -> BrdfLookupEntry
    {
        self.entries[x as usize + self.width as usize * y as usize]
    }

    /// Blue stays empty so the table can be inspected by eye.
    pub fn to_image(&self) -> RgbImage
    {
        RgbImage::from_fn(self.width, self.height, |i, j| {
            let e = self.get(i, j);
            Rgb([encode_unit(e.scale), encode_unit(e.bias), 0])
        })
    }

    pub fn from_image(img: &DynamicImage, path: &Path) -> Result<BrdfLookupTable>
    {
        let rgb = texture::to_rgb(img, path)?;
        let entries = rgb
            .pixels()
            .map(|p| BrdfLookupEntry { scale: decode_unit(p[0]), bias: decode_unit(p[1]) })
            .collect();
        Ok(BrdfLookupTable { width: rgb.width(), height: rgb.height(), entries })
    }
}

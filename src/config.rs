//! Parameters of a bake, passed explicitly into every generator.

use std::path::PathBuf;
use std::str::FromStr;

use crate::brdf_lut::ViewSampling;
use crate::error::{BakeError, Result};

/// Directional exponents of the Ashikhmin-Shirley lobe, along tangent and bitangent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shininess {
    pub nu: f32,
    pub nv: f32,
}

impl Shininess {
    pub fn new(nu: f32, nv: f32) -> Self {
        Self { nu, nv }
    }

    pub fn validated(nu: f32, nv: f32) -> Result<Self> {
        for (name, value) in [("nU", nu), ("nV", nv)] {
            if !value.is_finite() || value < 0.0 {
                return Err(BakeError::degenerate(format!("{name} must be a finite value >= 0, got {value}")));
            }
        }
        Ok(Self { nu, nv })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BakeConfig {
    pub textures_dir: PathBuf,
    pub half_vector_size: u32,
    pub brdf_size: u32,
    pub tangent_plane_size: u32,
    pub sample_count: u32,
    pub view_sampling: ViewSampling,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            textures_dir: PathBuf::from("textures"),
            half_vector_size: 512,
            brdf_size: 512,
            tangent_plane_size: 1024,
            sample_count: 1024,
            view_sampling: ViewSampling::Angular,
        }
    }
}

pub const ENV_TEXTURES_DIR: &str = "ANISO_LUT_TEXTURES_DIR";
pub const ENV_HALF_VECTOR_SIZE: &str = "ANISO_LUT_HALF_VECTOR_SIZE";
pub const ENV_BRDF_SIZE: &str = "ANISO_LUT_BRDF_SIZE";
pub const ENV_TANGENT_PLANE_SIZE: &str = "ANISO_LUT_TANGENT_PLANE_SIZE";
pub const ENV_SAMPLES: &str = "ANISO_LUT_SAMPLES";
pub const ENV_VIEW: &str = "ANISO_LUT_VIEW";

/// Largest accepted table edge, in texels.
pub const MAX_TEXTURE_SIZE: u32 = 16384;

impl BakeConfig {
    /// Defaults overridden by the `ANISO_LUT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_TEXTURES_DIR) {
            config.textures_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_HALF_VECTOR_SIZE) {
            config.half_vector_size = parse_size(ENV_HALF_VECTOR_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_BRDF_SIZE) {
            config.brdf_size = parse_size(ENV_BRDF_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_TANGENT_PLANE_SIZE) {
            config.tangent_plane_size = parse_size(ENV_TANGENT_PLANE_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_SAMPLES) {
            config.sample_count = parse_positive(ENV_SAMPLES, &value)?;
        }
        if let Some(value) = lookup(ENV_VIEW) {
            config.view_sampling = value.parse()?;
        }
        Ok(config)
    }
}

fn parse_size(key: &str, value: &str) -> Result<u32> {
    let size = parse_positive(key, value)?;
    if size > MAX_TEXTURE_SIZE {
        return Err(BakeError::config(format!("{key} must be at most {MAX_TEXTURE_SIZE}, got {size}")));
    }
    Ok(size)
}

fn parse_positive(key: &str, value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BakeError::config(format!("{key} must be a positive integer, got '{value}'"))),
    }
}

impl FromStr for ViewSampling {
    type Err = BakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "angular" => Ok(ViewSampling::Angular),
            "tangent-disk" | "tangent_disk" | "disk" => Ok(ViewSampling::TangentDisk),
            other => Err(BakeError::config(format!("unknown view sampling '{other}', use angular or tangent-disk"))),
        }
    }
}

//! Per-texel frame encoders: the static tangent-plane map and the rotation
//! quaternions derived from a normal map.

use std::f32::consts::PI;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::codec::{decode_vec3, encode_signed, encode_vec3};
use crate::error::{BakeError, Result};
use crate::naming::ArtifactName;
use crate::vec3::Vec3;

pub const TANGENT_PLANE_STEM: &str = "tangentPlaneMapping";
pub const ROTATION_STEM: &str = "quaternionRotation";

pub fn tangent_plane_name() -> ArtifactName
{
    ArtifactName::new(TANGENT_PLANE_STEM).with_separator("_")
}

pub fn rotation_name() -> ArtifactName
{
    ArtifactName::new(ROTATION_STEM)
}

/// Tangent direction `(cos pi v, sin pi v)`, principal roughness `1 - 0.95 sqrt(sin pi v)`
/// and orthogonal roughness 1. Independent of `u`.
pub fn tangent_plane_texel(_u : f32, v : f32) -> [f32; 4]
{
    let s = (PI * v).sin();
    [(PI * v).cos(), s, 1.0 - 0.95 * s.sqrt(), 1.0]
}

pub fn bake_tangent_plane(size : u32) -> Result<RgbaImage>
{
    if size == 0 {
        return Err(BakeError::degenerate("tangent plane size must be positive"));
    }
    let scale = 1.0 / size as f32;
    Ok(RgbaImage::from_fn(size, size, |i, j| {
        let u = i as f32 * scale;
        let v = (size - j - 1) as f32 * scale;
        Rgba(tangent_plane_texel(u, v).map(encode_signed))
    }))
}

/// `(a, b, c)` of the quaternion `a + b i + c j` that carries `(0, 0, 1)` onto `n`.
/// `None` when `n` points straight down, where the rotation axis is undefined.
pub fn rotation_quaternion(n : &Vec3) -> Option<Vec3>
{
    let a = ((n.z + 1.0) / 2.0).max(0.0).sqrt();
    if a == 0.0 {
        return None;
    }
    Some(Vec3::new(a, n.y / (2.0 * a), -n.x / (2.0 * a)))
}

/// Stand-in for normals with `n.z == -1`: the limit of the quaternion as `n` tilts through `+y`.
pub const DEGENERATE_QUATERNION: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

/// Encodes the rotation quaternion of every normal-map texel. Also returns how
/// many texels were degenerate.
pub fn bake_rotation_map(normal_map : &RgbImage) -> (RgbImage, usize)
{
    let mut degenerate = 0;
    let out = RgbImage::from_fn(normal_map.width(), normal_map.height(), |i, j| {
        let n = decode_vec3(&normal_map.get_pixel(i, j).0);
        let q = rotation_quaternion(&n).unwrap_or_else(|| {
            degenerate += 1;
            DEGENERATE_QUATERNION
        });
        Rgb(encode_vec3(&q))
    });
    (out, degenerate)
}

//! Affine mapping between floats and 8-bit texel channels.
//!
//! Signed components in `[-1, 1]` map to `floor(x * 127.5 + 127.5)`; unit
//! coefficients in `[0, 1]` map to `floor(x * 255)`.

use crate::vec3::Vec3;

pub fn encode_signed(x : f32) -> u8
{
    (x * 127.5 + 127.5).floor().clamp(0.0, 255.0) as u8
}

pub fn decode_signed(c : u8) -> f32
{
    c as f32 / 127.5 - 1.0
}

pub fn encode_unit(x : f32) -> u8
{
    (x * 255.0).floor().clamp(0.0, 255.0) as u8
}

pub fn decode_unit(c : u8) -> f32
{
    c as f32 / 255.0
}

pub fn encode_vec3(v : &Vec3) -> [u8; 3]
{
    [encode_signed(v.x), encode_signed(v.y), encode_signed(v.z)]
}

pub fn encode_vec4(v : &Vec3, w : f32) -> [u8; 4]
{
    [encode_signed(v.x), encode_signed(v.y), encode_signed(v.z), encode_signed(w)]
}

pub fn decode_vec3(c : &[u8]) -> Vec3
{
    Vec3::new(decode_signed(c[0]), decode_signed(c[1]), decode_signed(c[2]))
}

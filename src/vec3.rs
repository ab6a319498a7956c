use core::ops::{Mul, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x : f32,
    pub y : f32,
    pub z : f32,
}

impl Vec3
{
    pub const Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z}
    }

    pub fn scale(&self, k : f32) -> Vec3 {
        Vec3 { x : self.x * k, y: self.y * k, z: self.z * k}
    }

    pub fn length(&self) -> f32
    {
        dot(self, self).sqrt()
    }

    pub fn normalize(&self) -> Vec3
    {
        let l = self.length();
        self.scale(1.0 / l)
    }

    /// Like `normalize`, but `None` for a zero-length vector.
    pub fn try_normalize(&self) -> Option<Vec3>
    {
        let l = self.length();
        if l > 0.0 { Some(self.scale(1.0 / l)) } else { None }
    }
}

/// Mirrors `v` about the axis `h`: the result lies in the same hemisphere as `v`.
pub fn reflect(v : &Vec3, h : &Vec3) -> Vec3
{
    2.0 * dot(v, h) * *h - *v
}

pub fn dot(a : &Vec3, b : &Vec3) -> f32
{
    a.x * b.x + a.y * b.y + a.z * b.z
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {x: self.x - other.x, y: self.y - other.y, z: self.z - other.z}
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, k: Vec3) -> Vec3 {
        Vec3 {x: k.x * self, y: k.y * self, z: k.z * self}
    }
}

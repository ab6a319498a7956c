use core::ops::Index;

/// A point on the unit square.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point(pub [f32; 2]);

impl Index<usize> for Point {
    type Output = f32;
    #[inline(always)]
    fn index(&self, _index: usize) -> &f32 {
        &self.0[_index]
    }
}

/// Van der Corput radical inverse in base 2: the 32 bits of `bits` mirrored
/// around the binary point.
#[allow(clippy::excessive_precision)]
pub fn radical_inverse_vdc(bits : u32) -> f32
{
    let mut bits = bits;
    bits = (bits << 16u32) | (bits >> 16u32);
    bits = ((bits & 0x5555_5555u32) << 1u32) | ((bits & 0xAAAA_AAAAu32) >> 1u32);
    bits = ((bits & 0x3333_3333u32) << 2u32) | ((bits & 0xCCCC_CCCCu32) >> 2u32);
    bits = ((bits & 0x0F0F_0F0Fu32) << 4u32) | ((bits & 0xF0F0_F0F0u32) >> 4u32);
    bits = ((bits & 0x00FF_00FFu32) << 8u32) | ((bits & 0xFF00_FF00u32) >> 8u32);
    (bits as f32) * 2.328_306_436_538_696_3e-10 // / 0x100000000
}

/// `i`-th point of the `n`-point Hammersley set.
pub fn hammersley(i : u32, n : u32) -> Point
{
    Point([i as f32 / n as f32, radical_inverse_vdc(i)])
}

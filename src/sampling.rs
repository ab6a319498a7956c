use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::Shininess;
use crate::vec3::Vec3;

pub fn from_polar(c_theta: f32, phi: f32) -> Vec3
{
    let c_theta2 = c_theta * c_theta;
    let s_theta = (1.0 - c_theta2).max(0.0).sqrt();
    Vec3::new(s_theta * phi.cos(), s_theta * phi.sin(), c_theta)
}

// PDF = sin(theta) / (2.0 pi)
pub fn hemisphere_sampling(u: f32, v: f32) -> Vec3
{
    // theta = acos(1-v)
    let phi = u * TAU;
    let c_theta = 1.0 - v;
    from_polar(c_theta, phi)
}

// PDF = (n + 1) / (2 * pi) * cos(theta)^n sin(theta)
pub fn phong_sampling(u: f32, v: f32, n : f32) -> Vec3
{
    // theta = acos((1-v)^(1/n+1))
    let phi = u * TAU;
    let c_theta = (1.0 - v).powf(1.0 / (n + 1.0));
    from_polar(c_theta, phi)
}

/// Inverse CDF of the Ashikhmin-Shirley azimuth restricted to the first quadrant.
pub fn ashikhmin_partial_phi(x : f32, s : &Shininess) -> f32
{
    if x == 1.0 {
        // tan(pi/2) diverges
        return FRAC_PI_2;
    }
    let coeff = ((s.nu + 1.0) / (s.nv + 1.0)).sqrt();
    let tang = (PI * x / 2.0).tan();
    (coeff * tang).atan()
}

/// Azimuth over the full circle, each quarter of `u` mirrored onto the first quadrant.
pub fn ashikhmin_phi(u : f32, s : &Shininess) -> f32
{
    if u <= 0.25 {
        ashikhmin_partial_phi(4.0 * u, s)
    } else if u < 0.5 {
        PI - ashikhmin_partial_phi(2.0 - 4.0 * u, s)
    } else if u < 0.75 {
        PI + ashikhmin_partial_phi(4.0 * u - 2.0, s)
    } else if u < 1.0 {
        TAU - ashikhmin_partial_phi(4.0 * (1.0 - u), s)
    } else {
        0.0
    }
}

pub fn ashikhmin_exponent(phi : f32, s : &Shininess) -> f32
{
    let c = phi.cos();
    let sn = phi.sin();
    s.nu * c * c + s.nv * sn * sn
}

pub fn ashikhmin_cos_theta(v : f32, exponent : f32) -> f32
{
    (1.0 - v).powf(1.0 / (exponent + 1.0))
}

// PDF = sqrt((nu + 1)(nv + 1)) / (2 pi) * cos(theta)^e sin(theta), e = exponent(phi)
pub fn sample_half_vector(u : f32, v : f32, s : &Shininess) -> Vec3
{
    let phi = ashikhmin_phi(u, s);
    let e = ashikhmin_exponent(phi, s);
    let c_theta = ashikhmin_cos_theta(v, e);
    from_polar(c_theta, phi)
}

/// Normalized Ashikhmin-Shirley density of half-vectors, per unit solid angle.
pub fn ashikhmin_half_vector_pdf(h : &Vec3, s : &Shininess) -> f32
{
    if h.z <= 0.0 {
        return 0.0;
    }
    let norm = ((s.nu + 1.0) * (s.nv + 1.0)).sqrt() / TAU;
    let sin2 = 1.0 - h.z * h.z;
    if sin2 <= 0.0 {
        return norm;
    }
    let e = (s.nu * h.x * h.x + s.nv * h.y * h.y) / sin2;
    norm * h.z.powf(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_eq_approx_abs;

    fn grid(k : usize) -> impl Iterator<Item = (f32, f32)>
    {
        (0..k).flat_map(move |i| (0..k).map(move |j| (i as f32 / k as f32, j as f32 / k as f32)))
    }

    #[test]
    fn isotropic_phi_is_uniform() {
        let s = Shininess::new(1.0, 1.0);
        assert_eq!(ashikhmin_phi(0.0, &s), 0.0);
        assert_eq_approx_abs!(ashikhmin_phi(0.5, &s), PI, 1e-6);
        assert_eq_approx_abs!(ashikhmin_phi(0.25, &s), FRAC_PI_2, 1e-6);
        assert_eq_approx_abs!(ashikhmin_phi(0.75, &s), 1.5 * PI, 1e-5);
    }

    #[test]
    fn partial_phi_limit_is_exact() {
        let s = Shininess::new(3.0, 700.0);
        assert_eq!(ashikhmin_partial_phi(1.0, &s), FRAC_PI_2);
        assert_eq!(ashikhmin_partial_phi(0.0, &s), 0.0);
    }

    #[test]
    fn phi_is_monotonic_over_the_circle() {
        let s = Shininess::new(10.0, 200.0);
        let mut last = -1.0;
        for i in 0..512 {
            let phi = ashikhmin_phi(i as f32 / 512.0, &s);
            assert!(phi >= last, "phi decreased at {i}");
            assert!((0.0..TAU).contains(&phi));
            last = phi;
        }
    }

    #[test]
    fn half_vectors_are_unit_length() {
        let params = [(0.0, 0.0), (1.0, 1.0), (1.5, 100.0), (20000.0, 1.0), (0.0, 5000.0)];
        for (nu, nv) in params {
            let s = Shininess::new(nu, nv);
            for (u, v) in grid(64) {
                let h = sample_half_vector(u, v, &s);
                assert_eq_approx_abs!(h.length(), 1.0, 1e-5, "nu {nu} nv {nv} u {u} v {v}");
                assert!(h.z >= 0.0);
            }
        }
    }

    #[test]
    fn isotropic_lobe_matches_phong() {
        let s = Shininess::new(8.0, 8.0);
        for (u, v) in grid(32) {
            let a = sample_half_vector(u, v, &s);
            let b = phong_sampling(u, v, 8.0);
            assert_eq_approx_abs!((a - b).length(), 0.0, 1e-4);
        }
    }

    #[test]
    fn pdf_integrates_to_one() {
        // uniform hemisphere estimator: pdf_uniform = 1 / (2 pi)
        let s = Shininess::new(4.0, 16.0);
        let k = 256;
        let mut acc = 0.0f64;
        for (u, v) in grid(k) {
            let du = 0.5 / k as f32;
            let h = hemisphere_sampling(u + du, v + du);
            acc += (ashikhmin_half_vector_pdf(&h, &s) * TAU) as f64;
        }
        acc /= (k * k) as f64;
        assert_eq_approx_abs!(acc, 1.0, 2e-2);
    }
}

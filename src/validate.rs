use std::f32::consts::TAU;
use std::path::Path;

use image::DynamicImage;

use aniso_lut::sampling::{ashikhmin_half_vector_pdf, hemisphere_sampling, phong_sampling, sample_half_vector};
use aniso_lut::{logging, BrdfLookupTable, HalfVectorTable, Shininess, ViewSampling};

const K :usize = 256;

// int_omega p_h(h) dw with uniform hemisphere samples
// Expected result 1
fn pdf_integral(s: &Shininess) -> f32
{
    let d = 1.0 / K as f32;
    let mut acc = 0.0f64;
    for i in 0..K
    {
        let x = (i as f32 + 0.5) * d;
        for j in 0..K
        {
            let y = (j as f32 + 0.5) * d;
            let h = hemisphere_sampling(x, y);
            let pdf = 1.0 / TAU;
            acc += (ashikhmin_half_vector_pdf(&h, s) / pdf) as f64;
        }
    }
    (acc / (K * K) as f64) as f32
}

// isotropic lobes reduce to Phong sampling
// Expected result 0
fn phong_deviation(n: f32) -> f32
{
    let s = Shininess::new(n, n);
    let d = 1.0 / 64.0;
    let mut worst = 0.0f32;
    for i in 0..64
    {
        for j in 0..64
        {
            let (u, v) = (i as f32 * d, j as f32 * d);
            let a = sample_half_vector(u, v, &s);
            let b = phong_sampling(u, v, n);
            worst = worst.max((a - b).length());
        }
    }
    worst
}

fn main()
{
    logging::init();

    for (nu, nv) in [(1.0, 1.0), (1.5, 100.0), (10.0, 1000.0)]
    {
        let s = Shininess::new(nu, nv);
        println!("pdf [{},{}] Expected {}; Result  {}", nu, nv, 1.0, pdf_integral(&s));
    }

    for n in [0.0, 8.0, 500.0]
    {
        println!("phong n={} Expected {}; Result  {}", n, 0.0, phong_deviation(n));
    }

    let s = Shininess::new(1.5, 100.0);
    let table = match HalfVectorTable::bake(128, &s) {
        Ok(t) => t,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };
    let worst_len = table.texels.iter().map(|h| (h.length() - 1.0).abs()).fold(0.0f32, f32::max);
    println!("unit half vectors Expected {}; Result  {}", 0.0, worst_len);

    // what the LUT baker reads back from disk
    let stored = DynamicImage::ImageRgba8(table.to_image());
    let table = match HalfVectorTable::from_image(&stored, Path::new("halfVectorSampling.png")) {
        Ok(t) => t,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };
    let worst_len = table.texels.iter().map(|h| (h.length() - 1.0).abs()).fold(0.0f32, f32::max);
    println!("quantised half vectors Expected <= {}; Result  {}", 0.02, worst_len);

    for sampling in [ViewSampling::Angular, ViewSampling::TangentDisk]
    {
        match BrdfLookupTable::bake(&table, 16, 256, sampling) {
            Ok(lut) => {
                let max_sum = lut.entries.iter().map(|e| e.scale + e.bias).fold(0.0f32, f32::max);
                println!("{:?} max scale + bias Expected <= {}; Result  {}", sampling, 1.0, max_sum);
                let stored = DynamicImage::ImageRgb8(lut.to_image());
                match BrdfLookupTable::from_image(&stored, Path::new("brdfIntegration.png")) {
                    Ok(back) => {
                        let max_sum = back.entries.iter().map(|e| e.scale + e.bias).fold(0.0f32, f32::max);
                        println!("{:?} quantised scale + bias Expected <= {}; Result  {}", sampling, 1.0, max_sum);
                    }
                    Err(err) => log::error!("{}", err),
                }
            }
            Err(err) => log::error!("{}", err),
        }
    }
}

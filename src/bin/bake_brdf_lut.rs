use std::io;

use anyhow::{Context, Result};
use image::DynamicImage;

use aniso_lut::{brdf_lut, half_vector, logging, naming, prompt, BakeConfig, BrdfLookupTable, HalfVectorTable};

fn run() -> Result<()>
{
    let config = BakeConfig::from_env().context("Reading configuration")?;
    let mut input = prompt::Tokens::new(io::stdin().lock());
    let shininess = prompt::prompt_shininess(&mut input, &mut io::stdout())?;

    // the table must have been baked beforehand for the same exponents
    let source = half_vector::file_name(shininess).source_path(&config.textures_dir);
    let table = HalfVectorTable::load(&source).context("Error in loading the image")?;
    log::info!(
        "Integrating {0}x{0} lookup table, {1} samples per texel, {2:?} view sampling",
        config.brdf_size, config.sample_count, config.view_sampling
    );
    let lut = BrdfLookupTable::bake(&table, config.brdf_size, config.sample_count, config.view_sampling)?;
    let img = DynamicImage::ImageRgb8(lut.to_image());
    naming::save_png(&img, &brdf_lut::file_name(shininess), &config.textures_dir)
        .context("Saving BRDF lookup table")?;
    Ok(())
}

fn main()
{
    logging::init();
    if let Err(err) = run() {
        // not through the logger, which RUST_LOG may have turned off
        println!("{:#}", err);
        std::process::exit(1);
    }
}

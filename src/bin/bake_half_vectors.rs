use std::io;

use anyhow::{Context, Result};
use image::DynamicImage;

use aniso_lut::{half_vector, logging, naming, prompt, BakeConfig, HalfVectorTable};

fn run() -> Result<()>
{
    let config = BakeConfig::from_env().context("Reading configuration")?;
    let mut input = prompt::Tokens::new(io::stdin().lock());
    let shininess = prompt::prompt_shininess(&mut input, &mut io::stdout())?;

    log::info!(
        "Baking {0}x{0} half-vector table for nU = {1}, nV = {2}",
        config.half_vector_size, shininess.nu, shininess.nv
    );
    let table = HalfVectorTable::bake(config.half_vector_size, &shininess)?;
    let img = DynamicImage::ImageRgba8(table.to_image());
    naming::save_png(&img, &half_vector::file_name(shininess), &config.textures_dir)
        .context("Saving half-vector table")?;
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

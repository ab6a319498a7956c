use std::io;

use anyhow::{Context, Result};
use image::DynamicImage;

use aniso_lut::{frame, logging, naming, prompt, texture, BakeConfig};

fn run() -> Result<()>
{
    let config = BakeConfig::from_env().context("Reading configuration")?;
    let mut input = prompt::Tokens::new(io::stdin().lock());
    let path = prompt::prompt_path("normal map", &mut input, &mut io::stdout())?;

    let normal_map = texture::load_rgb(&path).context("Error in loading the image")?;
    log::info!("Encoding rotations for {}x{} normal map", normal_map.width(), normal_map.height());
    let (img, degenerate) = frame::bake_rotation_map(&normal_map);
    if degenerate > 0 {
        log::warn!("{} texels point straight down, their rotation axis was fixed to x", degenerate);
    }
    naming::save_png(&DynamicImage::ImageRgb8(img), &frame::rotation_name(), &config.textures_dir)
        .context("Saving quaternion rotation map")?;
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

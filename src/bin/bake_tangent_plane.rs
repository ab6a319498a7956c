use anyhow::{Context, Result};
use image::DynamicImage;

use aniso_lut::{frame, logging, naming, BakeConfig};

fn run() -> Result<()>
{
    let config = BakeConfig::from_env().context("Reading configuration")?;
    log::info!("Baking {0}x{0} tangent plane map", config.tangent_plane_size);
    let img = DynamicImage::ImageRgba8(frame::bake_tangent_plane(config.tangent_plane_size)?);
    naming::save_png(&img, &frame::tangent_plane_name(), &config.textures_dir)
        .context("Saving tangent plane map")?;
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

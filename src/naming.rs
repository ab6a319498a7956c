//! File names of baked tables. Generated files are never overwritten: a bake
//! writes to the first free name, adding a numeric suffix after the parameters.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::config::Shininess;
use crate::error::Result;

pub const EXTENSION: &str = "png";

/// Six decimals, then trailing zeros and a trailing point removed: `1.5 -> "1.5"`, `20000 -> "20000"`.
pub fn format_parameter(x : f32) -> String
{
    let s = format!("{:.6}", x);
    let s = s.trim_end_matches('0');
    s.strip_suffix('.').unwrap_or(s).to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactName {
    pub stem: String,
    pub shininess: Option<Shininess>,
    pub separator: &'static str,
}

impl ArtifactName {
    pub fn new(stem: &str) -> Self {
        Self { stem: stem.to_string(), shininess: None, separator: " " }
    }

    pub fn with_shininess(mut self, s: Shininess) -> Self {
        self.shininess = Some(s);
        self
    }

    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    fn base(&self) -> String {
        match &self.shininess {
            Some(s) => format!("{} [{},{}]", self.stem, format_parameter(s.nu), format_parameter(s.nv)),
            None => self.stem.clone(),
        }
    }

    /// `index == 0` is the plain name, otherwise `index` is the collision suffix.
    pub fn file_name(&self, index: u32) -> String {
        if index == 0 {
            format!("{}.{}", self.base(), EXTENSION)
        } else {
            format!("{}{}{}.{}", self.base(), self.separator, index, EXTENSION)
        }
    }

    /// Where a consumer expects to find this artifact.
    pub fn source_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name(0))
    }

    pub fn next_free_path(&self, dir: &Path) -> PathBuf {
        let mut index = 0;
        loop {
            let path = dir.join(self.file_name(index));
            if !path.exists() {
                return path;
            }
            index += 1;
        }
    }
}

/// Writes `img` under the first unused variant of `name` in `dir`.
pub fn save_png(img: &DynamicImage, name: &ArtifactName, dir: &Path) -> Result<PathBuf>
{
    std::fs::create_dir_all(dir)?;
    let path = name.next_free_path(dir);
    img.save_with_format(&path, image::ImageFormat::Png)?;
    log::info!("Saved {}", path.display());
    Ok(path)
}

//! Error type shared by the bakers.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("there is no texture called {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("{}: number of channels must be 3 or 4, found {channels}", .path.display())]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Degenerate parameters: {0}")]
    Degenerate(String),
}

impl BakeError {
    pub fn config<T: ToString>(msg: T) -> Self {
        BakeError::Config(msg.to_string())
    }

    pub fn degenerate<T: ToString>(msg: T) -> Self {
        BakeError::Degenerate(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BakeError>;

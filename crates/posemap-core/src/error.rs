use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosemapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid video record: {0}")]
    InvalidRecord(String),

    #[error("Failed to load frame {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Frame {} is {actual_width}x{actual_height}, record says {width}x{height}", path.display())]
    FrameDimensions {
        path: PathBuf,
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Sample index {index} out of range (total: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Invalid sample config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PosemapError>;

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GifweaveError {
    #[error("Failed to list directory {path:?}")]
    Collect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open image {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {path:?} is {width}x{height}, larger than a GIF frame can hold")]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("No PNG or JPEG files found, nothing to encode")]
    Empty,

    #[error("Failed to create output file {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode GIF to {path:?}")]
    Encode {
        path: PathBuf,
        #[source]
        source: gif::EncodingError,
    },
}

pub type Result<T> = std::result::Result<T, GifweaveError>;

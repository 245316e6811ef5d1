use thiserror::Error;

use crate::scene::camera::PerspectiveCameraBuilderError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode png: {0}")]
    PngEncoding(#[from] png::EncodingError),
    #[error("failed to encode gif: {0}")]
    GifEncoding(#[from] gif::EncodingError),
    #[error("frame of {width}x{height} is too large, at most {max}x{max} is supported")]
    FrameTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("invalid camera configuration: {0}")]
    CameraConfig(#[from] PerspectiveCameraBuilderError),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Crate-level error type and `Result` alias.
//! Every failure of a split run maps onto one of a small, closed set of
//! variants so callers can tell a missing collage apart from a broken one.
use std::path::PathBuf;

use thiserror::Error;

use crate::core::processing::crop::CropRect;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Collage file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("crop rectangle {rect} does not fit a {width}x{height} image")]
    InvalidCropBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn encode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Encode {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    /// True when the run stopped before decoding because the collage was absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInputFile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_path() {
        let err = Error::MissingInputFile {
            path: PathBuf::from("public/images/implants-collage.jpg"),
        };
        assert!(err.is_missing_input());
        assert_eq!(
            err.to_string(),
            "Collage file not found: public/images/implants-collage.jpg"
        );
    }

    #[test]
    fn crop_bounds_message_carries_geometry() {
        let err = Error::InvalidCropBounds {
            rect: CropRect::new(0, 0, 10, 0),
            width: 10,
            height: 1,
        };
        assert!(!err.is_missing_input());
        assert_eq!(
            err.to_string(),
            "crop rectangle (0, 0, 10, 0) does not fit a 10x1 image"
        );
    }

    #[test]
    fn encode_helper_keeps_reason() {
        let err = Error::encode("out.jpg", "disk full");
        assert_eq!(err.to_string(), "cannot encode out.jpg: disk full");
    }
}

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Decodes the collage at `path`. The format is sniffed from the file contents,
/// falling back to the extension. The file is closed before this returns.
pub fn open_collage(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    let (width, height) = image.dimensions();
    info!("Opened collage {:?}: {}x{}", path, width, height);
    Ok(image)
}

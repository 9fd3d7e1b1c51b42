//! Encoders for cropped halves. The output format follows the target path's
//! extension; JPEG goes through `jpeg`, everything else through `image`.
pub mod jpeg;

use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::error::{Error, Result};

/// Encodes `image` into `output`, replacing any existing file.
///
/// The bytes go to a temporary file next to `output`, which is renamed over
/// `output` only after encoding succeeded.
pub fn save_image(image: &DynamicImage, output: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output).map_err(|e| Error::encode(output, e))?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".collage-").suffix(".part");
    // Outputs get regular file permissions rather than the 0600 temp-file default.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| Error::encode(output, e))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        match format {
            ImageFormat::Jpeg => {
                jpeg::write_jpeg(&mut writer, image).map_err(|e| Error::encode(output, e))?
            }
            other => image
                .write_to(&mut writer, other)
                .map_err(|e| Error::encode(output, e))?,
        }
        writer.flush().map_err(|e| Error::encode(output, e))?;
    }

    tmp.persist(output)
        .map_err(|e| Error::encode(output, e.error))?;
    info!("Wrote {:?} ({:?})", output, format);
    Ok(())
}

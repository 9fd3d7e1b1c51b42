use std::io::Write;

use image::{DynamicImage, GenericImageView};
use jpeg_encoder::{ColorType, Encoder};

/// Quality used for every JPEG asset.
pub const JPEG_QUALITY: u8 = 75;

pub fn write_gray_jpeg<W: Write>(
    writer: W,
    cols: u16,
    rows: u16,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Encoder::new(writer, JPEG_QUALITY);
    encoder.encode(data, cols, rows, ColorType::Luma)?;
    Ok(())
}

pub fn write_rgb_jpeg<W: Write>(
    writer: W,
    cols: u16,
    rows: u16,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Encoder::new(writer, JPEG_QUALITY);
    encoder.encode(rgb_data, cols, rows, ColorType::Rgb)?;
    Ok(())
}

/// Grayscale images stay single-channel; everything else is flattened to RGB
/// since JPEG carries no alpha.
pub fn write_jpeg<W: Write>(
    writer: W,
    image: &DynamicImage,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = image.dimensions();
    let cols = u16::try_from(width)
        .map_err(|_| format!("width {} exceeds the JPEG limit of {}", width, u16::MAX))?;
    let rows = u16::try_from(height)
        .map_err(|_| format!("height {} exceeds the JPEG limit of {}", height, u16::MAX))?;

    match image {
        DynamicImage::ImageLuma8(gray) => write_gray_jpeg(writer, cols, rows, gray.as_raw()),
        other => write_rgb_jpeg(writer, cols, rows, other.to_rgb8().as_raw()),
    }
}

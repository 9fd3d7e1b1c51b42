use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Half;

/// Pixel bounds `(left, top, right, bottom)`; right and bottom are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Non-empty and inside a `width` x `height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Row where the collage is cut. Floor division, so an odd row goes to the bottom half.
pub fn mid_point(height: u32) -> u32 {
    height / 2
}

pub fn half_rect(half: Half, width: u32, height: u32) -> CropRect {
    let mid = mid_point(height);
    match half {
        Half::Top => CropRect::new(0, 0, width, mid),
        Half::Bottom => CropRect::new(0, mid, width, height),
    }
}

/// Copies `rect` out of `image` into a new image, leaving the source untouched.
pub fn crop(image: &DynamicImage, rect: CropRect) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    if !rect.fits(width, height) {
        return Err(Error::InvalidCropBounds {
            rect,
            width,
            height,
        });
    }
    debug!("Cropping {} from {}x{}", rect, width, height);
    Ok(image.crop_imm(rect.left, rect.top, rect.width(), rect.height()))
}

pub fn crop_half(image: &DynamicImage, half: Half) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    crop(image, half_rect(half, width, height))
}

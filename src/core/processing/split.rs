use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::params::{SplitJob, SplitOptions, SplitTargets};
use crate::core::processing::crop::{crop, half_rect, mid_point};
use crate::error::{Error, Result};
use crate::io::reader::open_collage;
use crate::io::writers::save_image;
use crate::types::{Half, SplitMode};

/// One half that made it to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenHalf {
    pub half: Half,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// What a successful split produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub mode: SplitMode,
    pub width: u32,
    pub height: u32,
    pub mid: u32,
    pub written: Vec<WrittenHalf>,
}

impl SplitReport {
    pub fn half(&self, half: Half) -> Option<&WrittenHalf> {
        self.written.iter().find(|w| w.half == half)
    }
}

/// Splits the collage at `input` along its horizontal midline and writes the
/// halves named by `targets`.
///
/// The first failure stops the run; halves written before it stay on disk.
pub fn split(input: &Path, targets: &SplitTargets, options: SplitOptions) -> Result<SplitReport> {
    let mode = targets.mode();
    info!("Splitting {:?} ({})", input, mode);

    if options.create_output_dir {
        for path in targets.paths() {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
        }
    }

    if options.check_input_exists && !input.exists() {
        return Err(Error::MissingInputFile {
            path: input.to_path_buf(),
        });
    }

    let image = open_collage(input)?;
    let (width, height) = image.dimensions();
    let mid = mid_point(height);
    debug!("Midline at row {} of {}", mid, height);

    // Every half is cropped before the first write.
    let halves = mode
        .halves()
        .iter()
        .map(|&half| crop(&image, half_rect(half, width, height)).map(|img| (half, img)))
        .collect::<Result<Vec<_>>>()?;
    drop(image);

    let mut written = Vec::with_capacity(halves.len());
    for (half, cropped) in halves {
        let Some(path) = targets.path_for(half) else {
            continue;
        };
        save_image(&cropped, path)?;
        let (w, h) = cropped.dimensions();
        written.push(WrittenHalf {
            half,
            path: path.to_path_buf(),
            width: w,
            height: h,
        });
    }

    Ok(SplitReport {
        input: input.to_path_buf(),
        mode,
        width,
        height,
        mid,
        written,
    })
}

pub fn run_job(job: &SplitJob) -> Result<SplitReport> {
    split(&job.input, &job.targets, job.options)
}

use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::processing::split::{SplitReport, run_job};
use crate::error::Result;
use crate::presets::Preset;

use super::args::CliArgs;

/// The one line a run prints: the preset's success or missing-collage notice,
/// or `Error: ...` for anything else.
pub fn status_line(preset: Preset, input: &Path, outcome: &Result<SplitReport>) -> String {
    match outcome {
        Ok(_) => preset.success_message().to_string(),
        Err(e) if e.is_missing_input() => preset.missing_input_message(input),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn run(args: CliArgs, preset: Preset) {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let job = preset.job();
    info!("Running preset {}: {:?}", preset, job.input);

    let outcome = run_job(&job);
    match &outcome {
        Ok(report) => {
            if let Ok(json) = serde_json::to_string(report) {
                debug!("Split report: {}", json);
            }
        }
        Err(e) => warn!("Preset {} failed: {}", preset, e),
    }

    println!("{}", status_line(preset, &job.input, &outcome));
}

//! Splits an uploaded whitening collage into "before" and "after" site images.
//!
//! Paths are fixed; the only flag is `--log`. Always exits normally after
//! printing one status line.

use clap::Parser;

use collage_split::Preset;
use collage_split::cli::{self, CliArgs};

fn main() {
    let args = CliArgs::parse();
    cli::run(args, Preset::WhiteningBeforeAfter);
}

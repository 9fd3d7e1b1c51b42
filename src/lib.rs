#![doc = r#"
collage-split — cut stacked before/after collages into website image assets.

A collage is one photograph holding two panels stacked vertically: the
"before" shot on top, the "after" shot below. This crate decodes such an
image, cuts it along its horizontal midline (`height / 2`, floor division, so
an odd extra row lands in the bottom half) and writes one or both halves in
the format implied by each output path's extension.

Three binaries wrap hard-coded jobs (see [`Preset`]):

- `extract-whitening-after`: bottom half of `public/images/whitening-collage-final.jpg`
- `extract-implants-after`: bottom half of `public/images/implants-collage.jpg`
- `split-whitening`: both halves of an uploaded collage into the site's image directory

Each prints a single status line and exits normally. Pass `--log` for
diagnostics on stderr.

Split a collage from code
-------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use collage_split::{split, SplitOptions, SplitTargets};

fn main() -> collage_split::Result<()> {
    let targets = SplitTargets::BeforeAndAfter {
        before: PathBuf::from("out/before.png"),
        after: PathBuf::from("out/after.png"),
    };
    let options = SplitOptions {
        check_input_exists: true,
        create_output_dir: true,
    };

    let report = split(Path::new("collage.png"), &targets, options)?;
    println!("cut {}x{} at row {}", report.width, report.height, report.mid);
    Ok(())
}
```

Error handling
--------------
`split` returns `collage_split::Result<T>`; match on [`Error`] to tell the
failure kinds apart.

```rust,no_run
use std::path::{Path, PathBuf};
use collage_split::{split, Error, SplitOptions, SplitTargets};

fn main() {
    let targets = SplitTargets::AfterOnly { after: PathBuf::from("after.jpg") };
    match split(Path::new("missing.jpg"), &targets, SplitOptions::default()) {
        Ok(_) => {}
        Err(Error::MissingInputFile { path }) => eprintln!("no collage at {}", path.display()),
        Err(Error::Decode { source, .. }) => eprintln!("not an image: {source}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`core`] — split parameters, crop geometry and the split pipeline.
- [`io`] — collage decoding and output encoders.
- [`presets`] — the binaries' fixed jobs and status messages.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod presets;
pub mod types;

// Curated public API surface
pub use crate::core::params::{SplitJob, SplitOptions, SplitTargets};
pub use crate::core::processing::crop::{CropRect, crop, crop_half, half_rect, mid_point};
pub use crate::core::processing::split::{SplitReport, WrittenHalf, run_job, split};
pub use error::{Error, Result};
pub use presets::Preset;
pub use types::{Half, SplitMode};

//! The three hard-coded collage jobs behind the crate's binaries, together
//! with the status lines each one prints.
use std::path::{Path, PathBuf};

use crate::core::params::{SplitJob, SplitOptions, SplitTargets};

const WHITENING_COLLAGE: &str = "public/images/whitening-collage-final.jpg";
const WHITENING_AFTER_EXTRACTED: &str = "public/images/whitening-after-extracted.jpg";

const IMPLANTS_COLLAGE: &str = "public/images/implants-collage.jpg";
const IMPLANTS_AFTER_EXTRACTED: &str = "public/images/implants-after-extracted.jpg";

const UPLOADED_WHITENING_COLLAGE: &str = r"C:\Users\gauri\.gemini\antigravity\brain\2580a30e-ad7a-46e5-944f-33fd0cc59d1f\uploaded_image_1_1767778668552.jpg";
const SITE_IMAGES_DIR: &str = r"c:\Smile Hub\public\images";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Preset {
    /// Bottom half of the whitening collage
    WhiteningAfter,
    /// Bottom half of the implants collage
    ImplantsAfter,
    /// Both halves of an uploaded whitening collage into the site's image directory
    WhiteningBeforeAfter,
}

impl Preset {
    pub fn job(&self) -> SplitJob {
        match self {
            Preset::WhiteningAfter => SplitJob {
                input: PathBuf::from(WHITENING_COLLAGE),
                targets: SplitTargets::AfterOnly {
                    after: PathBuf::from(WHITENING_AFTER_EXTRACTED),
                },
                options: SplitOptions {
                    check_input_exists: true,
                    create_output_dir: false,
                },
            },
            Preset::ImplantsAfter => SplitJob {
                input: PathBuf::from(IMPLANTS_COLLAGE),
                targets: SplitTargets::AfterOnly {
                    after: PathBuf::from(IMPLANTS_AFTER_EXTRACTED),
                },
                options: SplitOptions {
                    check_input_exists: true,
                    create_output_dir: false,
                },
            },
            Preset::WhiteningBeforeAfter => {
                let dir = Path::new(SITE_IMAGES_DIR);
                SplitJob {
                    input: PathBuf::from(UPLOADED_WHITENING_COLLAGE),
                    targets: SplitTargets::BeforeAndAfter {
                        before: dir.join("whitening-before.jpg"),
                        after: dir.join("whitening-after.jpg"),
                    },
                    options: SplitOptions {
                        check_input_exists: false,
                        create_output_dir: true,
                    },
                }
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Preset::WhiteningAfter => "Successfully extracted after image.",
            Preset::ImplantsAfter => "Successfully extracted implants after image.",
            Preset::WhiteningBeforeAfter => "Success",
        }
    }

    pub fn missing_input_message(&self, input: &Path) -> String {
        match self {
            Preset::ImplantsAfter => format!("Collage file not found: {}", input.display()),
            Preset::WhiteningAfter | Preset::WhiteningBeforeAfter => {
                "Collage file not found.".to_string()
            }
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::WhiteningAfter => write!(f, "whitening-after"),
            Preset::ImplantsAfter => write!(f, "implants-after"),
            Preset::WhiteningBeforeAfter => write!(f, "whitening-before-after"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplitMode;

    #[test]
    fn after_only_presets_check_for_the_collage() {
        for preset in [Preset::WhiteningAfter, Preset::ImplantsAfter] {
            let job = preset.job();
            assert_eq!(job.mode(), SplitMode::BottomHalfOnly);
            assert!(job.options.check_input_exists);
            assert!(!job.options.create_output_dir);
            assert!(job.input.starts_with("public/images"));
        }
    }

    #[test]
    fn before_after_preset_writes_both_halves_into_site_dir() {
        let job = Preset::WhiteningBeforeAfter.job();
        assert_eq!(job.mode(), SplitMode::TopAndBottomHalf);
        assert!(!job.options.check_input_exists);
        assert!(job.options.create_output_dir);
        for path in job.targets.paths() {
            assert_eq!(path.parent(), Some(Path::new(SITE_IMAGES_DIR)));
        }
    }

    #[test]
    fn missing_messages_match_each_job() {
        let input = Path::new(IMPLANTS_COLLAGE);
        assert_eq!(
            Preset::ImplantsAfter.missing_input_message(input),
            "Collage file not found: public/images/implants-collage.jpg"
        );
        assert_eq!(
            Preset::WhiteningAfter.missing_input_message(input),
            "Collage file not found."
        );
    }

    #[test]
    fn preset_jobs_survive_json() {
        let job = Preset::WhiteningBeforeAfter.job();
        let json = serde_json::to_string(&job).unwrap();
        let back: SplitJob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}

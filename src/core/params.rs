use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{Half, SplitMode};

/// Where the cropped halves go. The variant decides the split mode, so a
/// two-output run can never be missing its "before" path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitTargets {
    AfterOnly { after: PathBuf },
    BeforeAndAfter { before: PathBuf, after: PathBuf },
}

impl SplitTargets {
    pub fn mode(&self) -> SplitMode {
        match self {
            SplitTargets::AfterOnly { .. } => SplitMode::BottomHalfOnly,
            SplitTargets::BeforeAndAfter { .. } => SplitMode::TopAndBottomHalf,
        }
    }

    pub fn path_for(&self, half: Half) -> Option<&Path> {
        match (self, half) {
            (SplitTargets::AfterOnly { after }, Half::Bottom) => Some(after.as_path()),
            (SplitTargets::AfterOnly { .. }, Half::Top) => None,
            (SplitTargets::BeforeAndAfter { before, .. }, Half::Top) => Some(before.as_path()),
            (SplitTargets::BeforeAndAfter { after, .. }, Half::Bottom) => Some(after.as_path()),
        }
    }

    /// Output paths in write order.
    pub fn paths(&self) -> Vec<&Path> {
        self.mode()
            .halves()
            .iter()
            .filter_map(|half| self.path_for(*half))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Report a missing collage up front instead of letting the decoder fail on it
    pub check_input_exists: bool,
    /// Create the output directories before anything else happens
    pub create_output_dir: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            check_input_exists: true,
            create_output_dir: false,
        }
    }
}

/// One complete split run, suitable for presets and config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitJob {
    pub input: PathBuf,
    pub targets: SplitTargets,
    #[serde(default)]
    pub options: SplitOptions,
}

impl SplitJob {
    pub fn mode(&self) -> SplitMode {
        self.targets.mode()
    }
}

//! Shared types used across the crate: which halves a run produces
//! (`SplitMode`) and how each half is labeled (`Half`).
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    BottomHalfOnly,
    TopAndBottomHalf,
}

impl SplitMode {
    /// Halves produced by this mode, in the order they are written.
    pub fn halves(&self) -> &'static [Half] {
        match self {
            SplitMode::BottomHalfOnly => &[Half::Bottom],
            SplitMode::TopAndBottomHalf => &[Half::Top, Half::Bottom],
        }
    }
}

impl std::fmt::Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitMode::BottomHalfOnly => write!(f, "bottom-half-only"),
            SplitMode::TopAndBottomHalf => write!(f, "top-and-bottom-half"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// The upper panel of a collage is the "before" shot, the lower one "after".
    pub fn label(&self) -> &'static str {
        match self {
            Half::Top => "before",
            Half::Bottom => "after",
        }
    }
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

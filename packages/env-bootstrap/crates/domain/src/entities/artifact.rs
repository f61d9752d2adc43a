use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Whether a filesystem artifact exists. Every creating action probes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactState {
    Present,
    Absent,
}

impl ArtifactState {
    pub fn probe(path: &Path) -> Self {
        if path.exists() {
            ArtifactState::Present
        } else {
            ArtifactState::Absent
        }
    }

    pub fn is_present(self) -> bool {
        self == ArtifactState::Present
    }
}

impl fmt::Display for ArtifactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactState::Present => write!(f, "present"),
            ArtifactState::Absent => write!(f, "absent"),
        }
    }
}

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A Python interpreter resolved on PATH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpreter {
    /// Name it was found under (e.g. `python3`).
    pub program: String,
    pub location: PathBuf,
    pub version: Option<Version>,
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{} {} ({})", self.program, v, self.location.display()),
            None => write!(f, "{} ({})", self.program, self.location.display()),
        }
    }
}

/// Extracts a version from `python --version` style output.
///
/// Accepts `Python 3.11.4`, `v3.11`, `3.13.0rc1` and similar; pre-release
/// suffixes are dropped. Returns `None` when nothing version-like is found.
pub fn parse_interpreter_version(output: &str) -> Option<Version> {
    for line in output.lines() {
        for word in line.split_whitespace() {
            let clean = word.trim_start_matches('v').trim_matches(',');

            let numeric: Vec<u64> = clean
                .split('.')
                .map(leading_digits)
                .take_while(|part| part.is_some())
                .flatten()
                .take(3)
                .collect();

            // Need at least major.minor; a bare "3" is too ambiguous to trust.
            if numeric.len() >= 2 {
                let patch = numeric.get(2).copied().unwrap_or(0);
                return Some(Version::new(numeric[0], numeric[1], patch));
            }
        }
    }
    None
}

fn leading_digits(part: &str) -> Option<u64> {
    let end = part
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

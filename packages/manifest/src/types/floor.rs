use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum recommended interpreter release, compared on `major.minor` only.
///
/// Written as `"3.10"` in `bootstrap.toml`; a bare major (`"3"`) means `3.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionFloor {
    pub major: u64,
    pub minor: u64,
}

impl VersionFloor {
    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Patch and pre-release components are ignored: `3.10.0rc1` satisfies `3.10`.
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        (version.major, version.minor) >= (self.major, self.minor)
    }
}

impl Default for VersionFloor {
    fn default() -> Self {
        Self::new(3, 10)
    }
}

impl fmt::Display for VersionFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionFloor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(2, '.');

        let parse = |part: Option<&str>| -> Result<Option<u64>, String> {
            match part {
                None => Ok(None),
                Some(p) if p.is_empty() => Err(format!("invalid version floor '{}'", s)),
                Some(p) => p
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|_| format!("invalid version floor '{}'", s)),
            }
        };

        let major = parse(parts.next())?
            .ok_or_else(|| format!("invalid version floor '{}'", s))?;
        let minor = parse(parts.next())?.unwrap_or(0);

        Ok(Self::new(major, minor))
    }
}

impl TryFrom<String> for VersionFloor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionFloor> for String {
    fn from(floor: VersionFloor) -> Self {
        floor.to_string()
    }
}

//! Version parsing and the set of releases that get version macros.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A `MAJOR.MINOR.MICRO` version as passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Releases for which this version's header must carry macros.
    pub fn release_series(&self) -> ReleaseSeries {
        ReleaseSeries::for_version(self, LEGACY_MAJOR, LEGACY_PAIR)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        let [major, minor, micro] = parts.as_slice() else {
            return Err(VersionError::Arity {
                input: s.to_owned(),
                found: parts.len(),
            });
        };

        let component = |name: &'static str, value: &str| {
            // `u32::from_str` accepts a leading '+', which is not a version digit.
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::Component {
                    input: s.to_owned(),
                    component: name,
                    value: value.to_owned(),
                });
            }
            value.parse::<u32>().map_err(|_| VersionError::Component {
                input: s.to_owned(),
                component: name,
                value: value.to_owned(),
            })
        };

        Ok(Self {
            major: component("major", *major)?,
            minor: component("minor", *minor)?,
            micro: component("micro", *micro)?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// A released `(major, minor)` line that gets its own version macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionPair {
    pub major: u32,
    pub minor: u32,
}

impl VersionPair {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for VersionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl From<(u32, u32)> for VersionPair {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::new(major, minor)
    }
}

/// Major version of the development line that preceded the first stable 3.x.
pub const LEGACY_MAJOR: u32 = 2;

/// The only release a [`LEGACY_MAJOR`] header advertises.
pub const LEGACY_PAIR: VersionPair = VersionPair::new(3, 0);

/// Even minor versions are released lines; odd ones are development lines.
pub const fn is_stable(minor: u32) -> bool {
    minor % 2 == 0
}

/// Which historical releases a header is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseSeries {
    /// A 2.x development snapshot of what became 3.0. Only the 3.0 macros
    /// are emitted, regardless of the declared minor.
    LegacyTransition { pair: VersionPair },
    /// Every stable minor of `major` strictly below `minor_max`.
    StandardRange { major: u32, minor_max: u32 },
}

impl ReleaseSeries {
    /// Classify `version`, treating `legacy_major` as the transition line
    /// that advertises only `legacy_pair`.
    pub fn for_version(version: &Version, legacy_major: u32, legacy_pair: VersionPair) -> Self {
        if version.major == legacy_major {
            return Self::LegacyTransition { pair: legacy_pair };
        }

        // A development minor is rounded up so its stable predecessor is included.
        let minor_max = if version.minor != 0 && is_stable(version.minor) {
            version.minor
        } else {
            version.minor.saturating_add(1)
        };

        Self::StandardRange {
            major: version.major,
            minor_max,
        }
    }

    /// Eligible pairs in ascending order.
    pub fn pairs(&self) -> Vec<VersionPair> {
        match *self {
            Self::LegacyTransition { pair } => vec![pair],
            Self::StandardRange { major, minor_max } => (0..minor_max)
                .filter(|&minor| is_stable(minor))
                .map(|minor| VersionPair::new(major, minor))
                .collect(),
        }
    }
}

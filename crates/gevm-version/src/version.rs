//! Numeric `major.minor[.patch[.build]]` versions.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{Result, VersionError};

/// Shared with the relver pattern, so group names must stay unique across both.
pub(crate) const VERSION_PATTERN: &str = r"(?<major>[1-9][0-9]*|0)\.(?<minor>[1-9][0-9]*|0)(?:\.(?<patch>[1-9][0-9]*|0))?(?:\.(?<build>[1-9][0-9]*|0))?";

static VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{VERSION_PATTERN}$")).unwrap());

/// A numeric version. Missing `patch` and `build` fields read as zero.
///
/// Ordering and equality only look at the four numbers, so `4.2` and
/// `4.2.0.0` compare equal while still rendering as they were written.
#[derive(Debug, Clone, Default)]
pub struct Version {
    major:    u64,
    minor:    u64,
    patch:    u64,
    build:    u64,
    original: String,
}

impl Version {
    /// Build a version from its numbers, rendered without trailing zero fields.
    pub fn new(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        let original = if build != 0 {
            format!("{major}.{minor}.{patch}.{build}")
        } else if patch != 0 {
            format!("{major}.{minor}.{patch}")
        } else {
            format!("{major}.{minor}")
        };

        Self {
            major,
            minor,
            patch,
            build,
            original,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let caps = VERSION_REGEX
            .captures(s)
            .ok_or_else(|| VersionError::MalformedVersion(s.to_string()))?;

        Self::from_captures(&caps, s)
    }

    pub(crate) fn from_captures(caps: &Captures<'_>, original: &str) -> Result<Self> {
        let number = |name: &str| -> Result<u64> {
            caps.name(name).map_or(Ok(0), |m| {
                m.as_str()
                    .parse()
                    .map_err(|_| VersionError::MalformedVersion(original.to_string()))
            })
        };

        Ok(Self {
            major:    number("major")?,
            minor:    number("minor")?,
            patch:    number("patch")?,
            build:    number("build")?,
            original: original.to_string(),
        })
    }

    pub fn major(&self) -> u64 { self.major }

    pub fn minor(&self) -> u64 { self.minor }

    pub fn patch(&self) -> u64 { self.patch }

    pub fn build(&self) -> u64 { self.build }

    /// The text this version was parsed from.
    pub fn as_str(&self) -> &str { &self.original }

    /// A zero value (as produced by [`Default`]) is not valid.
    pub fn is_valid(&self) -> bool { !self.original.is_empty() }

    fn key(&self) -> (u64, u64, u64, u64) { (self.major, self.minor, self.patch, self.build) }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering { self.key().cmp(&other.key()) }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state) }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { Version::parse(s) }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

//! Combined version-release identifiers, with and without the mono flavor.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::release::RELEASE_PATTERN;
use crate::version::VERSION_PATTERN;
use crate::{Release, Result, Version, VersionError};

// Unanchored: identifiers are picked out of tags, directory names and file names.
static SEMVER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?<version>{VERSION_PATTERN})[-_.](?<release>{RELEASE_PATTERN})(?:[-_.](?<mono>mono))?"
    ))
    .unwrap()
});

fn captures(s: &str) -> Result<Captures<'_>> {
    SEMVER_REGEX
        .captures(s)
        .ok_or_else(|| VersionError::MalformedSemver(s.to_string()))
}

/// A version plus its release channel, e.g. `4.2.1-stable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Relver {
    version: Version,
    release: Release,
}

impl Relver {
    pub fn new(version: &str, release: &str) -> Result<Self> {
        Ok(Self {
            version: Version::parse(version)?,
            release: Release::parse(release)?,
        })
    }

    pub fn from_parts(version: Version, release: Release) -> Self { Self { version, release } }

    /// Find the first `<version><sep><release>` run in `s`.
    pub fn parse(s: &str) -> Result<Self> {
        let caps = captures(s)?;
        Self::from_captures(&caps)
    }

    fn from_captures(caps: &Captures<'_>) -> Result<Self> {
        let version = &caps["version"];
        let release = &caps["release"];

        Ok(Self {
            version: Version::from_captures(caps, version)?,
            release: Release::from_captures(caps, release)?,
        })
    }

    pub fn version(&self) -> &Version { &self.version }

    pub fn release(&self) -> &Release { &self.release }

    pub fn is_stable(&self) -> bool { self.release.is_stable() }

    pub fn is_valid(&self) -> bool { self.version.is_valid() && self.release.is_valid() }

    /// `4.2.1.stable`, the form export templates are installed under.
    pub fn dotted(&self) -> String { format!("{}.{}", self.version, self.release) }

    /// `4.2.1-stable`, the form of engine directories and release tags.
    pub fn hyphenated(&self) -> String { format!("{}-{}", self.version, self.release) }
}

impl std::str::FromStr for Relver {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { Relver::parse(s) }
}

impl std::fmt::Display for Relver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.version, self.release)
    }
}

/// A [`Relver`] plus the mono flavor flag.
///
/// The flag only affects naming: ordering, equality and hashing all delegate
/// to the relver, so `4.2-stable` and `4.2-stable-mono` compare equal. Use
/// [`Semver::is_same_build`] when the flavor matters.
#[derive(Debug, Clone, Default)]
pub struct Semver {
    relver: Relver,
    mono:   bool,
}

impl Semver {
    pub fn new(version: &str, release: &str, mono: bool) -> Result<Self> {
        Ok(Self {
            relver: Relver::new(version, release)?,
            mono,
        })
    }

    /// Like [`Semver::new`], but degrades to an invalid zero value instead of
    /// failing. Callers check [`Semver::is_valid`] before using the result.
    pub fn maybe(version: &str, release: &str, mono: bool) -> Self {
        Self::new(version, release, mono).unwrap_or_default()
    }

    pub fn from_relver(relver: Relver, mono: bool) -> Self { Self { relver, mono } }

    pub fn parse(s: &str) -> Result<Self> {
        let caps = captures(s)?;

        Ok(Self {
            relver: Relver::from_captures(&caps)?,
            mono:   caps.name("mono").is_some(),
        })
    }

    pub fn relver(&self) -> &Relver { &self.relver }

    pub fn is_mono(&self) -> bool { self.mono }

    pub fn is_valid(&self) -> bool { self.relver.is_valid() }

    pub fn is_same_build(&self, other: &Semver) -> bool {
        self.relver == other.relver && self.mono == other.mono
    }

    pub fn dotted(&self) -> String {
        match self.mono {
            true => format!("{}.mono", self.relver.dotted()),
            false => self.relver.dotted(),
        }
    }

    pub fn hyphenated(&self) -> String {
        match self.mono {
            true => format!("{}-mono", self.relver.hyphenated()),
            false => self.relver.hyphenated(),
        }
    }
}

impl Ord for Semver {
    fn cmp(&self, other: &Self) -> Ordering { self.relver.cmp(&other.relver) }
}

impl PartialOrd for Semver {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Semver {
    fn eq(&self, other: &Self) -> bool { self.relver == other.relver }
}

impl Eq for Semver {}

impl Hash for Semver {
    fn hash<H: Hasher>(&self, state: &mut H) { self.relver.hash(state) }
}

impl std::str::FromStr for Semver {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { Semver::parse(s) }
}

impl std::fmt::Display for Semver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

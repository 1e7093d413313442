//! Release channels: `dev1`, `alpha2`, `beta3`, `rc4`, `stable`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{Result, VersionError};

/// Shared with the relver pattern, so group names must stay unique across both.
pub(crate) const RELEASE_PATTERN: &str = r"(?:(?<label>dev|alpha|beta|rc)(?<ordinal>[1-9][0-9]*|0)|(?<stable>stable))(?:[-_.](?<meta>unofficial))?";

static RELEASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{RELEASE_PATTERN}$")).unwrap());

/// Release channel, declared in ascending rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    #[default]
    Dev,
    Alpha,
    Beta,
    Rc,
    Stable,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Dev => "dev",
            Channel::Alpha => "alpha",
            Channel::Beta => "beta",
            Channel::Rc => "rc",
            Channel::Stable => "stable",
        }
    }

    /// Fixed rank, `dev` = 1 through `stable` = 5.
    pub fn rank(self) -> u8 {
        match self {
            Channel::Dev => 1,
            Channel::Alpha => 2,
            Channel::Beta => 3,
            Channel::Rc => 4,
            Channel::Stable => 5,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "dev" => Some(Channel::Dev),
            "alpha" => Some(Channel::Alpha),
            "beta" => Some(Channel::Beta),
            "rc" => Some(Channel::Rc),
            "stable" => Some(Channel::Stable),
            _ => None,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A release channel plus its ordinal.
///
/// Ordered by channel rank, then ordinal. `stable` always carries ordinal 0,
/// and metadata never takes part in ordering.
#[derive(Debug, Clone, Default)]
pub struct Release {
    channel:  Channel,
    ordinal:  u64,
    metadata: Option<String>,
    original: String,
}

impl Release {
    pub fn new(channel: Channel, ordinal: u64) -> Self {
        match channel {
            Channel::Stable => Self {
                channel,
                ordinal: 0,
                metadata: None,
                original: channel.as_str().to_string(),
            },
            _ => Self {
                channel,
                ordinal,
                metadata: None,
                original: format!("{channel}{ordinal}"),
            },
        }
    }

    pub fn stable() -> Self { Self::new(Channel::Stable, 0) }

    pub fn parse(s: &str) -> Result<Self> {
        let caps = RELEASE_REGEX
            .captures(s)
            .ok_or_else(|| VersionError::MalformedRelease(s.to_string()))?;

        Self::from_captures(&caps, s)
    }

    pub(crate) fn from_captures(caps: &Captures<'_>, original: &str) -> Result<Self> {
        let malformed = || VersionError::MalformedRelease(original.to_string());

        let label = caps
            .name("label")
            .or_else(|| caps.name("stable"))
            .ok_or_else(malformed)?;
        let channel = Channel::from_label(label.as_str()).ok_or_else(malformed)?;

        let ordinal = match (channel, caps.name("ordinal")) {
            (Channel::Stable, _) | (_, None) => 0,
            (_, Some(m)) => m.as_str().parse().map_err(|_| malformed())?,
        };

        Ok(Self {
            channel,
            ordinal,
            metadata: caps.name("meta").map(|m| m.as_str().to_string()),
            original: original.to_string(),
        })
    }

    pub fn channel(&self) -> Channel { self.channel }

    pub fn ordinal(&self) -> u64 { self.ordinal }

    /// Trailing free text such as `unofficial`.
    pub fn metadata(&self) -> Option<&str> { self.metadata.as_deref() }

    pub fn is_stable(&self) -> bool { self.channel == Channel::Stable }

    pub fn as_str(&self) -> &str { &self.original }

    pub fn is_valid(&self) -> bool { !self.original.is_empty() }

    fn key(&self) -> (Channel, u64) { (self.channel, self.ordinal) }
}

impl Ord for Release {
    fn cmp(&self, other: &Self) -> Ordering { self.key().cmp(&other.key()) }
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl Eq for Release {}

impl Hash for Release {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state) }
}

impl std::str::FromStr for Release {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> { Release::parse(s) }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

//! Version and release parsing, comparison, and display for Godot builds.
//!
//! Godot identifies a build by a numeric version and a release channel, e.g.
//! `4.2.1-stable` or `4.3-beta2`, optionally followed by the `mono` flavor.
//!
//! # Types
//!
//! - [`Version`]: `major.minor[.patch[.build]]`
//! - [`Release`]: `dev|alpha|beta|rc<n>` or `stable`, with optional `unofficial` metadata
//! - [`Relver`]: a version plus a release
//! - [`Semver`]: a relver plus the mono flag, which never takes part in ordering

pub use error::{Result, VersionError};
pub use release::{Channel, Release};
pub use relver::{Relver, Semver};
pub use version::Version;

mod error;
mod release;
mod relver;
mod version;

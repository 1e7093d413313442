//! Archive extraction for engine and export template downloads.
//!
//! Godot ships `.zip` archives and `.tpz` template bundles, which are zips
//! under another extension. Extraction creates intermediate directories,
//! keeps unix permission bits and refuses entries that would land outside
//! the destination.

mod error;
mod extract;
mod sanitize;

pub use error::{ArchiveError, Result};
pub use extract::{ExtractReport, extract, extract_from_reader};

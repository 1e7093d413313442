//! Platform targets and Godot release asset naming.
//!
//! - [`target`] - Supported install targets and host detection
//! - [`mapping`] - File name tokens per target, plus override permissions
//! - [`asset`] - Release asset name classification
//! - [`executable`] - Engine executable names inside an installed tree

pub use asset::{Classification, classify, is_superseded};
pub use error::{PlatformError, Result};
pub use executable::ExecutableMatcher;
pub use mapping::Mapping;
pub use target::{Arch, Os, PlatformTarget};

pub mod asset;
mod error;
pub mod executable;
pub mod mapping;
pub mod target;

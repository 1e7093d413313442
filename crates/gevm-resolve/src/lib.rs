//! Release index construction and single asset resolution.
//!
//! A [`RepositoryResolver`] reads the release feed, parses every tag into a
//! [`Relver`](gevm_version::Relver), classifies every attached asset and
//! files it under the platform targets whose tokens it carries.

mod asset;
mod error;
mod index;
mod resolver;

pub use asset::Asset;
pub use error::{ResolveError, Result};
pub use index::{FlavorFilter, IndexWarning, ReleaseEntry, ReleaseIndex};
pub use resolver::{DEFAULT_RELEASE_TAG_URL, DEFAULT_RELEASES_URL, RepositoryResolver};

//! Release feed reading and archive downloads.
//!
//! - [`client`] - the [`HttpClient`] seam and its reqwest implementation
//! - [`feed`] - paginated release listings and single tag lookups
//! - [`download`] - idempotent archive downloads into the cache
//!
//! Everything here is blocking. The reqwest client drives its own
//! current-thread runtime so callers never need an executor.

pub mod client;
pub mod download;
mod error;
pub mod feed;
mod link;

pub use client::{ClientError, ClientSetting, ClientSettingError, HttpClient, ReqwestClient, Response};
pub use download::{DownloadOutcome, Downloader, Progress};
pub use error::{FetchError, Result};
pub use feed::{AssetDescriptor, FeedReader, Pages, ReleaseDescriptor};
pub use link::next_link;
pub use reqwest::Url;

//! GitHub style release listings.

use std::iter::FusedIterator;

use serde::Deserialize;
use tracing::debug;

use crate::{FetchError, HttpClient, Response, Result, next_link};

/// One published release as the feed reports it. Nothing is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseDescriptor {
    #[serde(rename = "tag_name")]
    pub tag:    String,
    #[serde(default)]
    pub assets: Vec<AssetDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetDescriptor {
    pub name:         String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

pub struct FeedReader<C> {
    client: C,
}

impl<C: HttpClient> FeedReader<C> {
    pub fn new(client: C) -> Self { Self { client } }

    pub fn client(&self) -> &C { &self.client }

    /// Walk the listing page by page, starting at `start_url` and following
    /// `next` links until a page carries none.
    ///
    /// Pages are requested lazily, one per call to `next`. The first error
    /// ends the walk.
    pub fn pages(&self, start_url: &str) -> Pages<'_, C> {
        Pages {
            reader: self,
            next:   Some(start_url.to_string()),
        }
    }

    /// Every release on every page, in feed order.
    pub fn fetch_all_pages(&self, start_url: &str) -> Result<Vec<ReleaseDescriptor>> {
        let mut releases = Vec::new();
        for page in self.pages(start_url) {
            releases.extend(page?);
        }
        Ok(releases)
    }

    /// A single release object, as served by a tag lookup.
    pub fn fetch_single_page(&self, url: &str) -> Result<ReleaseDescriptor> {
        let response = self.fetch(url)?;
        decode(url, &response.body)
    }

    fn fetch(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self.client.get(url).map_err(|e| FetchError::transport(url, e))?;
        FetchError::check_status(url, response.status)?;
        Ok(response)
    }
}

fn decode<T: for<'de> Deserialize<'de>>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Lazy page iterator returned by [`FeedReader::pages`].
pub struct Pages<'a, C> {
    reader: &'a FeedReader<C>,
    next:   Option<String>,
}

impl<C: HttpClient> Iterator for Pages<'_, C> {
    type Item = Result<Vec<ReleaseDescriptor>>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.next.take()?;

        let page = self.reader.fetch(&url).and_then(|response| {
            let page = decode::<Vec<ReleaseDescriptor>>(&url, &response.body)?;
            self.next = response.link.as_deref().and_then(next_link).map(str::to_string);
            Ok(page)
        });

        Some(page)
    }
}

impl<C: HttpClient> FusedIterator for Pages<'_, C> {}

#[cfg(test)]
mod tests {
    use super::ReleaseDescriptor;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{
            "id": 1,
            "tag_name": "4.2.1-stable",
            "draft": false,
            "assets": [
                {"name": "Godot_v4.2.1-stable_linux.x86_64.zip", "size": 10,
                 "browser_download_url": "https://example.com/a.zip"}
            ]
        }"#;
        let release: ReleaseDescriptor = serde_json::from_str(body).unwrap();
        assert_eq!(release.tag, "4.2.1-stable");
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].download_url, "https://example.com/a.zip");
    }

    #[test]
    fn test_decode_missing_assets() {
        let release: ReleaseDescriptor = serde_json::from_str(r#"{"tag_name": "1.0-stable"}"#).unwrap();
        assert!(release.assets.is_empty());
    }
}

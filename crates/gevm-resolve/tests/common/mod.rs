#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, io::Write};

use gevm_fetch::{HttpClient, Progress, Response};

/// Canned feed keyed by URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct StubFeed {
    responses: HashMap<String, Response>,
    requests:  RefCell<Vec<String>>,
}

impl StubFeed {
    pub fn serve(mut self, url: &str, body: String, next: Option<&str>) -> Self {
        self.responses.insert(url.to_string(), Response {
            status: 200,
            link:   next.map(|n| format!(r#"<{n}>; rel="next""#)),
            body:   body.into_bytes(),
        });
        self
    }

    pub fn requests(&self) -> usize { self.requests.borrow().len() }
}

impl HttpClient for StubFeed {
    type Error = std::io::Error;

    fn get(&self, url: &str) -> Result<Response, Self::Error> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.responses.get(url).cloned().unwrap_or(Response {
            status: 404,
            ..Response::default()
        }))
    }

    fn stream(&self, _: &str, _: &mut dyn Write, _: &mut dyn Progress) -> Result<u16, Self::Error> { Ok(404) }
}

pub fn release(tag: &str, assets: &[&str]) -> String {
    let assets = assets
        .iter()
        .map(|name| format!(r#"{{"name":"{name}","browser_download_url":"https://dl/{tag}/{name}"}}"#))
        .collect::<Vec<_>>();
    format!(r#"{{"tag_name":"{tag}","assets":[{}]}}"#, assets.join(","))
}

pub fn page(releases: &[String]) -> String { format!("[{}]", releases.join(",")) }

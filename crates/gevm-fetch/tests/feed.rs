use std::{cell::RefCell, collections::HashMap, io::Write};

use gevm_fetch::{FeedReader, FetchError, HttpClient, Progress, Response};

/// Serves canned pages and counts every request.
#[derive(Default)]
struct PagedClient {
    pages:    HashMap<String, Response>,
    requests: RefCell<Vec<String>>,
}

impl PagedClient {
    fn page(mut self, url: &str, body: &str, next: Option<&str>) -> Self {
        self.pages.insert(url.to_string(), Response {
            status: 200,
            link:   next.map(|n| format!(r#"<{n}>; rel="next", <{url}>; rel="first""#)),
            body:   body.as_bytes().to_vec(),
        });
        self
    }

    fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Response {
            status,
            ..Response::default()
        });
        self
    }

    fn requests(&self) -> Vec<String> { self.requests.borrow().clone() }
}

impl HttpClient for PagedClient {
    type Error = std::io::Error;

    fn get(&self, url: &str) -> Result<Response, Self::Error> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, url.to_string()))
    }

    fn stream(&self, _: &str, _: &mut dyn Write, _: &mut dyn Progress) -> Result<u16, Self::Error> {
        unreachable!("feeds are never streamed")
    }
}

fn releases(tags: &[&str]) -> String {
    let items = tags
        .iter()
        .map(|t| format!(r#"{{"tag_name":"{t}","assets":[]}}"#))
        .collect::<Vec<_>>();
    format!("[{}]", items.join(","))
}

#[test]
fn follows_next_links_once_per_page() {
    let client = PagedClient::default()
        .page("p1", &releases(&["4.3-stable", "4.2.2-stable"]), Some("p2"))
        .page("p2", &releases(&["4.2.1-stable"]), Some("p3"))
        .page("p3", &releases(&["4.2-stable"]), None);
    let reader = FeedReader::new(&client);

    let all = reader.fetch_all_pages("p1").unwrap();

    let tags = all.iter().map(|r| r.tag.as_str()).collect::<Vec<_>>();
    assert_eq!(tags, ["4.3-stable", "4.2.2-stable", "4.2.1-stable", "4.2-stable"]);
    assert_eq!(client.requests(), ["p1", "p2", "p3"]);
}

#[test]
fn pages_are_fetched_lazily() {
    let client = PagedClient::default()
        .page("p1", &releases(&["4.3-stable"]), Some("p2"))
        .page("p2", &releases(&["4.2-stable"]), None);
    let reader = FeedReader::new(&client);

    let mut pages = reader.pages("p1");
    assert!(client.requests().is_empty());

    assert_eq!(pages.next().unwrap().unwrap().len(), 1);
    assert_eq!(client.requests(), ["p1"]);

    assert!(pages.next().unwrap().is_ok());
    assert!(pages.next().is_none());
    assert!(pages.next().is_none());
    assert_eq!(client.requests(), ["p1", "p2"]);
}

#[test]
fn error_status_stops_the_walk() {
    let client = PagedClient::default()
        .page("p1", &releases(&["4.3-stable"]), Some("p2"))
        .status("p2", 403);
    let reader = FeedReader::new(&client);

    let err = reader.fetch_all_pages("p1").unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 403, .. }));

    let mut pages = reader.pages("p1");
    assert!(pages.next().unwrap().is_ok());
    assert!(pages.next().unwrap().is_err());
    assert!(pages.next().is_none());
}

#[test]
fn malformed_page_is_a_decode_error() {
    let client = PagedClient::default().page("p1", "{ not json", None);
    let err = FeedReader::new(&client).fetch_all_pages("p1").unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[test]
fn single_page_lookup() {
    let client = PagedClient::default()
        .page(
            "tag",
            r#"{"tag_name":"4.2.1-stable","assets":[{"name":"a.zip","browser_download_url":"https://x/a.zip"}]}"#,
            None,
        )
        .status("missing", 404);
    let reader = FeedReader::new(&client);

    let release = reader.fetch_single_page("tag").unwrap();
    assert_eq!(release.tag, "4.2.1-stable");
    assert_eq!(release.assets[0].name, "a.zip");

    assert!(reader.fetch_single_page("missing").unwrap_err().is_not_found());
}

#[test]
fn transport_failure_is_reported() {
    let client = PagedClient::default();
    let err = FeedReader::new(&client).fetch_single_page("nowhere").unwrap_err();
    assert!(matches!(err, FetchError::Transport { ref url, .. } if url == "nowhere"));
}

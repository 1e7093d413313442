use once_cell::sync::Lazy;
use regex::Regex;

static NEXT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(?<url>[^>]*)>[^<]*next").unwrap());

/// The `rel="next"` target of a pagination `Link` header.
///
/// The header is a comma separated list of `<url>; rel="..."` entries and
/// only the entry whose relation mentions `next` counts.
pub fn next_link(header: &str) -> Option<&str> {
    NEXT_REGEX
        .captures(header)
        .and_then(|caps| caps.name("url"))
        .map(|m| m.as_str())
}

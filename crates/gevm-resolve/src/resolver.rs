use gevm_fetch::{FeedReader, HttpClient, ReleaseDescriptor};
use gevm_platform::{Mapping, PlatformTarget, classify, is_superseded, mapping};
use gevm_version::{Relver, Semver};
use tracing::{debug, trace};

use crate::{Asset, FlavorFilter, ReleaseIndex, ResolveError, Result};

pub const DEFAULT_RELEASES_URL: &str = "https://api.github.com/repos/godotengine/godot-builds/releases?per_page=100";
pub const DEFAULT_RELEASE_TAG_URL: &str = "https://api.github.com/repos/godotengine/godot-builds/releases/tags/";

pub struct RepositoryResolver<C> {
    reader:          FeedReader<C>,
    releases_url:    String,
    release_tag_url: String,
}

impl<C: HttpClient> RepositoryResolver<C> {
    pub fn new(client: C) -> Self {
        Self {
            reader:          FeedReader::new(client),
            releases_url:    DEFAULT_RELEASES_URL.to_string(),
            release_tag_url: DEFAULT_RELEASE_TAG_URL.to_string(),
        }
    }

    /// Point at another feed. `release_tag_url` is the prefix a hyphenated
    /// tag is appended to.
    pub fn with_urls(mut self, releases_url: impl Into<String>, release_tag_url: impl Into<String>) -> Self {
        self.releases_url = releases_url.into();
        self.release_tag_url = release_tag_url.into();
        self
    }

    /// Read the whole feed and index every asset of the accepted flavors.
    ///
    /// A tag that does not parse fails the build. Unmapped assets and
    /// slot collisions are logged and recorded on the index instead.
    pub fn build_index(&self, filter: FlavorFilter) -> Result<ReleaseIndex> {
        let mut index = ReleaseIndex::default();

        for page in self.reader.pages(&self.releases_url) {
            for release in page? {
                index_release(&mut index, release, filter)?;
            }
        }

        debug!("indexed {} releases", index.len());
        Ok(index)
    }

    /// The one asset published for `target` in `semver`'s release and flavor.
    pub fn resolve_single_asset(&self, target: PlatformTarget, semver: &Semver) -> Result<Asset> {
        let not_found = || ResolveError::NotFound {
            target,
            version: semver.to_string(),
        };

        if !semver.is_valid() {
            return Err(not_found());
        }

        let url = self.tag_url(semver.relver());
        let release = match self.reader.fetch_single_page(&url) {
            Err(e) if e.is_not_found() => return Err(not_found()),
            release => release?,
        };

        let wanted = Mapping::of(target);
        let mut candidates = release
            .assets
            .into_iter()
            .filter(|raw| !is_superseded(&raw.name))
            .filter(|raw| classify(&raw.name).is_some_and(|c| c.mono == semver.is_mono() && wanted.matches(&c)))
            .map(Asset::from)
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => Err(not_found()),
            1 => Ok(candidates.remove(0)),
            _ => Err(ResolveError::Ambiguous {
                target,
                version: semver.to_string(),
                candidates: candidates.into_iter().map(|a| a.name).collect(),
            }),
        }
    }

    fn tag_url(&self, relver: &Relver) -> String {
        format!("{}/{}", self.release_tag_url.trim_end_matches('/'), relver.hyphenated())
    }
}

fn index_release(index: &mut ReleaseIndex, release: ReleaseDescriptor, filter: FlavorFilter) -> Result<()> {
    let relver = Relver::parse(&release.tag).map_err(|source| ResolveError::MalformedTag {
        tag: release.tag.clone(),
        source,
    })?;
    index.touch(&relver);

    for raw in release.assets {
        if is_superseded(&raw.name) {
            trace!(asset = %raw.name, "superseded");
            continue;
        }

        let Some(class) = classify(&raw.name) else {
            debug!(asset = %raw.name, "not an engine asset");
            continue;
        };

        if !filter.accepts(class.mono) {
            continue;
        }

        let mono = class.mono;
        let arch = class.arch.to_string();
        let targets = mapping::targets_for(&class).collect::<Vec<_>>();
        if targets.is_empty() {
            index.unmapped(&relver, &raw.name);
            continue;
        }

        let asset = Asset::from(raw);
        for target in targets {
            index.claim(&relver, target, mono, &arch, asset.clone());
        }
    }

    Ok(())
}

use gevm_fetch::{Downloader, HttpClient, Progress};
use gevm_platform::{ExecutableMatcher, Os, PlatformTarget};
use gevm_resolve::RepositoryResolver;

use crate::{config::Config, ui::tracker::ProgressTracker};

/// Everything a service needs for one invocation.
pub struct GevmEnv<C> {
    pub config:   Config,
    pub platform: PlatformTarget,
    pub silent:   bool,
    resolver:     RepositoryResolver<C>,
    downloader:   Downloader<C>,
}

impl<C: HttpClient + Copy> GevmEnv<C> {
    pub fn new(config: Config, platform: PlatformTarget, silent: bool, client: C) -> Self {
        let resolver = RepositoryResolver::new(client).with_urls(&config.releases_url, &config.release_tag_url);

        Self {
            config,
            platform,
            silent,
            resolver,
            downloader: Downloader::new(client),
        }
    }
}

impl<C: HttpClient> GevmEnv<C> {
    pub fn resolver(&self) -> &RepositoryResolver<C> { &self.resolver }

    pub fn downloader(&self) -> &Downloader<C> { &self.downloader }

    pub fn progress(&self, prefix: &str) -> Box<dyn Progress> {
        if self.silent {
            Box::new(())
        } else {
            Box::new(ProgressTracker::new(prefix))
        }
    }

    /// Editor naming for the OS of the configured platform.
    pub fn executable(&self) -> ExecutableMatcher {
        ExecutableMatcher::for_os(self.platform.os().unwrap_or_else(Os::detect))
    }
}

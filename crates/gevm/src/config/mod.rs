//! Persistent user configuration.

mod settings;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use gevm_fetch::{ClientSetting, Url};
use gevm_platform::Os;
use gevm_resolve::{DEFAULT_RELEASE_TAG_URL, DEFAULT_RELEASES_URL};
use serde::{Deserialize, Serialize};

pub use settings::{SETTINGS, Setting};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub godot_root_directory:            PathBuf,
    pub export_templates_root_directory: PathBuf,
    pub cache_directory:                 PathBuf,
    pub bin_directory:                   PathBuf,
    pub application_shortcut_directory:  PathBuf,
    pub desktop_shortcut_directory:      PathBuf,
    pub releases_url:                    String,
    pub release_tag_url:                 String,
    pub proxies:                         Vec<String>,
}

impl Default for Config {
    fn default() -> Self { Self::defaults_for(Os::detect()) }
}

impl Config {
    pub fn defaults_for(os: Os) -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        let data = dirs::data_dir().unwrap_or_else(|| home.join(".local/share"));
        let cache = dirs::cache_dir().unwrap_or_else(|| home.join(".cache"));

        // Where the Godot editor itself looks for templates.
        let templates = match os {
            Os::Linux | Os::Unknown => data.join("godot").join("export_templates"),
            Os::Windows | Os::Macos => data.join("Godot").join("export_templates"),
        };
        let applications = match os {
            Os::Linux | Os::Unknown => data.join("applications"),
            Os::Macos => home.join("Applications"),
            Os::Windows => data.join("Microsoft").join("Windows").join("Start Menu").join("Programs"),
        };
        let bin = match os {
            Os::Linux | Os::Unknown => home.join(".local").join("bin"),
            Os::Windows | Os::Macos => home.join("bin"),
        };

        Self {
            godot_root_directory: home.join("Godot"),
            export_templates_root_directory: templates,
            cache_directory: cache.join("gevm"),
            bin_directory: bin,
            application_shortcut_directory: applications,
            desktop_shortcut_directory: dirs::desktop_dir().unwrap_or_else(|| home.join("Desktop")),
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            release_tag_url: DEFAULT_RELEASE_TAG_URL.to_string(),
            proxies: Vec::new(),
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("gevm").join("config.json"))
    }

    /// Read `path` over the defaults and write the merged result back, so
    /// the file always lists every key.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid config file {}", path.display()))?
        } else {
            Config::default()
        };

        config.save(path)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn client_setting(&self) -> Result<ClientSetting> {
        let proxies = self
            .proxies
            .iter()
            .map(|p| Url::parse(p).with_context(|| format!("Invalid proxy URL {p:?}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClientSetting::default().with_proxies(proxies))
    }

    pub fn godot_cache(&self) -> PathBuf { self.cache_directory.join("godot") }

    pub fn templates_cache(&self) -> PathBuf { self.cache_directory.join("export_templates") }
}

//! Key by key access to [`Config`] for the `settings` command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use gevm_fetch::Url;

use super::Config;

pub struct Setting {
    pub key: &'static str,
    get:     fn(&Config) -> String,
    set:     fn(&mut Config, &str) -> Result<()>,
}

impl Setting {
    pub fn find(key: &str) -> Result<&'static Setting> {
        match SETTINGS.iter().find(|s| s.key == key) {
            Some(setting) => Ok(setting),
            None => {
                let known = SETTINGS.iter().map(|s| s.key).collect::<Vec<_>>().join(", ");
                bail!("Unknown setting {key:?}, expected one of: {known}")
            }
        }
    }

    pub fn get(&self, config: &Config) -> String { (self.get)(config) }

    pub fn set(&self, config: &mut Config, value: &str) -> Result<()> { (self.set)(config, value) }
}

fn show(path: &std::path::Path) -> String { path.display().to_string() }

fn url(value: &str) -> Result<String> {
    Url::parse(value).with_context(|| format!("Invalid URL {value:?}"))?;
    Ok(value.to_string())
}

pub const SETTINGS: &[Setting] = &[
    Setting {
        key: "godot-root-directory",
        get: |c| show(&c.godot_root_directory),
        set: |c, v| {
            c.godot_root_directory = PathBuf::from(v);
            Ok(())
        },
    },
    Setting {
        key: "export-templates-root-directory",
        get: |c| show(&c.export_templates_root_directory),
        set: |c, v| {
            c.export_templates_root_directory = PathBuf::from(v);
            Ok(())
        },
    },
    Setting {
        key: "cache-directory",
        get: |c| show(&c.cache_directory),
        set: |c, v| {
            c.cache_directory = PathBuf::from(v);
            Ok(())
        },
    },
    Setting {
        key: "bin-directory",
        get: |c| show(&c.bin_directory),
        set: |c, v| {
            c.bin_directory = PathBuf::from(v);
            Ok(())
        },
    },
    Setting {
        key: "application-shortcut-directory",
        get: |c| show(&c.application_shortcut_directory),
        set: |c, v| {
            c.application_shortcut_directory = PathBuf::from(v);
            Ok(())
        },
    },
    Setting {
        key: "desktop-shortcut-directory",
        get: |c| show(&c.desktop_shortcut_directory),
        set: |c, v| {
            c.desktop_shortcut_directory = PathBuf::from(v);
            Ok(())
        },
    },
    Setting {
        key: "releases-url",
        get: |c| c.releases_url.clone(),
        set: |c, v| {
            c.releases_url = url(v)?;
            Ok(())
        },
    },
    Setting {
        key: "release-tag-url",
        get: |c| c.release_tag_url.clone(),
        set: |c, v| {
            c.release_tag_url = url(v)?;
            Ok(())
        },
    },
    Setting {
        key: "proxies",
        get: |c| c.proxies.join(","),
        // Comma separated; empty clears the list.
        set: |c, v| {
            c.proxies = v
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(url)
                .collect::<Result<_>>()?;
            Ok(())
        },
    },
];

use anyhow::{Context, Result};
use gevm_fetch::HttpClient;
use gevm_platform::PlatformTarget;
use gevm_resolve::{FlavorFilter, ReleaseEntry, ReleaseIndex};
use tabled::{Table, Tabled};

use crate::{
    env::GevmEnv,
    ui::table::{Formatter, mark},
};

#[derive(Debug, Tabled)]
pub struct VersionRow {
    #[tabled(rename = "Version")]
    pub version:   String,
    #[tabled(rename = "Release")]
    pub release:   String,
    #[tabled(rename = "Available")]
    pub available: &'static str,
}

fn index<C: HttpClient>(env: &GevmEnv<C>, mono: bool) -> Result<ReleaseIndex> {
    env.resolver()
        .build_index(FlavorFilter::of(mono))
        .context("Failed to read the release feed")
}

fn shown(index: &ReleaseIndex, all: bool) -> impl Iterator<Item = &ReleaseEntry> {
    index
        .sorted()
        .into_iter()
        .filter(move |entry| all || entry.relver().is_stable())
}

pub fn rows(index: &ReleaseIndex, platform: PlatformTarget, mono: bool, all: bool) -> Vec<VersionRow> {
    shown(index, all)
        .map(|entry| VersionRow {
            version:   entry.relver().version().to_string(),
            release:   entry.relver().release().to_string(),
            available: mark(entry.has_asset(platform, mono)),
        })
        .collect()
}

/// Published versions and whether the host platform has a build.
pub fn list<C: HttpClient>(env: &GevmEnv<C>, all: bool, mono: bool) -> Result<Table> {
    let index = index(env, mono)?;
    let header = format!("Godot {} builds for {}", flavor(mono), env.platform);
    Ok(Formatter::default()
        .with_header(header)
        .build(rows(&index, env.platform, mono, all)))
}

/// Published versions with one availability column per platform target.
pub fn detailed<C: HttpClient>(env: &GevmEnv<C>, all: bool, mono: bool) -> Result<Table> {
    let index = index(env, mono)?;

    let mut header = vec!["Version".to_string(), "Release".to_string()];
    header.extend(PlatformTarget::ALL.iter().map(|t| t.to_string()));

    let rows = shown(&index, all)
        .map(|entry| {
            let mut row = vec![
                entry.relver().version().to_string(),
                entry.relver().release().to_string(),
            ];
            row.extend(
                PlatformTarget::ALL
                    .iter()
                    .map(|t| mark(entry.has_asset(*t, mono)).to_string()),
            );
            row
        })
        .collect();

    Ok(Formatter::default()
        .with_header(format!("Godot {} builds", flavor(mono)))
        .build_records(header, rows))
}

fn flavor(mono: bool) -> &'static str { if mono { "mono" } else { "standard" } }

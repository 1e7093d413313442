//! Export templates live in the directory the editor scans, one
//! `<version>.<release>[.mono]` folder each.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use gevm_archive::extract;
use gevm_fetch::HttpClient;
use gevm_platform::PlatformTarget;
use gevm_version::Semver;
use tracing::info;

use super::{fetch_archive, installed, remove_dir};
use crate::{config::Config, env::GevmEnv};

pub fn install_dir(config: &Config, semver: &Semver) -> PathBuf {
    config.export_templates_root_directory.join(semver.dotted())
}

pub fn download<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver) -> Result<PathBuf> {
    let path = fetch_archive(env, PlatformTarget::ExportTemplates, semver, &env.config.templates_cache())?;
    info!("Export templates '{semver}' downloaded to {}", path.display());
    Ok(path)
}

pub fn install<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver) -> Result<()> {
    let dir = install_dir(&env.config, semver);
    if dir.exists() {
        info!("Export templates '{semver}' are already installed");
        return Ok(());
    }

    let archive = download(env, semver)?;

    // Staged next to the destination so the final move is a rename.
    let root = &env.config.export_templates_root_directory;
    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    let staging = tempfile::Builder::new()
        .prefix(".gevm-")
        .tempdir_in(root)
        .context("Failed to create staging directory")?;

    extract(&archive, staging.path()).with_context(|| format!("Failed to install export templates '{semver}'"))?;

    let inner = staging.path().join("templates");
    if !inner.is_dir() {
        bail!("{} has no templates directory", archive.display());
    }
    fs::rename(&inner, &dir).with_context(|| format!("Failed to move templates into {}", dir.display()))?;

    info!("Export templates '{semver}' installed");
    Ok(())
}

pub fn uninstall(config: &Config, semver: &Semver) -> Result<()> {
    let dir = install_dir(config, semver);
    if !dir.exists() {
        info!("Export templates '{semver}' are not installed");
        return Ok(());
    }

    remove_dir(&dir)?;
    info!("Export templates '{semver}' uninstalled");
    Ok(())
}

pub fn list(config: &Config) -> Result<Vec<Semver>> {
    Ok(installed(&config.export_templates_root_directory)?
        .into_iter()
        .map(|(semver, _)| semver)
        .collect())
}

pub fn clear(config: &Config) -> Result<usize> {
    let versions = installed(&config.export_templates_root_directory)?;
    for (semver, dir) in &versions {
        remove_dir(dir)?;
        info!("Export templates '{semver}' uninstalled");
    }
    Ok(versions.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gevm_version::Semver;
    use tempfile::tempdir;

    use super::{install, install_dir, list, uninstall};
    use crate::env::testing::{StubClient, env_in, release_json, zip_bytes};

    const TPZ: &str = "Godot_v4.2.1-stable_mono_export_templates.tpz";

    fn mono() -> Semver { Semver::new("4.2.1", "stable", true).unwrap() }

    #[test]
    fn test_install_moves_inner_directory() {
        let dir = tempdir().unwrap();
        let client = StubClient::default()
            .page(
                "https://feed/tags/4.2.1-stable",
                release_json("4.2.1-stable", &["Godot_v4.2.1-stable_export_templates.tpz", TPZ]),
            )
            .file(
                &format!("https://dl/{TPZ}"),
                zip_bytes(&[
                    ("templates/version.txt", b"4.2.1.stable.mono", 0o644),
                    ("templates/linux_release.x86_64", b"", 0o755),
                ]),
            );
        let env = env_in(dir.path(), &client);

        install(&env, &mono()).unwrap();

        let installed = install_dir(&env.config, &mono());
        assert!(installed.ends_with("templates/4.2.1.stable.mono"));
        assert_eq!(
            fs::read_to_string(installed.join("version.txt")).unwrap(),
            "4.2.1.stable.mono"
        );
        assert_eq!(fs::read_dir(dir.path().join("templates")).unwrap().count(), 1);
        let listed = list(&env.config).unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_same_build(&mono()));
        assert_eq!(listed[0].dotted(), "4.2.1.stable.mono");

        uninstall(&env.config, &mono()).unwrap();
        assert!(list(&env.config).unwrap().is_empty());
    }

    #[test]
    fn test_archive_without_templates_dir() {
        let dir = tempdir().unwrap();
        let tpz = "Godot_v4.2.1-stable_export_templates.tpz";
        let client = StubClient::default()
            .page("https://feed/tags/4.2.1-stable", release_json("4.2.1-stable", &[tpz]))
            .file(&format!("https://dl/{tpz}"), zip_bytes(&[("readme.txt", b"", 0o644)]));
        let env = env_in(dir.path(), &client);

        let semver = Semver::new("4.2.1", "stable", false).unwrap();
        assert!(install(&env, &semver).is_err());
        assert!(!install_dir(&env.config, &semver).exists());
    }
}

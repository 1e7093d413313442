use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use gevm_archive::extract;
use gevm_fetch::HttpClient;
use gevm_fs::{locate, replace_symlink};
use gevm_version::Semver;
use tracing::info;

use super::{fetch_archive, installed, remove_dir, templates};
use crate::{config::Config, env::GevmEnv};

pub fn install_dir(config: &Config, semver: &Semver) -> PathBuf {
    config.godot_root_directory.join(semver.hyphenated())
}

/// Download the engine archive for the host, and the export templates
/// unless `with_templates` is off.
pub fn download<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver, with_templates: bool) -> Result<PathBuf> {
    let path = fetch_archive(env, env.platform, semver, &env.config.godot_cache())?;
    info!("Godot '{semver}' downloaded to {}", path.display());

    if with_templates {
        templates::download(env, semver)?;
    }
    Ok(path)
}

pub fn install<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver, with_templates: bool) -> Result<()> {
    let dir = install_dir(&env.config, semver);

    if dir.exists() {
        info!("Godot '{semver}' is already installed");
    } else {
        let archive = download(env, semver, false)?;
        if let Err(e) = extract(&archive, &dir) {
            let _ = std::fs::remove_dir_all(&dir);
            return Err(e).with_context(|| format!("Failed to install Godot '{semver}'"));
        }
        info!("Godot '{semver}' installed");
    }

    if with_templates {
        templates::install(env, semver)?;
    }
    Ok(())
}

/// Remove an installed version, and its export templates unless
/// `with_templates` is off.
pub fn uninstall(config: &Config, semver: &Semver, with_templates: bool) -> Result<()> {
    if with_templates {
        templates::uninstall(config, semver)?;
    }

    let dir = install_dir(config, semver);
    if !dir.exists() {
        info!("Godot '{semver}' is not installed");
        return Ok(());
    }

    remove_dir(&dir)?;
    info!("Godot '{semver}' uninstalled");
    Ok(())
}

/// The editor executable (or `.app` bundle) of an installed version.
pub fn path<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver) -> Result<PathBuf> {
    let dir = install_dir(&env.config, semver);
    if !dir.is_dir() {
        bail!("Godot '{semver}' is not installed");
    }

    let matcher = env.executable();
    locate(&dir, |name| matcher.matches(name), matcher.is_dir())
        .with_context(|| format!("No Godot executable in {}", dir.display()))
}

/// Point `<bin>/godot` at an installed version.
pub fn use_version<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver) -> Result<PathBuf> {
    let matcher = env.executable();
    let target = matcher.launcher(&path(env, semver)?);
    let link = env.config.bin_directory.join(matcher.link_name());

    replace_symlink(&target, &link).with_context(|| format!("Failed to link {}", link.display()))?;
    info!("Godot '{semver}' is now used as {}", link.display());
    Ok(link)
}

pub fn list(config: &Config) -> Result<Vec<Semver>> {
    Ok(installed(&config.godot_root_directory)?
        .into_iter()
        .map(|(semver, _)| semver)
        .collect())
}

pub fn clear(config: &Config, with_templates: bool) -> Result<usize> {
    if with_templates {
        templates::clear(config)?;
    }

    let versions = installed(&config.godot_root_directory)?;
    for (semver, dir) in &versions {
        remove_dir(dir)?;
        info!("Godot '{semver}' uninstalled");
    }
    Ok(versions.len())
}

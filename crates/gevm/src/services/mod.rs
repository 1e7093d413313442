//! One module per command group. Services return data; printing happens
//! in `main`.

pub mod cache;
pub mod godot;
pub mod settings;
pub mod shortcuts;
pub mod templates;
pub mod versions;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use gevm_fetch::HttpClient;
use gevm_platform::PlatformTarget;
use gevm_version::Semver;
use tracing::warn;

use crate::{cli::VersionArgs, env::GevmEnv};

/// The requested build. A version that does not parse counts as one that
/// does not exist.
pub fn semver(args: &VersionArgs) -> Result<Semver> {
    let semver = Semver::maybe(&args.version, &args.release, args.mono);
    if !semver.is_valid() {
        bail!(
            "Godot {}-{} not found, check `gevm versions list --all`",
            args.version,
            args.release
        );
    }
    Ok(semver)
}

/// Resolve and download the `target` archive of `semver` into `cache`.
fn fetch_archive<C: HttpClient>(
    env: &GevmEnv<C>,
    target: PlatformTarget,
    semver: &Semver,
    cache: &Path,
) -> Result<PathBuf> {
    let asset = env.resolver().resolve_single_asset(target, semver).map_err(|e| {
        if e.is_not_found() {
            anyhow!("{e}, check `gevm versions list --all`")
        } else {
            anyhow::Error::new(e).context(format!("Failed to look up Godot {semver}"))
        }
    })?;

    let path = cache.join(&asset.name);
    let mut progress = env.progress(&semver.hyphenated());
    env.downloader()
        .download(&asset.download_url, &path, progress.as_mut())
        .with_context(|| format!("Failed to download {}", asset.name))?;

    Ok(path)
}

/// Directories under `root` whose names parse as a version, ascending.
fn installed(root: &Path) -> Result<Vec<(Semver, PathBuf)>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        match Semver::parse(name) {
            Ok(semver) => found.push((semver, entry.path())),
            Err(_) => warn!("Skipping {}: not a Godot version", entry.path().display()),
        }
    }

    found.sort_by(|(a, _), (b, _)| a.cmp(b).then(a.is_mono().cmp(&b.is_mono())));
    Ok(found)
}

fn remove_dir(dir: &Path) -> Result<()> {
    fs::remove_dir_all(dir).with_context(|| format!("Failed to remove {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{installed, semver};
    use crate::cli::VersionArgs;

    #[test]
    fn test_semver_from_args() {
        let args = VersionArgs {
            version: "4.2.1".into(),
            release: "rc2".into(),
            mono:    true,
        };
        assert_eq!(semver(&args).unwrap().hyphenated(), "4.2.1-rc2-mono");

        let args = VersionArgs {
            version: "latest".into(),
            release: "stable".into(),
            mono:    false,
        };
        assert!(semver(&args).unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_installed_skips_foreign_dirs() {
        let dir = tempdir().unwrap();
        for name in ["4.2-stable-mono", "4.2-stable", "3.5.3-stable", "projects", ".gevm-tmp"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("4.3-stable"), "").unwrap();

        let found = installed(dir.path()).unwrap();

        let names = found.iter().map(|(s, _)| s.hyphenated()).collect::<Vec<_>>();
        assert_eq!(names, ["3.5.3-stable", "4.2-stable", "4.2-stable-mono"]);
        assert!(installed(&dir.path().join("missing")).unwrap().is_empty());
    }
}

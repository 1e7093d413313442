//! Launcher shortcuts for installed versions.
//!
//! Linux gets a freedesktop.org `.desktop` entry, macOS a symlink to the
//! `.app` bundle and Windows a `.lnk` shell link.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use gevm_fetch::HttpClient;
use gevm_fs::replace_symlink;
use gevm_platform::Os;
use gevm_version::Semver;
#[cfg(windows)]
use mslnk::ShellLink;
use tracing::info;

use super::godot;
use crate::{config::Config, env::GevmEnv};

/// Which shortcut locations to touch. Neither flag set means both.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placement {
    pub application: bool,
    pub desktop:     bool,
}

impl Placement {
    fn dirs<'a>(&self, config: &'a Config) -> Vec<&'a Path> {
        let both = !self.application && !self.desktop;
        let mut dirs = Vec::new();
        if self.application || both {
            dirs.push(config.application_shortcut_directory.as_path());
        }
        if self.desktop || both {
            dirs.push(config.desktop_shortcut_directory.as_path());
        }
        dirs
    }
}

/// How a shortcut is materialized on one OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    DesktopEntry,
    Alias,
    ShellLink,
}

impl Kind {
    fn for_os(os: Option<Os>) -> Option<Self> {
        match os? {
            Os::Linux => Some(Kind::DesktopEntry),
            Os::Macos => Some(Kind::Alias),
            Os::Windows => Some(Kind::ShellLink),
            Os::Unknown => None,
        }
    }

    fn file_name(self, semver: &Semver) -> String {
        match self {
            Kind::DesktopEntry => format!("godot-{}.desktop", semver.hyphenated()),
            Kind::Alias => format!("Godot {}", semver.hyphenated()),
            Kind::ShellLink => format!("Godot {}.lnk", semver.hyphenated()),
        }
    }

    fn write(self, semver: &Semver, exec: &Path, path: &Path) -> Result<()> {
        match self {
            Kind::DesktopEntry => {
                fs::write(path, desktop_entry(semver, exec))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                mark_executable(path)
            }
            Kind::Alias => replace_symlink(exec, path).with_context(|| format!("Failed to link {}", path.display())),
            #[cfg(windows)]
            Kind::ShellLink => {
                let mut link =
                    ShellLink::new(exec).map_err(|e| anyhow!("Failed to link {}: {e:?}", exec.display()))?;
                link.set_icon_location(Some(exec.display().to_string()));
                link.create_lnk(path)
                    .map_err(|e| anyhow!("Failed to write {}: {e:?}", path.display()))
            }
            // mslnk only compiles for Windows hosts.
            #[cfg(not(windows))]
            Kind::ShellLink => bail!("Failed to write {}: shell links can only be created on Windows", path.display()),
        }
    }
}

fn desktop_entry(semver: &Semver, exec: &Path) -> String {
    format!(
        "[Desktop Entry]
Name=Godot {semver}
Comment=The game engine you've been waiting for.
GenericName=Game Engine
Exec=\"{}\" %f
Icon=godot
Terminal=false
Type=Application
Categories=Development;IDE;
MimeType=text/plain;inode/directory;application/x-godot-project;
Keywords=godot;
",
        exec.display()
    )
}

fn kind<C: HttpClient>(env: &GevmEnv<C>) -> Result<Kind> {
    match Kind::for_os(env.platform.os()) {
        Some(kind) => Ok(kind),
        None => bail!("Shortcuts are not supported on {}", env.platform),
    }
}

pub fn add<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver, placement: Placement) -> Result<Vec<PathBuf>> {
    let kind = kind(env)?;
    // The bundle itself on macOS, not the binary inside it.
    let exec = godot::path(env, semver)?;

    let mut written = Vec::new();
    for dir in placement.dirs(&env.config) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(kind.file_name(semver));
        kind.write(semver, &exec, &path)?;
        info!("Shortcut created at {}", path.display());
        written.push(path);
    }
    Ok(written)
}

pub fn remove<C: HttpClient>(env: &GevmEnv<C>, semver: &Semver, placement: Placement) -> Result<usize> {
    let kind = kind(env)?;

    let mut removed = 0;
    for dir in placement.dirs(&env.config) {
        let path = dir.join(kind.file_name(semver));
        // A dangling alias still counts.
        if path.symlink_metadata().is_ok() {
            fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
            info!("Shortcut removed from {}", path.display());
            removed += 1;
        }
    }
    if removed == 0 {
        info!("No shortcut for Godot '{semver}'");
    }
    Ok(removed)
}

// Desktop environments refuse to launch untrusted entries that are not
// executable.
#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> { Ok(()) }

//! Engine executable names inside an extracted archive.
//!
//! Each OS packages the editor differently: a bare binary on Linux, an
//! `.exe` next to a console wrapper on Windows, an `.app` bundle directory on
//! macOS. The matcher only decides whether a file name is the editor; walking
//! the install tree is left to the caller.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Os;

static LINUX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Godot.*?(?:[-_.]mono)?[-_.](?:linux|x11)(?:[-_.]?x86)?[-_.]?(?:arm64|arm32|64|32)$").unwrap()
});
static WINDOWS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Godot.*?\.exe$").unwrap());
static WINDOWS_CONSOLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"console\.exe$").unwrap());
static MACOS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Godot.*?\.app$").unwrap());

#[derive(Debug, Clone, Copy)]
pub struct ExecutableMatcher {
    pattern:  &'static Lazy<Regex>,
    excluded: Option<&'static Lazy<Regex>>,
    is_dir:   bool,
    link:     &'static str,
}

impl ExecutableMatcher {
    pub fn for_os(os: Os) -> Self {
        match os {
            Os::Windows => Self {
                pattern:  &WINDOWS_REGEX,
                excluded: Some(&WINDOWS_CONSOLE_REGEX),
                is_dir:   false,
                link:     "godot.exe",
            },
            Os::Macos => Self {
                pattern:  &MACOS_REGEX,
                excluded: None,
                is_dir:   true,
                link:     "godot",
            },
            Os::Linux | Os::Unknown => Self {
                pattern:  &LINUX_REGEX,
                excluded: None,
                is_dir:   false,
                link:     "godot",
            },
        }
    }

    pub fn host() -> Self { Self::for_os(Os::detect()) }

    /// Whether `file_name` (a base name, not a path) is the editor.
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
            && !self.excluded.is_some_and(|excluded| excluded.is_match(file_name))
    }

    /// The editor is a directory bundle rather than a file.
    pub fn is_dir(&self) -> bool { self.is_dir }

    /// File name of the `godot` link placed in the bin directory.
    pub fn link_name(&self) -> &'static str { self.link }

    /// The file to actually run for a located editor. A bundle is entered.
    pub fn launcher(&self, located: &Path) -> PathBuf {
        if self.is_dir {
            located.join("Contents").join("MacOS").join("Godot")
        } else {
            located.to_path_buf()
        }
    }
}

//! Release asset name classification.

use once_cell::sync::Lazy;
use regex::Regex;

static ASSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?<mono>[-_.]mono)?[-_.](?<system>export|linux|x11|windows|win|macos|osx)(?<qualifier>[-_.]?x86)?[-_.]?(?<arch>templates|universal|fat|arm64|arm32|64|32)(?<exe>[-_.]?exe)?\.(?<ext>tpz|zip)")
        .unwrap()
});

static SUPERSEDED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^OLD[-_.]").unwrap());

/// Tokens extracted from a release asset name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub mono:   bool,
    pub system: &'a str,
    pub arch:   &'a str,
}

/// Pull the flavor, system and architecture tokens out of an asset name.
///
/// Returns `None` for anything that is not an engine or export template
/// archive (checksums, web and android builds, debug symbols).
pub fn classify(name: &str) -> Option<Classification<'_>> {
    let caps = ASSET_REGEX.captures(name)?;

    Some(Classification {
        mono:   caps.name("mono").is_some(),
        system: caps.name("system")?.as_str(),
        arch:   caps.name("arch")?.as_str(),
    })
}

/// Assets re-uploaded under an `OLD_` prefix are kept by the feed for
/// history only.
pub fn is_superseded(name: &str) -> bool { SUPERSEDED_REGEX.is_match(name) }

#[cfg(test)]
mod tests {
    use super::{Classification, classify, is_superseded};

    fn tokens(name: &str) -> Option<(bool, &str, &str)> {
        classify(name).map(|c| (c.mono, c.system, c.arch))
    }

    #[test]
    fn test_classify_current_names() {
        assert_eq!(
            classify("Godot_v4.2.1-stable_linux.x86_64.zip"),
            Some(Classification {
                mono:   false,
                system: "linux",
                arch:   "64",
            })
        );
        assert_eq!(tokens("Godot_v4.2.1-stable_linux.arm64.zip"), Some((false, "linux", "arm64")));
        assert_eq!(tokens("Godot_v4.2.1-stable_linux.x86_32.zip"), Some((false, "linux", "32")));
        assert_eq!(tokens("Godot_v4.2.1-stable_win64.exe.zip"), Some((false, "win", "64")));
        assert_eq!(
            tokens("Godot_v4.3-stable_windows_arm64.exe.zip"),
            Some((false, "windows", "arm64"))
        );
        assert_eq!(tokens("Godot_v4.2.1-stable_macos.universal.zip"), Some((false, "macos", "universal")));
        assert_eq!(
            tokens("Godot_v4.2.1-stable_export_templates.tpz"),
            Some((false, "export", "templates"))
        );
    }

    #[test]
    fn test_classify_mono_names() {
        assert_eq!(
            tokens("Godot_v4.2.1-stable_mono_linux_x86_64.zip"),
            Some((true, "linux", "64"))
        );
        assert_eq!(tokens("Godot_v4.2.1-stable_mono_win64.zip"), Some((true, "win", "64")));
        assert_eq!(
            tokens("Godot_v4.2.1-stable_mono_export_templates.tpz"),
            Some((true, "export", "templates"))
        );
    }

    #[test]
    fn test_classify_legacy_names() {
        assert_eq!(tokens("Godot_v3.5.3-stable_x11.64.zip"), Some((false, "x11", "64")));
        assert_eq!(tokens("Godot_v3.2.3-stable_osx.64.zip"), Some((false, "osx", "64")));
        assert_eq!(tokens("Godot_v3.0-stable_osx.fat.zip"), Some((false, "osx", "fat")));
        assert_eq!(tokens("Godot_v3.5.3-stable_win32.exe.zip"), Some((false, "win", "32")));
    }

    #[test]
    fn test_classify_rejects_other_assets() {
        assert_eq!(classify("SHA512-SUMS.txt"), None);
        assert_eq!(classify("Godot_v4.2.1-stable_web_editor.zip"), None);
        assert_eq!(classify("Godot_v4.2.1-stable_android_editor.apk"), None);
        assert_eq!(classify("godot-lib.4.2.1.stable.template_release.aar"), None);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let name = "Godot_v4.1-rc2_mono_macos.universal.zip";
        let first = classify(name);
        for _ in 0..8 {
            assert_eq!(classify(name), first);
        }
    }

    #[test]
    fn test_superseded() {
        assert!(is_superseded("OLD_Godot_v3.1-stable_x11.64.zip"));
        assert!(!is_superseded("Godot_v3.1-stable_x11.64.zip"));
        assert!(!is_superseded("GOLD_x11.64.zip"));
    }
}

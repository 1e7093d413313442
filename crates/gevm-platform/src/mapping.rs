//! File name tokens identifying each [`PlatformTarget`].
//!
//! Release assets are named by hand and the naming drifted across engine
//! generations (`x11` became `linux`, `osx` became `macos`, `fat` became
//! `universal`). All of that tolerance lives in this table; supporting a new
//! spelling is a data change here, not a logic change in the classifier.

use crate::PlatformTarget;
use crate::asset::Classification;

/// System and architecture tokens accepted for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub system: &'static [&'static str],
    pub arch:   &'static [&'static str],
}

const WINDOWS: &[&str] = &["windows", "win"];
const LINUX: &[&str] = &["linux", "x11"];
const DARWIN: &[&str] = &["macos", "osx"];

impl Mapping {
    /// The mapping for `target`. Every target has exactly one.
    pub const fn of(target: PlatformTarget) -> Mapping {
        match target {
            PlatformTarget::ExportTemplates => Mapping {
                system: &["export"],
                arch:   &["templates"],
            },
            PlatformTarget::WindowsArm64 => Mapping {
                system: WINDOWS,
                arch:   &["arm64"],
            },
            PlatformTarget::WindowsAmd64 => Mapping {
                system: WINDOWS,
                arch:   &["64"],
            },
            PlatformTarget::Windows386 => Mapping {
                system: WINDOWS,
                arch:   &["32"],
            },
            PlatformTarget::LinuxArm64 => Mapping {
                system: LINUX,
                arch:   &["arm64"],
            },
            PlatformTarget::LinuxAmd64 => Mapping {
                system: LINUX,
                arch:   &["64"],
            },
            PlatformTarget::LinuxArm => Mapping {
                system: LINUX,
                arch:   &["arm32"],
            },
            PlatformTarget::Linux386 => Mapping {
                system: LINUX,
                arch:   &["32"],
            },
            PlatformTarget::DarwinArm64 => Mapping {
                system: DARWIN,
                arch:   &["universal"],
            },
            PlatformTarget::DarwinAmd64 => Mapping {
                system: DARWIN,
                arch:   &["universal", "fat", "64"],
            },
            PlatformTarget::Darwin386 => Mapping {
                system: DARWIN,
                arch:   &["fat", "32"],
            },
        }
    }

    pub fn matches(&self, asset: &Classification<'_>) -> bool {
        self.system.iter().any(|token| *token == asset.system)
            && self.arch.iter().any(|token| *token == asset.arch)
    }
}

/// Architecture tokens allowed to replace an asset already claimed for
/// `target` while building an index. Empty means first claim wins.
///
/// A universal macOS build also satisfies Intel hosts, and when a release
/// ships both an Intel-only and a universal archive the universal one is
/// the maintained build.
pub const fn overrides(target: PlatformTarget) -> &'static [&'static str] {
    match target {
        PlatformTarget::DarwinAmd64 => &["universal"],
        _ => &[],
    }
}

/// Every target whose mapping accepts `asset`, in [`PlatformTarget::ALL`] order.
pub fn targets_for<'a>(asset: &'a Classification<'a>) -> impl Iterator<Item = PlatformTarget> + 'a {
    PlatformTarget::ALL
        .into_iter()
        .filter(move |target| Mapping::of(*target).matches(asset))
}

#[cfg(test)]
mod tests {
    use super::{Mapping, overrides, targets_for};
    use crate::{PlatformTarget, classify};

    #[test]
    fn test_every_target_has_tokens() {
        for target in PlatformTarget::ALL {
            let mapping = Mapping::of(target);
            assert!(!mapping.system.is_empty(), "{target} has no system tokens");
            assert!(!mapping.arch.is_empty(), "{target} has no arch tokens");
        }
    }

    #[test]
    fn test_universal_claims_both_darwin_targets() {
        let asset = classify("Godot_v4.2.1-stable_macos.universal.zip").unwrap();
        let targets = targets_for(&asset).collect::<Vec<_>>();
        assert_eq!(targets, [PlatformTarget::DarwinArm64, PlatformTarget::DarwinAmd64]);
    }

    #[test]
    fn test_linux_64_claims_one_target() {
        let asset = classify("Godot_v4.2.1-stable_linux.x86_64.zip").unwrap();
        let targets = targets_for(&asset).collect::<Vec<_>>();
        assert_eq!(targets, [PlatformTarget::LinuxAmd64]);
    }

    #[test]
    fn test_overrides() {
        assert_eq!(overrides(PlatformTarget::DarwinAmd64), ["universal"]);
        assert!(overrides(PlatformTarget::LinuxAmd64).is_empty());
    }
}

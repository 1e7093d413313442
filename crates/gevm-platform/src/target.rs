//! Install targets and host detection.

use crate::{PlatformError, Result};

/// Operating system families Godot publishes builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Macos,
    Linux,
    Unknown,
}

impl Os {
    /// The OS this binary was built for.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => Os::Windows,
            "macos" => Os::Macos,
            "linux" => Os::Linux,
            _ => Os::Unknown,
        }
    }
}

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

impl Arch {
    /// Detect the running CPU architecture.
    ///
    /// Asks the kernel first so an emulated binary (Rosetta, WoW64) still
    /// picks native engine builds, then falls back to the compile target.
    pub fn detect() -> Self {
        match Self::from_name(&sysinfo::System::cpu_arch()) {
            Arch::Unknown => Self::from_name(std::env::consts::ARCH),
            arch => arch,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "i386" | "i586" | "i686" | "x86" => Arch::X86,
            "x86_64" | "amd64" | "x64" => Arch::X86_64,
            "arm" | "armv6l" | "armv7" | "armv7l" => Arch::ARM,
            "aarch64" | "arm64" => Arch::ARM64,
            _ => Arch::Unknown,
        }
    }
}

/// Something a release asset can be installed for.
///
/// [`PlatformTarget::ExportTemplates`] is synthetic: export templates are one
/// platform-neutral archive shared by every host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlatformTarget {
    ExportTemplates,
    WindowsArm64,
    WindowsAmd64,
    Windows386,
    LinuxArm64,
    LinuxAmd64,
    LinuxArm,
    Linux386,
    DarwinArm64,
    DarwinAmd64,
    Darwin386,
}

impl PlatformTarget {
    /// Every target, in listing order.
    pub const ALL: [PlatformTarget; 11] = [
        PlatformTarget::ExportTemplates,
        PlatformTarget::WindowsArm64,
        PlatformTarget::WindowsAmd64,
        PlatformTarget::Windows386,
        PlatformTarget::LinuxArm64,
        PlatformTarget::LinuxAmd64,
        PlatformTarget::LinuxArm,
        PlatformTarget::Linux386,
        PlatformTarget::DarwinArm64,
        PlatformTarget::DarwinAmd64,
        PlatformTarget::Darwin386,
    ];

    /// The engine target for the current host.
    pub fn host() -> Result<Self> { Self::from_os_arch(Os::detect(), Arch::detect()) }

    pub fn from_os_arch(os: Os, arch: Arch) -> Result<Self> {
        let target = match (os, arch) {
            (Os::Windows, Arch::ARM64) => PlatformTarget::WindowsArm64,
            (Os::Windows, Arch::X86_64) => PlatformTarget::WindowsAmd64,
            (Os::Windows, Arch::X86) => PlatformTarget::Windows386,
            (Os::Linux, Arch::ARM64) => PlatformTarget::LinuxArm64,
            (Os::Linux, Arch::X86_64) => PlatformTarget::LinuxAmd64,
            (Os::Linux, Arch::ARM) => PlatformTarget::LinuxArm,
            (Os::Linux, Arch::X86) => PlatformTarget::Linux386,
            (Os::Macos, Arch::ARM64) => PlatformTarget::DarwinArm64,
            (Os::Macos, Arch::X86_64) => PlatformTarget::DarwinAmd64,
            (Os::Macos, Arch::X86) => PlatformTarget::Darwin386,
            _ => {
                return Err(PlatformError::Unsupported {
                    os:   format!("{os:?}"),
                    arch: format!("{arch:?}"),
                });
            }
        };

        Ok(target)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformTarget::ExportTemplates => "Export Templates",
            PlatformTarget::WindowsArm64 => "Windows Arm64",
            PlatformTarget::WindowsAmd64 => "Windows Amd64",
            PlatformTarget::Windows386 => "Windows 386",
            PlatformTarget::LinuxArm64 => "Linux Arm64",
            PlatformTarget::LinuxAmd64 => "Linux Amd64",
            PlatformTarget::LinuxArm => "Linux Arm",
            PlatformTarget::Linux386 => "Linux 386",
            PlatformTarget::DarwinArm64 => "Darwin Arm64",
            PlatformTarget::DarwinAmd64 => "Darwin Amd64",
            PlatformTarget::Darwin386 => "Darwin 386",
        }
    }

    /// The operating system family, `None` for platform-neutral targets.
    pub fn os(self) -> Option<Os> {
        match self {
            PlatformTarget::ExportTemplates => None,
            PlatformTarget::WindowsArm64 | PlatformTarget::WindowsAmd64 | PlatformTarget::Windows386 => {
                Some(Os::Windows)
            }
            PlatformTarget::LinuxArm64
            | PlatformTarget::LinuxAmd64
            | PlatformTarget::LinuxArm
            | PlatformTarget::Linux386 => Some(Os::Linux),
            PlatformTarget::DarwinArm64 | PlatformTarget::DarwinAmd64 | PlatformTarget::Darwin386 => {
                Some(Os::Macos)
            }
        }
    }
}

impl std::str::FromStr for PlatformTarget {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self> {
        PlatformTarget::ALL
            .into_iter()
            .find(|target| target.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlatformError::UnknownTarget(s.to_string()))
    }
}

impl std::fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

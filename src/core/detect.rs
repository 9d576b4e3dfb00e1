// open-docs - core/detect.rs
//
// Pure platform classification. Reading the kernel identification file is
// the platform layer's job; this module only interprets what was read.

use crate::core::model::PlatformKind;
use crate::util::constants::WSL_MARKERS;

/// Returns true if a kernel version string identifies WSL.
///
/// Case-insensitive substring match against [`WSL_MARKERS`].
pub fn mentions_wsl(kernel_version: &str) -> bool {
    let lower = kernel_version.to_lowercase();
    WSL_MARKERS.iter().any(|marker| lower.contains(marker))
}

impl PlatformKind {
    /// Classify the host from its OS name and the WSL probe result.
    ///
    /// WSL is decided first and wins over any OS name. OS names are matched
    /// case-insensitively and accept both `std::env::consts::OS` spellings
    /// (`linux`, `windows`, `macos`) and uname-style ones (`Darwin`).
    /// Unsupported hosts are labelled with their uname spelling.
    pub fn classify(os_name: &str, is_wsl: bool) -> Self {
        if is_wsl {
            return Self::Wsl;
        }
        let lower = os_name.to_lowercase();
        match lower.as_str() {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::MacOs,
            other => Self::Unsupported(
                uname_spelling(other)
                    .map(str::to_string)
                    .unwrap_or_else(|| os_name.to_string()),
            ),
        }
    }
}

/// `uname -s` spelling of a lowercase `std::env::consts::OS` value.
fn uname_spelling(os_name: &str) -> Option<&'static str> {
    let name = match os_name {
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        "android" => "Android",
        "ios" => "iOS",
        "haiku" => "Haiku",
        "aix" => "AIX",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WSL2_KERNEL: &str = "Linux version 5.15.153.1-microsoft-standard-WSL2 \
        (root@941d701f84f1) (gcc (GCC) 11.2.0) #1 SMP Fri Mar 29 23:14:13 UTC 2024";

    const UBUNTU_KERNEL: &str = "Linux version 6.8.0-45-generic (buildd@lcy02-amd64-115) \
        (x86_64-linux-gnu-gcc-13 (Ubuntu 13.2.0-23ubuntu4) 13.2.0) #45-Ubuntu SMP";

    #[test]
    fn wsl2_kernel_is_detected() {
        assert!(mentions_wsl(WSL2_KERNEL));
    }

    #[test]
    fn wsl1_kernel_is_detected_by_vendor_marker() {
        assert!(mentions_wsl(
            "Linux version 4.4.0-19041-Microsoft (Microsoft@Microsoft.com)"
        ));
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        assert!(mentions_wsl("MICROSOFT"));
        assert!(mentions_wsl("custom-Wsl-build"));
    }

    #[test]
    fn plain_linux_kernel_is_not_wsl() {
        assert!(!mentions_wsl(UBUNTU_KERNEL));
        assert!(!mentions_wsl(""));
    }

    #[test]
    fn wsl_wins_over_any_os_name() {
        for os in ["linux", "windows", "macos", "Plan9"] {
            assert_eq!(PlatformKind::classify(os, true), PlatformKind::Wsl);
        }
    }

    #[test]
    fn rust_os_names_are_classified() {
        assert_eq!(PlatformKind::classify("linux", false), PlatformKind::Linux);
        assert_eq!(PlatformKind::classify("windows", false), PlatformKind::Windows);
        assert_eq!(PlatformKind::classify("macos", false), PlatformKind::MacOs);
    }

    #[test]
    fn uname_style_names_are_classified() {
        assert_eq!(PlatformKind::classify("Linux", false), PlatformKind::Linux);
        assert_eq!(PlatformKind::classify("Windows", false), PlatformKind::Windows);
        assert_eq!(PlatformKind::classify("Darwin", false), PlatformKind::MacOs);
    }

    #[test]
    fn unknown_name_is_kept_verbatim() {
        assert_eq!(
            PlatformKind::classify("Plan9", false),
            PlatformKind::Unsupported("Plan9".to_string())
        );
    }

    #[test]
    fn unsupported_rust_names_take_uname_spelling() {
        for (os, uname) in [
            ("freebsd", "FreeBSD"),
            ("openbsd", "OpenBSD"),
            ("netbsd", "NetBSD"),
            ("dragonfly", "DragonFly"),
            ("solaris", "SunOS"),
            ("illumos", "SunOS"),
            ("FreeBSD", "FreeBSD"),
        ] {
            assert_eq!(
                PlatformKind::classify(os, false).label(),
                uname,
                "{os}"
            );
        }
    }
}

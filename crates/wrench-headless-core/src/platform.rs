//! Platform detection.

use strum_macros::{Display, EnumString};

/// Operating system family, as far as software rendering setup is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlatformKind {
    Windows,
    #[strum(to_string = "macos", serialize = "darwin")]
    MacOS,
    Linux,
    Other,
}

impl PlatformKind {
    /// Detect the platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether headless software rendering can be configured on this platform
    pub const fn supports_software_rendering(self) -> bool {
        matches!(self, Self::MacOS | Self::Linux)
    }
}

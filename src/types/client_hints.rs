use super::Brand;
use serde::{Deserialize, Serialize};

/// Every value extracted from a request's Client Hints headers.
///
/// Missing headers show up as empty strings, `false` for `mobile` and `None`
/// for `brand`; extraction itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHints {
    /// Most specific brand from `Sec-CH-UA`.
    pub brand: Option<Brand>,
    /// CPU architecture from `Sec-CH-UA-Arch`, e.g. `x86` or `ARM`.
    pub arch: String,
    /// CPU bitness from `Sec-CH-UA-Bitness`, typically `64` or `32`.
    pub bitness: String,
    /// Mobile flag from `Sec-CH-UA-Mobile` (`?1` → true).
    pub mobile: bool,
    /// Device model from `Sec-CH-UA-Model`, unquoted.
    pub model: String,
    /// Platform from `Sec-CH-UA-Platform`.
    pub platform: String,
    /// Platform version from `Sec-CH-UA-Platform-Version`. Always empty on Linux.
    pub platform_version: String,
    /// `light` or `dark` from `Sec-CH-Prefers-Color-Scheme`.
    pub color_scheme: String,
}

//! Single-header accessors. Each one reads the first value of its header and
//! degrades to `""` (or `false`) when the header is missing.

use super::headers::HeaderSet;
use super::helpers::{sanitize, strip_quotes};
use super::types::ClientHint;

const HEADER_BOOL_TRUE: &str = "?1";

fn sanitized<H: HeaderSet + ?Sized>(headers: &H, hint: ClientHint) -> String {
    sanitize(&headers.first(hint.as_str()))
}

/// Underlying CPU architecture, such as `ARM` or `x86`.
pub fn arch<H: HeaderSet + ?Sized>(headers: &H) -> String {
    sanitized(headers, ClientHint::Arch)
}

/// Size in bits of an integer or memory address of the CPU, typically `64` or `32`.
pub fn bitness<H: HeaderSet + ?Sized>(headers: &H) -> String {
    sanitized(headers, ClientHint::Bitness)
}

/// Whether the browser is on a mobile device. Only the literal `?1` counts.
pub fn is_mobile<H: HeaderSet + ?Sized>(headers: &H) -> bool {
    headers.first(ClientHint::Mobile.as_str()) == HEADER_BOOL_TRUE
}

/// Device model the browser runs on, e.g. `Pixel 3`. The wire value is a
/// quoted string; the quotes are removed.
pub fn model<H: HeaderSet + ?Sized>(headers: &H) -> String {
    strip_quotes(&sanitized(headers, ClientHint::Model)).to_string()
}

/// Platform or operating system: `Android`, `Chrome OS`, `Chromium OS`, `iOS`,
/// `Linux`, `macOS`, `Windows` or `Unknown`.
pub fn platform<H: HeaderSet + ?Sized>(headers: &H) -> String {
    sanitized(headers, ClientHint::Platform)
}

/// Operating system version, usually dot-separated major, minor and patch
/// numbers such as `11.0.0`.
pub fn platform_version<H: HeaderSet + ?Sized>(headers: &H) -> String {
    sanitized(headers, ClientHint::PlatformVersion)
}

/// Preferred color scheme at request time, `light` or `dark`.
pub fn color_scheme<H: HeaderSet + ?Sized>(headers: &H) -> String {
    sanitized(headers, ClientHint::PrefersColorScheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::*;
    use quickcheck::quickcheck;

    #[test]
    fn arch_values() {
        assert_eq!(arch(&Headers::new().with(SEC_CH_UA_ARCH, "x86")), "x86");
        assert_eq!(arch(&Headers::new().with(SEC_CH_UA_ARCH, "ARM")), "ARM");
        assert_eq!(arch(&Headers::new()), "");
    }

    #[test]
    fn bitness_values() {
        assert_eq!(bitness(&Headers::new().with(SEC_CH_UA_BITNESS, "64")), "64");
        assert_eq!(bitness(&Headers::new().with(SEC_CH_UA_BITNESS, "32")), "32");
        assert_eq!(bitness(&Headers::new()), "");
    }

    #[test]
    fn mobile_is_strict() {
        assert!(is_mobile(&Headers::new().with(SEC_CH_UA_MOBILE, "?1")));
        assert!(!is_mobile(&Headers::new().with(SEC_CH_UA_MOBILE, "?0")));
        assert!(!is_mobile(&Headers::new().with(SEC_CH_UA_MOBILE, " ?1")));
        assert!(!is_mobile(&Headers::new().with(SEC_CH_UA_MOBILE, "?1\u{0000}")));
        assert!(!is_mobile(&Headers::new()));
    }

    #[test]
    fn model_is_unquoted() {
        let headers = Headers::new().with(SEC_CH_UA_MODEL, "\"Pixel 3 XL\"");
        assert_eq!(model(&headers), "Pixel 3 XL");
        let headers = Headers::new().with(SEC_CH_UA_MODEL, "Pixel 3 XL");
        assert_eq!(model(&headers), "Pixel 3 XL");
        let headers = Headers::new().with(SEC_CH_UA_MODEL, "\"\"");
        assert_eq!(model(&headers), "");
        assert_eq!(model(&Headers::new()), "");
    }

    #[test]
    fn platform_values() {
        for p in ["Android", "Windows", "iOS"] {
            assert_eq!(platform(&Headers::new().with(SEC_CH_UA_PLATFORM, p)), p);
        }
        assert_eq!(platform(&Headers::new()), "");
    }

    #[test]
    fn platform_version_values() {
        let headers = Headers::new().with(SEC_CH_UA_PLATFORM_VERSION, "11.0.0");
        assert_eq!(platform_version(&headers), "11.0.0");
        assert_eq!(platform_version(&Headers::new()), "");
    }

    #[test]
    fn color_scheme_values() {
        let headers = Headers::new().with(SEC_CH_PREFERS_COLOR_SCHEME, "dark\r\n");
        assert_eq!(color_scheme(&headers), "dark");
        assert_eq!(color_scheme(&Headers::new()), "");
    }

    #[test]
    fn string_hints_keep_surrounding_quotes() {
        let headers = Headers::new().with(SEC_CH_UA_PLATFORM, "\"macOS\"");
        assert_eq!(platform(&headers), "\"macOS\"");
    }

    quickcheck! {
        fn accessors_are_total(value: String) -> bool {
            let headers: Headers = ClientHint::ALL
                .into_iter()
                .map(|hint| (hint.as_str(), value.clone()))
                .collect();
            let _ = (
                arch(&headers),
                bitness(&headers),
                is_mobile(&headers),
                model(&headers),
                platform(&headers),
                platform_version(&headers),
                color_scheme(&headers),
            );
            true
        }
    }
}

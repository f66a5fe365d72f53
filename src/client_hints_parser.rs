use super::brand_selector::BrandSelector;
use super::error::Result;
use super::headers::HeaderSet;
use super::hints;
use super::types::*;
use rayon::prelude::*;

/// Extracts [`ClientHints`] from request headers.
///
/// Build one at startup and share it: it holds only the compiled brand
/// markers and is `Send + Sync`.
pub struct ClientHintsParser {
    brand_selector: BrandSelector,
}

impl ClientHintsParser {
    /// Build a parser. Fails only if the brand marker automaton cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self {
            brand_selector: BrandSelector::new()?,
        })
    }

    /// The user agent's branding and significant version, from `Sec-CH-UA`.
    pub fn brand<H: HeaderSet + ?Sized>(&self, headers: &H) -> Option<Brand> {
        self.brand_selector
            .select(&headers.first(ClientHint::Ua.as_str()))
    }

    /// Read every supported hint from `headers`.
    pub fn parse<H: HeaderSet + ?Sized>(&self, headers: &H) -> ClientHints {
        ClientHints {
            brand: self.brand(headers),
            arch: hints::arch(headers),
            bitness: hints::bitness(headers),
            mobile: hints::is_mobile(headers),
            model: hints::model(headers),
            platform: hints::platform(headers),
            platform_version: hints::platform_version(headers),
            color_scheme: hints::color_scheme(headers),
        }
    }

    /// Parse many header sets in parallel. Output order follows input order.
    pub fn parse_batch<H: HeaderSet + Sync>(&self, header_sets: &[H]) -> Vec<ClientHints> {
        header_sets
            .par_iter()
            .map(|headers| self.parse(headers))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::*;

    fn parser() -> ClientHintsParser {
        ClientHintsParser::new().unwrap()
    }

    #[test]
    fn brand_from_headers() {
        let headers = Headers::new().with(
            SEC_CH_UA,
            r#""Google Chrome";v="104",Chromium;v=96"#,
        );
        assert_eq!(
            parser().brand(&headers),
            Some(Brand::new("Google Chrome", "104"))
        );
        assert_eq!(parser().brand(&Headers::new()), None);
    }

    #[test]
    fn parse_full_request() {
        let headers = Headers::new()
            .with(
                SEC_CH_UA,
                r#""Opera";v="81", "Chromium";v="96", " Not A;Brand";v="99""#,
            )
            .with(SEC_CH_UA_ARCH, "ARM")
            .with(SEC_CH_UA_BITNESS, "64")
            .with(SEC_CH_UA_MOBILE, "?1")
            .with(SEC_CH_UA_MODEL, "\"Pixel 3\"")
            .with(SEC_CH_UA_PLATFORM, "Android")
            .with(SEC_CH_UA_PLATFORM_VERSION, "11.0.0")
            .with(SEC_CH_PREFERS_COLOR_SCHEME, "dark");

        assert_eq!(
            parser().parse(&headers),
            ClientHints {
                brand: Some(Brand::new("Opera", "81")),
                arch: "ARM".into(),
                bitness: "64".into(),
                mobile: true,
                model: "Pixel 3".into(),
                platform: "Android".into(),
                platform_version: "11.0.0".into(),
                color_scheme: "dark".into(),
            }
        );
    }

    #[test]
    fn parse_without_hints_is_default() {
        assert_eq!(parser().parse(&Headers::new()), ClientHints::default());
    }

    #[test]
    fn parse_batch_keeps_order() {
        let sets: Vec<Headers> = (0..64)
            .map(|i| Headers::new().with(SEC_CH_UA, format!(r#""Opera";v="{i}""#)))
            .collect();
        let parsed = parser().parse_batch(&sets);
        assert_eq!(parsed.len(), 64);
        for (i, hints) in parsed.iter().enumerate() {
            assert_eq!(hints.brand, Some(Brand::new("Opera", i.to_string())));
        }
    }

    #[test]
    fn parser_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientHintsParser>();
    }

    #[cfg(feature = "http")]
    #[test]
    fn parse_http_header_map() {
        let mut map = http::HeaderMap::new();
        map.insert(
            "sec-ch-ua",
            http::HeaderValue::from_static(r#""(Not(A:Brand";v="8","Chromium";v="96""#),
        );
        map.insert("sec-ch-ua-mobile", http::HeaderValue::from_static("?0"));
        let hints = parser().parse(&map);
        assert_eq!(hints.brand, Some(Brand::new("Chromium", "96")));
        assert!(!hints.mobile);
        assert_eq!(hints.platform_version, "");
    }
}

use super::error::{Error, Result};
use super::helpers::{sanitize, strip_quotes};
use super::types::Brand;
use aho_corasick::AhoCorasick;

const VERSION_SEPARATOR: &str = ";v=";

/// Substrings that mark a `Sec-CH-UA` token, matched ignoring ASCII case.
/// Indexed by [`Marker`].
const MARKERS: [&str; 3] = ["not", "brand", "chromium"];

#[derive(Clone, Copy)]
enum Marker {
    Not = 0,
    Brand = 1,
    Chromium = 2,
}

/// Why a token of the brand list was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    Empty,
    /// Greased entry, e.g. `"(Not(A:Brand";v="8"`.
    NotMarker,
    /// Greased entry, e.g. `"Not_A Brand";v="24"`.
    BrandMarker,
    /// `Chromium` next to a more specific brand.
    GenericEngine,
}

impl SkipReason {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NotMarker => "decoy (not)",
            Self::BrandMarker => "decoy (brand)",
            Self::GenericEngine => "generic engine",
        }
    }
}

/// One token of the brand list together with what the marker automaton found in it.
struct Candidate<'a> {
    token: &'a str,
    markers: [bool; MARKERS.len()],
    /// Token count of the whole header value, empty tokens included.
    total: usize,
}

impl Candidate<'_> {
    fn has(&self, marker: Marker) -> bool {
        self.markers[marker as usize]
    }
}

fn is_empty(c: &Candidate<'_>) -> bool {
    c.token.is_empty()
}

fn has_not(c: &Candidate<'_>) -> bool {
    c.has(Marker::Not)
}

fn has_brand(c: &Candidate<'_>) -> bool {
    c.has(Marker::Brand)
}

// `"(Not(A:Brand";v="8", "Chromium";v="98"` has nothing better than Chromium.
fn is_superseded_engine(c: &Candidate<'_>) -> bool {
    c.has(Marker::Chromium) && c.total > 2
}

/// Skip rules, evaluated in order. The first predicate that holds skips the
/// token; a token no rule skips is selected.
const SKIP_RULES: [(SkipReason, fn(&Candidate<'_>) -> bool); 4] = [
    (SkipReason::Empty, is_empty),
    (SkipReason::NotMarker, has_not),
    (SkipReason::BrandMarker, has_brand),
    (SkipReason::GenericEngine, is_superseded_engine),
];

fn skip_reason(candidate: &Candidate<'_>) -> Option<SkipReason> {
    SKIP_RULES
        .iter()
        .find(|(_, applies)| applies(candidate))
        .map(|(reason, _)| *reason)
}

/// Picks the most specific brand out of a `Sec-CH-UA` header value.
///
/// Browsers send an ordered list such as
/// `"Opera";v="81", "Chromium";v="96", " Not A;Brand";v="99"`: greased decoy
/// entries are dropped, the generic `Chromium` entry only wins when nothing
/// else is left, and the first remaining entry is returned.
pub struct BrandSelector {
    markers: AhoCorasick,
}

impl BrandSelector {
    /// Compile the marker automaton. Fails only if that automaton cannot be built.
    pub fn new() -> Result<Self> {
        let markers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(MARKERS)?;
        Ok(Self { markers })
    }

    /// Select a brand from the raw header value. `None` when every token is
    /// skipped or the selected token has no version separator.
    pub fn select(&self, raw: &str) -> Option<Brand> {
        let tokens: Vec<&str> = raw.split(',').collect();
        let total = tokens.len();

        let token = tokens.into_iter().map(str::trim).find(|&token| {
            let candidate = self.candidate(token, total);
            match skip_reason(&candidate) {
                Some(reason) => {
                    tracing::trace!(
                        brand.token = %token,
                        brand.skip = reason.as_str(),
                        "skip Sec-CH-UA token"
                    );
                    false
                }
                None => true,
            }
        })?;

        match parse_brand_token(token) {
            Ok(brand) => {
                tracing::debug!(
                    brand.name = %brand.name,
                    brand.version = %brand.version,
                    "brand selected from Sec-CH-UA"
                );
                Some(brand)
            }
            Err(err) => {
                tracing::debug!(%err, "no brand determinable from Sec-CH-UA");
                None
            }
        }
    }

    fn candidate<'a>(&self, token: &'a str, total: usize) -> Candidate<'a> {
        let mut markers = [false; MARKERS.len()];
        for m in self.markers.find_overlapping_iter(token) {
            markers[m.pattern().as_usize()] = true;
        }
        Candidate {
            token,
            markers,
            total,
        }
    }
}

/// Split a `"<name>";v="<version>"` token into a [`Brand`].
///
/// Anything after a second `;v=` is ignored.
pub(crate) fn parse_brand_token(token: &str) -> Result<Brand> {
    let mut parts = token.split(VERSION_SEPARATOR);
    let name = parts.next().unwrap_or_default();
    let version = parts
        .next()
        .ok_or_else(|| Error::MissingVersionSeparator {
            token: token.to_string(),
        })?;
    Ok(Brand::new(clean(name), clean(version)))
}

fn clean(part: &str) -> String {
    sanitize(strip_quotes(part)).trim().to_string()
}

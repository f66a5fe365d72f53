use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

// Response headers. Emitting them is up to the HTTP layer.
pub const CRITICAL_CH: &str = "Critical-CH";
pub const ACCEPT_CH: &str = "Accept-CH";
pub const VARY: &str = "Vary";

// Request headers.
pub const SEC_CH_UA: &str = "Sec-CH-UA";
pub const SEC_CH_UA_ARCH: &str = "Sec-CH-UA-Arch";
pub const SEC_CH_UA_BITNESS: &str = "Sec-CH-UA-Bitness";
pub const SEC_CH_UA_MOBILE: &str = "Sec-CH-UA-Mobile";
pub const SEC_CH_UA_MODEL: &str = "Sec-CH-UA-Model";
pub const SEC_CH_UA_PLATFORM: &str = "Sec-CH-UA-Platform";
pub const SEC_CH_UA_PLATFORM_VERSION: &str = "Sec-CH-UA-Platform-Version";
pub const SEC_CH_PREFERS_COLOR_SCHEME: &str = "Sec-CH-Prefers-Color-Scheme";

/// Read-only, case-insensitive view over a request's headers.
///
/// Implementations must match `name` without regard to ASCII case and return
/// `None` (never an empty list) when the header is absent.
pub trait HeaderSet {
    fn get(&self, name: &str) -> Option<Vec<Cow<'_, str>>>;

    /// First value of `name`, or `""` when the header is absent.
    fn first(&self, name: &str) -> Cow<'_, str> {
        self.get(name)
            .and_then(|values| values.into_iter().next())
            .unwrap_or(Cow::Borrowed(""))
    }
}

impl<T: HeaderSet + ?Sized> HeaderSet for &T {
    fn get(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        (**self).get(name)
    }
}

#[cfg(feature = "http")]
impl HeaderSet for http::HeaderMap {
    fn get(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        // Values are bytes on the wire; keep obs-text instead of dropping the header.
        let values: Vec<_> = self
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect();
        (!values.is_empty()).then_some(values)
    }
}

/// An exact key wins. Otherwise, among keys differing only in case, the
/// smallest key is used so the result does not depend on hash order.
impl<S: BuildHasher> HeaderSet for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        let value = match HashMap::get(self, name) {
            Some(value) => value,
            None => {
                self.iter()
                    .filter(|(k, _)| k.eq_ignore_ascii_case(name))
                    .min_by(|(a, _), (b, _)| a.cmp(b))?
                    .1
            }
        };
        Some(vec![Cow::Borrowed(value.as_str())])
    }
}

impl<S: BuildHasher> HeaderSet for IndexMap<String, Vec<String>, S> {
    fn get(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        let (_, values) = self
            .iter()
            .find(|(k, values)| k.eq_ignore_ascii_case(name) && !values.is_empty())?;
        Some(values.iter().map(|v| Cow::Borrowed(v.as_str())).collect())
    }
}

/// Owned, insertion-ordered header collection with case-insensitive names.
///
/// Names are stored lowercased. Inserting a name twice appends a value
/// rather than replacing the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(IndexMap<String, Vec<String>>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.0
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// Builder-style [`Headers::insert`].
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl HeaderSet for Headers {
    fn get(&self, name: &str) -> Option<Vec<Cow<'_, str>>> {
        let values = self.0.get(&name.to_ascii_lowercase())?;
        Some(values.iter().map(|v| Cow::Borrowed(v.as_str())).collect())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header names to a value or a list of values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Headers, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut headers = Headers::new();
                while let Some((name, values)) = map.next_entry::<String, OneOrMany>()? {
                    match values {
                        OneOrMany::One(value) => headers.insert(&name, value),
                        OneOrMany::Many(values) => {
                            for value in values {
                                headers.insert(&name, value);
                            }
                        }
                    }
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

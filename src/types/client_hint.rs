use crate::headers;
use std::fmt;

/// The Client Hints request headers this crate knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientHint {
    Ua,
    Arch,
    Bitness,
    Mobile,
    Model,
    Platform,
    PlatformVersion,
    PrefersColorScheme,
}

impl ClientHint {
    pub const ALL: [ClientHint; 8] = [
        Self::Ua,
        Self::Arch,
        Self::Bitness,
        Self::Mobile,
        Self::Model,
        Self::Platform,
        Self::PlatformVersion,
        Self::PrefersColorScheme,
    ];

    /// Look up a hint by header name, ignoring ASCII case.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hint| hint.as_str().eq_ignore_ascii_case(s))
    }

    /// The header name as registered.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ua => headers::SEC_CH_UA,
            Self::Arch => headers::SEC_CH_UA_ARCH,
            Self::Bitness => headers::SEC_CH_UA_BITNESS,
            Self::Mobile => headers::SEC_CH_UA_MOBILE,
            Self::Model => headers::SEC_CH_UA_MODEL,
            Self::Platform => headers::SEC_CH_UA_PLATFORM,
            Self::PlatformVersion => headers::SEC_CH_UA_PLATFORM_VERSION,
            Self::PrefersColorScheme => headers::SEC_CH_PREFERS_COLOR_SCHEME,
        }
    }

    /// Low entropy hints are sent by browsers without an `Accept-CH` opt-in.
    pub fn is_low_entropy(&self) -> bool {
        matches!(self, Self::Ua | Self::Mobile | Self::Platform)
    }
}

impl fmt::Display for ClientHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ClientHint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ClientHint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_str(&s)
            .ok_or_else(|| D::Error::custom(format!("unknown client hint: {s}")))
    }
}

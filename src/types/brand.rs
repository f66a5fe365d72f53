use serde::{Deserialize, Serialize};
use std::fmt;

/// One brand/version claim taken from the `Sec-CH-UA` list, e.g.
/// `"Opera";v="81"` becomes `Brand { name: "Opera", version: "81" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub version: String,
}

impl Brand {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

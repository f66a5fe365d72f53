mod brand_selector;
mod client_hints_parser;
mod error;
pub mod headers;
mod helpers;
pub mod hints;
mod types;

pub use brand_selector::BrandSelector;
pub use client_hints_parser::ClientHintsParser;
pub use error::{Error, Result};
pub use headers::{HeaderSet, Headers};
pub use helpers::sanitize;
pub use types::*;

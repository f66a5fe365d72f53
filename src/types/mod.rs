mod brand;
mod client_hint;
mod client_hints;

pub use brand::*;
pub use client_hint::*;
pub use client_hints::*;

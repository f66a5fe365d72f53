#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("brand token {token:?} has no `;v=` version separator")]
    MissingVersionSeparator { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for policy-content

/// Result type for policy-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in policy-content operations
///
/// The equivalence entry points never return these: a document that fails to
/// parse only switches the comparison to the textual fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document nesting exceeds {depth} levels")]
    TooDeep { depth: usize },

    #[error("Unknown normalization profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid suppression config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile(name.into())
    }
}

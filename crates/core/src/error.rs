use thiserror::Error;

/// Why a URL or bare onion address was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlError {
    #[error("no url was provided")]
    MissingUrl,

    #[error("{url} is not beginning with http://")]
    MissingScheme { url: String },

    #[error("{url} is not ending with .onion")]
    MissingOnionSuffix { url: String },

    #[error("{url} url path should start with '/'")]
    PathWithoutSlash { url: String },

    #[error("{url} url is not a valid onion url")]
    NotOnionUrl { url: String },

    #[error("The provided value is not a valid onion")]
    EmptyOnion,

    #[error("{onion} url is not a valid onion url")]
    InvalidOnion { onion: String },

    #[error("Url provided is invalid. It probably contains non-ascii characters that couldn't be encoded")]
    Undecodable,
}

impl InvalidUrlError {
    /// Untranslated message template. Placeholders are `{url}` and `{onion}`,
    /// filled in by the localisation layer with the same values `Display` uses.
    pub fn template(&self) -> &'static str {
        match self {
            Self::MissingUrl => "no url was provided",
            Self::MissingScheme { .. } => "{url} is not beginning with http://",
            Self::MissingOnionSuffix { .. } => "{url} is not ending with .onion",
            Self::PathWithoutSlash { .. } => "{url} url path should start with '/'",
            Self::NotOnionUrl { .. } => "{url} url is not a valid onion url",
            Self::EmptyOnion => "The provided value is not a valid onion",
            Self::InvalidOnion { .. } => "{onion} url is not a valid onion url",
            Self::Undecodable => {
                "Url provided is invalid. It probably contains non-ascii characters that couldn't be encoded"
            }
        }
    }
}

/// A validation outcome: the value itself is unacceptable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),

    #[error("This onion is banned and cannot be added to this index.")]
    Banned { domain: String },
}

impl ValidationError {
    pub fn is_banned(&self) -> bool {
        matches!(self, Self::Banned { .. })
    }
}

/// The document index could not answer. Never a verdict on the value.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("index request failed: {0}")]
    Transport(String),

    #[error("index returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("undecodable index response: {0}")]
    Decode(String),

    #[error("index config error: {0}")]
    Config(String),
}

/// Returned by checks that consult the index.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

impl From<InvalidUrlError> for StatusError {
    fn from(e: InvalidUrlError) -> Self {
        Self::Validation(e.into())
    }
}

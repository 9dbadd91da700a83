/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A configuration that can never produce a password, detected before any
    /// generation work is done.
    InvalidConfig(String),
    /// The default pool ran out of positions to donate while a category was
    /// still below its target count.
    PoolExhausted,
    Generic(&'static str),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
            Self::PoolExhausted => write!(
                f,
                "character pool exhausted, category counts exceed the password length"
            ),
            Self::Generic(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;

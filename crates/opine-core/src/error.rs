//! Error types for opine-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while compiling keyword rule sets.
///
/// Rule compilation is the only fallible step in the pipeline. The
/// analysis passes themselves return plain reports: an empty corpus or
/// an all-zero tally is a valid result, not an error.
#[derive(Error, Debug)]
pub enum RulesError {
    /// A keyword list contains an empty string, which would match at
    /// every position of every comment.
    #[error("empty keyword in {list} list")]
    EmptyKeyword {
        /// The list the empty keyword was found in.
        list: String,
    },

    /// Two categories share the same label.
    #[error("duplicate category label: {0}")]
    DuplicateCategory(String),

    /// The multi-pattern matcher could not be built.
    #[error("failed to compile keyword matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// Result type alias using [`RulesError`].
pub type RulesResult<T> = Result<T, RulesError>;

//! Error types

use thiserror::Error;

/// Crate result alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Lookup of a name that is not in the registry
    #[error(
        "the color '{name}' is not available, try one of the following: {}",
        .available.join(", ")
    )]
    UnknownColor {
        name: String,
        /// Every name registered at the time of the lookup
        available: Vec<String>,
    },
}

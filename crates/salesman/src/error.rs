use thiserror::Error as ThisError;

use crate::distance::MIN_LOCATIONS;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Malformed matrix or coordinates, bad or duplicated indices.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("at least {required} locations are required, found {found}")]
    InsufficientLocations { found: usize, required: usize },
    /// `remaining` was empty: a start/end-only instance has nothing to order.
    #[error("degenerate instance: no intermediate locations to visit")]
    DegenerateInstance,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn insufficient(found: usize) -> Self {
        Self::InsufficientLocations {
            found,
            required: MIN_LOCATIONS,
        }
    }
}

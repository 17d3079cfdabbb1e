use thiserror::Error;

use crate::domain::customer::errors::CustomerError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid customer: {0}")]
    Validation(#[from] CustomerError),

    #[error("Internal server error")]
    InternalServerError,
}

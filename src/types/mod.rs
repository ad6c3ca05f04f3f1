//! Domain value types shared by the fetcher, the renderer and the exporter.

use thiserror::Error;

mod ids;
mod rich_text;

pub use ids::*;
pub use rich_text::*;
pub(crate) use rich_text::null_as_default;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),
}

impl From<ValidationError> for crate::error::AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidId(message) => crate::error::AppError::InvalidId(message),
            other => crate::error::AppError::MissingConfiguration(other.to_string()),
        }
    }
}

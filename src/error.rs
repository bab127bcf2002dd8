use thiserror::Error;

use crate::models::Field;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No data received from server")]
    EmptyResponse,

    #[error("Data decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Server returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Product not found")]
    LookupNotFound,

    #[error("Invalid field(s): {}", join_fields(.0))]
    Validation(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

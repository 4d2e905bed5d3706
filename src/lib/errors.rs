//! Error type shared by every fallible path in the frontend. Variants map to
//! what the user can usefully be told: configuration gaps, local validation,
//! transport failures, and answers the server itself produced.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // These variants carry sentences already written for the user.
            AppError::Validation(message)
            | AppError::Network(message)
            | AppError::Timeout(message) => formatter.write_str(message),
            AppError::Config(message) => write!(formatter, "Configuration error: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

use std::fmt;

#[derive(Debug)]
pub enum Error {
    Duplicate(String),
    NotFound(String),
    Auth,
    SelfFollow,
    Validation(String),
    ServiceUnavailable(String),
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Duplicate(msg) => write!(f, "Conflict: {}", msg),
            Error::NotFound(msg) => write!(f, "Not Found: {}", msg),
            Error::Auth => write!(f, "Invalid username or password"),
            Error::SelfFollow => write!(f, "You cannot follow yourself"),
            Error::Validation(msg) => write!(f, "Invalid input: {}", msg),
            Error::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Internal(err.to_string())
    }
}

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

/// Failures talking to the organization membership directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid directory URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Directory request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Directory returned HTTP {status}: {body} {location}")]
    Api {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Directory response could not be decoded: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for DirectoryError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;

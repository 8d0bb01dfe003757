use pm_auth::DirectoryError;
use pm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a sprint operation was refused
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("{message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not associated with this organization {location}")]
    NotAMember { location: ErrorLocation },

    #[error("{message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    OutOfDateRange {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    InvalidTransition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Membership lookup failed: {source} {location}")]
    Directory {
        #[source]
        source: DirectoryError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl HandlerError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_a_member() -> Self {
        Self::NotAMember {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn out_of_date_range(message: impl Into<String>) -> Self {
        Self::OutOfDateRange {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing message without source location or internal detail
    pub fn client_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => "Unauthorized".to_string(),
            Self::NotAMember { .. } => "User not associated with this organization".to_string(),
            Self::NotFound { message, .. }
            | Self::Forbidden { message, .. }
            | Self::OutOfDateRange { message, .. }
            | Self::InvalidTransition { message, .. } => message.clone(),
            Self::Directory { .. } => "Membership directory unavailable".to_string(),
            Self::Database { .. } => "Database operation failed".to_string(),
        }
    }
}

impl From<DbError> for HandlerError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DirectoryError> for HandlerError {
    #[track_caller]
    fn from(source: DirectoryError) -> Self {
        Self::Directory {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;

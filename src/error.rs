use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Every failure a request can end in. The display string is the exact
/// message sent back to the client as `{"error": ...}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Book not found")]
    BookNotFound,

    #[error("No books found by this author")]
    NoBooksByAuthor,

    #[error("No books found with this title")]
    NoBooksWithTitle,

    #[error("Username and password are required")]
    CredentialsRequired,

    #[error("User already exists")]
    UserExists,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Review is required")]
    ReviewRequired,

    #[error("Username is required")]
    UsernameRequired,

    #[error("You are not authorized to delete this review")]
    NotAuthorized,

    #[error("Not found")]
    RouteNotFound,

    /// The catalog lock was poisoned by a panicking handler.
    #[error("Internal server error")]
    StoreUnavailable,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CredentialsRequired
            | ApiError::UserExists
            | ApiError::ReviewRequired
            | ApiError::UsernameRequired => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotAuthorized => StatusCode::FORBIDDEN,
            ApiError::BookNotFound
            | ApiError::NoBooksByAuthor
            | ApiError::NoBooksWithTitle
            | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

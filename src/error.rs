use std::path::PathBuf;

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised while loading the catalog artifacts at startup
///
/// Every variant is fatal: the server refuses to start.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed artifact {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Similarity matrix has {rows} rows but the title index has {titles} titles")]
    RowCountMismatch { rows: usize, titles: usize },

    #[error("Similarity row {row} has {columns} columns, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        columns: usize,
        expected: usize,
    },

    #[error("Similarity score at ({row}, {column}) is not a finite number")]
    NonFiniteScore { row: usize, column: usize },

    #[error("Title '{0}' is in the title index but has no book metadata")]
    MissingBook(String),
}

/// A recommendation lookup for a title that is not in the index
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("No recommendations found for '{query}'. Please try a different book name.")]
pub struct NotFoundError {
    pub query: String,
}

/// Application-level errors surfaced over HTTP
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

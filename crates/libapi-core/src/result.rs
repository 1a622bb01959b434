//! Convenience result type alias for libapi.

use crate::error::AppError;

/// A specialized `Result` type for libapi operations.
pub type AppResult<T> = Result<T, AppError>;

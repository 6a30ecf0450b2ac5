//! Convenience result type alias for Roomcast.

use crate::error::AppError;

/// A specialized `Result` type for Roomcast operations.
pub type AppResult<T> = Result<T, AppError>;

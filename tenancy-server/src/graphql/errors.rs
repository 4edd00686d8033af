use async_graphql::*;

use tenancy::errors::{TenancyError, ToGraphQLError};

/// Error codes for structured error handling
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorCode {
    /// Resource not found (404-equivalent)
    NotFound,
    /// Validation failed (400-equivalent)
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
        }
    }
}

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create a "validation failed" error
    pub fn validation(field: &str, message: impl Into<String>) -> Error {
        Error::new(format!(
            "Validation failed for '{}': {}",
            field,
            message.into()
        ))
        .extend_with(|_, e| {
            e.set("code", ErrorCode::ValidationFailed.as_str());
            e.set("field", field);
        })
    }
}

/// Map a lookup failure onto the GraphQL error shape clients see.
pub fn tenancy_error_to_graphql_error(error: TenancyError) -> Error {
    error.to_graphql_error()
}

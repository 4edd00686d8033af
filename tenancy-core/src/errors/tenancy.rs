//! Lookup error types
//!
//! Both variants are raised by the lookup layer and propagate unchanged
//! through every operation that resolves a tenant or an app.
//!
//! # Examples
//!
//! ```rust
//! use tenancy::errors::TenancyError;
//!
//! let err = TenancyError::TenantNotFound("t9".to_string());
//! assert_eq!(err.to_string(), "Tenant id: t9 doesn't exist");
//! assert!(err.is_not_found());
//! ```

use thiserror::Error;

/// Failures of tenant-scoped operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenancyError {
    /// No tenant with the given id exists
    #[error("Tenant id: {0} doesn't exist")]
    TenantNotFound(String),

    /// The tenant exists but owns no app with the given id
    #[error("App id: {0} doesn't exist")]
    AppNotFound(String),
}

impl TenancyError {
    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TenancyError::TenantNotFound(_) | TenancyError::AppNotFound(_)
        )
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TenancyError::TenantNotFound(_) | TenancyError::AppNotFound(_) => "NOT_FOUND",
        }
    }

    /// Name of the entity that could not be resolved
    pub fn resource(&self) -> &'static str {
        match self {
            TenancyError::TenantNotFound(_) => "Tenant",
            TenancyError::AppNotFound(_) => "App",
        }
    }

    /// The offending identifier
    pub fn id(&self) -> &str {
        match self {
            TenancyError::TenantNotFound(id) | TenancyError::AppNotFound(id) => id,
        }
    }
}

//! Domain-specific error types for tenancy-core
//!
//! # Error Categories
//!
//! - **TenancyError**: tenant and app lookups (`TenantNotFound`, `AppNotFound`)
//! - **DatasetError**: loading the initial infra snapshot
//!
//! # GraphQL Integration
//!
//! When the `graphql` feature is enabled, error types can be converted to GraphQL errors
//! with structured error codes and extensions using the `ToGraphQLError` trait.
//!
//! ```rust,ignore
//! use tenancy::errors::{TenancyError, ToGraphQLError};
//!
//! let err = TenancyError::AppNotFound("a1".to_string());
//! let graphql_err = err.to_graphql_error();
//! ```

pub mod common;
pub mod dataset;
pub mod tenancy;

pub use dataset::DatasetError;
pub use tenancy::TenancyError;

#[cfg(feature = "graphql")]
pub use common::ToGraphQLError;

/// Result type alias for tenant-scoped operations
pub type TenancyResult<T> = Result<T, TenancyError>;

/// Result type alias for dataset loading
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenancy_result_alias() {
        let result: TenancyResult<i32> = Err(TenancyError::TenantNotFound("t1".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_dataset_result_alias() {
        let result: DatasetResult<()> = Err(DatasetError::UnknownBundled("x".to_string()));
        assert!(result.is_err());
    }
}

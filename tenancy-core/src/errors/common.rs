//! GraphQL conversion for domain errors
//!
//! ```rust,ignore
//! use tenancy::errors::TenancyError;
//! use tenancy::errors::common::ToGraphQLError;
//!
//! let err = TenancyError::TenantNotFound("t1".to_string());
//! let graphql_err = err.to_graphql_error();
//! ```

#[cfg(feature = "graphql")]
use async_graphql::{Error as GraphQLError, ErrorExtensions};

#[cfg(feature = "graphql")]
use super::TenancyError;

/// Convert domain errors to GraphQL errors with error codes
#[cfg(feature = "graphql")]
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;
}

#[cfg(feature = "graphql")]
impl ToGraphQLError for TenancyError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);
            e.set("resource", self.resource());

            match self {
                TenancyError::TenantNotFound(id) => {
                    e.set("tenantId", id.as_str());
                }
                TenancyError::AppNotFound(id) => {
                    e.set("appId", id.as_str());
                }
            }
        })
    }
}

#[cfg(all(test, feature = "graphql"))]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn extension<'a>(err: &'a GraphQLError, key: &str) -> Option<&'a Value> {
        err.extensions.as_ref().and_then(|ext| ext.get(key))
    }

    #[test]
    fn test_tenant_not_found_to_graphql() {
        let err = TenancyError::TenantNotFound("t9".to_string());
        let graphql_err = err.to_graphql_error();

        assert_eq!(graphql_err.message, "Tenant id: t9 doesn't exist");
        assert_eq!(extension(&graphql_err, "code"), Some(&Value::from("NOT_FOUND")));
        assert_eq!(extension(&graphql_err, "resource"), Some(&Value::from("Tenant")));
        assert_eq!(extension(&graphql_err, "tenantId"), Some(&Value::from("t9")));
    }

    #[test]
    fn test_app_not_found_to_graphql() {
        let err = TenancyError::AppNotFound("a9".to_string());
        let graphql_err = err.to_graphql_error();

        assert_eq!(extension(&graphql_err, "appId"), Some(&Value::from("a9")));
        assert!(extension(&graphql_err, "tenantId").is_none());
    }
}

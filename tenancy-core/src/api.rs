//! Operation contract exposed to the query layer.
//!
//! One method per operation, each tenant-scoped method taking its own typed
//! argument record. Implementations must serialize appends against pagination
//! on the same tenant.

use async_trait::async_trait;

use crate::errors::TenancyResult;
use crate::model::{App, Infra, Page, Tenant};
use crate::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantArgs {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantAppsArgs {
    pub tenant_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppsForTenantArgs {
    pub tenant_id: String,
    /// Page size; `None` means the default of 5.
    pub count: Option<usize>,
    /// Cursor returned by the previous page.
    pub after_app_id: Option<String>,
}

impl AppsForTenantArgs {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            count: None,
            after_app_id: None,
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn after(mut self, app_id: impl Into<String>) -> Self {
        self.after_app_id = Some(app_id.into());
        self
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.count, self.after_app_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppForTenantArgs {
    pub tenant_id: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAppArgs {
    pub tenant_id: String,
    pub app_id: String,
    pub created_by: String,
}

#[async_trait]
pub trait TenancyApi: Send + Sync {
    /// The whole tree.
    async fn infra(&self) -> Infra;

    async fn tenants(&self) -> Vec<Tenant>;

    /// `None` when no tenant matches; this lookup never fails.
    async fn tenant(&self, args: TenantArgs) -> Option<Tenant>;

    async fn apps_for_tenant(&self, args: AppsForTenantArgs) -> TenancyResult<Page>;

    /// Full, unpaginated sequence.
    async fn all_apps_for_tenant(&self, args: TenantAppsArgs) -> TenancyResult<Vec<App>>;

    async fn app_for_tenant(&self, args: AppForTenantArgs) -> TenancyResult<App>;

    /// Append a new app and return the stored record.
    async fn add_app_for_tenant(&self, args: AddAppArgs) -> TenancyResult<App>;
}

//! Tenant and app resolution.
//!
//! Every lookup is a linear scan that takes the first match, so results are
//! deterministic for a given dataset state even when ids repeat.

use crate::errors::{TenancyError, TenancyResult};
use crate::model::App;
use crate::store::{DatasetStore, TenantHandle};

pub fn find_tenant<'a>(
    store: &'a DatasetStore,
    tenant_id: &str,
) -> TenancyResult<&'a TenantHandle> {
    store
        .tenants()
        .find(|tenant| tenant.id() == tenant_id)
        .ok_or_else(|| TenancyError::TenantNotFound(tenant_id.to_string()))
}

pub fn find_app<'a>(apps: &'a [App], app_id: &str) -> TenancyResult<&'a App> {
    apps.iter()
        .find(|app| app.id == app_id)
        .ok_or_else(|| TenancyError::AppNotFound(app_id.to_string()))
}

/// Index of the first app carrying `app_id`.
pub fn position_of(apps: &[App], app_id: &str) -> Option<usize> {
    apps.iter().position(|app| app.id == app_id)
}

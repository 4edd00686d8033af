use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::api::{
    AddAppArgs, AppForTenantArgs, AppsForTenantArgs, TenancyApi, TenantAppsArgs, TenantArgs,
};
use crate::errors::TenancyResult;
use crate::lookup::{find_app, find_tenant};
use crate::model::{App, Infra, Page, Tenant};
use crate::mutator::{append_app, Clock, SystemClock};
use crate::pagination::paginate;
use crate::store::DatasetStore;

#[derive(Clone)]
pub struct TenancyService {
    store: Arc<DatasetStore>,
    clock: Arc<dyn Clock>,
}

impl TenancyService {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<DatasetStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &Arc<DatasetStore> {
        &self.store
    }
}

#[async_trait]
impl TenancyApi for TenancyService {
    async fn infra(&self) -> Infra {
        debug!("infra requested");
        self.store.snapshot().await
    }

    async fn tenants(&self) -> Vec<Tenant> {
        self.store.snapshot().await.tenants
    }

    async fn tenant(&self, args: TenantArgs) -> Option<Tenant> {
        debug!("tenant requested: {}", args.id);
        match find_tenant(&self.store, &args.id) {
            Ok(tenant) => Some(tenant.snapshot().await),
            Err(_) => None,
        }
    }

    async fn apps_for_tenant(&self, args: AppsForTenantArgs) -> TenancyResult<Page> {
        debug!(
            "appsForTenant: tenant={} count={:?} after={:?}",
            args.tenant_id, args.count, args.after_app_id
        );
        let tenant = find_tenant(&self.store, &args.tenant_id)?;
        let apps = tenant.apps().await;
        let page = paginate(&apps, &args.page_request());
        debug!("appsForTenant returned {} apps, cursor '{}'", page.count, page.cursor);
        Ok(page)
    }

    async fn all_apps_for_tenant(&self, args: TenantAppsArgs) -> TenancyResult<Vec<App>> {
        let tenant = find_tenant(&self.store, &args.tenant_id)?;
        let apps = tenant.apps().await;
        Ok(apps.clone())
    }

    async fn app_for_tenant(&self, args: AppForTenantArgs) -> TenancyResult<App> {
        let tenant = find_tenant(&self.store, &args.tenant_id)?;
        let apps = tenant.apps().await;
        find_app(&apps, &args.app_id).cloned()
    }

    async fn add_app_for_tenant(&self, args: AddAppArgs) -> TenancyResult<App> {
        let tenant = find_tenant(&self.store, &args.tenant_id)?;
        let mut apps = tenant.apps_mut().await;
        let app = append_app(&mut apps, args.app_id, args.created_by, self.clock.as_ref());
        info!(
            "Added app {} to tenant {} ({} apps)",
            app.id,
            tenant.id(),
            apps.len()
        );
        Ok(app)
    }
}

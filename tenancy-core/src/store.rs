//! In-memory dataset store.
//!
//! The tenant list is fixed when the store is built. Each tenant's app
//! sequence sits behind its own lock, so an append to one tenant serializes
//! only against readers and writers of that same tenant.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dataset::{self, DatasetSource};
use crate::errors::DatasetResult;
use crate::model::{App, Infra, Tenant};

#[derive(Debug)]
pub struct TenantHandle {
    id: String,
    apps: RwLock<Vec<App>>,
}

impl TenantHandle {
    fn new(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            apps: RwLock::new(tenant.apps),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn apps(&self) -> RwLockReadGuard<'_, Vec<App>> {
        self.apps.read().await
    }

    pub async fn apps_mut(&self) -> RwLockWriteGuard<'_, Vec<App>> {
        self.apps.write().await
    }

    pub async fn snapshot(&self) -> Tenant {
        Tenant {
            id: self.id.clone(),
            apps: self.apps.read().await.clone(),
        }
    }
}

#[derive(Debug)]
pub struct DatasetStore {
    block_traffic: bool,
    tenants: Vec<TenantHandle>,
}

impl DatasetStore {
    pub fn new(infra: Infra) -> Self {
        Self {
            block_traffic: infra.block_traffic,
            tenants: infra.tenants.into_iter().map(TenantHandle::new).collect(),
        }
    }

    pub fn load(source: &DatasetSource) -> DatasetResult<Self> {
        let infra = dataset::load_infra(source)?;
        tracing::info!(
            "Loaded dataset {} with {} tenants",
            source,
            infra.tenants.len()
        );
        Ok(Self::new(infra))
    }

    pub fn block_traffic(&self) -> bool {
        self.block_traffic
    }

    /// Tenants in dataset order.
    pub fn tenants(&self) -> impl Iterator<Item = &TenantHandle> {
        self.tenants.iter()
    }

    pub fn tenant_count(&self) -> usize {
        self.tenants.len()
    }

    /// Copy of the whole tree. Tenants are read one at a time.
    pub async fn snapshot(&self) -> Infra {
        let mut tenants = Vec::with_capacity(self.tenants.len());
        for tenant in &self.tenants {
            tenants.push(tenant.snapshot().await);
        }

        Infra {
            block_traffic: self.block_traffic,
            tenants,
        }
    }
}

use async_graphql::SimpleObject;

use tenancy::model;

use super::App;

#[derive(SimpleObject, Clone, Debug)]
pub struct Tenant {
    pub id: String,
    pub apps: Vec<App>,
}

impl From<model::Tenant> for Tenant {
    fn from(tenant: model::Tenant) -> Self {
        Self {
            id: tenant.id,
            apps: tenant.apps.into_iter().map(App::from).collect(),
        }
    }
}

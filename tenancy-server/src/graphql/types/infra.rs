use async_graphql::SimpleObject;

use tenancy::model;

use super::Tenant;

#[derive(SimpleObject, Clone, Debug)]
pub struct Infra {
    pub block_traffic: bool,
    pub tenants: Vec<Tenant>,
}

impl From<model::Infra> for Infra {
    fn from(infra: model::Infra) -> Self {
        Self {
            block_traffic: infra.block_traffic,
            tenants: infra.tenants.into_iter().map(Tenant::from).collect(),
        }
    }
}

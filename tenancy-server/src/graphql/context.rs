use std::sync::Arc;

use tenancy::TenancyApi;

#[derive(Clone)]
pub struct GraphQLContext {
    pub api: Arc<dyn TenancyApi>,
}

impl GraphQLContext {
    pub fn new(api: Arc<dyn TenancyApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &dyn TenancyApi {
        self.api.as_ref()
    }
}

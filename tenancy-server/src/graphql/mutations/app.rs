use async_graphql::*;
use tracing::debug;

use tenancy::api::AddAppArgs;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::tenancy_error_to_graphql_error;
use crate::graphql::types::App;

#[derive(Default)]
pub struct AppMutation;

#[Object]
impl AppMutation {
    /// Append a new app to a tenant; `created_at` is stamped by the server
    async fn add_app_for_tenant(
        &self,
        ctx: &Context<'_>,
        tenant_id: String,
        app_id: String,
        created_by: String,
    ) -> Result<App> {
        let context = ctx.data::<GraphQLContext>()?;
        debug!("addAppForTenant: tenant={} app={}", tenant_id, app_id);

        let app = context
            .api()
            .add_app_for_tenant(AddAppArgs {
                tenant_id,
                app_id,
                created_by,
            })
            .await
            .map_err(tenancy_error_to_graphql_error)?;

        Ok(App::from(app))
    }
}

use async_graphql::*;

use tenancy::api::{AppForTenantArgs, AppsForTenantArgs, TenantAppsArgs, TenantArgs};

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::{tenancy_error_to_graphql_error, StructuredError};
use crate::graphql::types::{App, AppPage, Infra, Tenant};

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// The whole infra tree
    async fn infra(&self, ctx: &Context<'_>) -> Result<Infra> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(Infra::from(context.api().infra().await))
    }

    /// All tenants in dataset order
    async fn tenants(&self, ctx: &Context<'_>) -> Result<Vec<Tenant>> {
        let context = ctx.data::<GraphQLContext>()?;
        let tenants = context.api().tenants().await;

        Ok(tenants.into_iter().map(Tenant::from).collect())
    }

    /// Get a specific tenant by ID; null when it does not exist
    async fn tenant(&self, ctx: &Context<'_>, id: String) -> Result<Option<Tenant>> {
        let context = ctx.data::<GraphQLContext>()?;
        let tenant = context.api().tenant(TenantArgs { id }).await;

        Ok(tenant.map(Tenant::from))
    }

    /// Page through a tenant's apps in insertion order.
    ///
    /// `count` defaults to 5. `afterAppId` is the `cursor` of the previous
    /// page; an unknown cursor starts again from the first app.
    async fn apps_for_tenant(
        &self,
        ctx: &Context<'_>,
        tenant_id: String,
        count: Option<i32>,
        after_app_id: Option<String>,
    ) -> Result<AppPage> {
        let context = ctx.data::<GraphQLContext>()?;
        let count = count
            .map(usize::try_from)
            .transpose()
            .map_err(|_| StructuredError::validation("count", "must be zero or greater"))?;

        let page = context
            .api()
            .apps_for_tenant(AppsForTenantArgs {
                tenant_id,
                count,
                after_app_id,
            })
            .await
            .map_err(tenancy_error_to_graphql_error)?;

        Ok(AppPage::from(page))
    }

    /// Every app of a tenant, unpaginated
    async fn all_apps_for_tenant(&self, ctx: &Context<'_>, tenant_id: String) -> Result<Vec<App>> {
        let context = ctx.data::<GraphQLContext>()?;
        let apps = context
            .api()
            .all_apps_for_tenant(TenantAppsArgs { tenant_id })
            .await
            .map_err(tenancy_error_to_graphql_error)?;

        Ok(apps.into_iter().map(App::from).collect())
    }

    /// Get a single app of a tenant
    async fn app_for_tenant(
        &self,
        ctx: &Context<'_>,
        tenant_id: String,
        app_id: String,
    ) -> Result<App> {
        let context = ctx.data::<GraphQLContext>()?;
        let app = context
            .api()
            .app_for_tenant(AppForTenantArgs { tenant_id, app_id })
            .await
            .map_err(tenancy_error_to_graphql_error)?;

        Ok(App::from(app))
    }
}

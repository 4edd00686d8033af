use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use tenancy::TenancyApi;

use super::handlers::health;
use crate::graphql::{build_schema, GraphQLContext, TenancySchema};

#[derive(Clone)]
pub struct AppState {
    pub graphql_schema: TenancySchema,
}

pub fn create_app(api: Arc<dyn TenancyApi>, cors_origin: Option<&str>) -> Result<Router> {
    let graphql_schema = build_schema(GraphQLContext::new(api));
    let state = AppState { graphql_schema };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any)
            .allow_credentials(false),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any)
            .allow_credentials(false),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/graphql",
            get(graphql_playground)
                .post(graphql_handler)
                .options(|| async { axum::http::StatusCode::OK }),
        )
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

async fn graphql_handler(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(request.into_inner()).await;
    tracing::debug!("GraphQL request completed");
    response.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

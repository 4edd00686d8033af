use async_graphql::SimpleObject;

use tenancy::model;

/// Field names keep the snake_case wire names clients already query.
#[derive(SimpleObject, Clone, Debug)]
pub struct App {
    pub id: String,
    #[graphql(name = "created_by")]
    pub created_by: String,
    /// Milliseconds since the Unix epoch.
    #[graphql(name = "created_at")]
    pub created_at: f64,
}

impl From<model::App> for App {
    fn from(app: model::App) -> Self {
        Self {
            id: app.id,
            created_by: app.created_by,
            created_at: app.created_at as f64,
        }
    }
}

use async_graphql::SimpleObject;

use tenancy::model::Page;

use super::App;

/// A page of a tenant's apps. Pass `cursor` back as `afterAppId` to continue.
#[derive(SimpleObject, Clone, Debug)]
pub struct AppPage {
    pub count: i32,
    pub results: Vec<App>,
    pub cursor: String,
}

impl From<Page> for AppPage {
    fn from(page: Page) -> Self {
        Self {
            count: page.count as i32,
            results: page.results.into_iter().map(App::from).collect(),
            cursor: page.cursor,
        }
    }
}

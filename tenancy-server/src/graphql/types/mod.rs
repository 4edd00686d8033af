pub mod app;
pub mod infra;
pub mod page;
pub mod tenant;

pub use app::App;
pub use infra::Infra;
pub use page::AppPage;
pub use tenant::Tenant;

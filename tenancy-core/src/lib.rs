pub mod api;
pub mod dataset;
pub mod errors;
pub mod lookup;
pub mod model;
pub mod mutator;
pub mod pagination;
pub mod services;
pub mod store;

pub use api::TenancyApi;
pub use services::TenancyService;
pub use store::DatasetStore;

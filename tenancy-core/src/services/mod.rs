pub mod tenancy_service;

pub use tenancy_service::*;

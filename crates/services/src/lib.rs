#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod code_runner;
pub mod error;
mod id_source;
pub mod session_store;

pub use prep_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use code_runner::{CodeRunner, TestRun};
pub use error::{AppServicesError, AuthError};
pub use session_store::{AuthConfig, DEMO_PASSWORD, DEMO_USERNAME, SessionStore, demo_user};

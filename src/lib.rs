//! Chit Dashboard Core
//!
//! Typed client and view-state core for the Chit agents dashboard.
//! [`api::ApiClient`] wraps the remote JSON backend; [`dashboard`] owns the
//! collections a rendering layer consumes and the local-only mutations the
//! two dashboard actions apply. The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use config::Config;
pub use dashboard::{DashboardController, LocalStub};
pub use error::{ApiError, LocalMutationError};

//! Dashboard state management
//!
//! Owns the collections rendered by the UI (agents, templates, executions,
//! view state) and the data-source seams the controller pulls from. Both
//! seams return the same fallible shape as a real backend call, so swapping
//! a stub for a genuine endpoint is a substitution, not a rewrite.

pub mod controller;
pub mod stub;

use crate::error::ApiError;
use crate::models::{Agent, Execution, Template};
use async_trait::async_trait;

pub use controller::{
    ActiveTab, DashboardController, InitSnapshot, MutationOutcome, Phase, ViewState,
};
pub use stub::LocalStub;

/// Source of agent templates
///
/// Implemented by [`crate::api::ApiClient`] against the real backend and by
/// test doubles in unit tests.
#[async_trait]
pub trait TemplateSource {
    /// Fetch the full template collection
    async fn fetch_templates(&self) -> Result<Vec<Template>, ApiError>;
}

/// Source of the initial agent and execution collections
///
/// The shipped implementation is [`LocalStub`]; a backend-driven
/// implementation would bind the `/agents` and `/agents/{id}/executions`
/// endpoints instead.
#[async_trait]
pub trait SeedSource {
    /// Produce the initial agent collection
    async fn agents(&self) -> Result<Vec<Agent>, ApiError>;

    /// Produce the initial execution log, newest first
    async fn executions(&self) -> Result<Vec<Execution>, ApiError>;
}

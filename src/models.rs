//! Dashboard data models
//!
//! Defines the entity shapes exchanged with the backend API and held by the
//! dashboard state: agents, templates, executions, and users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An agent owned by the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    /// Unique identifier for the agent
    pub id: i64,
    /// Display name of the agent
    pub name: String,
    /// Type of the agent (customer_support, data_analysis, etc.)
    pub agent_type: String,
    /// Whether the agent is currently active
    pub is_active: bool,
    /// Number of times this agent has been executed
    pub executions_count: u32,
    /// When the agent was created
    pub created_at: DateTime<Utc>,
}

/// A reusable agent template offered by the backend
///
/// Templates are read-only: fetched once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Unique identifier for the template
    pub id: i64,
    /// Display name of the template
    pub name: String,
    /// Type of agent this template produces
    pub agent_type: String,
    /// Human-readable description of what the template does
    pub description: String,
    /// Whether the template requires a premium subscription
    pub is_premium: bool,
    /// Default configuration applied to agents created from this template.
    /// Values are scalars or sequences, passed through untouched.
    pub default_configuration: HashMap<String, Value>,
}

/// Status of a single agent execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Execution finished successfully
    Completed,
    /// Any other status reported by the backend
    #[serde(other)]
    Other,
}

/// A single entry in the execution history log
///
/// The log is append-only and kept newest-first. `agent_name` is
/// denormalized on purpose: entries survive agent deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Execution {
    /// Unique identifier for the execution
    pub id: i64,
    /// Name of the agent that ran (denormalized, not a foreign key)
    pub agent_name: String,
    /// Outcome of the execution
    pub status: ExecutionStatus,
    /// When the execution started
    pub start_time: DateTime<Utc>,
    /// Human-readable duration label (e.g. "1.5s")
    pub duration: String,
    /// Human-readable result summary
    pub result: String,
}

/// A platform user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,
    /// Login name
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Whether the user has a premium subscription
    pub is_premium: bool,
}

/// Request payload for creating an agent
///
/// Optional fields are omitted from the JSON body so the backend applies
/// its own defaults (or the template's, for create-from-template).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewAgent {
    /// Display name for the new agent
    pub name: String,
    /// Type of the new agent
    pub agent_type: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional configuration overriding backend defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<HashMap<String, Value>>,
    /// Owning user (backend defaults to user 1 when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Partial update payload for an existing agent
///
/// Only the fields that are `Some` are sent; the backend keeps the rest.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New agent type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    /// Replacement configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<HashMap<String, Value>>,
    /// Activate or deactivate the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Request payload for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewUser {
    /// Login name
    pub username: String,
    /// Contact email address
    pub email: String,
}

/// Partial update payload for an existing user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserUpdate {
    /// New login name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New contact email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Grant or revoke premium access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

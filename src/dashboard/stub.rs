//! Local placeholder data source
//!
//! Stands in for the not-yet-implemented agents/executions fetch. Kept
//! behind [`SeedSource`] so a real endpoint slots in without touching the
//! controller.

use crate::dashboard::SeedSource;
use crate::error::ApiError;
use crate::models::{Agent, Execution, ExecutionStatus};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// Fixed in-memory stand-in for the agents/executions endpoints
#[derive(Debug, Clone, Default)]
pub struct LocalStub;

impl LocalStub {
    /// Create a new stub source
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeedSource for LocalStub {
    async fn agents(&self) -> Result<Vec<Agent>, ApiError> {
        Ok(vec![Agent {
            id: 1,
            name: "My Support Bot".to_string(),
            agent_type: "customer_support".to_string(),
            is_active: true,
            executions_count: 42,
            created_at: Utc
                .with_ymd_and_hms(2025, 6, 19, 4, 34, 54)
                .single()
                .unwrap_or_else(Utc::now),
        }])
    }

    async fn executions(&self) -> Result<Vec<Execution>, ApiError> {
        // Newest first, matching the controller's prepend-only ordering
        Ok(vec![
            Execution {
                id: 1,
                agent_name: "My Support Bot".to_string(),
                status: ExecutionStatus::Completed,
                start_time: Utc
                    .with_ymd_and_hms(2025, 6, 20, 5, 0, 0)
                    .single()
                    .unwrap_or_else(Utc::now),
                duration: "2.3s".to_string(),
                result: "Customer inquiry resolved successfully".to_string(),
            },
            Execution {
                id: 2,
                agent_name: "My Support Bot".to_string(),
                status: ExecutionStatus::Completed,
                start_time: Utc
                    .with_ymd_and_hms(2025, 6, 20, 4, 45, 0)
                    .single()
                    .unwrap_or_else(Utc::now),
                duration: "1.8s".to_string(),
                result: "FAQ response provided".to_string(),
            },
        ])
    }
}

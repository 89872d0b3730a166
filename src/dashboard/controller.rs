//! Dashboard view-state controller
//!
//! Bridges asynchronous fetches into synchronous-looking state for a
//! rendering collaborator. Owns the agent, template, and execution
//! collections plus the tab selector, bootstraps them in a single
//! initialization pass, and applies optimistic local mutations for the two
//! user actions that currently have no backend round-trip.

use crate::dashboard::{SeedSource, TemplateSource};
use crate::error::{ApiError, LocalMutationError};
use crate::models::{Agent, Execution, ExecutionStatus, Template};
use chrono::Utc;

/// Duration label stamped on locally simulated executions
const SIMULATED_DURATION: &str = "1.5s";

/// Result text stamped on locally simulated executions
const SIMULATED_RESULT: &str = "Agent executed successfully";

/// The currently selected dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    /// The user's agents
    Agents,
    /// Available agent templates
    Templates,
    /// Execution history
    Executions,
    /// Usage analytics
    Analytics,
}

/// Lifecycle phase of the dashboard state
///
/// `Loading` suspends at exactly one call site (the template fetch) and
/// resolves to `Ready` or `Failed`. There is no partial-ready state: a
/// template fetch failure fails the whole initialization even though the
/// seed collections are local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Initialization in progress
    Loading,
    /// Normal operation; local mutations are accepted
    Ready,
    /// Initialization failed; recovery is a full restart via `initialize`
    Failed {
        /// Display string of the error that failed the initialization
        message: String,
    },
}

/// Transient UI state consumed by the rendering layer; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// The currently selected tab
    pub active_tab: ActiveTab,
    /// Current lifecycle phase
    pub phase: Phase,
}

impl ViewState {
    /// Whether initialization is still in flight
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The initialization error message, if the dashboard is in `Failed`
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::Agents,
            phase: Phase::Loading,
        }
    }
}

/// Outcome of a local mutation
///
/// Local mutations never error out to the caller: a missing target or an
/// internal failure degrades to `Ignored` (logged, state untouched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The mutation was applied to the collections
    Applied,
    /// The mutation was a no-op; all collections are unchanged
    Ignored,
}

/// Everything one initialization attempt produces
#[derive(Debug, Clone)]
pub struct InitSnapshot {
    /// Templates as decoded from the backend, unmodified
    pub templates: Vec<Template>,
    /// Initial agent collection from the seed source
    pub agents: Vec<Agent>,
    /// Initial execution log from the seed source, newest first
    pub executions: Vec<Execution>,
}

/// Owns and mutates the dashboard collections
///
/// Generic over its data sources so tests and future backend endpoints can
/// be substituted without global patching.
#[derive(Debug)]
pub struct DashboardController<T, S> {
    backend: T,
    seeds: S,
    agents: Vec<Agent>,
    templates: Vec<Template>,
    executions: Vec<Execution>,
    view: ViewState,
    generation: u64,
}

impl<T, S> DashboardController<T, S>
where
    T: TemplateSource,
    S: SeedSource,
{
    /// Create a controller in the `Loading` phase with empty collections
    pub fn new(backend: T, seeds: S) -> Self {
        Self {
            backend,
            seeds,
            agents: Vec::new(),
            templates: Vec::new(),
            executions: Vec::new(),
            view: ViewState::default(),
            generation: 0,
        }
    }

    /// Run one full initialization attempt
    ///
    /// Retry after a `Failed` phase is just calling this again: each call
    /// starts a brand-new sequence, and a stale attempt that resolves after
    /// a newer one began is discarded rather than applied.
    pub async fn initialize(&mut self) {
        let generation = self.begin_initialization();
        let outcome = self.fetch_snapshot().await;
        self.apply_initialization(generation, outcome);
    }

    /// Start a new initialization attempt
    ///
    /// Bumps the attempt generation, clears any prior error and all
    /// collections, and enters `Loading`. Returns the generation token that
    /// must accompany the matching [`apply_initialization`] call.
    ///
    /// [`apply_initialization`]: DashboardController::apply_initialization
    pub fn begin_initialization(&mut self) -> u64 {
        self.generation += 1;
        self.agents.clear();
        self.templates.clear();
        self.executions.clear();
        self.view.phase = Phase::Loading;
        tracing::info!(generation = self.generation, "Dashboard initialization started");
        self.generation
    }

    /// Fetch everything one initialization attempt needs
    ///
    /// The template fetch is the only network suspension point; the seed
    /// collections come from the local source. A failure of either fails
    /// the whole attempt (no partial-ready state).
    pub async fn fetch_snapshot(&self) -> Result<InitSnapshot, ApiError> {
        let templates = self.backend.fetch_templates().await?;
        let agents = self.seeds.agents().await?;
        let executions = self.seeds.executions().await?;
        Ok(InitSnapshot {
            templates,
            agents,
            executions,
        })
    }

    /// Apply the outcome of an initialization attempt
    ///
    /// If `generation` is not the latest attempt, the outcome is discarded:
    /// a slow first request resolving after a retry must not overwrite the
    /// retry's state.
    pub fn apply_initialization(
        &mut self,
        generation: u64,
        outcome: Result<InitSnapshot, ApiError>,
    ) {
        if generation != self.generation {
            tracing::warn!(
                generation,
                latest = self.generation,
                "Discarding stale initialization result"
            );
            return;
        }

        match outcome {
            Ok(snapshot) => {
                self.templates = snapshot.templates;
                self.agents = snapshot.agents;
                self.executions = snapshot.executions;
                self.view.phase = Phase::Ready;
                tracing::info!(
                    templates = self.templates.len(),
                    agents = self.agents.len(),
                    executions = self.executions.len(),
                    "Dashboard initialization completed"
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "Dashboard initialization failed");
                self.view.phase = Phase::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    /// Execute an agent locally
    ///
    /// Increments the agent's execution counter and prepends a completed
    /// execution record. An unknown id is a silent no-op, not an error; an
    /// internal failure is logged and swallowed without touching any state.
    /// No backend call is issued.
    pub fn execute_agent(&mut self, agent_id: i64) -> MutationOutcome {
        match self.try_execute_agent(agent_id) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(agent_id, error = %err, "Agent execution mutation failed");
                MutationOutcome::Ignored
            }
        }
    }

    fn try_execute_agent(&mut self, agent_id: i64) -> Result<MutationOutcome, LocalMutationError> {
        let Some(index) = self.agents.iter().position(|a| a.id == agent_id) else {
            tracing::warn!(agent_id, "Execute requested for unknown agent");
            return Ok(MutationOutcome::Ignored);
        };

        let next_count = self.agents[index]
            .executions_count
            .checked_add(1)
            .ok_or(LocalMutationError::ExecutionCountOverflow { agent_id })?;

        let record = Execution {
            id: self.executions.len() as i64 + 1,
            agent_name: self.agents[index].name.clone(),
            status: ExecutionStatus::Completed,
            start_time: Utc::now(),
            duration: SIMULATED_DURATION.to_string(),
            result: SIMULATED_RESULT.to_string(),
        };

        self.agents[index].executions_count = next_count;
        // Prepend, never insert by timestamp: ordering stays newest-first
        self.executions.insert(0, record);

        tracing::info!(agent_id, "Executed agent locally");
        Ok(MutationOutcome::Applied)
    }

    /// Create an agent from a template, locally
    ///
    /// Appends a new agent named `"My {template.name}"` with the template's
    /// agent type and switches the active tab to the agents view. An unknown
    /// template id is a silent no-op. No backend call is issued.
    pub fn create_agent_from_template(&mut self, template_id: i64) -> MutationOutcome {
        let Some(template) = self.templates.iter().find(|t| t.id == template_id) else {
            tracing::warn!(template_id, "Create requested for unknown template");
            return MutationOutcome::Ignored;
        };

        let agent = Agent {
            id: self.agents.len() as i64 + 1,
            name: format!("My {}", template.name),
            agent_type: template.agent_type.clone(),
            is_active: true,
            executions_count: 0,
            created_at: Utc::now(),
        };

        tracing::info!(template_id, agent_name = %agent.name, "Created agent from template");
        self.agents.push(agent);
        self.view.active_tab = ActiveTab::Agents;
        MutationOutcome::Applied
    }

    /// Switch the active tab
    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.view.active_tab = tab;
    }

    /// The agent collection
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The template collection, exactly as fetched
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// The execution log, newest first
    pub fn executions(&self) -> &[Execution] {
        &self.executions
    }

    /// The transient view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Number of currently active agents
    pub fn active_agent_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_active).count()
    }

    /// Total number of recorded executions
    pub fn execution_count(&self) -> usize {
        self.executions.len()
    }
}

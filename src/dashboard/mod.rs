//! Dashboard Workflow Module
//!
//! This module provides the core logic for the balance dashboard: the
//! operation form, the in-memory view state, and the orchestrator that
//! drives a submission end to end. It is composed of several submodules,
//! each responsible for a specific aspect of the workflow:
//!
//! - `form`: the user's operation input and its validation rules.
//! - `state`: the in-memory view state (account, balances, phase).
//! - `orchestrator`: the coordinator that wires the wallet provider, the
//!   ledger service and the notifier into the submit state machine.
//!
//! The orchestrator converts every fault into a user notice (or silence,
//! for an intentional cancellation); nothing below it talks to the user.

/// Operation form and validation rules
pub mod form;
/// Submission workflow coordinator
pub mod orchestrator;
/// In-memory dashboard view state
pub mod state;

pub use form::{MIN_OPERATION_AMOUNT, OperationForm, OperationKind, OperationRequest, ValidationError};
pub use orchestrator::{OperationOrchestrator, OperationOutcome};
pub use state::{BalanceSnapshot, DashboardState, SubmissionPhase};

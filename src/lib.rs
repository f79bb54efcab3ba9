//! Tool Advisor - multi-stage project tool recommendation engine
//!
//! Collects a user's project requirements through a staged wizard and produces
//! a ranked, deduplicated set of tool recommendations: one best-fit tool per
//! functional need slot, with a relevance score and a cost estimate.
//!
//! Two halves:
//! - [`wizard::Wizard`]: the stage state machine that accumulates
//!   [`types::ProjectRequirements`] and enforces per-stage guards
//! - [`engine::recommend`]: a pure function from requirements plus the
//!   injected read-only tables to a score-sorted `Vec<ToolSuggestion>`
//!
//! The engine never fails: unknown project types fall back to the `other`
//! needs entry, tools without a cost entry default to freemium, and features
//! absent from the keyword index simply contribute no bonus. Worst case is an
//! empty suggestion list, which callers render as "no matches found".

pub mod builtin;
pub mod engine;
pub mod error;
pub mod tables;
pub mod types;
pub mod wizard;

pub use engine::{recommend, ScoreWeights};
pub use error::AdvisorError;
pub use tables::{AdvisorTables, CostEntry, NeedSlot, ToolInfo};
pub use types::{Budget, CostTier, Experience, ProjectRequirements, ProjectType, ToolSuggestion};
pub use wizard::{Stage, Wizard};

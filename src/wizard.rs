//! The requirements wizard: a stage state machine that accumulates
//! [`ProjectRequirements`] and hands them to the engine on completion.
//!
//! Forward order: project-type → details → features → tech → preferences →
//! results → tool-details. Guards are enforced by [`Wizard::next`]; `back`
//! never loses data; `reset` starts a fresh session with fresh containers.
//!
//! The preferences → results edge is a two-step transition: `next()` enters a
//! computing condition during which further transitions are rejected, and
//! [`Wizard::finish_computing`] runs the engine and lands on results. The UI
//! drives both steps, so it can show a "computing recommendations" state for
//! as long as it likes.

use std::fmt;
use tracing::{debug, warn};

use crate::engine::recommend;
use crate::error::AdvisorError;
use crate::tables::AdvisorTables;
use crate::types::{Budget, Experience, ProjectRequirements, ProjectType, ToolSuggestion};

/// Wizard stages in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ProjectType,
    Details,
    Features,
    Tech,
    Preferences,
    Results,
    ToolDetails,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ProjectType => "project-type",
            Stage::Details => "details",
            Stage::Features => "features",
            Stage::Tech => "tech",
            Stage::Preferences => "preferences",
            Stage::Results => "results",
            Stage::ToolDetails => "tool-details",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum description length to leave the details stage.
const MIN_DESCRIPTION_CHARS: usize = 11;

/// The stage state machine. Owns the injected tables for the session.
pub struct Wizard {
    tables: AdvisorTables,
    stage: Stage,
    requirements: ProjectRequirements,
    suggestions: Vec<ToolSuggestion>,
    selected: Option<ToolSuggestion>,
    computing: bool,
}

impl Wizard {
    pub fn new(tables: AdvisorTables) -> Wizard {
        Wizard {
            tables,
            stage: Stage::ProjectType,
            requirements: ProjectRequirements::default(),
            suggestions: Vec::new(),
            selected: None,
            computing: false,
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Snapshot of what the user has entered so far.
    pub fn requirements(&self) -> &ProjectRequirements {
        &self.requirements
    }

    /// Ranked suggestions from the most recent engine run. Empty before the
    /// first run and after `reset`.
    pub fn suggestions(&self) -> &[ToolSuggestion] {
        &self.suggestions
    }

    pub fn selected_tool(&self) -> Option<&ToolSuggestion> {
        self.selected.as_ref()
    }

    /// True between `next()` on preferences and `finish_computing()`.
    pub fn is_computing(&self) -> bool {
        self.computing
    }

    // ------------------------------------------------------------------
    // Field mutation (no stage transitions)
    // ------------------------------------------------------------------

    /// Set the project type and advance to the details stage. Only acts on
    /// the project-type stage; elsewhere it is a no-op.
    pub fn select_project_type(&mut self, project_type: ProjectType) {
        if self.stage != Stage::ProjectType {
            debug!("select_project_type ignored on stage {}", self.stage);
            return;
        }
        self.requirements.project_type = Some(project_type);
        self.stage = Stage::Details;
    }

    pub fn set_description(&mut self, text: &str) {
        self.requirements.description = text.to_string();
    }

    pub fn set_budget(&mut self, budget: Budget) {
        self.requirements.budget = Some(budget);
    }

    pub fn set_experience(&mut self, experience: Experience) {
        self.requirements.experience = Some(experience);
    }

    /// Toggle a feature label: add if absent, remove if present. Labels not
    /// offered for the session's project type are ignored.
    pub fn toggle_feature(&mut self, label: &str) {
        let project_type = self.requirements.project_type.unwrap_or(ProjectType::Other);
        let valid = self
            .tables
            .feature_options_for(project_type)
            .iter()
            .any(|l| l == label);
        if !valid {
            warn!("feature '{label}' not offered for {project_type}, ignoring");
            return;
        }
        if !self.requirements.features.remove(label) {
            self.requirements.features.insert(label.to_string());
        }
    }

    /// Toggle a tech-stack item. Items outside the vocabulary are ignored;
    /// an empty vocabulary disables the restriction.
    pub fn toggle_tech_stack_item(&mut self, label: &str) {
        let vocab = &self.tables.tech_options;
        if !vocab.is_empty() && !vocab.iter().any(|l| l == label) {
            warn!("tech stack item '{label}' not in vocabulary, ignoring");
            return;
        }
        if !self.requirements.tech_stack.remove(label) {
            self.requirements.tech_stack.insert(label.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Whether the current stage's guard allows advancing.
    pub fn can_proceed(&self) -> bool {
        match self.stage {
            Stage::ProjectType => self.requirements.project_type.is_some(),
            Stage::Details => {
                self.requirements.description.trim().chars().count() >= MIN_DESCRIPTION_CHARS
            }
            Stage::Features => !self.requirements.features.is_empty(),
            Stage::Tech => true,
            Stage::Preferences => {
                self.requirements.budget.is_some() && self.requirements.experience.is_some()
            }
            Stage::Results | Stage::ToolDetails => false,
        }
    }

    /// Advance to the next stage. From preferences this enters the computing
    /// condition instead of landing on results directly; call
    /// [`Wizard::finish_computing`] to complete.
    pub fn next(&mut self) -> Result<(), AdvisorError> {
        if self.computing {
            return Err(self.invalid("recommendation computation in progress"));
        }
        match self.stage {
            Stage::ProjectType if !self.can_proceed() => Err(self.invalid("select a project type")),
            Stage::ProjectType => {
                self.stage = Stage::Details;
                Ok(())
            }
            Stage::Details if !self.can_proceed() => {
                Err(self.invalid("describe your project in at least 11 characters"))
            }
            Stage::Details => {
                self.stage = Stage::Features;
                Ok(())
            }
            Stage::Features if !self.can_proceed() => {
                Err(self.invalid("select at least one feature"))
            }
            Stage::Features => {
                self.stage = Stage::Tech;
                Ok(())
            }
            Stage::Tech => {
                self.stage = Stage::Preferences;
                Ok(())
            }
            Stage::Preferences if !self.can_proceed() => {
                Err(self.invalid("choose a budget and an experience level"))
            }
            Stage::Preferences => {
                self.computing = true;
                Ok(())
            }
            Stage::Results | Stage::ToolDetails => {
                Err(self.invalid("no forward transition from here"))
            }
        }
    }

    fn invalid(&self, reason: &'static str) -> AdvisorError {
        AdvisorError::InvalidTransition {
            stage: self.stage,
            reason,
        }
    }

    /// Complete the computing condition: run the engine on a copy of the
    /// requirements and land on the results stage. Returns false (and does
    /// nothing) when no computation is pending.
    pub fn finish_computing(&mut self) -> bool {
        if !self.computing {
            return false;
        }
        // Copy, not a live reference: later edits to the requirements must
        // not mutate already-displayed results.
        let snapshot = self.requirements.clone();
        self.suggestions = recommend(&snapshot, &self.tables);
        self.selected = None;
        self.computing = false;
        self.stage = Stage::Results;
        debug!("computed {} suggestions", self.suggestions.len());
        true
    }

    /// Step back one stage. Never loses entered data. A no-op on the first
    /// stage; rejected while computing.
    pub fn back(&mut self) -> Result<(), AdvisorError> {
        if self.computing {
            return Err(self.invalid("recommendation computation in progress"));
        }
        self.stage = match self.stage {
            Stage::ProjectType => Stage::ProjectType,
            Stage::Details => Stage::ProjectType,
            Stage::Features => Stage::Details,
            Stage::Tech => Stage::Features,
            Stage::Preferences => Stage::Tech,
            Stage::Results => Stage::Preferences,
            Stage::ToolDetails => {
                self.selected = None;
                Stage::Results
            }
        };
        Ok(())
    }

    /// Drill into one suggestion from the results stage. Unknown ids and
    /// calls from other stages are ignored.
    pub fn select_tool(&mut self, tool_id: &str) {
        if self.stage != Stage::Results {
            debug!("select_tool ignored on stage {}", self.stage);
            return;
        }
        let Some(found) = self.suggestions.iter().find(|s| s.tool_id == tool_id) else {
            warn!("select_tool: '{tool_id}' not among current suggestions");
            return;
        };
        self.selected = Some(found.clone());
        self.stage = Stage::ToolDetails;
    }

    /// Start over: fresh requirements (new containers, no aliasing with any
    /// snapshot a caller may have kept), no suggestions, first stage.
    pub fn reset(&mut self) {
        self.requirements = ProjectRequirements::default();
        self.suggestions = Vec::new();
        self.selected = None;
        self.computing = false;
        self.stage = Stage::ProjectType;
    }
}

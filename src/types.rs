//! Core data types: the closed-set enumerations, the requirements accumulator
//! and the computed suggestion record.
//!
//! All wire-facing types carry serde renames matching the JSON protocol
//! (kebab-case enum values, camelCase struct fields).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Closed-set enumerations
// ============================================================================

/// The user's declared category of thing being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Website,
    MobileApp,
    Content,
    Design,
    Chatbot,
    Data,
    Ecommerce,
    Automation,
    Marketing,
    Education,
    Saas,
    Portfolio,
    Blog,
    Social,
    Gaming,
    /// Catch-all; also the fallback needs-matrix entry for unknown types.
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 16] = [
        ProjectType::Website,
        ProjectType::MobileApp,
        ProjectType::Content,
        ProjectType::Design,
        ProjectType::Chatbot,
        ProjectType::Data,
        ProjectType::Ecommerce,
        ProjectType::Automation,
        ProjectType::Marketing,
        ProjectType::Education,
        ProjectType::Saas,
        ProjectType::Portfolio,
        ProjectType::Blog,
        ProjectType::Social,
        ProjectType::Gaming,
        ProjectType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::Content => "content",
            ProjectType::Design => "design",
            ProjectType::Chatbot => "chatbot",
            ProjectType::Data => "data",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Automation => "automation",
            ProjectType::Marketing => "marketing",
            ProjectType::Education => "education",
            ProjectType::Saas => "saas",
            ProjectType::Portfolio => "portfolio",
            ProjectType::Blog => "blog",
            ProjectType::Social => "social",
            ProjectType::Gaming => "gaming",
            ProjectType::Other => "other",
        }
    }

    /// Lenient lookup for untyped input. `None` for anything outside the
    /// closed set; callers decide between a no-op and the `Other` fallback.
    pub fn parse(value: &str) -> Option<ProjectType> {
        ProjectType::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget bracket declared on the preferences stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Free,
    Low,
    Medium,
    High,
    Flexible,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::Free,
        Budget::Low,
        Budget::Medium,
        Budget::High,
        Budget::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Free => "free",
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
            Budget::Flexible => "flexible",
        }
    }

    pub fn parse(value: &str) -> Option<Budget> {
        Budget::ALL.iter().copied().find(|b| b.as_str() == value)
    }
}

/// Self-declared experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Experience> {
        Experience::ALL.iter().copied().find(|e| e.as_str() == value)
    }
}

/// Pricing tier of a recommended tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Free,
    /// Default for tools with no cost-table entry.
    #[default]
    Freemium,
    Paid,
}

impl CostTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostTier::Free => "free",
            CostTier::Freemium => "freemium",
            CostTier::Paid => "paid",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Requirements accumulator
// ============================================================================

/// What the wizard knows about the user's project so far.
///
/// Fields accumulate monotonically as the user moves forward through the
/// stages; navigating backward never clears them. `reset()` replaces the
/// whole value with a fresh one (new containers, not cleared-in-place ones).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequirements {
    pub project_type: Option<ProjectType>,
    pub description: String,
    /// Feature labels, scoped to the chosen project type.
    pub features: BTreeSet<String>,
    /// Optional subset of the tech-stack vocabulary.
    pub tech_stack: BTreeSet<String>,
    pub budget: Option<Budget>,
    pub experience: Option<Experience>,
}

// ============================================================================
// Computed suggestions
// ============================================================================

/// One ranked recommendation, produced fresh per engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSuggestion {
    pub tool_id: String,
    pub name: String,
    pub description: String,

    /// The need slot's functional category label, not the tool's own catalog
    /// category. The same tool can fill different roles for different
    /// project types.
    pub category: String,

    pub estimated_cost: CostTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_range: Option<String>,

    /// Slot priority weight plus accumulated feature keyword bonus.
    pub match_score: i32,

    pub tags: Vec<String>,
    /// First 3 tags, for compact display.
    pub matched_tags: Vec<String>,
}

// ============================================================================
// Tests
// ============================================================================

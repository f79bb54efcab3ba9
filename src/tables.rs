//! The read-only reference tables the engine consults: tool catalog, cost
//! table, needs matrix, feature keyword index and the per-project-type option
//! lists. Supplied by the hosting application at startup, either as a JSON
//! bundle or via [`crate::builtin`].
//!
//! The tables are configuration data: internal consistency is not validated
//! beyond the documented fallback behaviors (unknown project type falls back
//! to `other`, missing cost entries default to freemium).

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AdvisorError;
use crate::types::{CostTier, ProjectType};

/// Catalog metadata for a single tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    /// The tool's own catalog category; suggestions carry the need slot's
    /// category label instead.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Pricing entry for a tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostEntry {
    pub tier: CostTier,
    #[serde(default)]
    pub range: Option<String>,
}

/// One functional role a project type needs exactly one tool for.
#[derive(Debug, Clone, Deserialize)]
pub struct NeedSlot {
    /// Display label for the functional role, e.g. "Development".
    pub category: String,
    /// 1 is most important. Drives the base score, see the engine.
    pub priority: u8,
    /// Candidate tool ids in preference order; the first one present in the
    /// catalog wins.
    pub candidates: Vec<String>,
}

/// The full table bundle, dependency-injected into the wizard and engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorTables {
    /// Tool id → catalog metadata.
    pub tools: HashMap<String, ToolInfo>,

    /// Tool id → pricing. Tools may be absent; they default to freemium.
    #[serde(default)]
    pub costs: HashMap<String, CostEntry>,

    /// Project type → ordered need slots.
    pub needs: HashMap<ProjectType, Vec<NeedSlot>>,

    /// Feature label → tag keywords used for relevance boosting.
    #[serde(default)]
    pub feature_keywords: HashMap<String, Vec<String>>,

    /// Project type → feature labels offered on the features stage.
    #[serde(default)]
    pub feature_options: HashMap<ProjectType, Vec<String>>,

    /// The tech-stack vocabulary. An empty list disables the restriction.
    #[serde(default)]
    pub tech_options: Vec<String>,
}

impl AdvisorTables {
    /// Load a table bundle from a JSON file.
    pub fn load(path: &Path) -> Result<AdvisorTables, AdvisorError> {
        let content = fs::read_to_string(path).map_err(|e| AdvisorError::TablesRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let tables: AdvisorTables = serde_json::from_str(&content)
            .map_err(|e| AdvisorError::TablesParse(e.to_string()))?;

        Ok(tables)
    }

    /// Need slots for a project type, falling back to the `other` entry when
    /// the type has no entry of its own. Empty when neither exists.
    pub fn slots_for(&self, project_type: ProjectType) -> &[NeedSlot] {
        self.needs
            .get(&project_type)
            .or_else(|| self.needs.get(&ProjectType::Other))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Feature labels valid for a project type, with the same `other`
    /// fallback policy as the needs matrix.
    pub fn feature_options_for(&self, project_type: ProjectType) -> &[String] {
        self.feature_options
            .get(&project_type)
            .or_else(|| self.feature_options.get(&ProjectType::Other))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pricing for a tool, defaulting to freemium with no range.
    pub fn cost_for(&self, tool_id: &str) -> CostEntry {
        self.costs.get(tool_id).cloned().unwrap_or_default()
    }
}

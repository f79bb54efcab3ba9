//! The recommendation engine: a pure function from accumulated requirements
//! plus the injected tables to a score-sorted suggestion list.
//!
//! Scoring combines a slot-priority base with a feature keyword bonus. Slot
//! order dominates (priority 1 starts 30 points above priority 2) but heavy
//! feature overlap can still reorder. The keyword bonus is uncapped and not
//! normalized by tag-list length; this matches observed ranking behavior and
//! is kept as-is.

use tracing::debug;

use crate::tables::AdvisorTables;
use crate::types::{ProjectRequirements, ProjectType, ToolSuggestion};

/// Number of tags surfaced as `matched_tags` for display.
const DISPLAY_TAGS: usize = 3;

/// Scoring weights.
pub struct ScoreWeights {
    /// Base score per inverted priority step: `(4 - priority) * priority_step`.
    pub priority_step: i32,
    /// Bonus per feature keyword found in the chosen tool's tags.
    pub keyword_hit: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            priority_step: 30,
            keyword_hit: 10,
        }
    }
}

/// Produce ranked suggestions: one tool per resolvable need slot, sorted by
/// score descending (stable, so equal scores keep slot order).
///
/// Never fails. Unknown project types use the `other` needs entry, slots
/// whose candidates are all missing from the catalog are skipped, features
/// without a keyword entry contribute nothing, and tools without a cost entry
/// default to freemium. An empty result is valid output.
pub fn recommend(requirements: &ProjectRequirements, tables: &AdvisorTables) -> Vec<ToolSuggestion> {
    let weights = ScoreWeights::default();
    let project_type = requirements.project_type.unwrap_or(ProjectType::Other);
    let slots = tables.slots_for(project_type);

    let mut suggestions: Vec<ToolSuggestion> = Vec::with_capacity(slots.len());

    for need in slots {
        // First candidate present in the catalog wins; declared order is the
        // tie-break, not popularity.
        let resolved = need
            .candidates
            .iter()
            .find_map(|id| tables.tools.get(id).map(|info| (id, info)));

        let Some((tool_id, info)) = resolved else {
            debug!(
                "slot '{}' for {}: no candidate in catalog, skipping",
                need.category, project_type
            );
            continue;
        };

        let base = (4 - i32::from(need.priority)) * weights.priority_step;

        // Each keyword of each selected feature that appears in the tool's
        // tags adds a bonus; a single feature may hit several times.
        let mut bonus = 0;
        for feature in &requirements.features {
            let Some(kws) = tables.feature_keywords.get(feature) else {
                continue;
            };
            for kw in kws {
                if info.tags.iter().any(|tag| tag == kw) {
                    bonus += weights.keyword_hit;
                }
            }
        }

        let pricing = tables.cost_for(tool_id);

        suggestions.push(ToolSuggestion {
            tool_id: tool_id.clone(),
            name: info.name.clone(),
            description: info.description.clone(),
            category: need.category.clone(),
            estimated_cost: pricing.tier,
            cost_range: pricing.range,
            match_score: base + bonus,
            tags: info.tags.clone(),
            matched_tags: info.tags.iter().take(DISPLAY_TAGS).cloned().collect(),
        });
    }

    // Stable: equal scores keep the slot order established above.
    suggestions.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::tables::{CostEntry, NeedSlot, ToolInfo};
    use crate::types::CostTier;
    use std::collections::HashMap;

    fn fixture_tool(name: &str, tags: &[&str]) -> ToolInfo {
        ToolInfo {
            name: name.to_string(),
            description: format!("{name} description"),
            category: "Catalog".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn fixture_slot(category: &str, priority: u8, candidates: &[&str]) -> NeedSlot {
        NeedSlot {
            category: category.to_string(),
            priority,
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// The website scenario: cursor resolves slot 1 and picks up two keyword
    /// hits, slot 2 resolves nothing, midjourney fills slot 3 unmatched.
    fn scenario_tables() -> AdvisorTables {
        let mut tools = HashMap::new();
        tools.insert(
            "cursor".to_string(),
            fixture_tool("Cursor", &["coding", "development", "editor"]),
        );
        tools.insert(
            "midjourney".to_string(),
            fixture_tool("Midjourney", &["image", "art"]),
        );

        let mut costs = HashMap::new();
        costs.insert(
            "cursor".to_string(),
            CostEntry {
                tier: CostTier::Paid,
                range: Some("$20/mo".to_string()),
            },
        );

        let mut needs = HashMap::new();
        needs.insert(
            ProjectType::Website,
            vec![
                fixture_slot("Development", 1, &["cursor", "github-copilot"]),
                fixture_slot("Database", 2, &["supabase", "firebase"]),
                fixture_slot("Design", 3, &["midjourney", "dalle"]),
            ],
        );

        let mut feature_keywords = HashMap::new();
        feature_keywords.insert(
            "User Authentication".to_string(),
            vec!["coding".to_string(), "backend".to_string(), "development".to_string()],
        );

        AdvisorTables {
            tools,
            costs,
            needs,
            feature_keywords,
            feature_options: HashMap::new(),
            tech_options: Vec::new(),
        }
    }

    fn website_requirements(features: &[&str]) -> ProjectRequirements {
        ProjectRequirements {
            project_type: Some(ProjectType::Website),
            description: "A website project".to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_scoring_and_order() {
        let tables = scenario_tables();
        let req = website_requirements(&["User Authentication", "Database"]);

        let out = recommend(&req, &tables);

        // Slot 2 resolves no catalog tool and is skipped, no placeholder.
        assert_eq!(out.len(), 2);

        // cursor: base 90 + 10 ("coding") + 10 ("development") = 110.
        assert_eq!(out[0].tool_id, "cursor");
        assert_eq!(out[0].match_score, 110);
        assert_eq!(out[0].category, "Development");
        assert_eq!(out[0].estimated_cost, CostTier::Paid);
        assert_eq!(out[0].cost_range.as_deref(), Some("$20/mo"));
        assert_eq!(out[0].matched_tags, vec!["coding", "development", "editor"]);

        // midjourney: base 30, no feature overlap, no cost entry.
        assert_eq!(out[1].tool_id, "midjourney");
        assert_eq!(out[1].match_score, 30);
        assert_eq!(out[1].category, "Design");
        assert_eq!(out[1].estimated_cost, CostTier::Freemium);
        assert!(out[1].cost_range.is_none());
    }

    #[test]
    fn test_priority_base_scores_without_features() {
        let req = website_requirements(&[]);
        let out = recommend(&req, &builtin::BUILTIN);

        let scores: Vec<i32> = out.iter().map(|s| s.match_score).collect();
        assert_eq!(scores, vec![90, 60, 30]);
    }

    #[test]
    fn test_deterministic_output() {
        let req = website_requirements(&["User Authentication", "Database"]);
        let a = recommend(&req, &builtin::BUILTIN);
        let b = recommend(&req, &builtin::BUILTIN);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_unknown_project_type_matches_other() {
        let mut unknown = website_requirements(&[]);
        unknown.project_type = None;
        let mut other = website_requirements(&[]);
        other.project_type = Some(ProjectType::Other);

        assert_eq!(
            recommend(&unknown, &builtin::BUILTIN),
            recommend(&other, &builtin::BUILTIN)
        );
    }

    #[test]
    fn test_empty_result_when_nothing_resolves() {
        let mut tables = scenario_tables();
        tables.tools.clear();
        let req = website_requirements(&[]);
        assert!(recommend(&req, &tables).is_empty());
    }

    #[test]
    fn test_stable_order_on_equal_scores() {
        let mut tables = scenario_tables();
        // Two slots at the same priority: both score 60, slot order must hold.
        tables.needs.insert(
            ProjectType::Website,
            vec![
                fixture_slot("First Role", 2, &["cursor"]),
                fixture_slot("Second Role", 2, &["midjourney"]),
            ],
        );
        let out = recommend(&website_requirements(&[]), &tables);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].match_score, 60);
        assert_eq!(out[1].match_score, 60);
        assert_eq!(out[0].category, "First Role");
        assert_eq!(out[1].category, "Second Role");
    }

    #[test]
    fn test_keyword_bonus_is_uncapped() {
        let mut tables = scenario_tables();
        tables.tools.insert(
            "cursor".to_string(),
            fixture_tool("Cursor", &["coding", "development", "backend"]),
        );
        // All three keywords of the feature hit: 90 + 30.
        let out = recommend(&website_requirements(&["User Authentication"]), &tables);
        assert_eq!(out[0].match_score, 120);
    }

    #[test]
    fn test_feature_without_index_entry_contributes_nothing() {
        let tables = scenario_tables();
        let out = recommend(&website_requirements(&["Time Travel"]), &tables);
        assert_eq!(out[0].match_score, 90);
    }

    #[test]
    fn test_slot_category_overrides_catalog_category() {
        let tables = scenario_tables();
        let out = recommend(&website_requirements(&[]), &tables);
        // Catalog says "Catalog"; suggestion carries the slot's label.
        assert_eq!(out[0].category, "Development");
    }
}

//! Built-in default table bundle.
//!
//! A realistic catalog of AI and no-code tools plus the needs matrix, feature
//! keyword index, feature option lists and tech-stack vocabulary for all 16
//! project types. Used by the CLI when no `--tables` bundle is given, and by
//! tests that want representative data.
//!
//! A few catalog tools deliberately have no cost entry, and a few feature
//! labels deliberately have no keyword entry; both exercise the documented
//! defaults (freemium tier, zero bonus).

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::tables::{AdvisorTables, CostEntry, NeedSlot, ToolInfo};
use crate::types::{CostTier, ProjectType};

lazy_static! {
    /// The default bundle. Borrow it directly or clone via [`tables`].
    pub static ref BUILTIN: AdvisorTables = build();
}

/// A fresh copy of the built-in bundle.
pub fn tables() -> AdvisorTables {
    BUILTIN.clone()
}

fn tool(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    tags: &[&str],
) -> (String, ToolInfo) {
    (
        id.to_string(),
        ToolInfo {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        },
    )
}

fn cost(id: &str, tier: CostTier, range: Option<&str>) -> (String, CostEntry) {
    (
        id.to_string(),
        CostEntry {
            tier,
            range: range.map(|r| r.to_string()),
        },
    )
}

fn slot(category: &str, priority: u8, candidates: &[&str]) -> NeedSlot {
    NeedSlot {
        category: category.to_string(),
        priority,
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    }
}

fn keywords(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(label, kws)| {
            (
                label.to_string(),
                kws.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
}

fn options(entries: &[(ProjectType, &[&str])]) -> HashMap<ProjectType, Vec<String>> {
    entries
        .iter()
        .map(|(pt, labels)| (*pt, labels.iter().map(|l| l.to_string()).collect()))
        .collect()
}

fn build() -> AdvisorTables {
    use CostTier::{Free, Freemium, Paid};
    use ProjectType as PT;

    let tools: HashMap<String, ToolInfo> = [
        tool("cursor", "Cursor", "Development", "AI-first code editor with codebase-aware inline edits", &["coding", "development", "editor", "ai"]),
        tool("github-copilot", "GitHub Copilot", "Development", "AI pair programmer inside your existing editor", &["coding", "development", "autocomplete"]),
        tool("replit", "Replit", "Development", "Browser IDE with an AI agent that builds and hosts small apps", &["coding", "hosting", "prototyping"]),
        tool("flutterflow", "FlutterFlow", "Development", "Visual builder for Flutter mobile apps", &["no-code", "mobile", "development"]),
        tool("chatgpt", "ChatGPT", "Assistant", "General-purpose assistant for writing, analysis and code", &["writing", "content", "conversation", "data"]),
        tool("claude", "Claude", "Assistant", "Assistant strong at long documents and careful reasoning", &["writing", "conversation", "analysis"]),
        tool("supabase", "Supabase", "Backend", "Hosted Postgres with auth, storage and realtime APIs", &["database", "backend", "auth", "storage"]),
        tool("firebase", "Firebase", "Backend", "Google's app backend with database, auth and push", &["database", "backend", "auth", "mobile"]),
        tool("vercel", "Vercel", "Infrastructure", "Frontend hosting with preview deploys", &["hosting", "deployment", "cloud"]),
        tool("netlify", "Netlify", "Infrastructure", "Static and serverless hosting with instant rollbacks", &["hosting", "deployment", "cloud"]),
        tool("webflow", "Webflow", "No-code", "Visual website builder that exports clean markup", &["no-code", "design", "hosting", "cms"]),
        tool("framer", "Framer", "No-code", "Design-first site builder with AI page generation", &["design", "no-code", "hosting"]),
        tool("bubble", "Bubble", "No-code", "No-code builder for full web applications", &["no-code", "backend", "database"]),
        tool("durable", "Durable", "No-code", "AI website builder that drafts a complete site in seconds", &["no-code", "hosting", "marketing"]),
        tool("midjourney", "Midjourney", "Design", "High-end image generation from text prompts", &["image", "art", "design"]),
        tool("dalle", "DALL-E", "Design", "Image generation integrated with ChatGPT", &["image", "art", "design"]),
        tool("figma-ai", "Figma AI", "Design", "Design suite with AI layout and copy suggestions", &["design", "collaboration", "prototyping"]),
        tool("canva-ai", "Canva Magic Studio", "Design", "Template-driven design with AI image and copy tools", &["design", "image", "marketing", "social"]),
        tool("runway", "Runway", "Video", "AI video generation and editing suite", &["video", "animation", "editing"]),
        tool("synthesia", "Synthesia", "Video", "Avatar presenter videos generated from a script", &["video", "avatar", "education"]),
        tool("elevenlabs", "ElevenLabs", "Audio", "Realistic voice synthesis and cloning", &["audio", "voice", "speech"]),
        tool("notion-ai", "Notion AI", "Productivity", "Workspace assistant for notes, docs and wikis", &["workspace", "notes", "collaboration", "writing"]),
        tool("grammarly", "Grammarly", "Writing", "Writing assistant for grammar, clarity and tone", &["writing", "editing", "grammar"]),
        tool("jasper", "Jasper", "Writing", "Marketing copy generator with brand voice controls", &["writing", "copywriting", "marketing", "content"]),
        tool("copy-ai", "Copy.ai", "Writing", "Short-form marketing and sales copy generation", &["copywriting", "marketing", "seo", "writing"]),
        tool("zapier", "Zapier", "Automation", "Connects apps with trigger-action workflows", &["automation", "workflow", "integration"]),
        tool("make", "Make", "Automation", "Visual multi-step automation scenarios", &["automation", "workflow", "integration"]),
        tool("airtable-ai", "Airtable AI", "Data", "Spreadsheet-database hybrid with AI-computed fields", &["database", "workspace", "automation", "data"]),
        tool("tableau-ai", "Tableau Pulse", "Data", "BI dashboards with AI-surfaced insights", &["data", "analytics", "visualization"]),
        tool("julius-ai", "Julius AI", "Data", "Chat-driven data analysis over uploaded files", &["data", "analytics", "conversation"]),
        tool("voiceflow", "Voiceflow", "Chatbot", "Designer for chat and voice agents", &["chatbot", "conversation", "no-code"]),
        tool("landbot", "Landbot", "Chatbot", "No-code chatbot builder for web and WhatsApp", &["chatbot", "conversation", "support", "no-code"]),
        tool("character-ai", "Character.AI", "Chatbot", "Conversational characters with persistent personas", &["conversation", "chatbot", "entertainment"]),
        tool("intercom-fin", "Intercom Fin", "Support", "AI support agent answering from your help center", &["support", "chatbot", "conversation"]),
        tool("shopify-magic", "Shopify Magic", "Ecommerce", "AI product copy and store tools inside Shopify", &["ecommerce", "marketing", "copywriting"]),
        tool("mailchimp-ai", "Mailchimp AI", "Marketing", "Email campaigns with AI subject lines and send-time tuning", &["email", "marketing", "automation"]),
        tool("buffer-ai", "Buffer AI", "Marketing", "Social post drafting and scheduling", &["social", "scheduling", "marketing"]),
        tool("teachable", "Teachable", "Education", "Course hosting with AI curriculum outlines", &["education", "content", "hosting"]),
        tool("unity-muse", "Unity Muse", "Gaming", "AI assistance inside the Unity game engine", &["gaming", "development", "art"]),
    ]
    .into_iter()
    .collect();

    let costs: HashMap<String, CostEntry> = [
        cost("cursor", Paid, Some("$20/mo")),
        cost("github-copilot", Paid, Some("$10/mo")),
        cost("replit", Freemium, Some("$0-25/mo")),
        cost("flutterflow", Freemium, Some("$0-30/mo")),
        cost("chatgpt", Freemium, Some("$0-20/mo")),
        cost("claude", Freemium, Some("$0-20/mo")),
        cost("supabase", Freemium, Some("$0-25/mo")),
        cost("firebase", Freemium, None),
        cost("vercel", Freemium, Some("$0-20/mo")),
        cost("netlify", Freemium, None),
        cost("webflow", Paid, Some("$14-39/mo")),
        cost("framer", Freemium, Some("$0-30/mo")),
        cost("bubble", Freemium, Some("$0-32/mo")),
        cost("durable", Paid, Some("$12-20/mo")),
        cost("midjourney", Paid, Some("$10-60/mo")),
        cost("dalle", Freemium, None),
        cost("figma-ai", Freemium, Some("$0-15/mo")),
        cost("canva-ai", Freemium, Some("$0-13/mo")),
        cost("runway", Freemium, Some("$0-35/mo")),
        cost("synthesia", Paid, Some("$29+/mo")),
        cost("elevenlabs", Freemium, Some("$0-22/mo")),
        cost("notion-ai", Freemium, Some("$0-10/mo")),
        cost("grammarly", Freemium, None),
        cost("jasper", Paid, Some("$39+/mo")),
        cost("copy-ai", Freemium, Some("$0-49/mo")),
        cost("zapier", Freemium, Some("$0-29/mo")),
        cost("make", Freemium, None),
        cost("airtable-ai", Freemium, None),
        cost("tableau-ai", Paid, Some("$15+/user/mo")),
        cost("voiceflow", Freemium, None),
        cost("landbot", Freemium, Some("$0-40/mo")),
        cost("intercom-fin", Paid, Some("$0.99/resolution")),
        cost("shopify-magic", Paid, Some("$29+/mo")),
        cost("mailchimp-ai", Freemium, None),
        cost("buffer-ai", Free, None),
        cost("teachable", Paid, Some("$39+/mo")),
        cost("unity-muse", Paid, Some("$30/mo")),
        // julius-ai and character-ai intentionally absent
    ]
    .into_iter()
    .collect();

    let needs: HashMap<ProjectType, Vec<NeedSlot>> = [
        (PT::Website, vec![
            slot("Development", 1, &["cursor", "github-copilot"]),
            slot("Database", 2, &["supabase", "firebase"]),
            slot("Design", 3, &["figma-ai", "midjourney"]),
        ]),
        (PT::MobileApp, vec![
            slot("App Builder", 1, &["flutterflow", "cursor"]),
            slot("Backend", 2, &["firebase", "supabase"]),
            slot("Design", 3, &["figma-ai", "canva-ai"]),
        ]),
        (PT::Content, vec![
            slot("Writing", 1, &["chatgpt", "jasper"]),
            slot("Editing", 2, &["grammarly", "notion-ai"]),
            slot("Visuals", 3, &["canva-ai", "dalle"]),
        ]),
        (PT::Design, vec![
            slot("Image Generation", 1, &["midjourney", "dalle"]),
            slot("Design Tools", 2, &["figma-ai", "canva-ai"]),
            slot("Prototyping", 3, &["framer", "webflow"]),
        ]),
        (PT::Chatbot, vec![
            slot("Bot Builder", 1, &["voiceflow", "landbot"]),
            slot("Language Model", 2, &["chatgpt", "claude"]),
            slot("Deployment", 3, &["vercel", "netlify"]),
        ]),
        (PT::Data, vec![
            slot("Analysis", 1, &["julius-ai", "chatgpt"]),
            slot("Visualization", 2, &["tableau-ai", "canva-ai"]),
            slot("Storage", 3, &["supabase", "airtable-ai"]),
        ]),
        (PT::Ecommerce, vec![
            slot("Storefront", 1, &["shopify-magic", "webflow"]),
            slot("Marketing", 2, &["jasper", "mailchimp-ai"]),
            slot("Support", 3, &["intercom-fin", "landbot"]),
        ]),
        (PT::Automation, vec![
            slot("Workflow", 1, &["zapier", "make"]),
            slot("Data", 2, &["airtable-ai", "supabase"]),
            slot("Assistant", 3, &["chatgpt", "claude"]),
        ]),
        (PT::Marketing, vec![
            slot("Copywriting", 1, &["copy-ai", "jasper"]),
            slot("Social Media", 2, &["buffer-ai", "canva-ai"]),
            slot("Email", 3, &["mailchimp-ai", "chatgpt"]),
        ]),
        (PT::Education, vec![
            slot("Course Platform", 1, &["teachable", "notion-ai"]),
            slot("Content", 2, &["chatgpt", "synthesia"]),
            slot("Engagement", 3, &["landbot", "character-ai"]),
        ]),
        (PT::Saas, vec![
            slot("Development", 1, &["cursor", "github-copilot"]),
            slot("Backend", 2, &["supabase", "firebase"]),
            slot("Landing Page", 3, &["framer", "durable"]),
        ]),
        (PT::Portfolio, vec![
            slot("Site Builder", 1, &["durable", "framer"]),
            slot("Visuals", 2, &["midjourney", "canva-ai"]),
            slot("Copy", 3, &["chatgpt", "copy-ai"]),
        ]),
        (PT::Blog, vec![
            slot("Writing", 1, &["chatgpt", "jasper"]),
            slot("Platform", 2, &["webflow", "durable"]),
            slot("SEO", 3, &["copy-ai", "grammarly"]),
        ]),
        (PT::Social, vec![
            slot("App Development", 1, &["cursor", "replit"]),
            slot("Backend", 2, &["firebase", "supabase"]),
            slot("Moderation", 3, &["chatgpt", "claude"]),
        ]),
        (PT::Gaming, vec![
            slot("Game Engine", 1, &["unity-muse", "cursor"]),
            slot("Art", 2, &["midjourney", "dalle"]),
            slot("Audio", 3, &["elevenlabs", "runway"]),
        ]),
        (PT::Other, vec![
            slot("Assistant", 1, &["chatgpt", "claude"]),
            slot("Automation", 2, &["zapier", "make"]),
            slot("Design", 3, &["canva-ai", "figma-ai"]),
        ]),
    ]
    .into_iter()
    .collect();

    let feature_keywords = keywords(&[
        ("User Authentication", &["auth", "backend", "database"]),
        ("Database", &["database", "backend", "storage"]),
        ("Payments", &["ecommerce", "backend", "payments"]),
        ("Content Generation", &["writing", "content", "copywriting"]),
        ("Image Generation", &["image", "art", "design"]),
        ("Video", &["video", "animation"]),
        ("Voice & Audio", &["audio", "voice", "speech"]),
        ("Chat Interface", &["chatbot", "conversation", "support"]),
        ("Analytics", &["data", "analytics", "visualization"]),
        ("Email Campaigns", &["email", "marketing"]),
        ("Social Scheduling", &["social", "scheduling", "marketing"]),
        ("SEO", &["seo", "marketing", "copywriting"]),
        ("Automation", &["automation", "workflow", "integration"]),
        ("Team Collaboration", &["collaboration", "workspace", "notes"]),
        ("Hosting & Deployment", &["hosting", "deployment", "cloud"]),
    ]);

    let feature_options = options(&[
        (PT::Website, &["User Authentication", "Database", "Hosting & Deployment", "SEO", "Analytics", "Content Generation"]),
        (PT::MobileApp, &["User Authentication", "Database", "Payments", "Push Notifications", "Offline Mode"]),
        (PT::Content, &["Content Generation", "SEO", "Image Generation", "Team Collaboration"]),
        (PT::Design, &["Image Generation", "Video", "Team Collaboration", "Content Generation"]),
        (PT::Chatbot, &["Chat Interface", "User Authentication", "Analytics", "Voice & Audio"]),
        (PT::Data, &["Analytics", "Database", "Automation", "Team Collaboration"]),
        (PT::Ecommerce, &["Payments", "Content Generation", "Email Campaigns", "Chat Interface", "SEO"]),
        (PT::Automation, &["Automation", "Analytics", "Email Campaigns", "Database"]),
        (PT::Marketing, &["Email Campaigns", "Social Scheduling", "SEO", "Content Generation", "Analytics"]),
        (PT::Education, &["Content Generation", "Video", "Chat Interface", "Payments"]),
        (PT::Saas, &["User Authentication", "Database", "Payments", "Hosting & Deployment", "Analytics"]),
        (PT::Portfolio, &["Image Generation", "Content Generation", "Hosting & Deployment", "SEO"]),
        (PT::Blog, &["Content Generation", "SEO", "Email Campaigns", "Analytics"]),
        (PT::Social, &["User Authentication", "Database", "Chat Interface", "Image Generation"]),
        (PT::Gaming, &["Image Generation", "Voice & Audio", "Chat Interface", "Database"]),
        (PT::Other, &["Content Generation", "Automation", "Chat Interface", "Analytics", "Image Generation"]),
    ]);

    let tech_options = [
        "react", "nextjs", "vue", "svelte", "flutter", "react-native", "nodejs", "python",
        "rust", "go", "postgres", "mysql", "mongodb", "wordpress", "shopify", "no-code",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect();

    AdvisorTables {
        tools,
        costs,
        needs,
        feature_keywords,
        feature_options,
        tech_options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_type_has_slots_and_options() {
        for pt in ProjectType::ALL {
            assert!(!BUILTIN.slots_for(pt).is_empty(), "no slots for {pt}");
            assert!(
                !BUILTIN.feature_options_for(pt).is_empty(),
                "no feature options for {pt}"
            );
        }
    }

    #[test]
    fn test_every_slot_resolves_a_catalog_tool() {
        for (pt, slots) in &BUILTIN.needs {
            for s in slots {
                assert!(
                    s.candidates.iter().any(|id| BUILTIN.tools.contains_key(id)),
                    "slot {}/{} resolves nothing",
                    pt,
                    s.category
                );
            }
        }
    }

    #[test]
    fn test_slots_are_priority_ordered() {
        for slots in BUILTIN.needs.values() {
            let priorities: Vec<u8> = slots.iter().map(|s| s.priority).collect();
            assert_eq!(priorities, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_some_tools_lack_cost_entries() {
        assert!(BUILTIN.tools.contains_key("julius-ai"));
        assert!(!BUILTIN.costs.contains_key("julius-ai"));
        assert_eq!(BUILTIN.cost_for("julius-ai").tier, CostTier::Freemium);
    }
}

//! Markdown rendering of research results.
//!
//! Produces the single markdown document shown in the results area.

use crate::model::{ResearchResult, ToolEntry, TriState};

/// Shown when the workflow produced nothing.
pub const NO_RESULTS: &str = "No results to display.";

/// Tag lists are cut to this many entries, with no indication of the rest.
pub const MAX_TAGS: usize = 4;

/// Render a research result as markdown.
pub fn render_results(result: Option<&ResearchResult>) -> String {
    let Some(result) = result else {
        return NO_RESULTS.to_string();
    };

    let mut output = format!("# 📊 Research Results for: {}\n", result.query);

    if let Some(analysis) = result.analysis() {
        output.push_str("## 💡 AI Recommendation\n");
        output.push_str(&format!("> {}\n\n", analysis.replace('.', ". ")));
    }

    if !result.companies.is_empty() {
        output.push_str("## 🏢 Detailed Tool Analysis\n");
        output.push_str("---\n");

        for (i, entry) in result.companies.iter().enumerate() {
            push_entry(&mut output, i + 1, entry);
        }
    }

    output
}

fn push_entry(output: &mut String, rank: usize, entry: &ToolEntry) {
    output.push_str(&format!("### {}. {}\n", rank, entry.name));

    if let Some(website) = entry.website() {
        output.push_str(&format!("**🌐 Website:** [{}]({})\n", website, website));
    }

    if let Some(description) = entry.description() {
        output.push_str(&format!("**📝 Description:** {}\n", description));
    }

    output.push_str(&format!("**💰 Pricing:** `{}`\n", entry.pricing_model));

    let open_source = match entry.is_open_source {
        TriState::True => "Yes",
        TriState::False => "No",
        TriState::Unknown => "Unknown",
    };
    output.push_str(&format!("**📖 Open Source:** `{}`\n", open_source));

    let api = match entry.api_available {
        TriState::True => "✅ Yes",
        TriState::False => "❌ No",
        TriState::Unknown => "❓ Unknown",
    };
    output.push_str(&format!("**🔌 API Available:** {}\n\n", api));

    push_tags(output, "🛠️ Tech", &entry.tech_stack);
    push_tags(output, "💻 Languages", &entry.language_support);
    push_tags(output, "🔗 Integrations", &entry.integration_capabilities);

    output.push_str("\n---\n");
}

fn push_tags(output: &mut String, label: &str, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    output.push_str(&format!("**{}:** {}\n", label, code_tags(tags)));
}

/// First [`MAX_TAGS`] tags as inline code, space separated.
fn code_tags(tags: &[String]) -> String {
    tags.iter()
        .take(MAX_TAGS)
        .map(|tag| format!("`{}`", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

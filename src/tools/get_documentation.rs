//! Full documentation page for one catalog entry.

use crate::catalog::CatalogEntry;
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDocumentationRequest {
    /// Entry id (e.g. "poncho-table", "poncho-map", "template-login")
    pub id: String,
}

pub async fn handle_get_documentation(
    state: &CatalogState,
    request: GetDocumentationRequest,
) -> Result<String, String> {
    let index = state.snapshot().await;
    let id = request.id.trim();

    index
        .by_id(id)
        .map(format_documentation)
        .ok_or_else(|| {
            format!(
                "Entry '{}' not found. Use search_catalog or list_entries to find valid ids.",
                id
            )
        })
}

/// Render an entry as Markdown, including the collaborator fields kept in
/// `extra` (template path, dependencies, options, entry points).
pub fn format_documentation(entry: &CatalogEntry) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", entry.name);
    let kind = if entry.is_template() { "Template" } else { "Component" };
    let _ = writeln!(out, "**Kind:** {}", kind);
    let _ = writeln!(out, "**Category:** {}\n", entry.category);
    let _ = writeln!(out, "## Description\n{}\n", entry.description.trim());

    if !entry.keywords.is_empty() {
        let _ = writeln!(out, "**Keywords:** {}\n", entry.keywords.join(", "));
    }

    if let Some(path) = entry.template_path() {
        let _ = writeln!(out, "**File:** `{}`\n", path);
    }

    if let Some(deps) = entry.extra.get("dependencies") {
        let css = string_list(deps.get("css"));
        let js = string_list(deps.get("js"));
        if !css.is_empty() || !js.is_empty() {
            out.push_str("## Dependencies\n\n");
            push_list(&mut out, "CSS", &css);
            push_list(&mut out, "JavaScript", &js);
        }
    }

    if let Some(Value::Array(options)) = entry.extra.get("options")
        && !options.is_empty()
    {
        out.push_str("## Options\n\n");
        out.push_str("| Option | Type | Required | Default | Description |\n");
        out.push_str("|--------|------|----------|---------|-------------|\n");
        for option in options {
            let field = |key: &str| option.get(key).and_then(Value::as_str).unwrap_or_default();
            let option_type = option.get("type").and_then(Value::as_str).unwrap_or("string");
            let required = option.get("required").and_then(Value::as_bool) == Some(true);
            let default = match option.get("default") {
                None | Some(Value::Null) => "-".to_string(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                field("name"),
                option_type,
                if required { "Yes" } else { "No" },
                default,
                field("description")
            );
        }
        out.push('\n');
    }

    for (key, label) in [
        ("mainFunction", "Main function"),
        ("mainClass", "Main class"),
        ("mainObject", "Main object"),
    ] {
        if let Some(value) = entry.extra_str(key) {
            let _ = writeln!(out, "**{}:** `{}`\n", label, value);
        }
    }

    if let Some(example) = entry.extra_str("usageExample") {
        let _ = writeln!(out, "## Usage\n\n```html\n{}\n```\n", example.trim_end());
    }

    out
}

fn string_list(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn push_list(out: &mut String, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "### {}", title);
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
    out.push('\n');
}

//! Link suggestion reports

use vaultweave_tools::{ApplyReport, SuggestionMap, suggestion_count};

const HTML_SUGGESTION_LIMIT: usize = 10;

/// Markdown report grouped by note, in title order
pub fn to_text(suggestions: &SuggestionMap) -> String {
    if suggestions.is_empty() {
        return "No link suggestions found. Vault is well-connected!".to_string();
    }

    let mut lines = vec![
        "# Link Suggestions".to_string(),
        String::new(),
        format!("Found suggestions for {} notes:", suggestions.len()),
        String::new(),
    ];

    for (note, items) in suggestions {
        lines.push(format!("## [[{}]]", note));
        for item in items {
            lines.push(format!(
                "- {}: Link to [[{}]]",
                item.kind.to_string().to_uppercase(),
                item.target
            ));
            lines.push(format!("  - Reason: {}", item.reason));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Condensed HTML report.
///
/// Notes with the most suggestions come first; at most ten
/// `note → target` pairs are listed before the "more" line.
pub fn to_html(suggestions: &SuggestionMap) -> String {
    if suggestions.is_empty() {
        return "✅ <b>No link suggestions</b>\n\nVault is well-connected!".to_string();
    }

    let total = suggestion_count(suggestions);
    let mut lines = vec![
        "🔗 <b>Link Suggestions</b>".to_string(),
        String::new(),
        format!(
            "<b>Found:</b> {} suggestions for {} notes",
            total,
            suggestions.len()
        ),
        String::new(),
    ];

    let mut ranked: Vec<_> = suggestions.iter().collect();
    ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let shown = ranked
        .into_iter()
        .flat_map(|(note, items)| items.iter().map(move |item| (note, item)))
        .take(HTML_SUGGESTION_LIMIT);
    for (note, item) in shown {
        lines.push(format!("• [[{}]] → [[{}]]", note, item.target));
    }

    if total > HTML_SUGGESTION_LIMIT {
        lines.push(format!(
            "\n<i>... and {} more suggestions</i>",
            total - HTML_SUGGESTION_LIMIT
        ));
    }

    lines.join("\n")
}

/// One line per link added (or previewed), then the batch summary
pub fn apply_to_text(report: &ApplyReport) -> String {
    let mut lines: Vec<String> = report
        .outcomes
        .iter()
        .filter(|outcome| outcome.applied)
        .map(|outcome| {
            let file = outcome
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| outcome.path.display().to_string());
            if outcome.mode.is_preview() {
                format!("[DRY RUN] Would add [[{}]] to {}", outcome.target, file)
            } else {
                format!("Added [[{}]] to {}", outcome.target, file)
            }
        })
        .collect();

    lines.push(String::new());
    lines.push(report.summary());
    lines.join("\n")
}

//! Graph analysis reports

use vaultweave_graph::VaultStats;

const TEXT_TOP_CONNECTED: usize = 5;
const TEXT_ORPHAN_LIMIT: usize = 20;
const HTML_TOP_CONNECTED: usize = 3;
const HTML_SAMPLE_ORPHANS: usize = 5;
/// Above this many orphans the HTML report flags them with a warning
const HTML_ORPHAN_WARNING: usize = 10;

const WELL_CONNECTED: &str = "Vault is well-connected!";

/// Markdown report: overview, most connected notes, category table, orphans
pub fn to_text(stats: &VaultStats) -> String {
    let mut lines = vec![
        "# Vault Graph Analysis".to_string(),
        String::new(),
        "## Overview".to_string(),
        String::new(),
        format!("- **Total notes:** {}", stats.total_notes),
        format!("- **Total links:** {}", stats.total_links),
        format!("- **Orphan notes:** {}", stats.orphan_count),
        String::new(),
    ];

    if !stats.most_connected.is_empty() {
        lines.push("## Most Connected Notes".to_string());
        lines.push(String::new());
        for (title, count) in stats.most_connected.iter().take(TEXT_TOP_CONNECTED) {
            lines.push(format!("- [[{}]] ({} links)", title, count));
        }
        lines.push(String::new());
    }

    lines.push("## Domain Statistics".to_string());
    lines.push(String::new());
    lines.push("| Domain | Notes | Avg Links |".to_string());
    lines.push("|--------|-------|-----------|".to_string());
    for (category, bucket) in &stats.category_stats {
        lines.push(format!(
            "| {}/ | {} | {:.1} |",
            category, bucket.count, bucket.avg_links
        ));
    }
    lines.push(String::new());

    if stats.orphans.is_empty() {
        lines.push(format!("No orphan notes. {}", WELL_CONNECTED));
        lines.push(String::new());
    } else {
        lines.push("## Orphan Notes (need links)".to_string());
        lines.push(String::new());
        for title in stats.orphans.iter().take(TEXT_ORPHAN_LIMIT) {
            let category = stats.note(title).map(|n| n.category.as_str()).unwrap_or("");
            lines.push(format!("- [[{}]] ({}/)", title, category));
        }
        if stats.orphans.len() > TEXT_ORPHAN_LIMIT {
            lines.push(format!(
                "- ... and {} more",
                stats.orphans.len() - TEXT_ORPHAN_LIMIT
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Condensed HTML report
pub fn to_html(stats: &VaultStats) -> String {
    let orphan_emoji = if stats.orphan_count > HTML_ORPHAN_WARNING {
        "⚠️"
    } else {
        "✅"
    };

    let mut lines = vec![
        "📊 <b>Vault Graph Analysis</b>".to_string(),
        String::new(),
        format!("<b>📝 Total notes:</b> {}", stats.total_notes),
        format!("<b>🔗 Total links:</b> {}", stats.total_links),
        format!("<b>{} Orphan notes:</b> {}", orphan_emoji, stats.orphan_count),
        String::new(),
    ];

    if !stats.most_connected.is_empty() {
        lines.push("<b>🏆 Most connected:</b>".to_string());
        for (title, count) in stats.most_connected.iter().take(HTML_TOP_CONNECTED) {
            lines.push(format!("• [[{}]] ({})", title, count));
        }
        lines.push(String::new());
    }

    if let Some((category, bucket)) = stats.weakest_category() {
        lines.push(format!(
            "<b>⚡ Weakest domain:</b> {}/ (avg {:.1} links)",
            category, bucket.avg_links
        ));
    }

    if lines.last().is_some_and(|line| !line.is_empty()) {
        lines.push(String::new());
    }
    if stats.orphans.is_empty() {
        lines.push(format!("✅ {}", WELL_CONNECTED));
    } else {
        lines.push("<b>📋 Sample orphans:</b>".to_string());
        for title in stats.orphans.iter().take(HTML_SAMPLE_ORPHANS) {
            lines.push(format!("• {}", title));
        }
        if stats.orphans.len() > HTML_SAMPLE_ORPHANS {
            lines.push(format!(
                "<i>... and {} more orphans</i>",
                stats.orphans.len() - HTML_SAMPLE_ORPHANS
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultweave_core::{AnalysisConfig, Note};
    use vaultweave_graph::GraphAnalyzer;

    fn analyze(notes: &[Note]) -> VaultStats {
        GraphAnalyzer::new(&AnalysisConfig::default()).analyze(notes)
    }

    fn note(title: &str, category: &str, links: &[&str]) -> Note {
        Note::new(title, format!("{}/{}.md", category, title), category, "")
            .with_links(links.iter().copied())
    }

    #[test]
    fn test_text_report_sections() {
        let stats = analyze(&[
            note("A", "thoughts", &["B"]),
            note("B", "thoughts", &[]),
            note("C", "projects", &[]),
        ]);
        let text = to_text(&stats);

        assert!(text.starts_with("# Vault Graph Analysis\n\n## Overview\n"));
        assert!(text.contains("- **Total notes:** 3\n- **Total links:** 1\n- **Orphan notes:** 1"));
        assert!(text.contains("## Most Connected Notes\n\n- [[A]] (1 links)\n- [[B]] (1 links)\n- [[C]] (0 links)"));
        assert!(text.contains("| projects/ | 1 | 0.0 |\n| thoughts/ | 2 | 1.0 |"));
        assert!(text.contains("## Orphan Notes (need links)\n\n- [[C]] (projects/)"));
    }

    #[test]
    fn test_text_orphans_truncated() {
        let notes: Vec<Note> = (0..23)
            .map(|i| note(&format!("N{:02}", i), "thoughts", &[]))
            .collect();
        let text = to_text(&analyze(&notes));

        assert!(text.contains("- [[N19]] (thoughts/)"));
        assert!(!text.contains("[[N20]] (thoughts/)"));
        assert!(text.contains("- ... and 3 more"));
    }

    #[test]
    fn test_text_empty_corpus() {
        let text = to_text(&analyze(&[]));
        assert!(text.contains("- **Total notes:** 0"));
        assert!(!text.contains("## Most Connected Notes"));
        assert!(text.contains("|--------|-------|-----------|\n\n"));
        assert!(text.contains("well-connected"));
    }

    #[test]
    fn test_html_report() {
        let stats = analyze(&[
            note("Hub", "thoughts", &["A", "B", "C"]),
            note("A", "thoughts", &[]),
            note("B", "thoughts", &[]),
            note("C", "thoughts", &[]),
            note("Lonely", "projects", &[]),
        ]);
        let html = to_html(&stats);

        assert!(html.starts_with("📊 <b>Vault Graph Analysis</b>\n\n<b>📝 Total notes:</b> 5\n"));
        assert!(html.contains("<b>✅ Orphan notes:</b> 1"));
        assert!(html.contains("<b>🏆 Most connected:</b>\n• [[Hub]] (3)\n• [[A]] (1)\n• [[B]] (1)\n\n"));
        assert!(html.contains("<b>⚡ Weakest domain:</b> projects/ (avg 0.0 links)"));
        assert!(html.ends_with("<b>📋 Sample orphans:</b>\n• Lonely"));
        assert!(!html.contains("more orphans"));
    }

    #[test]
    fn test_html_orphan_warning() {
        let notes: Vec<Note> = (0..11)
            .map(|i| note(&format!("N{}", i), "thoughts", &[]))
            .collect();
        let html = to_html(&analyze(&notes));

        assert!(html.contains("<b>⚠️ Orphan notes:</b> 11"));
        assert_eq!(html.matches("\n• N").count(), 5);
        assert!(html.ends_with("• N3\n• N4\n<i>... and 6 more orphans</i>"));
    }

    #[test]
    fn test_html_empty_corpus() {
        let html = to_html(&analyze(&[]));
        assert!(!html.contains("Weakest domain"));
        assert!(html.contains("<b>✅ Orphan notes:</b> 0"));
        assert!(html.ends_with("Vault is well-connected!"));
    }
}

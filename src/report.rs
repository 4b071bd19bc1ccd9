use anyhow::{Context, Result};

use crate::stats::{AnalysisResult, GeoResult, SeoResult};

const MAX_REPORTED_H1_TITLES: usize = 3;
const MAX_REPORTED_MENTIONS: usize = 10;

/// Renders a percentage the way a float literal reads: `10.0`, `3.33`.
fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

pub fn format_report(seo: &SeoResult, geo: &GeoResult) -> String {
    let mut lines = vec![
        "## SEO & GEO Analysis Report".to_string(),
        String::new(),
        "### SEO Metrics".to_string(),
        format!("- **Word count:** {}", seo.word_count),
        format!(
            "- **H1:** {} | **H2:** {} | **H3:** {}",
            seo.h1_count, seo.h2_count, seo.h3_count
        ),
    ];

    if !seo.h1_titles.is_empty() {
        let titles: Vec<&str> = seo
            .h1_titles
            .iter()
            .take(MAX_REPORTED_H1_TITLES)
            .map(String::as_str)
            .collect();
        lines.push(format!("- **H1 titles:** {}", titles.join("; ")));
    }

    if !seo.keyword_analysis.is_empty() {
        lines.push("- **Keyword density:**".to_string());
        for (keyword, stats) in seo.keyword_analysis.iter() {
            lines.push(format!(
                "  - {}: {} occurrences ({}%)",
                keyword,
                stats.occurrences,
                format_percent(stats.density_percent)
            ));
        }
    }

    lines.push(String::new());
    lines.push("### GEO / Local SEO".to_string());
    lines.push(format!("- **Local SEO score:** {}/100", geo.local_seo_score));

    if !geo.location_mentions.is_empty() {
        let mentions: Vec<&str> = geo
            .location_mentions
            .iter()
            .take(MAX_REPORTED_MENTIONS)
            .map(String::as_str)
            .collect();
        lines.push(format!("- **Location mentions:** {}", mentions.join(", ")));
    }

    lines.push(String::new());
    lines.push("### Recommendations".to_string());
    for recommendation in seo.recommendations.iter().chain(&geo.recommendations) {
        lines.push(format!("- {}", recommendation));
    }

    lines.join("\n")
}

pub fn format_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}

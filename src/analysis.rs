use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::args::{Args, OutputFormat};
use crate::geo::analyze_geo_with;
use crate::input::{parse_keywords, ContentSource};
use crate::patterns::{load_location_patterns, LocationPatterns};
use crate::report;
use crate::seo::analyze_seo;
use crate::stats::AnalysisResult;

/// Runs both analyzers over one piece of content.
pub fn analyze_content(
    content: &str,
    keywords: Option<&[String]>,
    location: Option<&str>,
    patterns: &LocationPatterns,
) -> AnalysisResult {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "content_analysis",
        content_chars = content.chars().count(),
        "Starting content analysis"
    );

    let seo = analyze_seo(content, keywords);
    let geo = analyze_geo_with(content, location, patterns);

    info!(
        action = "complete",
        component = "content_analysis",
        word_count = seo.word_count,
        location_mentions = geo.location_mentions.len(),
        local_seo_score = geo.local_seo_score,
        recommendation_count = seo.recommendations.len() + geo.recommendations.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Content analysis completed"
    );

    AnalysisResult { seo, geo }
}

/// Resolves input and patterns from the command line, analyzes, and renders
/// the report in the requested format.
pub fn run(args: &Args) -> Result<String> {
    let Some(content_arg) = args.content.as_deref() else {
        anyhow::bail!("No content given. Pass text, a file path, or - for stdin.");
    };

    let content = ContentSource::resolve(content_arg).read()?;
    let keywords = parse_keywords(args.keywords.as_deref());
    let patterns = load_location_patterns(args.patterns.as_deref())?;

    let result = analyze_content(
        &content,
        keywords.as_deref(),
        args.location.as_deref(),
        &patterns,
    );

    match args.format {
        OutputFormat::Text => Ok(report::format_report(&result.seo, &result.geo)),
        OutputFormat::Json => report::format_json(&result),
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::stats::{KeywordAnalysis, KeywordStats, SeoResult};
use crate::text;

const MAX_H1_TITLES: usize = 5;
const MAX_H2_TITLES: usize = 10;
const MAX_TITLE_CHARS: usize = 80;

const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 2000;
const MIN_H2_FOR_LONG_CONTENT: usize = 2;
const LONG_CONTENT_WORDS: usize = 500;
const UNDERUSED_DENSITY: f64 = 0.5;
const UNDERUSED_OCCURRENCES: usize = 2;
const OVERUSED_DENSITY: f64 = 3.0;

lazy_static! {
    static ref H1_REGEX: Regex = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap();
    static ref H2_REGEX: Regex = Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").unwrap();
    static ref H3_REGEX: Regex = Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").unwrap();
}

/// Inner contents of every heading matched by `regex`, in document order.
fn headings<'a>(regex: &Regex, content: &'a str) -> Vec<&'a str> {
    regex
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn clean_titles(headings: &[&str], limit: usize) -> Vec<String> {
    headings
        .iter()
        .take(limit)
        .map(|heading| text::truncate_chars(text::strip_tags(heading, "").trim(), MAX_TITLE_CHARS))
        .collect()
}

/// Counts tokens equal to the keyword or containing it. "cat" matches
/// "category" as well.
fn keyword_occurrences(tokens: &[String], keyword: &str) -> usize {
    let keyword = keyword.to_lowercase();
    tokens
        .iter()
        .filter(|token| **token == keyword || token.contains(&keyword))
        .count()
}

fn keyword_density(occurrences: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    text::round2(occurrences as f64 / word_count as f64 * 100.0)
}

pub fn analyze_seo(content: &str, focus_keywords: Option<&[String]>) -> SeoResult {
    let word_count = text::word_count(content);

    let h1 = headings(&H1_REGEX, content);
    let h2 = headings(&H2_REGEX, content);
    let h3 = headings(&H3_REGEX, content);

    let mut keyword_analysis = KeywordAnalysis::default();
    if let Some(keywords) = focus_keywords.filter(|kws| !kws.is_empty()) {
        let tokens = text::markup_free_words(content);
        for keyword in keywords {
            let occurrences = keyword_occurrences(&tokens, keyword);
            keyword_analysis.insert(
                keyword.clone(),
                KeywordStats {
                    occurrences,
                    density_percent: keyword_density(occurrences, word_count),
                },
            );
        }
    }

    let mut result = SeoResult {
        word_count,
        h1_count: h1.len(),
        h2_count: h2.len(),
        h3_count: h3.len(),
        h1_titles: clean_titles(&h1, MAX_H1_TITLES),
        h2_titles: clean_titles(&h2, MAX_H2_TITLES),
        keyword_analysis,
        recommendations: Vec::new(),
    };
    result.recommendations = seo_recommendations(&result);

    debug!(
        action = "complete",
        component = "seo_analysis",
        word_count = result.word_count,
        h1_count = result.h1_count,
        h2_count = result.h2_count,
        h3_count = result.h3_count,
        keyword_count = result.keyword_analysis.len(),
        "SEO analysis completed"
    );

    result
}

fn seo_recommendations(result: &SeoResult) -> Vec<String> {
    let mut recommendations = Vec::new();

    if result.word_count < MIN_WORDS {
        recommendations.push("Content too short. Aim for 300+ words for better SEO.".to_string());
    } else if result.word_count > MAX_WORDS {
        recommendations.push("Consider splitting long content for readability.".to_string());
    }

    if result.h1_count == 0 {
        recommendations.push("Add an H1 heading with primary keyword.".to_string());
    } else if result.h1_count > 1 {
        recommendations.push("Use only one H1 per page.".to_string());
    }

    if result.h2_count < MIN_H2_FOR_LONG_CONTENT && result.word_count > LONG_CONTENT_WORDS {
        recommendations.push("Add more H2 subheadings for structure.".to_string());
    }

    for (keyword, stats) in result.keyword_analysis.iter() {
        if stats.density_percent < UNDERUSED_DENSITY && stats.occurrences < UNDERUSED_OCCURRENCES {
            recommendations.push(format!(
                "Consider using keyword '{}' more naturally.",
                keyword
            ));
        } else if stats.density_percent > OVERUSED_DENSITY {
            recommendations.push(format!(
                "Keyword '{}' may be overused (keyword stuffing).",
                keyword
            ));
        }
    }

    recommendations
}

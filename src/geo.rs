use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::patterns::LocationPatterns;
use crate::stats::GeoResult;

const MAX_LOCATION_MENTIONS: usize = 20;
const MIN_MENTION_CHARS: usize = 3;

const TARGET_FOUND_SCORE: u8 = 80;
const TARGET_MISSING_SCORE: u8 = 30;
const MENTIONS_FOUND_SCORE: u8 = 50;
const NO_MENTIONS_SCORE: u8 = 20;

lazy_static! {
    static ref DEFAULT_PATTERNS: LocationPatterns = LocationPatterns::embedded().unwrap();
}

/// Text of a single match: capture groups joined by a space, or the whole
/// match for group-less patterns.
fn mention_text(pattern: &Regex, caps: &regex::Captures<'_>) -> String {
    let joined = if pattern.captures_len() > 1 {
        caps.iter()
            .skip(1)
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        caps[0].to_string()
    };
    joined.trim().to_string()
}

pub fn extract_location_mentions(content: &str, patterns: &LocationPatterns) -> Vec<String> {
    let mut mentions: Vec<String> = Vec::new();

    for pattern in patterns.iter() {
        for caps in pattern.captures_iter(content) {
            let mention = mention_text(pattern, &caps);
            if mention.chars().count() >= MIN_MENTION_CHARS && !mentions.contains(&mention) {
                mentions.push(mention);
            }
        }
    }

    mentions.truncate(MAX_LOCATION_MENTIONS);
    mentions
}

pub fn analyze_geo(content: &str, target_location: Option<&str>) -> GeoResult {
    analyze_geo_with(content, target_location, &DEFAULT_PATTERNS)
}

pub fn analyze_geo_with(
    content: &str,
    target_location: Option<&str>,
    patterns: &LocationPatterns,
) -> GeoResult {
    let location_mentions = extract_location_mentions(content, patterns);
    let mut recommendations = Vec::new();

    let local_seo_score = match target_location.filter(|target| !target.is_empty()) {
        Some(target) => {
            if content.to_lowercase().contains(&target.to_lowercase()) {
                recommendations.push(format!("Target location '{}' is mentioned.", target));
                TARGET_FOUND_SCORE
            } else {
                recommendations.push(format!("Add mentions of target location: {}", target));
                TARGET_MISSING_SCORE
            }
        }
        None if !location_mentions.is_empty() => MENTIONS_FOUND_SCORE,
        None => {
            recommendations
                .push("Consider adding location-specific terms for local SEO.".to_string());
            NO_MENTIONS_SCORE
        }
    };

    debug!(
        action = "complete",
        component = "geo_analysis",
        mention_count = location_mentions.len(),
        local_seo_score,
        has_target = target_location.is_some(),
        "GEO analysis completed"
    );

    GeoResult {
        location_mentions,
        local_seo_score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_scenario_mentions() {
        let result = analyze_geo("<h1>Best Pizza</h1><p>Pizza pizza pizza in Chicago, IL</p>", None);
        assert!(result
            .location_mentions
            .iter()
            .any(|m| m.contains("Chicago") && m.ends_with(" IL")));
        assert_eq!(result.local_seo_score, 50);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_city_state_groups_are_joined() {
        let result = analyze_geo("Offices: Austin, TX", None);
        assert_eq!(result.location_mentions, vec!["Austin TX"]);
    }

    #[test]
    fn test_russian_patterns() {
        let result = analyze_geo("Доставка в Москве и Питере", None);
        assert_eq!(result.location_mentions, vec!["Москве", "Питере"]);

        let result = analyze_geo("Мы работаем в городе Казань", None);
        assert_eq!(result.location_mentions, vec!["городе Казань"]);
    }

    #[test]
    fn test_postal_codes_and_short_matches() {
        let result = analyze_geo("Zip 90210 or 1234 or 1234567", None);
        assert_eq!(result.location_mentions, vec!["90210"]);
    }

    #[test]
    fn test_mentions_deduplicated_in_first_seen_order() {
        let result = analyze_geo("10001 then 20002 then 10001 again", None);
        assert_eq!(result.location_mentions, vec!["10001", "20002"]);
    }

    #[test]
    fn test_mentions_capped_at_twenty() {
        let content = (10000..10030)
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let result = analyze_geo(&content, None);
        assert_eq!(result.location_mentions.len(), 20);
        assert_eq!(result.location_mentions[0], "10000");
        assert_eq!(result.location_mentions[19], "10019");
    }

    #[test]
    fn test_target_location_found_case_insensitive() {
        let result = analyze_geo("Best tacos in AUSTIN.", Some("Austin"));
        assert_eq!(result.local_seo_score, 80);
        assert_eq!(
            result.recommendations,
            vec!["Target location 'Austin' is mentioned."]
        );
    }

    #[test]
    fn test_target_location_missing() {
        let result = analyze_geo("Best tacos in town.", Some("Austin"));
        assert_eq!(result.local_seo_score, 30);
        assert_eq!(
            result.recommendations,
            vec!["Add mentions of target location: Austin"]
        );
    }

    #[test]
    fn test_no_locations_no_target() {
        let result = analyze_geo("plain words only", None);
        assert!(result.location_mentions.is_empty());
        assert_eq!(result.local_seo_score, 20);
        assert_eq!(
            result.recommendations,
            vec!["Consider adding location-specific terms for local SEO."]
        );
    }

    #[test]
    fn test_custom_patterns() {
        let patterns = LocationPatterns::parse(r"\bSpringfield\b").unwrap();
        let result = analyze_geo_with("welcome to springfield, 90210", None, &patterns);
        assert_eq!(result.location_mentions, vec!["springfield"]);
    }
}

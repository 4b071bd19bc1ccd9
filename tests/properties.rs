//! Invariants that hold for any content.

use proptest::prelude::*;
use regex::Regex;
use seogeo::{analyze_geo, analyze_seo};
use std::collections::HashSet;

const ADD_H1: &str = "Add an H1 heading with primary keyword.";
const TOO_SHORT: &str = "Content too short. Aim for 300+ words for better SEO.";

fn html_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,10}",
            "[0-9]{1,7}",
            Just(", ".to_string()),
            Just("<p>".to_string()),
            Just("</p>".to_string()),
            Just("city ".to_string()),
            Just("Boston, MA".to_string()),
            Just("Москве".to_string()),
            " {1,3}",
        ],
        0..80,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn prop_word_count_matches_word_pattern(content in html_fragment()) {
        let expected = Regex::new(r"\b\w+\b").unwrap().find_iter(&content).count();
        prop_assert_eq!(analyze_seo(&content, None).word_count, expected);
    }

    #[test]
    fn prop_no_h1_means_add_h1(content in html_fragment()) {
        let result = analyze_seo(&content, None);
        prop_assert_eq!(result.h1_count, 0);
        prop_assert!(result.recommendations.iter().any(|r| r == ADD_H1));
    }

    #[test]
    fn prop_single_h1_has_no_h1_recommendation(title in "[a-z]{1,12}", body in html_fragment()) {
        let content = format!("<h1>{}</h1>{}", title, body);
        let result = analyze_seo(&content, None);
        prop_assert_eq!(result.h1_count, 1);
        prop_assert!(!result.recommendations.iter().any(|r| r.contains("H1")));
    }

    #[test]
    fn prop_keyword_density_bounded(content in html_fragment(), keyword in "[a-z]{1,4}") {
        let keywords = vec![keyword.clone()];
        let result = analyze_seo(&content, Some(&keywords));
        let stats = result.keyword_analysis.get(&keyword).unwrap();
        prop_assert!(stats.density_percent >= 0.0);
        if result.word_count == 0 {
            prop_assert_eq!(stats.density_percent, 0.0);
            prop_assert_eq!(stats.occurrences, 0);
        }
    }

    #[test]
    fn prop_location_mentions_unique_and_capped(content in html_fragment()) {
        let result = analyze_geo(&content, None);
        prop_assert!(result.location_mentions.len() <= 20);
        let unique: HashSet<&String> = result.location_mentions.iter().collect();
        prop_assert_eq!(unique.len(), result.location_mentions.len());
        prop_assert!(result.location_mentions.iter().all(|m| m.chars().count() > 2));
    }

    #[test]
    fn prop_analysis_is_idempotent(content in html_fragment(), target in prop::option::of("[A-Za-z]{1,8}")) {
        let keywords = vec!["city".to_string()];
        prop_assert_eq!(analyze_seo(&content, Some(&keywords)), analyze_seo(&content, Some(&keywords)));
        prop_assert_eq!(
            analyze_geo(&content, target.as_deref()),
            analyze_geo(&content, target.as_deref())
        );
    }
}

#[test]
fn test_short_plain_text_scenario() {
    let content = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do "
        .repeat(20);
    let seo = analyze_seo(&content, None);
    let geo = analyze_geo(&content, None);

    assert_eq!(seo.word_count, 200);
    assert!(seo.recommendations.iter().any(|r| r == TOO_SHORT));
    assert!(seo.recommendations.iter().any(|r| r == ADD_H1));
    assert_eq!(geo.local_seo_score, 20);
}

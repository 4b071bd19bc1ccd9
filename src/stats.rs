use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordStats {
    pub occurrences: usize,
    pub density_percent: f64,
}

/// Per-keyword stats in first-insertion order. Inserting a keyword that is
/// already present replaces its stats without moving it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeywordAnalysis {
    entries: Vec<(String, KeywordStats)>,
}

impl KeywordAnalysis {
    pub fn insert(&mut self, keyword: String, stats: KeywordStats) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == keyword) {
            Some((_, slot)) => *slot = stats,
            None => self.entries.push((keyword, stats)),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordStats> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == keyword)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeywordStats)> {
        self.entries.iter().map(|(kw, stats)| (kw.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KeywordAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, stats) in &self.entries {
            map.serialize_entry(keyword, stats)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoResult {
    pub word_count: usize,
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h1_titles: Vec<String>,
    pub h2_titles: Vec<String>,
    pub keyword_analysis: KeywordAnalysis,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoResult {
    pub location_mentions: Vec<String>,
    pub local_seo_score: u8,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub seo: SeoResult,
    pub geo: GeoResult,
}

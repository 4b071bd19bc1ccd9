pub mod analysis;
pub mod args;
pub mod geo;
pub mod input;
pub mod patterns;
pub mod report;
pub mod seo;
pub mod stats;
pub mod text;
pub mod utils;

pub use analysis::{analyze_content, run};
pub use args::{Args, OutputFormat};
pub use geo::{analyze_geo, analyze_geo_with};
pub use patterns::{init_default_patterns, load_location_patterns, LocationPatterns};
pub use report::{format_json, format_report};
pub use seo::analyze_seo;
pub use stats::{AnalysisResult, GeoResult, KeywordAnalysis, KeywordStats, SeoResult};

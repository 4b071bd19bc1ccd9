use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

// Include default patterns at compile time
const DEFAULT_PATTERNS: &str = include_str!("../default_location_patterns.txt");

/// Written by `--init`. Only read back when passed to `--patterns`.
pub const DEFAULT_PATTERN_FILE: &str = "location_patterns.txt";

/// Ordered location-detection regexes, all case-insensitive.
#[derive(Debug, Clone)]
pub struct LocationPatterns {
    patterns: Vec<Regex>,
}

impl LocationPatterns {
    /// Patterns embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_PATTERNS)
    }

    /// Compiles one pattern per line, skipping blanks and `#` comments. An
    /// invalid line is an error.
    pub fn parse(content: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match RegexBuilder::new(line).case_insensitive(true).build() {
                Ok(regex) => patterns.push(regex),
                Err(e) => {
                    anyhow::bail!("Invalid regex pattern at line {}: {}", line_num + 1, e)
                }
            }
        }
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Resolves the pattern set: an explicit file must exist and compile fully;
/// without one the embedded defaults apply.
pub fn load_location_patterns(pattern_file_path: Option<&Path>) -> Result<LocationPatterns> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "pattern_loading",
        "Starting location pattern loading"
    );

    let patterns = if let Some(path) = pattern_file_path {
        info!(action = "load", component = "pattern_file", file_path = ?path, "Loading patterns from specified file");
        if !path.exists() {
            anyhow::bail!("Pattern file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file {:?}", path))?;
        let patterns = LocationPatterns::parse(&content)?;
        info!(action = "loaded", component = "pattern_file", pattern_count = patterns.len(), file_path = ?path, "Loaded patterns from file");
        patterns
    } else {
        info!(
            action = "load",
            component = "embedded_patterns",
            "Using embedded default patterns"
        );
        LocationPatterns::embedded()?
    };

    let pattern_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "pattern_loading",
        pattern_count = patterns.len(),
        duration_ms = pattern_time.as_millis(),
        "Successfully compiled patterns"
    );
    Ok(patterns)
}

pub fn init_default_patterns(target: &Path) -> Result<()> {
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            target.display()
        );
    }

    fs::write(target, DEFAULT_PATTERNS)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Created {} with default patterns", target.display());

    Ok(())
}

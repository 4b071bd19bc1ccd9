use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl ContentSource {
    /// `-` reads stdin, an existing path is read as a file, anything else is
    /// the content itself.
    pub fn resolve(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            return ContentSource::Stdin;
        }
        let path = Path::new(arg);
        if path.exists() {
            ContentSource::File(path.to_path_buf())
        } else {
            debug!(action = "resolve", component = "content_source", "No such path, treating argument as literal text");
            ContentSource::Literal(arg.to_string())
        }
    }

    pub fn read(self) -> Result<String> {
        self.read_with(io::stdin().lock())
    }

    pub fn read_with<R: Read>(self, mut stdin: R) -> Result<String> {
        let content = match self {
            ContentSource::Stdin => {
                let mut bytes = Vec::new();
                stdin
                    .read_to_end(&mut bytes)
                    .context("Failed to read content from stdin")?;
                info!(action = "read", component = "content_source", source = "stdin", byte_count = bytes.len(), "Read content");
                decode_ignoring_errors(&bytes)
            }
            ContentSource::File(path) => {
                let bytes = fs::read(&path)
                    .with_context(|| format!("Failed to read content file {:?}", path))?;
                info!(action = "read", component = "content_source", source = "file", file_path = ?path, byte_count = bytes.len(), "Read content");
                decode_ignoring_errors(&bytes)
            }
            ContentSource::Literal(text) => text,
        };
        Ok(content)
    }
}

/// Decodes UTF-8, dropping invalid byte sequences.
pub fn decode_ignoring_errors(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Splits `--keywords` on commas and trims each entry. An absent or empty
/// flag means no keyword analysis.
pub fn parse_keywords(raw: Option<&str>) -> Option<Vec<String>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| s.split(',').map(|kw| kw.trim().to_string()).collect())
}

//! Line-delimited token file source.

use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::domain::ApiToken;
use crate::port::outbound::tokens::TokenSource;

/// Token source reading a line-delimited file on every load.
///
/// Reading per invocation (instead of once at startup) lets the operator
/// edit the file while the relay is running.
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file backing this source.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenSource for FileTokenSource {
    fn load(&self) -> Vec<ApiToken> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => parse_tokens(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Token file not found");
                Vec::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to read token file");
                Vec::new()
            }
        }
    }
}

/// Parse a line-delimited token list: one token per line, whitespace
/// trimmed, blank lines skipped. Line order defines account numbering.
#[must_use]
pub fn parse_tokens(content: &str) -> Vec<ApiToken> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ApiToken::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let tokens = parse_tokens("alpha\n\n  beta  \n\t\ngamma\n");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].as_str(), "alpha");
        assert_eq!(tokens[1].as_str(), "beta");
        assert_eq!(tokens[2].as_str(), "gamma");
    }

    #[test]
    fn parse_preserves_line_order() {
        let tokens = parse_tokens("first\nsecond\nthird");
        let raw: Vec<&str> = tokens.iter().map(ApiToken::as_str).collect();
        assert_eq!(raw, vec!["first", "second", "third"]);
    }

    #[test]
    fn parse_empty_content_yields_no_tokens() {
        assert!(parse_tokens("").is_empty());
        assert!(parse_tokens("\n\n  \n").is_empty());
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileTokenSource::new(dir.path().join("absent.txt"));

        assert!(source.load().is_empty());
    }

    #[test]
    fn load_reads_tokens_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.txt");
        std::fs::write(&path, "one\ntwo\n").unwrap();

        let source = FileTokenSource::new(path);
        let tokens = source.load();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].as_str(), "one");
    }
}

//! Line canonicalization and interpreter detection.

use regex::Regex;
use std::sync::LazyLock;

static RE_SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  +").unwrap());

// Shebang shape: optional `env` trampoline, optional path, interpreter name.
static RE_SHEBANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#! ?(?:/usr/bin/env +)?(?:\S*/)?(\S+)").unwrap());

/// Interpreter dialects recognized for the fenced-code language tag.
const DIALECTS: &[&str] = &["bash", "sh", "zsh"];

/// Fallback tag when the shebang names anything else, or is absent.
const DEFAULT_DIALECT: &str = "bash";

/// Canonicalizes raw input lines and remembers the file's interpreter tag,
/// detected from a first-line shebang.
#[derive(Debug)]
pub struct Normalizer {
    dialect: &'static str,
    seen_first: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Normalizer {
            dialect: DEFAULT_DIALECT,
            seen_first: false,
        }
    }

    /// Tabs become single spaces, interior space runs collapse to one, and
    /// both ends are trimmed. The first line is also inspected for a shebang.
    pub fn normalize(&mut self, raw: &str) -> String {
        let expanded = raw.replace('\t', " ");
        let line = RE_SPACE_RUNS.replace_all(&expanded, " ").trim().to_string();

        if !self.seen_first {
            self.seen_first = true;
            if let Some(caps) = RE_SHEBANG.captures(&line) {
                let name = caps.get(1).map_or("", |m| m.as_str());
                if let Some(idx) = DIALECTS.iter().position(|d| *d == name) {
                    self.dialect = DIALECTS[idx];
                }
            }
        }

        line
    }

    /// Language tag for fenced code blocks, fixed after the first line.
    pub fn dialect(&self) -> &'static str {
        self.dialect
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

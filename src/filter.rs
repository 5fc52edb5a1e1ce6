//! Test-name filtering for --filter expressions
//!
//! Patterns are regular expressions matched anywhere in the test name
//! (anchor with `^`/`$` for exact matches).

use anyhow::{Context, Result};
use regex::Regex;

/// Filter that determines which test series are analysed
#[derive(Debug, Clone)]
pub struct TestFilter {
    /// Pattern to match (None = all tests)
    pattern: Option<Regex>,
}

impl TestFilter {
    /// Create a filter that includes all tests
    pub fn all() -> Self {
        Self { pattern: None }
    }

    /// Parse a regex pattern like `^integration::` or `Bench\.(read|write)`
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid test filter pattern: {}", pattern))?;
        Ok(Self {
            pattern: Some(regex),
        })
    }

    /// Check if a test should be analysed
    pub fn matches(&self, test_name: &str) -> bool {
        match &self.pattern {
            None => true,
            Some(regex) => regex.is_match(test_name),
        }
    }
}

impl Default for TestFilter {
    fn default() -> Self {
        Self::all()
    }
}

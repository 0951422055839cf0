//! Alignment configuration.

use crate::align::{Aligner, FuzzyGlobal, FuzzyPerLine, Sequential};
use crate::error::{ConfigError, Result};
use std::fmt;

/// Default alignment policy
const DEFAULT_POLICY: AlignPolicy = AlignPolicy::FuzzyGlobal;

/// Default minimum coverage for global fuzzy matching (exclusive)
const DEFAULT_COVERAGE_THRESHOLD: f64 = crate::align::DEFAULT_COVERAGE_THRESHOLD;

/// Default minimum similarity for per-line matching (inclusive)
const DEFAULT_PER_LINE_THRESHOLD: f64 = crate::align::DEFAULT_PER_LINE_THRESHOLD;

/// Strategy used to pair segments with reference text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AlignPolicy {
    /// One reference line per segment, in order
    Sequential,
    /// Character-level matching of the whole transcript against the whole reference
    FuzzyGlobal,
    /// Closest reference line for each segment independently
    FuzzyPerLine,
}

impl fmt::Display for AlignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequential => "sequential",
            Self::FuzzyGlobal => "fuzzy-global",
            Self::FuzzyPerLine => "fuzzy-per-line",
        };
        write!(f, "{name}")
    }
}

/// Configuration for one alignment run.
#[derive(clap::Args, Clone, Debug, PartialEq)]
pub struct AlignConfig {
    /// Alignment policy
    #[arg(long, value_enum, default_value_t = DEFAULT_POLICY)]
    pub policy: AlignPolicy,

    /// Minimum coverage (exclusive) for fuzzy-global substitution
    #[arg(long, default_value_t = DEFAULT_COVERAGE_THRESHOLD)]
    pub coverage_threshold: f64,

    /// Minimum similarity ratio (inclusive) for fuzzy-per-line substitution
    #[arg(long, default_value_t = DEFAULT_PER_LINE_THRESHOLD)]
    pub per_line_threshold: f64,

    /// Language tag handed to the transcriber as-is
    #[arg(long)]
    pub language: Option<String>,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            policy: DEFAULT_POLICY,
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
            per_line_threshold: DEFAULT_PER_LINE_THRESHOLD,
            language: None,
        }
    }
}

impl AlignConfig {
    /// Create a configuration for `policy` with default thresholds.
    pub fn new(policy: AlignPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_threshold("coverage threshold", self.coverage_threshold)?;
        check_threshold("per-line threshold", self.per_line_threshold)?;
        Ok(())
    }

    /// Build the aligner for the configured policy.
    pub fn aligner(&self) -> Box<dyn Aligner> {
        match self.policy {
            AlignPolicy::Sequential => Box::new(Sequential),
            AlignPolicy::FuzzyGlobal => Box::new(FuzzyGlobal::new(self.coverage_threshold)),
            AlignPolicy::FuzzyPerLine => Box::new(FuzzyPerLine::new(self.per_line_threshold)),
        }
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value }.into())
    }
}

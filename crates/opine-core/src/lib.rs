//! Core library for opine.
//!
//! This crate provides keyword-driven analysis of free-text survey
//! feedback: a comment corpus abstraction, configurable keyword rule
//! sets, and independent analysis passes for sentiment, topical
//! categories, term frequency, and satisfaction ratings.
//!
//! # Modules
//!
//! - [`corpus`] - Comment corpus construction (filtering + normalization)
//! - [`rules`] - Keyword rule sets and compiled matchers
//! - [`analysis`] - The analysis passes and their report types
//! - [`lexicon`] - Built-in keyword lists, stop words, and the rating scale
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use opine_core::analysis::sentiment::analyze_sentiment;
//! use opine_core::rules::{MatchMode, SentimentMatcher, SentimentRules};
//! use opine_core::Corpus;
//!
//! let corpus = Corpus::from_responses(vec![
//!     Some("Great support, very helpful"),
//!     None,
//!     Some("Poor response time"),
//! ]);
//! let matcher =
//!     SentimentMatcher::compile(&SentimentRules::default(), MatchMode::Substring).unwrap();
//! let report = analyze_sentiment(&corpus, &matcher);
//! assert_eq!(report.positive, 1);
//! assert_eq!(report.negative, 1);
//! assert_eq!(report.total_comments, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod rules;
pub mod text;

pub use analysis::run_comment_analysis;
pub use config::{Config, ConfigLoader, LogLevel};
pub use corpus::Corpus;
pub use error::{ConfigError, ConfigResult, RulesError, RulesResult};
pub use rules::{CategoryRules, MatchMode, RankerOptions, SentimentRules};

/// Default maximum input size in bytes (5 MiB).
///
/// Applied by the CLI before reading an input file unless overridden or
/// disabled in configuration.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

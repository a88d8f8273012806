//! Dialectic Text
//!
//! Lexical heuristics behind argument evaluation and synthesis.
//!
//! # Overview
//!
//! Everything here is keyword and regex matching, deliberately approximate:
//! - **Keywords**: lowercase words longer than two characters minus a fixed stop-word list
//! - **Patterns**: fallacy, statistic, citation, hedge, negation, value and integration markers
//! - **Themes**: 10-50 character phrases bounded by punctuation or conjunctions
//!
//! [`LexicalAnalyzer`] bundles these behind the
//! [`TextAnalyzer`](dialectic_domain::TextAnalyzer) trait.
//!
//! # Example
//!
//! ```
//! use dialectic_domain::TextAnalyzer;
//! use dialectic_text::LexicalAnalyzer;
//!
//! let analyzer = LexicalAnalyzer::new();
//! let keywords = analyzer.keywords("The study of urban transit is important");
//! assert!(keywords.contains("urban"));
//! assert!(!keywords.contains("the"));
//! ```

#![warn(missing_docs)]

mod analyzer;
mod keywords;
mod patterns;
mod themes;

pub use analyzer::LexicalAnalyzer;
pub use keywords::{extract_keywords, overlap, STOP_WORDS};
pub use patterns::VALUE_TERMS;
pub use themes::{extract_themes, MAX_THEME_LEN, MIN_THEME_LEN};

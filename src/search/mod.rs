//! Keyword relevance search over the catalog.
//!
//! This module provides text normalization, tokenization, weighted field
//! scoring and the ranking pipeline that ties them together.

pub mod normalize;
pub mod scoring;
pub mod service;
pub mod tokenize;

pub use normalize::normalize;
pub use scoring::{QueryTerms, score, score_entry};
pub use service::search;
pub use tokenize::{TokenSet, tokenize};

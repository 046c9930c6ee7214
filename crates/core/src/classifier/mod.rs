//! Hybrid keyword/similarity classifier for source accounts.
//!
//! A run reads the company ledger and existing classifications, decides a
//! canonical account for every source account that is not a manual
//! override, and writes all decisions through one atomic repository call.

pub mod error;
pub mod keywords;
pub mod matcher;
pub mod service;
pub mod similarity;


pub use error::ClassificationError;
pub use keywords::{KeywordMatch, KeywordRule, KeywordTable};
pub use matcher::{MatchBasis, MatchDecision, Matcher};
pub use service::{ClassificationDetail, ClassificationSummary, ClassifierService};
pub use similarity::{hint_matches, similarity_ratio};

//! Mapping store boundary: classifications of source accounts.
//!
//! Each company holds at most one classification per source account. Auto
//! rows are replaced in place by re-runs; manual rows are only changed by
//! another manual override.

pub mod error;
pub mod repository;
pub mod service;
pub mod types;

pub use error::MappingError;
pub use repository::ClassificationRepository;
pub use service::MappingService;
pub use types::{
    Classification, ClassificationDraft, MappingOrigin, MappingView, RunOutcome, SourceKey,
};

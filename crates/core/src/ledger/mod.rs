//! Trial-balance ledger intake.
//!
//! This module turns the cleaned record list supplied by the file parser
//! into immutable ledger entries:
//! - Row normalization (trimming, empty rows, default balance)
//! - Rejection of rows with negative amounts
//! - Deduplication by account code, or name when the code is empty
//! - Repository boundary for entry persistence

pub mod entry;
pub mod error;
pub mod repository;
pub mod service;
pub mod validation;


pub use entry::{LedgerEntry, LedgerRecord};
pub use error::LedgerError;
pub use repository::LedgerRepository;
pub use service::{IngestReport, IntakeService};
pub use validation::{NormalizedLedger, RowRejection, normalize_records};

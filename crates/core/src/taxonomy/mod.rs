//! Master taxonomy of canonical IFRS accounts.
//!
//! The catalogue is static reference data. It is loaded once through
//! [`TaxonomyService::initialize`] and read-only afterwards.

pub mod catalogue;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;

pub use catalogue::{Taxonomy, TaxonomySource};
pub use error::TaxonomyError;
pub use repository::TaxonomyRepository;
pub use service::{TaxonomyLoad, TaxonomyService, load_taxonomy};
pub use types::{CanonicalAccount, CanonicalAccountRecord, Category, NormalBalance, sub_category};

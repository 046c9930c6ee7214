//! Repository trait implementations for [`crate::InMemoryStore`].

mod classification;
mod ledger;
mod taxonomy;

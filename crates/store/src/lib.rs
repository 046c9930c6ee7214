//! In-memory storage layer for Finstat.
//!
//! This crate provides:
//! - [`InMemoryStore`], one value implementing every repository trait
//! - Per-company write scopes so classification runs never interleave
//! - All-or-nothing application of classification runs

pub mod repositories;
mod store;

pub use store::InMemoryStore;

//! Shared test utilities for the cms-manager workspace.
//!
//! This crate provides standardised test doubles and fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only —
//! never published.
//!
//! # Modules
//!
//! - [`memory`] — fully functional in-memory [`cms_store::ContentBackend`]
//! - [`failing`] — wrapper backend that injects transient failures
//! - [`fixtures`] — document body builders for each category

pub mod failing;
pub mod fixtures;
pub mod memory;

pub use failing::FailingBackend;
pub use memory::MemoryBackend;

//! Shared test utilities for the policy equivalence workspace.
//!
//! This crate provides policy document fixtures and a scratch directory
//! builder so crate test suites do not each carry their own copies. It is a
//! dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`fixtures`] — API Management style policy documents
//! - [`dir`] — [`PolicyDir`] for tests that read documents from disk

pub mod dir;
pub mod fixtures;

pub use dir::PolicyDir;

//! Infrastructure layer for external integrations.
//!
//! Implements the country source contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`directory`] - HTTP and in-memory country sources

pub mod directory;

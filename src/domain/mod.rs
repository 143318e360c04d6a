//! Domain layer: form data, rules and the country source contract.
//!
//! # Architecture
//!
//! - [`entities`] - Drafts, country records and validation outcomes
//! - [`validation`] - The form rules as a pure function over a draft
//! - [`repositories`] - Country source trait implemented by infrastructure
//!
//! Nothing here performs I/O; the directory loader and HTTP client live in
//! [`crate::application`] and [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod validation;

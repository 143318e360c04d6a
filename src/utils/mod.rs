//! Utility functions shared by the HTTP layers and the CLI.
//!
//! - [`form_input`] - Parsing of raw form values into draft fields

pub mod form_input;

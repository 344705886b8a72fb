//! Error types and error handling for the recognizer.
//!
//! This module defines the error types produced while tokenizing and
//! parsing a candidate program. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntactic phases
//! - Error naming and tip functionality used by the diagnostic renderer

pub mod errors;

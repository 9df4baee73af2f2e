//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod envelope;

pub use envelope::*;

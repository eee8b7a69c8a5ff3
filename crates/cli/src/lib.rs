//! Terminal rendering for the catalog search CLI
//!
//! Provides shared CLI functionality:
//! - Result pages and suggestion lists
//! - Spinners for remote lookups
//! - Status messages

#![warn(missing_docs)]

pub mod output;
pub mod progress;

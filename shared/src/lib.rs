//! Shared types for the Homebase config console and its backend
//!
//! This crate contains the wire contract of the `/config` REST surface:
//! - Managed telegraf input entries and their targeting metadata
//! - Create definitions (regional and tag-assigned) and their responses
//! - Structured input rendering and the example template catalog

pub mod configs;
pub mod structured;
pub mod templates;

pub use configs::*;
pub use structured::*;
pub use templates::*;

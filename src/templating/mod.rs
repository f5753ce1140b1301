//! Render-time text expansion.
//!
//! - [`includes`] - Recursive, cycle-safe `<html-include>` expansion

pub mod includes;

pub use includes::{IncludeResolver, ResolutionContext, resolve_includes};

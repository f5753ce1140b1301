//! Core types shared across sissi.
//!
//! - [`error`] - The [`SissiError`] type for failures outside the graph/include core

pub mod error;

pub use error::SissiError;

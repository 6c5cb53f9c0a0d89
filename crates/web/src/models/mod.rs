//! Domain models for the web crate.

pub mod cafe;

pub use cafe::{Cafe, CafeDraft, ColumnValue};

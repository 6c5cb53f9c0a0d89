//! Cafe Registry Core - Shared types library.
//!
//! This crate provides the domain types shared between the web application
//! and its tests:
//!
//! - [`types::CafeId`] - type-safe row identifier
//! - [`types::SeatRange`] - the fixed seating-capacity buckets
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database trait implementations are gated behind the `sqlite` feature so
//! the crate stays dependency-free for consumers that only need the types.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

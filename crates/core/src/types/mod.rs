//! Core types for the cafe registry.

pub mod id;
pub mod seats;

pub use id::CafeId;
pub use seats::{SeatRange, SeatRangeError};

//! Cafe Registry web application library.
//!
//! This crate provides the application as a library, allowing the router to
//! be driven directly from integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod forms;
pub mod models;
pub mod routes;
pub mod state;

//! HTTP route handlers for the cafe registry.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Landing page
//! GET  /cafes         - List every cafe
//! GET  /add           - Empty cafe form
//! POST /add           - Create a cafe (303 to /cafes on success)
//! GET  /update/{id}   - Form pre-filled from the cafe
//! POST /update/{id}   - Overwrite the cafe (303 to /cafes on success)
//! GET  /delete/{id}   - Delete the cafe, 303 to /cafes
//! ```
//!
//! Deletion stays on GET so the list page can link to it directly. That
//! makes it an unsafe method on a safe verb; see DESIGN.md before changing
//! the verb, the list template links here.

pub mod cafes;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the cafe CRUD routes router.
pub fn cafe_routes() -> Router<AppState> {
    Router::new()
        .route("/cafes", get(cafes::list))
        .route("/add", get(cafes::add_page).post(cafes::add))
        .route(
            "/update/{id}",
            get(cafes::update_page).post(cafes::update),
        )
        .route("/delete/{id}", get(cafes::delete))
}

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(cafe_routes())
}

//! Cafe CRUD route handlers.
//!
//! Each handler is a stateless single pass: validate (where a form is
//! involved), call the repository, respond with a redirect or a rendered
//! page. There is no session state and no multi-step workflow.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use cafe_registry_core::CafeId;

use crate::db::CafeRepository;
use crate::error::AppError;
use crate::filters;
use crate::forms::{CafeForm, CafeFormView};
use crate::models::ColumnValue;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// List page template: one ordered column -> value row per cafe.
#[derive(Template, WebTemplate)]
#[template(path = "cafes.html")]
pub struct CafesTemplate {
    pub columns: &'static [&'static str],
    pub cafes: Vec<CafeRow>,
}

/// One cafe of the list page.
pub struct CafeRow {
    pub id: CafeId,
    pub cells: Vec<ColumnValue>,
}

/// Shared add/update form page template.
#[derive(Template, WebTemplate)]
#[template(path = "cafe_form.html")]
pub struct CafeFormTemplate {
    pub title: &'static str,
    pub action: String,
    pub form: CafeFormView,
}

const ADD_TITLE: &str = "Add New Cafe";
const UPDATE_TITLE: &str = "Update Cafe";

// =============================================================================
// List
// =============================================================================

/// List every cafe.
///
/// GET /cafes
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<CafesTemplate, AppError> {
    let repo = CafeRepository::new(state.pool());
    let cafes = repo
        .list_all()
        .await?
        .into_iter()
        .map(|cafe| CafeRow {
            id: cafe.id,
            cells: cafe.to_row(),
        })
        .collect();

    Ok(CafesTemplate {
        columns: &crate::models::Cafe::COLUMNS,
        cafes,
    })
}

// =============================================================================
// Add
// =============================================================================

/// Render the empty add form.
///
/// GET /add
#[instrument]
pub async fn add_page() -> CafeFormTemplate {
    CafeFormTemplate {
        title: ADD_TITLE,
        action: "/add".to_string(),
        form: CafeFormView::empty(),
    }
}

/// Create a cafe from a form submission.
///
/// POST /add
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CafeForm>,
) -> Result<Response, AppError> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(CafeFormTemplate {
                title: ADD_TITLE,
                action: "/add".to_string(),
                form: CafeFormView::from_submission(&form, errors),
            }
            .into_response());
        }
    };

    let repo = CafeRepository::new(state.pool());
    let id = repo.insert(&draft).await?;
    tracing::info!(%id, name = %draft.name, "Cafe created");

    Ok(Redirect::to("/cafes").into_response())
}

// =============================================================================
// Update
// =============================================================================

/// Render the update form pre-filled from the stored cafe.
///
/// GET /update/{id}
#[instrument(skip(state))]
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<CafeFormTemplate, AppError> {
    let id = CafeId::new(id);
    let repo = CafeRepository::new(state.pool());
    let cafe = repo
        .get_by_id(id)
        .await?
        .ok_or(AppError::CafeNotFound(id))?;

    Ok(CafeFormTemplate {
        title: UPDATE_TITLE,
        action: format!("/update/{id}"),
        form: CafeFormView::from_cafe(&cafe),
    })
}

/// Overwrite all mutable fields of a cafe from a form submission.
///
/// POST /update/{id}
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CafeForm>,
) -> Result<Response, AppError> {
    let id = CafeId::new(id);

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            // Re-render with the target id preserved in the action
            return Ok(CafeFormTemplate {
                title: UPDATE_TITLE,
                action: format!("/update/{id}"),
                form: CafeFormView::from_submission(&form, errors),
            }
            .into_response());
        }
    };

    let repo = CafeRepository::new(state.pool());
    // Confirm existence before mutating; a missing id is the client's error
    if repo.get_by_id(id).await?.is_none() {
        return Err(AppError::CafeNotFound(id));
    }
    repo.update(id, &draft).await?;
    tracing::info!(%id, name = %draft.name, "Cafe updated");

    Ok(Redirect::to("/cafes").into_response())
}

// =============================================================================
// Delete
// =============================================================================

/// Delete a cafe and return to the list.
///
/// GET /delete/{id}
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let id = CafeId::new(id);
    let repo = CafeRepository::new(state.pool());

    match repo.delete(id).await {
        Ok(()) => {
            tracing::info!(%id, "Cafe deleted");
            Ok(Redirect::to("/cafes"))
        }
        Err(crate::db::RepositoryError::NotFound) => Err(AppError::CafeNotFound(id)),
        Err(other) => Err(other.into()),
    }
}

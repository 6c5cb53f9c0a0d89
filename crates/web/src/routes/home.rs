//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;

/// Landing page template. Static content only.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Display the landing page.
///
/// GET /
#[instrument]
pub async fn home() -> HomeTemplate {
    HomeTemplate
}

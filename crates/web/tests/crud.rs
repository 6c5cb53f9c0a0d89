//! End-to-end CRUD tests driving the router over an in-memory database.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use cafe_registry_core::{CafeId, SeatRange};
use cafe_registry_web::config::AppConfig;
use cafe_registry_web::db::CafeRepository;
use cafe_registry_web::models::{Cafe, CafeDraft};
use cafe_registry_web::routes;
use cafe_registry_web::state::AppState;

/// Build the application and its pool over a fresh in-memory database.
///
/// A single connection keeps every query on the same in-memory database
/// (separate sqlite connections would each get their own).
async fn setup() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("schema");

    let config = AppConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
    };

    let app = routes::routes().with_state(AppState::new(config, pool.clone()));
    (app, pool)
}

fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(pairs)))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// A complete, valid submission for "Velvet Bean".
fn velvet_bean() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Velvet Bean"),
        ("map_url", "https://maps.example.com/velvet-bean"),
        ("location", "Camden"),
        ("img_url", "https://img.example.com/velvet-bean.jpg"),
        ("seats", "10-20"),
        ("has_toilet", "on"),
        ("has_wifi", "on"),
        ("coffee_price", "\u{a3}2.90"),
    ]
}

fn draft(name: &str) -> CafeDraft {
    CafeDraft {
        name: name.to_string(),
        map_url: format!("https://maps.example.com/{name}"),
        img_url: format!("https://img.example.com/{name}.jpg"),
        location: "Hackney".to_string(),
        seats: SeatRange::UpToTen,
        has_toilet: true,
        has_wifi: false,
        has_sockets: true,
        can_take_calls: false,
        coffee_price: "\u{a3}2.50".to_string(),
    }
}

async fn all_cafes(pool: &SqlitePool) -> Vec<Cafe> {
    CafeRepository::new(pool).list_all().await.unwrap()
}

#[tokio::test]
async fn create_adds_exactly_one_row_with_values_intact() {
    let (app, pool) = setup().await;

    let response = post_form(&app, "/add", &velvet_bean()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/cafes"));

    let cafes = all_cafes(&pool).await;
    assert_eq!(cafes.len(), 1);
    let cafe = &cafes[0];
    assert_eq!(cafe.name, "Velvet Bean");
    assert_eq!(cafe.map_url, "https://maps.example.com/velvet-bean");
    assert_eq!(cafe.img_url, "https://img.example.com/velvet-bean.jpg");
    assert_eq!(cafe.location, "Camden");
    assert_eq!(cafe.seats, SeatRange::TenToTwenty);
    assert!(cafe.has_toilet);
    assert!(cafe.has_wifi);
    assert!(!cafe.has_sockets);
    assert!(!cafe.can_take_calls);
    assert_eq!(cafe.coffee_price.as_deref(), Some("\u{a3}2.90"));

    // The list view renders the new row
    let html = body_text(get(&app, "/cafes").await).await;
    assert!(html.contains("Velvet Bean"));
    assert!(html.contains("Camden"));
    assert!(html.contains("10-20"));
    assert!(html.contains("\u{a3}2.90"));
}

#[tokio::test]
async fn create_with_missing_required_field_redisplays_form() {
    let (app, pool) = setup().await;

    let mut pairs = velvet_bean();
    pairs.retain(|(k, _)| *k != "name");

    let response = post_form(&app, "/add", &pairs).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("This field is required."));
    // Submitted values are preserved in the re-rendered form
    assert!(html.contains("Camden"));

    assert!(all_cafes(&pool).await.is_empty());
}

#[tokio::test]
async fn create_with_malformed_map_url_is_rejected() {
    let (app, pool) = setup().await;

    let pairs: Vec<_> = velvet_bean()
        .into_iter()
        .map(|(k, v)| if k == "map_url" { (k, "not-a-url") } else { (k, v) })
        .collect();

    let response = post_form(&app, "/add", &pairs).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Invalid URL."));

    assert!(all_cafes(&pool).await.is_empty());
}

#[tokio::test]
async fn duplicate_name_is_a_conflict_and_adds_no_row() {
    let (app, pool) = setup().await;

    let first = post_form(&app, "/add", &velvet_bean()).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = post_form(&app, "/add", &velvet_bean()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    assert_eq!(all_cafes(&pool).await.len(), 1);
}

#[tokio::test]
async fn update_seats_changes_only_that_column() {
    let (app, pool) = setup().await;
    let repo = CafeRepository::new(&pool);
    let id = repo.insert(&draft("quiet-corner")).await.unwrap();
    let before = repo.get_by_id(id).await.unwrap().unwrap();

    // Resubmit the stored values with only the seats bucket changed
    let response = post_form(
        &app,
        &format!("/update/{id}"),
        &[
            ("name", before.name.as_str()),
            ("map_url", before.map_url.as_str()),
            ("location", before.location.as_str()),
            ("img_url", before.img_url.as_str()),
            ("seats", "20-30"),
            ("has_toilet", "on"),
            ("has_sockets", "on"),
            ("coffee_price", "\u{a3}2.50"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/cafes"));

    let after = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(after.seats, SeatRange::TwentyToThirty);
    assert_eq!(
        Cafe {
            seats: before.seats,
            ..after
        },
        before
    );
}

#[tokio::test]
async fn update_get_prefills_the_form() {
    let (app, pool) = setup().await;
    let repo = CafeRepository::new(&pool);
    let id = repo.insert(&draft("prefill-me")).await.unwrap();

    let response = get(&app, &format!("/update/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Update Cafe"));
    assert!(html.contains("prefill-me"));
    assert!(html.contains("Hackney"));
}

#[tokio::test]
async fn update_invalid_submission_redisplays_with_target_id() {
    let (app, pool) = setup().await;
    let repo = CafeRepository::new(&pool);
    let id = repo.insert(&draft("still-here")).await.unwrap();

    let response = post_form(
        &app,
        &format!("/update/{id}"),
        &[("name", ""), ("seats", "20-30")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("This field is required."));
    assert!(html.contains(&format!("/update/{id}")));

    // Nothing was written
    let stored = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "still-here");
}

#[tokio::test]
async fn delete_removes_exactly_that_row() {
    let (app, pool) = setup().await;
    let repo = CafeRepository::new(&pool);
    let first = repo.insert(&draft("doomed")).await.unwrap();
    let second = repo.insert(&draft("survivor")).await.unwrap();

    let response = get(&app, &format!("/delete/{first}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/cafes"));

    let remaining = all_cafes(&pool).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);
    assert_eq!(remaining[0].name, "survivor");
}

#[tokio::test]
async fn missing_id_is_not_found() {
    let (app, _pool) = setup().await;
    let missing = CafeId::new(999);

    let update_page = get(&app, &format!("/update/{missing}")).await;
    assert_eq!(update_page.status(), StatusCode::NOT_FOUND);

    let update = post_form(&app, &format!("/update/{missing}"), &velvet_bean()).await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = get(&app, &format!("/delete/{missing}")).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checkboxes_precheck_on_render_but_absence_means_false_on_submit() {
    let (app, pool) = setup().await;

    // The empty add form pre-checks all four amenity flags
    let html = body_text(get(&app, "/add").await).await;
    assert_eq!(html.matches(" checked").count(), 4);

    // A submission with none of the checkbox controls stores false for all
    let pairs: Vec<_> = velvet_bean()
        .into_iter()
        .filter(|(k, _)| *k != "has_toilet" && *k != "has_wifi")
        .collect();
    let response = post_form(&app, "/add", &pairs).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cafes = all_cafes(&pool).await;
    assert_eq!(cafes.len(), 1);
    assert!(!cafes[0].has_toilet);
    assert!(!cafes[0].has_wifi);
    assert!(!cafes[0].has_sockets);
    assert!(!cafes[0].can_take_calls);
}

#[tokio::test]
async fn list_orders_rows_by_insertion() {
    let (app, pool) = setup().await;
    let repo = CafeRepository::new(&pool);
    repo.insert(&draft("first")).await.unwrap();
    repo.insert(&draft("second")).await.unwrap();
    repo.insert(&draft("third")).await.unwrap();

    let names: Vec<String> = all_cafes(&pool)
        .await
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);

    let html = body_text(get(&app, "/cafes").await).await;
    let first = html.find("first").unwrap();
    let third = html.find("third").unwrap();
    assert!(first < third);
}

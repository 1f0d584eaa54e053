use actix_web::{App, http::StatusCode, test, web};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use serde_json::Value;

use advocate_directory::repository::StorageBackend;
use advocate_directory::routes::advocates::{list_advocates, seed_advocates};
use advocate_directory::seed;

mod common;

macro_rules! spawn_app {
    ($backend:expr) => {
        test::init_service(
            App::new().app_data(web::Data::new($backend)).service(
                web::scope("/api")
                    .service(list_advocates)
                    .service(seed_advocates),
            ),
        )
        .await
    };
}

#[actix_web::test]
async fn listing_returns_the_full_envelope() {
    let app = spawn_app!(StorageBackend::Static(seed::advocates()));

    let req = test::TestRequest::get().uri("/api/advocates").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], seed::advocates().len());
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 20);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), seed::advocates().len());
    // Static records carry no ids.
    assert!(data.iter().all(|record| record.get("id").is_none()));
    assert_eq!(data[0]["firstName"], "John");
    assert!(data[0]["specialties"].is_array());
}

#[actix_web::test]
async fn search_narrows_and_echoes_pagination() {
    let app = spawn_app!(StorageBackend::Static(seed::advocates()));

    let req = test::TestRequest::get()
        .uri("/api/advocates?q=trauma&page=1&pageSize=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 2);
    assert_eq!(body["pageSize"], 5);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Jane", "Chris"]);
}

#[actix_web::test]
async fn malformed_pagination_is_clamped_not_rejected() {
    let app = spawn_app!(StorageBackend::Static(seed::advocates()));

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=abc&pageSize=500")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 50);
}

#[actix_web::test]
async fn window_past_the_end_is_empty_with_full_total() {
    let app = spawn_app!(StorageBackend::Static(seed::advocates()));

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=5&pageSize=4")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], seed::advocates().len());
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn seed_is_skipped_without_a_database() {
    let app = spawn_app!(StorageBackend::Static(seed::advocates()));

    let req = test::TestRequest::post().uri("/api/seed").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("skipping seed"));
}

#[actix_web::test]
async fn seed_then_search_against_the_database() {
    let test_db = common::TestDb::new("test_routes_persistent.db");
    let app = spawn_app!(StorageBackend::Persistent(test_db.pool().clone()));

    let req = test::TestRequest::post().uri("/api/seed").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["inserted"], seed::advocates().len());

    let req = test::TestRequest::get()
        .uri("/api/advocates?q=megan")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    let record = &body["data"][0];
    assert_eq!(record["firstName"], "Megan");
    // Persisted records carry ids.
    assert!(record["id"].is_number());
}

#[actix_web::test]
async fn backend_failure_yields_an_opaque_server_error() {
    // A reachable database without the advocates table: every query fails.
    let dir = tempfile::tempdir().unwrap();
    let database_url = dir.path().join("empty.db").to_string_lossy().into_owned();
    let manager = ConnectionManager::<SqliteConnection>::new(&database_url);
    let pool = Pool::builder().build(manager).unwrap();

    let app = spawn_app!(StorageBackend::Persistent(pool));

    let req = test::TestRequest::get().uri("/api/advocates").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

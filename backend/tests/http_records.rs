//! End-to-end request tests over the full route table and in-memory stores.
//!
//! The app is assembled the way the server assembles it, minus the
//! Diesel-backed state and the health probes.

use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test as actix_test, web};
use backend::Trace;
use backend::domain::TRACE_ID_HEADER;
use backend::inbound::http::error::unmatched_route;
use backend::inbound::http::router;
use backend::middleware::permissive_cors;
use backend::test_support::InMemoryBackend;
use rstest::rstest;
use serde_json::{Value, json};

macro_rules! init_app {
    ($backend:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new($backend.http_state()))
                .wrap(Trace)
                .wrap(permissive_cors())
                .configure(router::configure)
                .default_service(web::to(unmatched_route)),
        )
        .await
    };
}

fn rice() -> Value {
    json!({"name": "Rice", "photo": null, "categories": "Grain", "type": "Dry"})
}

fn porridge() -> Value {
    json!({
        "name": "Porridge",
        "calories": 310,
        "fatsValue": 6.5,
        "carboValue": 54,
        "protValue": 11,
        "prepareTime": 10
    })
}

#[actix_web::test]
async fn pantry_item_round_trips_with_its_type_key() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/pantry")
            .set_json(rice())
            .to_request(),
    )
    .await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Rice", "photo": null, "categories": "Grain", "type": "Dry"})
    );

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/pantry").to_request(),
    )
    .await;
    assert_eq!(listed, json!([created]));
}

#[actix_web::test]
async fn pantry_update_touches_only_submitted_fields() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/pantry")
            .set_json(json!({"name": "Oats", "photo": "oats.png", "categories": "Grain", "type": "Dry"}))
            .to_request(),
    )
    .await;

    let renamed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri("/pantry/1")
            .set_json(json!({"name": "Rolled oats"}))
            .to_request(),
    )
    .await;
    assert_eq!(renamed["name"], "Rolled oats");
    assert_eq!(renamed["photo"], "oats.png");
    assert_eq!(renamed["type"], "Dry");

    let cleared: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri("/pantry/1")
            .set_json(json!({"photo": null}))
            .to_request(),
    )
    .await;
    assert_eq!(cleared["photo"], Value::Null);
    assert_eq!(cleared["name"], "Rolled oats");
}

#[actix_web::test]
async fn deleted_pantry_items_cannot_be_updated_or_deleted_again() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/pantry")
            .set_json(rice())
            .to_request(),
    )
    .await;

    let deleted: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::delete().uri("/pantry/1").to_request(),
    )
    .await;
    assert_eq!(deleted, json!({"message": "Pantry item deleted"}));

    for req in [
        actix_test::TestRequest::delete().uri("/pantry/1").to_request(),
        actix_test::TestRequest::put()
            .uri("/pantry/1")
            .set_json(json!({"name": "Brown rice"}))
            .to_request(),
    ] {
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"error": "pantry item 1 not found"}));
    }
}

#[actix_web::test]
async fn recipes_keep_camel_case_keys_across_create_update_and_list() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/recipes")
            .set_json(porridge())
            .to_request(),
    )
    .await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["fatsValue"], 6.5);
    assert_eq!(created["prepareTime"], 10);

    let updated: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri("/recipes/1")
            .set_json(json!({"prepareTime": 15}))
            .to_request(),
    )
    .await;
    assert_eq!(updated["prepareTime"], 15);
    assert_eq!(updated["name"], "Porridge");
    assert_eq!(updated["calories"], 310.0);

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/recipes").to_request(),
    )
    .await;
    assert_eq!(listed, json!([updated]));
}

#[actix_web::test]
async fn activities_accept_free_form_bodies() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/activities")
            .set_json(json!({"name": "Walk", "tags": ["outdoor"], "effort": {"level": 2}}))
            .to_request(),
    )
    .await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["effort"], json!({"level": 2}));

    let updated: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri("/activities/1")
            .set_json(json!({"tags": []}))
            .to_request(),
    )
    .await;
    assert_eq!(
        updated,
        json!({"id": 1, "name": "Walk", "tags": [], "effort": {"level": 2}})
    );
}

#[actix_web::test]
async fn registration_then_login_round_trip() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);
    let registration = json!({
        "name": "Grace",
        "email": "grace@example.com",
        "password": "hopper",
        "photo": "grace.png"
    });

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(&registration)
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(&registration)
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let login: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "grace@example.com", "password": "hopper"}))
            .to_request(),
    )
    .await;
    assert_eq!(login["user"]["name"], "Grace");
    assert!(login["user"].get("password").is_none());
}

#[rstest]
#[case(json!({"email": "grace@example.com", "password": "wrong"}))]
#[case(json!({"email": "nobody@example.com", "password": "hopper"}))]
#[actix_web::test]
async fn failed_logins_look_identical(#[case] credentials: Value) {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(json!({"name": "Grace", "email": "grace@example.com", "password": "hopper"}))
            .to_request(),
    )
    .await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/login")
            .set_json(credentials)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[rstest]
#[case("/activities")]
#[case("/recipes")]
#[case("/pantry")]
#[actix_web::test]
async fn store_outages_become_500_with_the_store_message(#[case] uri: &str) {
    let backend = InMemoryBackend::new();
    backend.activities.fail_with("connection reset");
    backend.recipes.fail_with("connection reset");
    backend.pantry.fail_with("connection reset");
    let app = init_app!(backend);

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
        .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.ends_with("connection reset"), "unexpected message {message}");
}

#[actix_web::test]
async fn cross_origin_requests_are_allowed_everywhere() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/recipes")
            .insert_header((header::ORIGIN, "https://kitchen.example"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    let preflight = actix_test::call_service(
        &app,
        actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/pantry/3")
            .insert_header((header::ORIGIN, "https://kitchen.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
            .to_request(),
    )
    .await;
    assert!(preflight.status().is_success());
    assert!(
        preflight
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[actix_web::test]
async fn bodies_that_are_not_json_are_rejected_before_reaching_a_store() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/pantry")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\": ")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body["error"].is_string());
    assert!(backend.pantry.rows().is_empty());
}

#[rstest]
#[case("/recipes", json!({"name": "Oats"}), "calories")]
#[case("/pantry", json!({"name": "Rice"}), "categories")]
#[case("/register", json!({"email": "grace@example.com"}), "name")]
#[actix_web::test]
async fn well_formed_bodies_missing_required_fields_fail_with_500(
    #[case] uri: &str,
    #[case] body: Value,
    #[case] column: &str,
) {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    let message = body["error"].as_str().expect("error message");
    assert!(
        message.contains(&format!("null value in column \"{column}\"")),
        "unexpected message {message}"
    );
}

#[actix_web::test]
async fn login_without_a_password_is_an_ordinary_mismatch() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "a@b.c"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[actix_web::test]
async fn duplicate_email_beats_an_unreadable_date_of_birth() {
    let backend = InMemoryBackend::new();
    let app = init_app!(backend);
    let mut registration = json!({"name": "Ada", "email": "ada@example.com", "password": "s3cret"});
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(&registration)
            .to_request(),
    )
    .await;

    registration["dateOfBirth"] = json!("not-a-date");
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(&registration)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "User already exists"}));
}

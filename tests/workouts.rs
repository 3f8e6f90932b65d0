use axum::{body::to_bytes, http::Request, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use workout_stats::{config::Config, routes, state::AppState};

fn app_with(max_packages: Option<&'static str>) -> Router {
    let config = Config::from_env_with(|key| match key {
        "MAX_PACKAGES" => max_packages.map(String::from),
        _ => None,
    });
    routes::router(AppState::new(config))
}

fn app() -> Router {
    app_with(None)
}

async fn post_workouts(app: Router, payload: Value) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/workouts")
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn workouts_returns_reports_in_input_order() {
    let (status, json) = post_workouts(
        app(),
        json!({
            "packages": [
                {"code": "SWM", "data": [720, 1, 80, 25, 40]},
                {"code": "RUN", "data": [15000, 1, 75]},
                {"code": "WLK", "data": [9000, 1, 75, 180]}
            ]
        }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::OK);
    let reports = json["reports"].as_array().expect("reports array");
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0]["activity_name"], "Swimming");
    assert_eq!(reports[1]["activity_name"], "Running");
    assert_eq!(reports[2]["activity_name"], "SportsWalking");

    let run_calories = reports[1]["calories_kcal"].as_f64().expect("calories");
    assert!((run_calories - 699.75).abs() < 1e-9);

    assert_eq!(
        reports[0]["message"],
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[tokio::test]
async fn workouts_rejects_unknown_code() {
    let (status, json) = post_workouts(
        app(),
        json!({
            "packages": [
                {"code": "RUN", "data": [15000, 1, 75]},
                {"code": "BIK", "data": [1, 1, 1]}
            ]
        }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Unknown activity code: BIK");
}

#[tokio::test]
async fn workouts_rejects_wrong_arity() {
    let (status, json) = post_workouts(
        app(),
        json!({"packages": [{"code": "WLK", "data": [9000, 1, 75]}]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Wrong number of fields for WLK (expected 4, got 3)"
    );
}

#[tokio::test]
async fn workouts_rejects_non_numeric_data() {
    let (status, json) = post_workouts(
        app(),
        json!({"packages": [{"code": "RUN", "data": ["abc", 1, 75]}]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().expect("error message");
    assert!(message.starts_with("Invalid request:"));
    assert!(message.contains("invalid type"));
}

#[tokio::test]
async fn workouts_rejects_zero_duration() {
    let (status, json) = post_workouts(
        app(),
        json!({"packages": [{"code": "RUN", "data": [15000, 0, 75]}]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .expect("error message")
        .contains("duration_hours"));
}

#[tokio::test]
async fn workouts_enforces_batch_limit() {
    let (status, _) = post_workouts(
        app_with(Some("1")),
        json!({
            "packages": [
                {"code": "RUN", "data": [15000, 1, 75]},
                {"code": "RUN", "data": [15000, 1, 75]}
            ]
        }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
}

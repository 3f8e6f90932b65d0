use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::types::workout::ActivityKind;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/activities", get(activities))
}

#[derive(Serialize)]
struct ActivityInfo {
    code: &'static str,
    name: &'static str,
    fields: &'static [&'static str],
}

#[derive(Serialize)]
struct ActivitiesResponse {
    activities: Vec<ActivityInfo>,
}

async fn activities() -> Json<ActivitiesResponse> {
    let activities = ActivityKind::ALL
        .iter()
        .map(|kind| ActivityInfo {
            code: kind.code(),
            name: kind.display_name(),
            fields: kind.fields(),
        })
        .collect();

    Json(ActivitiesResponse { activities })
}

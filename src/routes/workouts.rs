use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::{self, parse::Package};
use crate::state::AppState;
use crate::types::report::SummaryReport;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/workouts", post(workouts))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkoutsRequest {
    packages: Vec<Package>,
}

#[derive(Serialize)]
struct WorkoutsResponse {
    reports: Vec<ReportEntry>,
}

#[derive(Serialize)]
struct ReportEntry {
    #[serde(flatten)]
    report: SummaryReport,
    message: String,
}

async fn workouts(
    State(state): State<AppState>,
    payload: Result<Json<WorkoutsRequest>, JsonRejection>,
) -> Result<Json<WorkoutsResponse>, AppError> {
    let Json(request) = payload?;
    let max_packages = state.config().max_packages;
    if request.packages.len() > max_packages {
        return Err(AppError::BadRequest(format!(
            "Too many packages ({} > {})",
            request.packages.len(),
            max_packages
        )));
    }

    let reports = pipeline::run_packages(&request.packages)?;

    tracing::info!("Computed {} workout reports", reports.len());

    Ok(Json(WorkoutsResponse {
        reports: reports
            .into_iter()
            .map(|report| ReportEntry {
                message: report.render(),
                report,
            })
            .collect(),
    }))
}

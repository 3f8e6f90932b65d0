pub mod activities;
pub mod health;
pub mod workouts;

use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(activities::router())
        .merge(workouts::router())
        .with_state(state)
}

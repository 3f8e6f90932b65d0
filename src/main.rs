use std::path::Path;
use std::process::ExitCode;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_stats::config::Config;
use workout_stats::error::AppError;
use workout_stats::pipeline::{self, parse};
use workout_stats::routes;
use workout_stats::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for report lines.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_stats=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let arg = std::env::args().nth(1);

    let result = match arg.as_deref() {
        Some("serve") => serve(config).await,
        Some(path) => print_file(Path::new(path)),
        None => print_reports(&parse::default_packages()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Run aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_reports(packages: &[parse::Package]) -> Result<(), AppError> {
    for report in pipeline::run_packages(packages)? {
        println!("{}", report);
    }
    Ok(())
}

fn print_file(path: &Path) -> Result<(), AppError> {
    tracing::info!("Reading packages from {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let packages = parse::packages_from_json(&raw)?;
    print_reports(&packages)
}

async fn serve(config: Config) -> Result<(), AppError> {
    let addr = format!("0.0.0.0:{}", config.port);
    let body_limit = config.max_body_size;

    let app = routes::router(AppState::new(config))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("workout-stats listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Activities: GET http://{}/api/activities", addr);
    tracing::info!("Workouts: POST http://{}/api/workouts", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

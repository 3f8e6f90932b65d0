use crate::error::ProcessError;
use crate::types::report::SummaryReport;
use crate::types::workout::Workout;

pub fn build_report(workout: &Workout) -> Result<SummaryReport, ProcessError> {
    check_divisors(workout)?;

    let report = SummaryReport {
        activity_name: workout.kind().display_name().to_string(),
        duration_hours: workout.duration_hours(),
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh(),
        calories_kcal: workout.spent_calories_kcal(),
    };

    tracing::debug!(
        "Built {} report from {} actions at {} kg ({:.3} km, {:.3} kcal)",
        report.activity_name,
        workout.action_count(),
        workout.weight_kg(),
        report.distance_km,
        report.calories_kcal
    );

    Ok(report)
}

fn check_divisors(workout: &Workout) -> Result<(), ProcessError> {
    if workout.duration_hours() == 0.0 {
        return Err(ProcessError::DivisionByZero("duration_hours"));
    }
    if let Workout::SportsWalking(walk) = workout {
        if walk.height_cm == 0.0 {
            return Err(ProcessError::DivisionByZero("height_cm"));
        }
    }
    Ok(())
}

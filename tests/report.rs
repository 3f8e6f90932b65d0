use workout_stats::error::AppError;
use workout_stats::pipeline::{self, parse, parse::Package};

#[test]
fn default_packages_render_reference_lines() {
    let reports = pipeline::run_packages(&parse::default_packages()).expect("reports");
    let lines: Vec<String> = reports.iter().map(|r| r.render()).collect();

    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn first_failure_aborts_the_run() {
    let packages = vec![
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 0.0]),
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    let err = pipeline::run_packages(&packages).unwrap_err();
    assert!(matches!(err, AppError::Process(_)));
}

#[test]
fn package_file_decodes_and_runs() {
    let raw = r#"[{"code": "RUN", "data": [15000, 1.5, 75]}]"#;
    let packages = parse::packages_from_json(raw).expect("packages");
    assert_eq!(packages, vec![Package::new("RUN", &[15000.0, 1.5, 75.0])]);

    let reports = pipeline::run_packages(&packages).expect("reports");
    assert_eq!(reports.len(), 1);
    assert!(reports[0].render().contains("Длительность: 1.500 ч."));
    assert!(reports[0].render().contains("Ср. скорость: 6.500 км/ч"));
}

#[test]
fn malformed_package_file_is_bad_request() {
    let err = parse::packages_from_json(r#"[{"code": "RUN", "data": [15000, 1"#).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(msg) if msg.starts_with("Malformed package file")));
}

#[test]
fn non_numeric_package_data_is_bad_request() {
    let err = parse::packages_from_json(r#"[{"code": "RUN", "data": ["abc", 1, 75]}]"#)
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("invalid type")));
}

pub mod parse;
pub mod process;

use crate::error::AppError;
use crate::types::report::SummaryReport;
use parse::Package;

/// Runs every record in order. The first failing record aborts the run.
pub fn run_packages(packages: &[Package]) -> Result<Vec<SummaryReport>, AppError> {
    packages
        .iter()
        .enumerate()
        .map(|(idx, package)| {
            run_package(package).map_err(|err| {
                tracing::error!("Package #{} ({}) failed: {}", idx, package.code, err);
                err
            })
        })
        .collect()
}

fn run_package(package: &Package) -> Result<SummaryReport, AppError> {
    let workout = parse::read_package(&package.code, &package.data)?;
    Ok(process::build_report(&workout)?)
}

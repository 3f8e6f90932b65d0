pub mod report;
pub mod workout;

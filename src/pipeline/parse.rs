use serde::{Deserialize, Serialize};

use crate::error::{AppError, ParseError};
use crate::types::workout::{ActivityKind, Running, SportsWalking, Swimming, Workout};

/// One raw sensor record: an activity code and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }
}

/// The built-in records processed when no other input source is given.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Decodes a JSON array of packages, as read from a package file.
pub fn packages_from_json(raw: &str) -> Result<Vec<Package>, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::BadRequest(format!("Malformed package file: {}", e)))
}

pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, ParseError> {
    let kind =
        ActivityKind::from_code(code).ok_or_else(|| ParseError::UnknownCode(code.to_string()))?;

    if data.len() != kind.arity() {
        return Err(ParseError::Arity {
            code: code.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let fields = Fields { kind, data };
    let workout: Workout = match kind {
        ActivityKind::Running => Running::new(
            fields.count(0)?,
            fields.number(1)?,
            fields.number(2)?,
        )
        .into(),
        ActivityKind::SportsWalking => SportsWalking::new(
            fields.count(0)?,
            fields.number(1)?,
            fields.number(2)?,
            fields.number(3)?,
        )
        .into(),
        ActivityKind::Swimming => Swimming::new(
            fields.count(0)?,
            fields.number(1)?,
            fields.number(2)?,
            fields.number(3)?,
            fields.count(4)?,
        )
        .into(),
    };

    tracing::debug!("Read {} package into {}", code, kind.display_name());
    Ok(workout)
}

struct Fields<'a> {
    kind: ActivityKind,
    data: &'a [f64],
}

impl Fields<'_> {
    fn invalid(&self, idx: usize) -> ParseError {
        ParseError::InvalidField {
            code: self.kind.code().to_string(),
            field: self.kind.fields()[idx],
            value: self.data[idx],
        }
    }

    fn number(&self, idx: usize) -> Result<f64, ParseError> {
        let value = self.data[idx];
        if !value.is_finite() {
            return Err(self.invalid(idx));
        }
        Ok(value)
    }

    // Step, stroke and lap counts must be whole non-negative numbers.
    fn count(&self, idx: usize) -> Result<u32, ParseError> {
        let value = self.number(idx)?;
        if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(self.invalid(idx));
        }
        Ok(value as u32)
    }
}

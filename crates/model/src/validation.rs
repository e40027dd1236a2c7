//! Boundary checks for client supplied records.
//!
//! The database accepts any number for coordinates, scores and capacities, so
//! every record is checked here before it is written.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use utility::geo;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid input: {}", display_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn display_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Collects violations so that a client gets to see all of them at once.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(mut self, ok: bool, field: &'static str, message: impl Into<String>) -> Self {
        if !ok {
            self.violations.push(Violation {
                field,
                message: message.into(),
            });
        }
        self
    }

    pub fn not_blank(self, field: &'static str, value: &str) -> Self {
        self.check(!value.trim().is_empty(), field, "must not be blank")
    }

    pub fn coordinates(self, latitude: f64, longitude: f64) -> Self {
        self.check(
            geo::is_valid_latitude(latitude),
            "latitude",
            "must be a number between -90 and 90",
        )
        .check(
            geo::is_valid_longitude(longitude),
            "longitude",
            "must be a number between -180 and 180",
        )
    }

    pub fn non_negative(self, field: &'static str, value: Option<i32>) -> Self {
        self.check(value.map_or(true, |v| v >= 0), field, "must not be negative")
    }

    pub fn finite(self, field: &'static str, value: Option<f64>) -> Self {
        self.check(value.map_or(true, f64::is_finite), field, "must be a finite number")
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_validator_passes() {
        assert_eq!(Validator::new().finish(), Ok(()));
    }

    #[test]
    fn collects_every_violation() {
        let error = Validator::new()
            .not_blank("name", "  ")
            .coordinates(91.0, 200.0)
            .non_negative("capacity", Some(-1))
            .finite("score", Some(f64::NAN))
            .finish()
            .unwrap_err();

        let fields = error
            .violations
            .iter()
            .map(|violation| violation.field)
            .collect::<Vec<_>>();
        assert_eq!(fields, ["name", "latitude", "longitude", "capacity", "score"]);
    }

    #[test]
    fn absent_optional_values_pass() {
        assert!(Validator::new()
            .non_negative("capacity", None)
            .finite("score", None)
            .finish()
            .is_ok());
    }

    #[test]
    fn message_lists_fields() {
        let error = Validator::new().not_blank("name", "").finish().unwrap_err();
        assert_eq!(error.to_string(), "invalid input: name: must not be blank");
    }
}

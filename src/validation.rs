//! Input validation for FCFS scheduling.
//!
//! Checks process definitions before they reach the scheduler. Detects:
//! - Negative arrival times
//! - Zero or negative burst times
//! - Process sets whose worst-case completion time overflows `i64`
//!
//! Values are never clamped; invalid input is reported.

use std::fmt;

use crate::models::ProcessSpec;

/// Validation result for a batch of processes.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time is below zero.
    NegativeArrivalTime,
    /// Burst time is zero or below.
    NonPositiveBurstTime,
    /// Latest arrival plus total burst exceeds the representable timeline.
    TimelineOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a single process definition.
pub fn validate_process(spec: &ProcessSpec) -> Result<(), ValidationError> {
    if spec.arrival_time < 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NegativeArrivalTime,
            format!(
                "Process '{}' has negative arrival time {}",
                spec.name, spec.arrival_time
            ),
        ));
    }
    if spec.burst_time <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveBurstTime,
            format!(
                "Process '{}' has non-positive burst time {}",
                spec.name, spec.burst_time
            ),
        ));
    }
    Ok(())
}

/// Upper bound on any completion time: latest arrival plus total burst.
///
/// Returns `None` on overflow.
pub(crate) fn timeline_bound(max_arrival: i64, total_burst: i64) -> Option<i64> {
    max_arrival.checked_add(total_burst)
}

/// Validates a batch of process definitions.
///
/// Checks:
/// 1. Every arrival time is non-negative
/// 2. Every burst time is positive
/// 3. The worst-case completion time fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut max_arrival: i64 = 0;
    let mut total_burst: Option<i64> = Some(0);

    for spec in specs {
        match validate_process(spec) {
            Ok(()) => {
                max_arrival = max_arrival.max(spec.arrival_time);
                total_burst = total_burst.and_then(|t| t.checked_add(spec.burst_time));
            }
            Err(e) => errors.push(e),
        }
    }

    // Only meaningful once every value is individually valid
    if errors.is_empty() && total_burst.and_then(|t| timeline_bound(max_arrival, t)).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimelineOverflow,
            format!(
                "Process set of {} entries would complete beyond the representable timeline",
                specs.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

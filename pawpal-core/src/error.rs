//! Construction-time validation failures.
//!
//! Scheduling itself never fails; these errors only guard the entry points
//! where malformed data could otherwise reach the scheduler.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("task '{title}': duration must be positive (got {minutes} minutes)")]
    NonPositiveDuration { title: String, minutes: u32 },

    #[error("task title must be non-empty")]
    EmptyTitle,

    #[error("pet '{name}': age must be a finite non-negative number (got {age})")]
    NegativeAge { name: String, age: f64 },

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("unknown task category: {0}")]
    UnknownCategory(String),

    #[error("unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("invalid timezone: {0}")]
    UnknownTimezone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ValidationError::NonPositiveDuration {
            title: "Walk".to_string(),
            minutes: 0,
        };
        assert_eq!(
            err.to_string(),
            "task 'Walk': duration must be positive (got 0 minutes)"
        );
        assert_eq!(
            ValidationError::UnknownPriority("urgent".into()).to_string(),
            "unknown priority: urgent"
        );
    }
}

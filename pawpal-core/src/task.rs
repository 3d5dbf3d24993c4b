//! Task model: a single timed care activity and its recurrence lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl Priority {
    /// Highest first.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Numeric ordinal: LOW=1 .. CRITICAL=4.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Walk,
    Feeding,
    Medication,
    Grooming,
    Enrichment,
}

impl TaskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskCategory::Walk => "walk",
            TaskCategory::Feeding => "feeding",
            TaskCategory::Medication => "medication",
            TaskCategory::Grooming => "grooming",
            TaskCategory::Enrichment => "enrichment",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(TaskCategory::Walk),
            "feeding" => Ok(TaskCategory::Feeding),
            "medication" => Ok(TaskCategory::Medication),
            "grooming" => Ok(TaskCategory::Grooming),
            "enrichment" => Ok(TaskCategory::Enrichment),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn is_recurring(self) -> bool {
        self != Frequency::Once
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(Frequency::Once),
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(ValidationError::UnknownFrequency(s.to_string())),
        }
    }
}

/// A single pet care activity.
///
/// Tasks have no ID: two tasks with the same fields compare equal. Build them
/// through [`Task::new`] so the positive-duration invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub title: String,

    /// Minutes, always > 0.
    pub duration_minutes: u32,

    pub priority: Priority,
    pub category: TaskCategory,
    pub description: String,
    pub frequency: Frequency,
    pub completed: bool,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        duration_minutes: u32,
        priority: Priority,
        category: TaskCategory,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if duration_minutes == 0 {
            return Err(ValidationError::NonPositiveDuration {
                title,
                minutes: duration_minutes,
            });
        }

        Ok(Self {
            title,
            duration_minutes,
            priority,
            category,
            description: String::new(),
            frequency: Frequency::Once,
            completed: false,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn priority_score(&self) -> u8 {
        self.priority.ordinal()
    }

    pub fn is_recurring(&self) -> bool {
        self.frequency.is_recurring()
    }

    /// Mark this instance complete.
    ///
    /// Recurring tasks hand back their next occurrence: an incomplete copy
    /// with the same title, duration, priority, category, description and
    /// frequency. The caller decides which pet receives it. One-off tasks
    /// return `None`.
    pub fn mark_complete(&mut self) -> Option<Task> {
        self.completed = true;

        if !self.is_recurring() {
            return None;
        }

        Some(Task {
            completed: false,
            ..self.clone()
        })
    }
}

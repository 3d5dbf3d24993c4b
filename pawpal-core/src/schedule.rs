//! Schedule model: the output of a scheduling run.
//!
//! A [`Schedule`] borrows the tasks it places from the [`Owner`](crate::Owner)
//! that produced it. While a schedule is alive those tasks cannot be mutated;
//! completing a task means dropping the schedule and generating a new one.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::task::{Priority, Task, TaskCategory};
use crate::time::{format_hhmm, format_window};

/// A task placed at a start time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask<'a> {
    pub task: &'a Task,
    pub start: NaiveDateTime,
    /// Position in assignment order, starting at 0.
    pub order_index: usize,
    pub reasoning: String,
}

impl<'a> ScheduledTask<'a> {
    pub fn new(task: &'a Task, start: NaiveDateTime, order_index: usize) -> Self {
        Self {
            task,
            start,
            order_index,
            reasoning: String::new(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Wall-clock start.
    pub fn scheduled_time(&self) -> NaiveTime {
        self.start.time()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start + Duration::minutes(i64::from(self.task.duration_minutes))
    }

    /// "HH:MM-HH:MM".
    pub fn window(&self) -> String {
        format_window(self.start, self.end())
    }

    /// Half-open overlap: a task ending exactly when another starts does not
    /// conflict with it.
    pub fn conflicts_with(&self, other: &ScheduledTask<'_>) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// One overlapping pair found by [`Schedule::detect_conflicts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub first_title: String,
    pub first_window: String,
    pub second_title: String,
    pub second_window: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' ({}) overlaps '{}' ({})",
            self.first_title, self.first_window, self.second_title, self.second_window
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule<'a> {
    pub date: NaiveDate,
    /// Assignment order.
    pub scheduled_tasks: Vec<ScheduledTask<'a>>,
    pub unscheduled_tasks: Vec<&'a Task>,
    pub total_time_minutes: u32,
    /// 0-100, two decimals.
    pub utilization_percentage: f64,
}

impl<'a> Schedule<'a> {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            scheduled_tasks: Vec::new(),
            unscheduled_tasks: Vec::new(),
            total_time_minutes: 0,
            utilization_percentage: 0.0,
        }
    }

    /// Recompute and store the sum of scheduled durations.
    pub fn calculate_total_time(&mut self) -> u32 {
        self.total_time_minutes = self
            .scheduled_tasks
            .iter()
            .map(|st| st.task.duration_minutes)
            .sum();
        self.total_time_minutes
    }

    /// Recompute and store utilization against `available_minutes`.
    ///
    /// Reads the stored total, so call [`calculate_total_time`] first after
    /// changing `scheduled_tasks`. A zero budget yields 0.
    ///
    /// [`calculate_total_time`]: Schedule::calculate_total_time
    pub fn calculate_utilization(&mut self, available_minutes: u32) -> f64 {
        self.utilization_percentage = if available_minutes == 0 {
            0.0
        } else {
            let pct = f64::from(self.total_time_minutes) / f64::from(available_minutes) * 100.0;
            (pct * 100.0).round() / 100.0
        };
        self.utilization_percentage
    }

    /// True iff no two scheduled tasks overlap.
    pub fn validate(&self) -> bool {
        self.overlapping_pairs().next().is_none()
    }

    /// Every overlapping pair, in list order.
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        self.overlapping_pairs()
            .map(|(a, b)| Conflict {
                first_title: a.task.title.clone(),
                first_window: a.window(),
                second_title: b.task.title.clone(),
                second_window: b.window(),
            })
            .collect()
    }

    pub fn generate_explanation(&self) -> String {
        let mut lines = vec![
            format!(
                "Scheduled {} task(s) for {}.",
                self.scheduled_tasks.len(),
                self.date.format("%Y-%m-%d")
            ),
            format!(
                "Total time: {} minutes ({:.2}% utilization).",
                self.total_time_minutes, self.utilization_percentage
            ),
        ];

        if !self.unscheduled_tasks.is_empty() {
            lines.push("Unscheduled tasks:".to_string());
            for t in &self.unscheduled_tasks {
                lines.push(format!(
                    "  - {} ({} min, {})",
                    t.title, t.duration_minutes, t.priority
                ));
            }
        }

        lines.join("\n")
    }

    /// Owned projection for a presentation layer.
    pub fn to_view(&self) -> ScheduleView {
        ScheduleView {
            date: self.date,
            scheduled_tasks: self
                .scheduled_tasks
                .iter()
                .map(|st| ScheduledEntry {
                    order_index: st.order_index,
                    title: st.task.title.clone(),
                    start: format_hhmm(st.start),
                    end: format_hhmm(st.end()),
                    duration_minutes: st.task.duration_minutes,
                    priority: st.task.priority,
                    category: st.task.category,
                    reasoning: st.reasoning.clone(),
                })
                .collect(),
            unscheduled_tasks: self
                .unscheduled_tasks
                .iter()
                .map(|t| UnscheduledEntry {
                    title: t.title.clone(),
                    duration_minutes: t.duration_minutes,
                    priority: t.priority,
                    category: t.category,
                })
                .collect(),
            total_time_minutes: self.total_time_minutes,
            utilization_percentage: self.utilization_percentage,
        }
    }

    fn overlapping_pairs(&self) -> impl Iterator<Item = (&ScheduledTask<'a>, &ScheduledTask<'a>)> {
        let tasks = &self.scheduled_tasks;
        tasks.iter().enumerate().flat_map(move |(i, a)| {
            tasks[i + 1..]
                .iter()
                .filter(move |b| a.conflicts_with(b))
                .map(move |b| (a, b))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub date: NaiveDate,
    pub scheduled_tasks: Vec<ScheduledEntry>,
    pub unscheduled_tasks: Vec<UnscheduledEntry>,
    pub total_time_minutes: u32,
    pub utilization_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEntry {
    pub order_index: usize,
    pub title: String,
    /// "HH:MM"
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
    pub priority: Priority,
    pub category: TaskCategory,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledEntry {
    pub title: String,
    pub duration_minutes: u32,
    pub priority: Priority,
    pub category: TaskCategory,
}

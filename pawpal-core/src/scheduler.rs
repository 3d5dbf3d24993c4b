//! Scheduling policies.
//!
//! [`Scheduler`] is the seam for alternative strategies (earliest-deadline,
//! preference-aware, ...). [`PriorityGreedyScheduler`] is the shipped policy:
//!
//! 1. Collect every task of the owner and stable-sort by priority, highest
//!    first.
//! 2. Starting at 06:00 with the owner's full budget, repeatedly take the
//!    highest-priority remaining candidate (first one wins on ties).
//! 3. A candidate longer than the remaining budget is set aside as
//!    unscheduled and the loop moves on, so a later, shorter task can still
//!    fit.
//! 4. Otherwise it is placed at the cursor, and the cursor advances by its
//!    duration.
//!
//! Single pass, no backtracking, never fails.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::owner::Owner;
use crate::schedule::{Schedule, ScheduledTask};
use crate::task::{Priority, Task, TaskCategory};
use crate::time::day_start;

/// A scheduling policy bound to an owner and a target date.
pub trait Scheduler<'a> {
    fn owner(&self) -> &'a Owner;

    fn date(&self) -> NaiveDate;

    fn generate_schedule(&self) -> Schedule<'a>;

    /// Policy-independent audit: no overlaps and within the owner's budget.
    fn check_constraints(&self, schedule: &Schedule<'_>) -> bool {
        schedule.validate() && schedule.total_time_minutes <= self.owner().available_minutes
    }
}

/// Per-priority weights for weighted scoring.
///
/// Reserved configuration: the greedy policy scores by raw priority ordinal
/// and does not read these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            critical: 4.0,
            high: 3.0,
            medium: 2.0,
            low: 1.0,
        }
    }
}

impl PriorityWeights {
    pub fn weight(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PriorityGreedyScheduler<'a> {
    owner: &'a Owner,
    date: NaiveDate,
    weights: PriorityWeights,
}

impl<'a> PriorityGreedyScheduler<'a> {
    pub fn new(owner: &'a Owner, date: NaiveDate) -> Self {
        Self {
            owner,
            date,
            weights: PriorityWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: PriorityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }
}

impl<'a> Scheduler<'a> for PriorityGreedyScheduler<'a> {
    fn owner(&self) -> &'a Owner {
        self.owner
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn generate_schedule(&self) -> Schedule<'a> {
        let mut schedule = Schedule::new(self.date);
        let mut candidates = self.owner.tasks_sorted_by_priority();

        if candidates.is_empty() {
            debug!(owner = %self.owner.name, date = %self.date, "no tasks to schedule");
            return schedule;
        }

        let available = self.owner.available_minutes;
        if available == 0 {
            debug!(owner = %self.owner.name, tasks = candidates.len(), "no time available");
            schedule.unscheduled_tasks = candidates;
            finish(&mut schedule, available);
            return schedule;
        }

        let mut cursor = day_start(self.date);
        let mut remaining = available;
        let mut order_index = 0;

        while remaining > 0 {
            let Some(idx) = select_next(&candidates) else {
                break;
            };
            let task = candidates.remove(idx);

            if task.duration_minutes > remaining {
                debug!(
                    task = %task.title,
                    duration = task.duration_minutes,
                    remaining,
                    "task does not fit"
                );
                schedule.unscheduled_tasks.push(task);
                continue;
            }

            // `candidates` no longer holds `task`: what is left are the alternatives.
            let reasoning = generate_reasoning(task, &candidates);
            debug!(
                task = %task.title,
                start = %cursor.format("%H:%M"),
                order_index,
                "task scheduled"
            );
            schedule
                .scheduled_tasks
                .push(ScheduledTask::new(task, cursor, order_index).with_reasoning(reasoning));

            remaining -= task.duration_minutes;
            cursor += Duration::minutes(i64::from(task.duration_minutes));
            order_index += 1;
        }

        schedule.unscheduled_tasks.extend(candidates);
        finish(&mut schedule, available);
        schedule
    }
}

fn finish(schedule: &mut Schedule<'_>, available: u32) {
    schedule.calculate_total_time();
    schedule.calculate_utilization(available);

    info!(
        date = %schedule.date,
        scheduled = schedule.scheduled_tasks.len(),
        unscheduled = schedule.unscheduled_tasks.len(),
        total_minutes = schedule.total_time_minutes,
        utilization = schedule.utilization_percentage,
        "schedule generated"
    );
}

fn task_score(task: &Task) -> u8 {
    task.priority_score()
}

/// Index of the first highest-scoring candidate.
fn select_next(candidates: &[&Task]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (i, t) in candidates.iter().enumerate() {
        let score = task_score(t);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

fn priority_clause(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "CRITICAL priority: essential care that cannot be skipped.",
        Priority::High => "HIGH priority: important for the pet's daily wellbeing.",
        Priority::Medium => "MEDIUM priority: beneficial when time allows.",
        Priority::Low => "LOW priority: optional care fitted into the remaining time.",
    }
}

fn category_clause(category: TaskCategory) -> Option<&'static str> {
    match category {
        TaskCategory::Medication => Some("Medication needs to be given on time."),
        TaskCategory::Feeding => Some("Regular feeding keeps the pet's routine stable."),
        TaskCategory::Walk => Some("Exercise supports physical and mental health."),
        TaskCategory::Grooming | TaskCategory::Enrichment => None,
    }
}

/// Explain why `task` was picked. Purely descriptive.
fn generate_reasoning(task: &Task, alternatives: &[&Task]) -> String {
    let mut parts = vec![priority_clause(task.priority).to_string()];

    if let Some(clause) = category_clause(task.category) {
        parts.push(clause.to_string());
    }

    if alternatives.len() >= 2 {
        let mut tiers: Vec<&str> = Vec::new();
        for alt in alternatives {
            let tier = alt.priority.as_str();
            if !tiers.contains(&tier) {
                tiers.push(tier);
            }
            if tiers.len() == 2 {
                break;
            }
        }
        parts.push(format!("Chosen over {} priority tasks.", tiers.join(" and ")));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::Pet;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn task(title: &str, minutes: u32, p: Priority, c: TaskCategory) -> Task {
        Task::new(title, minutes, p, c).unwrap()
    }

    fn owner_with(budget: u32, tasks: Vec<Task>) -> Owner {
        let mut pet = Pet::new("Rex", "dog", 3.0).unwrap();
        for t in tasks {
            pet.add_task(t);
        }
        Owner::new("Jordan", budget).with_pet(pet)
    }

    fn scheduled_titles<'a>(schedule: &'a Schedule<'_>) -> Vec<&'a str> {
        schedule
            .scheduled_tasks
            .iter()
            .map(|st| st.task.title.as_str())
            .collect()
    }

    #[test]
    fn select_next_takes_first_maximum() {
        let a = task("a", 10, Priority::High, TaskCategory::Walk);
        let b = task("b", 10, Priority::Critical, TaskCategory::Walk);
        let c = task("c", 10, Priority::Critical, TaskCategory::Walk);
        assert_eq!(select_next(&[&a, &b, &c]), Some(1));
        assert_eq!(select_next(&[]), None);
    }

    #[test]
    fn skips_oversized_task_and_keeps_going() {
        let owner = owner_with(
            30,
            vec![
                task("Long walk", 60, Priority::Critical, TaskCategory::Walk),
                task("Feed", 10, Priority::High, TaskCategory::Feeding),
                task("Brush", 15, Priority::Low, TaskCategory::Grooming),
            ],
        );
        let schedule = PriorityGreedyScheduler::new(&owner, date()).generate_schedule();

        assert_eq!(scheduled_titles(&schedule), vec!["Feed", "Brush"]);
        assert_eq!(schedule.unscheduled_tasks[0].title, "Long walk");
        assert_eq!(schedule.total_time_minutes, 25);
        assert_eq!(schedule.utilization_percentage, 83.33);
    }

    #[test]
    fn leftover_candidates_are_unscheduled_once_budget_is_spent() {
        let owner = owner_with(
            20,
            vec![
                task("Feed", 20, Priority::Critical, TaskCategory::Feeding),
                task("Play", 5, Priority::Medium, TaskCategory::Enrichment),
                task("Brush", 5, Priority::Low, TaskCategory::Grooming),
            ],
        );
        let schedule = PriorityGreedyScheduler::new(&owner, date()).generate_schedule();

        assert_eq!(scheduled_titles(&schedule), vec!["Feed"]);
        let unscheduled: Vec<&str> = schedule
            .unscheduled_tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(unscheduled, vec!["Play", "Brush"]);
        assert_eq!(schedule.utilization_percentage, 100.0);
    }

    #[test]
    fn cursor_advances_from_six_with_order_indexes() {
        let owner = owner_with(
            120,
            vec![
                task("Walk", 30, Priority::High, TaskCategory::Walk),
                task("Feed", 10, Priority::Critical, TaskCategory::Feeding),
            ],
        );
        let schedule = PriorityGreedyScheduler::new(&owner, date()).generate_schedule();

        let windows: Vec<String> = schedule.scheduled_tasks.iter().map(|st| st.window()).collect();
        assert_eq!(windows, vec!["06:00-06:10", "06:10-06:40"]);
        let indexes: Vec<usize> = schedule.scheduled_tasks.iter().map(|st| st.order_index).collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn reasoning_mentions_priority_category_and_alternatives() {
        let owner = owner_with(
            200,
            vec![
                task("Pill", 5, Priority::Critical, TaskCategory::Medication),
                task("Walk", 30, Priority::High, TaskCategory::Walk),
                task("Play", 20, Priority::Medium, TaskCategory::Enrichment),
                task("Brush", 10, Priority::Low, TaskCategory::Grooming),
            ],
        );
        let schedule = PriorityGreedyScheduler::new(&owner, date()).generate_schedule();
        let reasons: Vec<&str> = schedule
            .scheduled_tasks
            .iter()
            .map(|st| st.reasoning.as_str())
            .collect();

        assert_eq!(
            reasons[0],
            "CRITICAL priority: essential care that cannot be skipped. \
             Medication needs to be given on time. \
             Chosen over HIGH and MEDIUM priority tasks."
        );
        assert!(reasons[1].contains("Exercise supports"));
        assert!(reasons[1].ends_with("Chosen over MEDIUM and LOW priority tasks."));
        // One alternative left: no comparison clause; enrichment has no category clause.
        assert_eq!(reasons[2], "MEDIUM priority: beneficial when time allows.");
        assert_eq!(
            reasons[3],
            "LOW priority: optional care fitted into the remaining time."
        );
    }

    #[test]
    fn reasoning_names_each_tier_once() {
        let a = task("a", 5, Priority::High, TaskCategory::Grooming);
        let b = task("b", 5, Priority::High, TaskCategory::Grooming);
        let pick = task("p", 5, Priority::Critical, TaskCategory::Feeding);
        let reason = generate_reasoning(&pick, &[&a, &b]);
        assert!(reason.ends_with("Chosen over HIGH priority tasks."));
    }

    #[test]
    fn weights_are_carried_but_do_not_change_order() {
        let owner = owner_with(
            100,
            vec![
                task("Brush", 10, Priority::Low, TaskCategory::Grooming),
                task("Feed", 10, Priority::Critical, TaskCategory::Feeding),
            ],
        );
        let inverted = PriorityWeights {
            critical: 1.0,
            high: 2.0,
            medium: 3.0,
            low: 4.0,
        };
        let scheduler = PriorityGreedyScheduler::new(&owner, date()).with_weights(inverted);
        assert_eq!(scheduler.weights().weight(Priority::Low), 4.0);

        let schedule = scheduler.generate_schedule();
        assert_eq!(scheduled_titles(&schedule), vec!["Feed", "Brush"]);
        assert_eq!(PriorityWeights::default().weight(Priority::Critical), 4.0);
    }

    #[test]
    fn constraint_check_audits_budget_and_overlaps() {
        let owner = owner_with(40, vec![task("Walk", 30, Priority::High, TaskCategory::Walk)]);
        let scheduler = PriorityGreedyScheduler::new(&owner, date());
        let schedule = scheduler.generate_schedule();
        assert!(scheduler.check_constraints(&schedule));
        assert_eq!(scheduler.owner().name, "Jordan");
        assert_eq!(scheduler.date(), date());

        let mut padded = schedule.clone();
        padded.total_time_minutes = 41;
        assert!(!scheduler.check_constraints(&padded));
    }
}

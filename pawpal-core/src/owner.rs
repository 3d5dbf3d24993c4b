//! Owner: the time budget holder and aggregation point for every pet's tasks.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::pet::Pet;
use crate::task::{Priority, Task, TaskCategory};

/// Scheduling preferences.
///
/// Advisory only: the priority-greedy scheduler never reads these. They are
/// kept so a preference-aware policy can be added without touching the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerPreferences {
    pub preferred_task_order: Vec<TaskCategory>,
    pub priority_threshold: Priority,
    pub group_similar_tasks: bool,
}

impl Default for OwnerPreferences {
    fn default() -> Self {
        Self {
            preferred_task_order: Vec::new(),
            priority_threshold: Priority::Low,
            group_similar_tasks: false,
        }
    }
}

impl OwnerPreferences {
    /// Two tasks group together when grouping is on and they share a category.
    pub fn should_group_tasks(&self, a: &Task, b: &Task) -> bool {
        self.group_similar_tasks && a.category == b.category
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Owner {
    pub name: String,
    /// Daily time budget in minutes.
    pub available_minutes: u32,
    pub pets: Vec<Pet>,
    pub preferences: OwnerPreferences,
}

impl Owner {
    pub fn new(name: impl Into<String>, available_minutes: u32) -> Self {
        Self {
            name: name.into(),
            available_minutes,
            pets: Vec::new(),
            preferences: OwnerPreferences::default(),
        }
    }

    pub fn with_preferences(mut self, preferences: OwnerPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_pet(mut self, pet: Pet) -> Self {
        self.add_pet(pet);
        self
    }

    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// Remove the first pet equal to `pet`, dropping its tasks with it.
    /// Absent pets are ignored.
    pub fn remove_pet(&mut self, pet: &Pet) -> Option<Pet> {
        let pos = self.pets.iter().position(|p| p == pet)?;
        Some(self.pets.remove(pos))
    }

    pub fn pet(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.name == name)
    }

    pub fn pet_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.name == name)
    }

    /// Every task across every pet: pet order, then task order within a pet.
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.pets.iter().flat_map(|p| p.tasks.iter()).collect()
    }

    pub fn task_count(&self) -> usize {
        self.pets.iter().map(|p| p.tasks.len()).sum()
    }

    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks_by_completion(false)
    }

    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.filter_tasks(|t| t.priority == priority)
    }

    pub fn tasks_by_category(&self, category: TaskCategory) -> Vec<&Task> {
        self.filter_tasks(|t| t.category == category)
    }

    pub fn tasks_by_completion(&self, completed: bool) -> Vec<&Task> {
        self.filter_tasks(|t| t.completed == completed)
    }

    /// Minutes needed for every task, completed or not. Summed as `u64` so
    /// any number of `u32` durations fits.
    pub fn total_task_minutes(&self) -> u64 {
        self.pets
            .iter()
            .flat_map(|p| p.tasks.iter())
            .map(|t| u64::from(t.duration_minutes))
            .sum()
    }

    /// Highest priority first; equal priorities keep aggregation order.
    pub fn tasks_sorted_by_priority(&self) -> Vec<&Task> {
        let mut tasks = self.all_tasks();
        tasks.sort_by_key(|t| Reverse(t.priority));
        tasks
    }

    /// Shortest first; equal durations keep aggregation order.
    pub fn tasks_sorted_by_duration(&self) -> Vec<&Task> {
        let mut tasks = self.all_tasks();
        tasks.sort_by_key(|t| t.duration_minutes);
        tasks
    }

    fn filter_tasks(&self, pred: impl Fn(&Task) -> bool) -> Vec<&Task> {
        self.pets
            .iter()
            .flat_map(|p| p.tasks.iter())
            .filter(|t| pred(t))
            .collect()
    }
}

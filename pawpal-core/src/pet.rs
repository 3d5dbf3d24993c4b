//! Pet: owns an ordered list of care tasks.

use serde::Serialize;

use crate::error::ValidationError;
use crate::task::{Priority, Task, TaskCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    pub name: String,
    /// Free-form tag ("dog", "cat", ...).
    pub species: String,
    pub age_years: f64,
    /// Insertion order is preserved.
    pub tasks: Vec<Task>,
}

impl Pet {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        age_years: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if !age_years.is_finite() || age_years < 0.0 {
            return Err(ValidationError::NegativeAge {
                name,
                age: age_years,
            });
        }
        Ok(Self {
            name,
            species: species.into(),
            age_years,
            tasks: Vec::new(),
        })
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.add_task(task);
        self
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove the first task equal to `task`. Absent tasks are ignored.
    pub fn remove_task(&mut self, task: &Task) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t == task)?;
        Some(self.tasks.remove(pos))
    }

    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.priority == priority).collect()
    }

    pub fn tasks_by_category(&self, category: TaskCategory) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.category == category).collect()
    }

    pub fn tasks_by_completion(&self, completed: bool) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed == completed).collect()
    }

    /// Complete the task at `index` and append its next occurrence, if any.
    ///
    /// Returns true when a new occurrence was added. Out-of-range indexes are
    /// a no-op.
    pub fn complete_task(&mut self, index: usize) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            return false;
        };
        match task.mark_complete() {
            Some(next) => {
                self.tasks.push(next);
                true
            }
            None => false,
        }
    }
}

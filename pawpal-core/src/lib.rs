//! pawpal-core: daily pet care scheduling engine.
//!
//! Callers build an [`Owner`] with [`Pet`]s and [`Task`]s, bind a
//! [`Scheduler`] to the owner and a date, and inspect the resulting
//! [`Schedule`].
//!
//! ```
//! use chrono::NaiveDate;
//! use pawpal_core::{Owner, Pet, Priority, PriorityGreedyScheduler, Scheduler, Task, TaskCategory};
//!
//! let dog = Pet::new("Mochi", "dog", 3.5)
//!     .unwrap()
//!     .with_task(Task::new("Feed breakfast", 10, Priority::Critical, TaskCategory::Feeding).unwrap())
//!     .with_task(Task::new("Morning walk", 30, Priority::High, TaskCategory::Walk).unwrap());
//! let owner = Owner::new("Jordan", 120).with_pet(dog);
//!
//! let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
//! let schedule = PriorityGreedyScheduler::new(&owner, date).generate_schedule();
//! assert_eq!(schedule.scheduled_tasks[0].task.title, "Feed breakfast");
//! assert!(schedule.validate());
//! ```

pub mod error;
pub mod owner;
pub mod pet;
pub mod schedule;
pub mod scheduler;
pub mod task;
pub mod time;

pub use error::ValidationError;
pub use owner::{Owner, OwnerPreferences};
pub use pet::Pet;
pub use schedule::{
    Conflict, Schedule, ScheduleView, ScheduledEntry, ScheduledTask, UnscheduledEntry,
};
pub use scheduler::{PriorityGreedyScheduler, PriorityWeights, Scheduler};
pub use task::{Frequency, Priority, Task, TaskCategory};
pub use time::{day_start, format_hhmm, format_window, today_in};

//! Household files: a TOML description of an owner, their pets and tasks.
//!
//! ```toml
//! [owner]
//! name = "Jordan"
//! available_minutes = 120
//!
//! [[pets]]
//! name = "Mochi"
//! species = "dog"
//! age_years = 3.5
//!
//! [[pets.tasks]]
//! title = "Morning walk"
//! duration_minutes = 30
//! priority = "high"
//! category = "walk"
//! frequency = "daily"
//! ```

use anyhow::{Context, Result};
use pawpal_core::{Frequency, Owner, OwnerPreferences, Pet, Priority, Task, TaskCategory};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct HouseholdFile {
    owner: OwnerRow,
    #[serde(default)]
    pets: Vec<PetRow>,
}

#[derive(Debug, Deserialize)]
struct OwnerRow {
    name: String,
    available_minutes: u32,
    #[serde(default)]
    preferences: Option<OwnerPreferences>,
}

#[derive(Debug, Deserialize)]
struct PetRow {
    name: String,
    species: String,
    #[serde(default)]
    age_years: f64,
    #[serde(default)]
    tasks: Vec<TaskRow>,
}

// Enum fields stay strings here so bad values surface as labeled validation errors.
#[derive(Debug, Deserialize)]
struct TaskRow {
    title: String,
    duration_minutes: u32,
    priority: String,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    frequency: Option<String>,
}

impl TaskRow {
    fn into_task(self) -> Result<Task> {
        let priority: Priority = self.priority.parse()?;
        let category: TaskCategory = self.category.parse()?;
        let frequency: Frequency = match self.frequency {
            Some(f) => f.parse()?,
            None => Frequency::Once,
        };
        Ok(Task::new(self.title, self.duration_minutes, priority, category)?
            .with_description(self.description)
            .with_frequency(frequency))
    }
}

pub fn parse_household(toml_src: &str) -> Result<Owner> {
    let file: HouseholdFile = toml::from_str(toml_src).context("parse household")?;

    let mut owner = Owner::new(file.owner.name, file.owner.available_minutes);
    if let Some(prefs) = file.owner.preferences {
        owner = owner.with_preferences(prefs);
    }

    for pet_row in file.pets {
        let pet_name = pet_row.name.clone();
        let mut pet = Pet::new(pet_row.name, pet_row.species, pet_row.age_years)?;
        for (i, row) in pet_row.tasks.into_iter().enumerate() {
            let task = row
                .into_task()
                .with_context(|| format!("pet '{pet_name}', task #{}", i + 1))?;
            pet.add_task(task);
        }
        owner.add_pet(pet);
    }

    Ok(owner)
}

pub fn load_household(path: &Path) -> Result<Owner> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_household(&s).with_context(|| format!("load {}", path.display()))
}

/// Built-in household: one dog, one cat, more work than fits in two hours.
pub fn demo_household() -> Result<Owner> {
    let dog = Pet::new("Mochi", "dog", 3.5)?
        .with_task(
            Task::new("Morning walk", 30, Priority::High, TaskCategory::Walk)?
                .with_description("Daily exercise walk around the neighborhood")
                .with_frequency(Frequency::Daily),
        )
        .with_task(
            Task::new("Feed breakfast", 10, Priority::Critical, TaskCategory::Feeding)?
                .with_description("Kibble with vitamins")
                .with_frequency(Frequency::Daily),
        )
        .with_task(
            Task::new("Playtime", 20, Priority::Medium, TaskCategory::Enrichment)?
                .with_description("Interactive play with toys"),
        )
        .with_task(
            Task::new("Grooming", 45, Priority::Low, TaskCategory::Grooming)?
                .with_description("Brush coat and check for ticks")
                .with_frequency(Frequency::Weekly),
        );

    let cat = Pet::new("Whiskers", "cat", 2.0)?
        .with_task(
            Task::new("Feed breakfast", 5, Priority::Critical, TaskCategory::Feeding)?
                .with_description("Wet food")
                .with_frequency(Frequency::Daily),
        )
        .with_task(
            Task::new("Litter box cleaning", 10, Priority::High, TaskCategory::Grooming)?
                .with_description("Scoop and refresh litter"),
        )
        .with_task(
            Task::new("Play with feather toy", 15, Priority::Medium, TaskCategory::Enrichment)?
                .with_description("Interactive play session"),
        );

    Ok(Owner::new("Jordan", 120).with_pet(dog).with_pet(cat))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[owner]
name = "Sam"
available_minutes = 90

[owner.preferences]
group_similar_tasks = true
preferred_task_order = ["medication", "feeding"]

[[pets]]
name = "Rex"
species = "dog"
age_years = 4.0

[[pets.tasks]]
title = "Walk"
duration_minutes = 30
priority = "HIGH"
category = "walk"
frequency = "daily"

[[pets.tasks]]
title = "Pill"
duration_minutes = 5
priority = "critical"
category = "medication"
description = "With food"

[[pets]]
name = "Tom"
species = "cat"
"#;

    #[test]
    fn parses_sample_household() {
        let owner = parse_household(SAMPLE).unwrap();
        assert_eq!(owner.name, "Sam");
        assert_eq!(owner.available_minutes, 90);
        assert!(owner.preferences.group_similar_tasks);
        assert_eq!(
            owner.preferences.preferred_task_order,
            vec![TaskCategory::Medication, TaskCategory::Feeding]
        );
        assert_eq!(owner.pets.len(), 2);

        let rex = owner.pet("Rex").unwrap();
        assert_eq!(rex.tasks.len(), 2);
        assert_eq!(rex.tasks[0].priority, Priority::High);
        assert_eq!(rex.tasks[0].frequency, Frequency::Daily);
        assert_eq!(rex.tasks[1].description, "With food");
        assert_eq!(rex.tasks[1].frequency, Frequency::Once);

        let tom = owner.pet("Tom").unwrap();
        assert_eq!(tom.age_years, 0.0);
        assert!(tom.tasks.is_empty());
    }

    #[test]
    fn bad_rows_name_the_pet_and_task() {
        let src = r#"
[owner]
name = "Sam"
available_minutes = 30

[[pets]]
name = "Rex"
species = "dog"

[[pets.tasks]]
title = "Nap"
duration_minutes = 0
priority = "low"
category = "enrichment"
"#;
        let err = parse_household(src).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("pet 'Rex', task #1"), "{msg}");
        assert!(msg.contains("duration must be positive"), "{msg}");

        let src = src
            .replace("duration_minutes = 0", "duration_minutes = 10")
            .replace("\"low\"", "\"urgent\"");
        let msg = format!("{:#}", parse_household(&src).unwrap_err());
        assert!(msg.contains("unknown priority: urgent"), "{msg}");
    }

    #[test]
    fn demo_household_matches_reference_setup() {
        let owner = demo_household().unwrap();
        assert_eq!(owner.available_minutes, 120);
        assert_eq!(owner.task_count(), 7);
        assert_eq!(owner.total_task_minutes(), 135);
    }
}

use pawpal_core::{Owner, Schedule};

const RULE: &str = "============================================================";

/// Owner, pets and the time they need.
pub fn print_household(owner: &Owner) {
    println!("Owner: {}", owner.name);
    println!("  Available time: {} minutes", owner.available_minutes);

    for pet in &owner.pets {
        println!("\nPet: {} ({}, {} years)", pet.name, pet.species, pet.age_years);
        println!("  Tasks: {}", pet.tasks.len());
        for t in &pet.tasks {
            println!("  - {} ({} min, {})", t.title, t.duration_minutes, t.priority);
        }
    }

    let needed = owner.total_task_minutes();
    let available = u64::from(owner.available_minutes);
    println!("\nTotal task time needed: {needed} minutes");
    if needed > available {
        println!("  Not enough time: {} more minutes needed", needed - available);
    } else {
        println!("  Enough time with {} minutes to spare", available - needed);
    }
}

pub fn print_schedule(schedule: &Schedule<'_>) {
    println!("\n{RULE}");
    println!("Schedule for {}", schedule.date);
    println!("{RULE}");
    println!("  Scheduled:   {} tasks", schedule.scheduled_tasks.len());
    println!("  Unscheduled: {} tasks", schedule.unscheduled_tasks.len());
    println!("  Total time:  {} minutes", schedule.total_time_minutes);
    println!("  Utilization: {:.2}%", schedule.utilization_percentage);

    if !schedule.scheduled_tasks.is_empty() {
        println!("\nScheduled tasks:");
        for st in &schedule.scheduled_tasks {
            println!("\n  [{}] {}", st.window(), st.task.title);
            println!("    Duration:  {} min", st.task.duration_minutes);
            println!("    Priority:  {}", st.task.priority);
            println!("    Category:  {}", st.task.category);
            println!("    Reasoning: {}", st.reasoning);
        }
    }

    if !schedule.unscheduled_tasks.is_empty() {
        println!("\nUnscheduled tasks:");
        for t in &schedule.unscheduled_tasks {
            println!("  - {} ({} min, {})", t.title, t.duration_minutes, t.priority);
        }
    }

    println!("\n{RULE}");
    println!("Explanation");
    println!("{RULE}");
    println!("{}", schedule.generate_explanation());

    println!("\n{RULE}");
    let conflicts = schedule.detect_conflicts();
    if conflicts.is_empty() {
        println!("Schedule is valid (no conflicts detected)");
    } else {
        println!("Schedule has {} conflict(s):", conflicts.len());
        for c in &conflicts {
            println!("  - {c}");
        }
    }
}

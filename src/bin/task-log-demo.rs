//! A small demo: logs a few tasks for today, completes one, and prints what an app would show and export

use chrono::Duration;

use task_log::{AddOutcome, Category, DateKey, DueTime, ExportScope, Priority, Task, TaskQuery, TaskStore};

fn main() {
    env_logger::init();

    let today = DateKey::today();
    let mut store = TaskStore::new();

    let samples = vec![
        ("Buy milk", Category::Personal, Priority::Low, 0, "08:00"),
        ("Write report", Category::Work, Priority::High, 5, "09:00"),
        ("Call the plumber", Category::Urgent, Priority::High, 0, "17:30"),
        ("Write report", Category::Work, Priority::High, 5, "09:00"),
    ];

    for (title, category, priority, days_ahead, time) in samples {
        let due_time: DueTime = match time.parse() {
            Ok(t) => t,
            Err(err) => {
                log::error!("{}", err);
                continue;
            },
        };
        let due_date = today.date() + Duration::days(days_ahead);
        let task = match Task::new(title.to_string(), category, priority, due_date, due_time) {
            Ok(task) => task,
            Err(err) => {
                log::warn!("Cannot log {:?}: {}", title, err);
                continue;
            },
        };
        match store.add(today, task) {
            AddOutcome::Added => println!("Task added: {}", title),
            AddOutcome::Duplicate => println!("Task already exists: {}", title),
        }
    }

    if let Err(err) = store.set_completed(&today, 0) {
        log::warn!("{}", err);
    }

    println!();
    println!("---- Tasks for {} -----", today);
    for task in store.sorted_view(&today) {
        println!("  {}", task);
    }

    println!();
    for scope in ExportScope::ALL.iter() {
        let tasks = store.scoped_export(*scope, &today);
        println!("---- {} ({} task(s)) -----", scope.file_name(&today), tasks.len());
        for task in tasks {
            task_log::utils::print_task(task);
        }
    }

    println!();
    println!("---- Whole store -----");
    task_log::utils::print_store(&store);
}

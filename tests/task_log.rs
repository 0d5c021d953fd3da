//! Scenarios that go through the public API, the way an app would use it

use chrono::NaiveDate;

use task_log::{AddOutcome, Category, DateKey, DueTime, ExportScope, InvalidInput, NotFound, Priority, Task, TaskQuery, TaskStore};

fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Builds a task the way a form would, with "today" being `2025-06-01`
fn new_task(title: &str, category: Category, priority: Priority, due_date: &str, due_time: &str) -> Result<Task, InvalidInput> {
    let due_time: DueTime = due_time.parse()?;
    Task::new_with_reference_date(title.to_string(), category, priority, date(due_date), due_time, date("2025-06-01"))
}

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title().to_string()).collect()
}


#[test]
fn log_sort_and_reject_duplicates() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let day = key("2025-06-05");

    let a = new_task("Write report", Category::Work, Priority::High, "2025-06-10", "09:00").unwrap();
    let b = new_task("Buy milk", Category::Personal, Priority::Low, "2025-06-01", "08:00").unwrap();

    assert_eq!(store.add(day, a.clone()), AddOutcome::Added);
    assert_eq!(store.add(day, b.clone()), AddOutcome::Added);
    assert_eq!(store.sorted_view(&day), vec![&a, &b]);

    assert_eq!(store.add(day, a.clone()), AddOutcome::Duplicate);
    assert_eq!(store.list(&day), &[a, b][..]);
}

#[test]
fn insertion_order_is_kept_by_list_and_sorted_view_is_a_permutation() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let day = key("2025-06-05");
    let tasks = vec![
        new_task("b", Category::Other, Priority::Low, "2025-06-02", "10:00").unwrap(),
        new_task("a", Category::Other, Priority::Medium, "2025-06-02", "10:00").unwrap(),
        new_task("c", Category::Urgent, Priority::High, "2025-06-03", "23:30").unwrap(),
        new_task("d", Category::Urgent, Priority::High, "2025-06-03", "00:00").unwrap(),
    ];
    for task in tasks.iter() {
        let _ = store.add(day, task.clone());
    }

    assert_eq!(store.list(&day), tasks.as_slice());

    let view = store.sorted_view(&day);
    assert_eq!(titles(&view), vec!["d", "c", "a", "b"]);
    for task in tasks.iter() {
        assert!(view.contains(&task));
    }
}

#[test]
fn completion_is_one_way_and_idempotent() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let day = key("2025-06-05");
    let _ = store.add(day, new_task("Write report", Category::Work, Priority::High, "2025-06-10", "09:00").unwrap());

    assert_eq!(store.set_completed(&day, 0), Ok(()));
    assert_eq!(store.set_completed(&day, 0), Ok(()));
    assert!(store.list(&day)[0].completed());
    assert!(store.sorted_view(&day)[0].to_string().starts_with("✅ Write report"));

    assert_eq!(store.set_completed(&day, 3), Err(NotFound { date_key: day, index: 3 }));
    assert_eq!(store.set_completed(&key("1999-01-01"), 0).unwrap_err().to_string(),
        "no task #0 logged under 1999-01-01");
}

#[test]
fn invalid_input_is_reported_before_reaching_the_store() {
    assert_eq!(new_task("", Category::Work, Priority::High, "2025-06-10", "09:00"), Err(InvalidInput::EmptyTitle));
    assert_eq!(new_task(" \t", Category::Work, Priority::High, "2025-06-10", "09:00"), Err(InvalidInput::EmptyTitle));
    assert_eq!(new_task("Late", Category::Work, Priority::High, "2025-05-31", "09:00"),
        Err(InvalidInput::DueDateInPast { due_date: date("2025-05-31"), today: date("2025-06-01") }));
    assert_eq!(new_task("Odd time", Category::Work, Priority::High, "2025-06-10", "09:45"),
        Err(InvalidInput::OffGridTime { hour: 9, minute: 45 }));

    // A retry with corrected input goes through
    assert!(new_task("Odd time", Category::Work, Priority::High, "2025-06-10", "09:30").is_ok());
}

#[test]
fn scoped_exports_cover_day_month_and_year() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let entries = [
        ("2025-03-20", "march 20th"),
        ("2025-03-15", "march 15th #1"),
        ("2025-02-28", "february"),
        ("2025-03-15", "march 15th #2"),
        ("2024-03-15", "last year"),
        ("2025-12-31", "new year's eve"),
    ];
    for (date_key, title) in entries.iter() {
        let task = new_task(title, Category::Work, Priority::Medium, "2025-06-10", "12:00").unwrap();
        assert_eq!(store.add(key(date_key), task), AddOutcome::Added);
    }

    let reference = key("2025-03-15");
    assert_eq!(titles(&store.scoped_export(ExportScope::Day, &reference)),
        vec!["march 15th #1", "march 15th #2"]);
    assert_eq!(titles(&store.scoped_export(ExportScope::Month, &reference)),
        vec!["march 15th #1", "march 15th #2", "march 20th"]);
    assert_eq!(titles(&store.scoped_export(ExportScope::Year, &reference)),
        vec!["february", "march 15th #1", "march 15th #2", "march 20th", "new year's eve"]);

    // Same store, same output
    assert_eq!(store.scoped_export(ExportScope::Year, &reference), store.scoped_export(ExportScope::Year, &reference));

    // The day export is exactly the stored sequence
    let day: Vec<&Task> = store.list(&reference).iter().collect();
    assert_eq!(store.scoped_export(ExportScope::Day, &reference), day);
}

#[test]
fn exported_records_serialize_with_the_export_columns() {
    let mut store = TaskStore::new();
    let day = key("2025-06-05");
    let _ = store.add(day, new_task("Write report", Category::Work, Priority::High, "2025-06-10", "09:00").unwrap());
    store.set_completed(&day, 0).unwrap();

    let records = serde_json::to_value(store.scoped_export(ExportScope::Day, &day)).unwrap();
    assert_eq!(records, serde_json::json!([{
        "title": "Write report",
        "category": "Work",
        "priority": "High",
        "due_date": "2025-06-10",
        "due_time": "09:00",
        "completed": true,
    }]));
}

//! Tolerant persistence codec for the task list.
//!
//! The persisted document is a JSON array of camelCase task objects.
//! Records are decoded one at a time so a single malformed entry drops
//! that entry instead of failing the whole load. A record must carry `id`,
//! a non-empty `title`, and `completed` to survive; every other field is
//! backfilled when absent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::task::{Category, Priority, Task};

/// Outcome of decoding a persisted document.
#[derive(Debug)]
pub struct DecodedTasks {
    /// Records that passed validation.
    pub tasks: Vec<Task>,
    /// Number of records dropped for missing or invalid fields.
    pub dropped: usize,
}

/// One raw record as found in the persisted document, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Decodes a persisted JSON document into tasks.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array. Individually
/// malformed records are counted in [`DecodedTasks::dropped`] instead of
/// failing the load.
pub fn decode(json: &str) -> Result<DecodedTasks, String> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| format!("not a JSON array of tasks: {e}"))?;
    let mut tasks = Vec::with_capacity(raw.len());
    let mut dropped = 0;
    for value in raw {
        match revive(value) {
            Some(task) => tasks.push(task),
            None => dropped += 1,
        }
    }
    Ok(DecodedTasks { tasks, dropped })
}

/// Encodes the task list as the persisted JSON document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(tasks: &[Task]) -> Result<String, String> {
    serde_json::to_string_pretty(tasks).map_err(|e| format!("failed to serialize tasks: {e}"))
}

/// Validates one raw record, backfilling absent optional fields.
fn revive(value: serde_json::Value) -> Option<Task> {
    let record: StoredTask = serde_json::from_value(value).ok()?;
    let id = record.id.filter(|id| !id.is_empty())?;
    let title = record.title.filter(|title| !title.trim().is_empty())?;
    let completed = record.completed?;

    let category = record
        .category
        .and_then(|name| Category::new(&name).ok())
        .unwrap_or_default();
    let created_at = record.created_at.unwrap_or(DateTime::UNIX_EPOCH);
    // A record claiming to be updated before it was created is clamped so
    // the updated_at >= created_at invariant holds from the moment of load.
    let updated_at = record.updated_at.unwrap_or(created_at).max(created_at);

    Some(Task {
        id,
        title,
        description: record.description.filter(|d| !d.trim().is_empty()),
        completed,
        category,
        priority: record.priority.unwrap_or_default(),
        due_date: record.due_date,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn decode_one(value: serde_json::Value) -> DecodedTasks {
        decode(&serde_json::Value::Array(vec![value]).to_string()).unwrap()
    }

    #[test]
    fn full_record_round_trips_by_instant() {
        let created = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let task = Task {
            id: "task-1".to_string(),
            title: "Write report".to_string(),
            description: Some("quarterly numbers".to_string()),
            completed: false,
            category: Category::new("work").unwrap(),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 20),
            created_at: created,
            updated_at: created + chrono::Duration::hours(1),
        };

        let encoded = encode(std::slice::from_ref(&task)).unwrap();
        let decoded = decode(&encoded).unwrap();

        assert_eq!(decoded.dropped, 0);
        assert_eq!(decoded.tasks, vec![task]);
    }

    #[test]
    fn record_missing_id_is_dropped() {
        let decoded = decode_one(json!({"title": "x", "completed": false}));
        assert!(decoded.tasks.is_empty());
        assert_eq!(decoded.dropped, 1);
    }

    #[test]
    fn record_with_blank_title_is_dropped() {
        let decoded = decode_one(json!({"id": "a", "title": "   ", "completed": false}));
        assert_eq!(decoded.dropped, 1);
    }

    #[test]
    fn record_missing_completed_is_dropped() {
        let decoded = decode_one(json!({"id": "a", "title": "x"}));
        assert_eq!(decoded.dropped, 1);
    }

    #[test]
    fn absent_optional_fields_are_backfilled() {
        let decoded = decode_one(json!({"id": "a", "title": "x", "completed": true}));
        let task = &decoded.tasks[0];

        assert_eq!(task.description, None);
        assert_eq!(task.category, Category::default());
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
        assert_eq!(task.created_at, DateTime::UNIX_EPOCH);
        assert_eq!(task.updated_at, task.created_at);
    }

    #[test]
    fn updated_at_is_clamped_to_created_at() {
        let decoded = decode_one(json!({
            "id": "a",
            "title": "x",
            "completed": false,
            "createdAt": "2024-06-15T10:00:00Z",
            "updatedAt": "2024-06-14T10:00:00Z",
        }));
        let task = &decoded.tasks[0];
        assert_eq!(task.updated_at, task.created_at);
    }

    #[test]
    fn malformed_date_drops_only_that_record() {
        let document = json!([
            {"id": "a", "title": "good", "completed": false},
            {"id": "b", "title": "bad", "completed": false, "dueDate": "not-a-date"},
        ]);
        let decoded = decode(&document.to_string()).unwrap();

        assert_eq!(decoded.tasks.len(), 1);
        assert_eq!(decoded.tasks[0].id, "a");
        assert_eq!(decoded.dropped, 1);
    }

    #[test]
    fn category_is_normalized_on_load() {
        let decoded =
            decode_one(json!({"id": "a", "title": "x", "completed": false, "category": "Work"}));
        assert_eq!(decoded.tasks[0].category, Category::new("work").unwrap());
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(decode("{\"todos\": []}").is_err());
        assert!(decode("not json").is_err());
    }
}

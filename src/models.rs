//! Frontend Models
//!
//! Data structures matching the REST backend's JSON wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// To-do item as returned by the backend.
///
/// Locally created items carry a provisional timestamp id until the
/// backend responds with the canonical one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Create payload: a to-do minus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Todo {
    /// Local placeholder for a draft awaiting backend confirmation.
    pub fn provisional(id: u64, draft: &NewTodo) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
            completed: false,
            category: draft.category.clone(),
        }
    }
}

/// Millisecond-timestamp id for items not yet confirmed by the backend.
pub fn provisional_id() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

// ========================
// Auth Payloads
// ========================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotRequest<'a> {
    pub email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewTodo {
        NewTodo {
            title: "Buy milk".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            completed: false,
            category: None,
        }
    }

    #[test]
    fn test_todo_wire_format_uses_camel_case() {
        let todo = Todo::provisional(7, &draft());
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["completed"], false);
        // Absent optional fields are omitted, not null
        assert!(json.get("description").is_none());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_todo_deserializes_without_optional_fields() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":3,"title":"Walk","dueDate":"2024-02-02","completed":true}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 3);
        assert!(todo.completed);
        assert_eq!(todo.description, None);
        assert_eq!(todo.category, None);
    }

    #[test]
    fn test_provisional_copies_draft_fields() {
        let item = Todo::provisional(42, &draft());
        assert_eq!(item.id, 42);
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
    }
}

/*
 * Responsibility
 * - Todos request/response DTOs
 * - validate() returns the trimmed description; the trimmed form is what
 *   gets stored
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::todo_repo::TodoRow;

/// Upper bound on a description, counted in Unicode scalar values.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub description: String,
}

impl CreateTodoRequest {
    pub fn validate(&self) -> Result<&str, &'static str> {
        validate_description(&self.description)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub description: String,
}

impl UpdateTodoRequest {
    pub fn validate(&self) -> Result<&str, &'static str> {
        validate_description(&self.description)
    }
}

fn validate_description(description: &str) -> Result<&str, &'static str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err("description cannot be empty");
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err("description must be <= 500 chars");
    }
    Ok(trimmed)
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: Uuid,
    pub description: String,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoRow> for TodoResponse {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            is_complete: row.is_complete,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoResponse>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_description_fails() {
        let req = CreateTodoRequest {
            description: "   \t ".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn description_is_trimmed() {
        let req = CreateTodoRequest {
            description: "  Buy milk  ".to_string(),
        };
        assert_eq!(req.validate(), Ok("Buy milk"));
    }

    #[test]
    fn max_length_description_passes() {
        let req = CreateTodoRequest {
            description: "x".repeat(MAX_DESCRIPTION_CHARS),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn one_over_max_length_fails() {
        let req = CreateTodoRequest {
            description: "x".repeat(MAX_DESCRIPTION_CHARS + 1),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        // Multi-byte but exactly MAX characters.
        let req = CreateTodoRequest {
            description: "あ".repeat(MAX_DESCRIPTION_CHARS),
        };
        assert!(req.validate().is_ok());
    }
}

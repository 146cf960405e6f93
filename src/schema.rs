//! Request validation schemas.
//!
//! Validation runs at the routing layer, before a handler is invoked, and
//! collects every failure for a payload in one pass rather than stopping at
//! the first error. Unknown fields are stripped silently: only the known
//! fields are read out of the raw JSON body.

use serde_json::Value;
use uuid::Uuid;

use crate::models::{CreateSong, UpdateSong};

/// Validates the `POST /songs` body: `name` and `description` are both
/// required non-empty strings.
pub fn validate_create(body: &Value) -> Result<CreateSong, Vec<String>> {
    let mut errors = Vec::new();

    let name = required_string(body, "name", &mut errors);
    let description = required_string(body, "description", &mut errors);

    match (name, description) {
        (Some(name), Some(description)) if errors.is_empty() => {
            Ok(CreateSong { name, description })
        }
        _ => Err(errors),
    }
}

/// Validates the `PUT /songs` body: `id` is a required UUID, `name` and
/// `description` are optional strings. An empty string counts as absent,
/// matching the partial-update semantics where only supplied values replace
/// stored ones.
pub fn validate_update(body: &Value) -> Result<UpdateSong, Vec<String>> {
    let mut errors = Vec::new();

    let id = match body.get("id") {
        None | Some(Value::Null) => {
            errors.push("id is a required field".to_string());
            None
        }
        Some(Value::String(raw)) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("id must be a valid UUID".to_string());
                None
            }
        },
        Some(_) => {
            errors.push("id must be a valid UUID".to_string());
            None
        }
    };

    let name = optional_string(body, "name", &mut errors);
    let description = optional_string(body, "description", &mut errors);

    match id {
        Some(id) if errors.is_empty() => Ok(UpdateSong {
            id,
            name,
            description,
        }),
        _ => Err(errors),
    }
}

/// Validates the `{id}` path segment of `GET /songs/{id}` and
/// `DELETE /songs/{id}`.
pub fn validate_path_id(raw: &str) -> Result<Uuid, Vec<String>> {
    Uuid::parse_str(raw).map_err(|_| vec!["id must be a valid UUID".to_string()])
}

fn required_string(body: &Value, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(format!("{} is a required field", field));
            None
        }
        Some(Value::String(value)) if value.is_empty() => {
            errors.push(format!("{} is a required field", field));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(format!("{} must be a string", field));
            None
        }
    }
}

fn optional_string(body: &Value, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) if value.is_empty() => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(format!("{} must be a string", field));
            None
        }
    }
}

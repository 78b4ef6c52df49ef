use crate::domain::model::TaskRecord;
use crate::utils::error::{Result, TaskError};
use serde_json::Value;
use std::collections::HashSet;

const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "value"];

/// JSON type word used in schema error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_f64() {
                "float"
            } else {
                "integer"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn schema_error(message: String) -> TaskError {
    TaskError::Schema { message }
}

/// Validate a single item at its 0-based position in the input array.
///
/// Rules are checked in a fixed order and the first violation wins, so
/// error messages are deterministic for a given input.
pub fn validate_record(item: &Value, index: usize) -> Result<TaskRecord> {
    let obj = match item {
        Value::Object(obj) => obj,
        _ => return Err(schema_error(format!("Item at index {index} is not an object"))),
    };

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(schema_error(format!(
                "Item at index {index} is missing required field '{field}'"
            )));
        }
    }

    // id: a true integer. Booleans and floats both fail here.
    let raw_id = &obj["id"];
    let id = match raw_id {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
    .ok_or_else(|| {
        schema_error(format!(
            "Item at index {index}: 'id' must be an integer, got {}",
            json_type_name(raw_id)
        ))
    })?;

    let raw_name = &obj["name"];
    let name = match raw_name {
        Value::String(s) => s,
        _ => {
            return Err(schema_error(format!(
                "Item at index {index}: 'name' must be a string, got {}",
                json_type_name(raw_name)
            )))
        }
    };
    if name.trim().is_empty() {
        return Err(schema_error(format!(
            "Item at index {index}: 'name' must be a non-empty string"
        )));
    }

    // value: numeric, never boolean.
    let raw_value = &obj["value"];
    let value = match raw_value {
        Value::Number(n) => n.clone(),
        _ => {
            return Err(schema_error(format!(
                "Item at index {index}: 'value' must be numeric, got {}",
                json_type_name(raw_value)
            )))
        }
    };

    Ok(TaskRecord {
        id,
        name: name.clone(),
        value,
    })
}

/// Validate the whole decoded document: must be an array, every item must
/// pass `validate_record`, and ids must be unique across the collection.
pub fn validate_collection(data: &Value) -> Result<Vec<TaskRecord>> {
    let items = match data {
        Value::Array(items) => items,
        _ => return Err(schema_error("Input must be a JSON array".to_string())),
    };

    let mut validated = Vec::with_capacity(items.len());
    let mut seen_ids = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        let record = validate_record(item, index)?;

        // Duplicate check happens only after the item itself validates.
        if !seen_ids.insert(record.id) {
            return Err(schema_error(format!("Duplicate id found: {}", record.id)));
        }

        validated.push(record);
    }

    Ok(validated)
}

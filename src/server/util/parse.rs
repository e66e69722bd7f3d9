use serde_json::Value;

use crate::server::error::AppError;

/// Returns the trimmed value, or `None` when absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the value untouched, or `None` when absent or empty.
///
/// Used for passwords, where surrounding whitespace is significant.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses a list of item ids from loosely typed JSON values.
///
/// Accepts JSON integers and strings containing an integer. Duplicates are removed
/// while preserving first occurrence order.
///
/// # Arguments
/// - `values` - Raw ids from the request body
///
/// # Returns
/// - `Ok(Vec<i32>)` - Validated ids
/// - `Err(AppError::BadRequest)` - At least one value is not an `i32`
pub fn parse_item_ids(values: Vec<Value>) -> Result<Vec<i32>, AppError> {
    let mut ids = Vec::with_capacity(values.len());

    for value in values {
        let id = match &value {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        }
        .ok_or_else(|| AppError::BadRequest(format!("Invalid item id: {}", value)))?;

        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

use serde_json::Value;

use crate::error::CoreError;
use crate::method::WriteMethod;

/// Check the method and body of a batch request before any element is looked at.
///
/// The checks run in a fixed order: body present, method supported, body is
/// a JSON array, array not empty.
pub fn check_request_shape(
    method: &str,
    body: &[u8],
) -> Result<(WriteMethod, Vec<Value>), CoreError> {
    if body.is_empty() {
        return Err(CoreError::NoBody);
    }

    let method = WriteMethod::from_http(method)?;

    let parsed: Value =
        serde_json::from_slice(body).map_err(|e| CoreError::MalformedBody(e.to_string()))?;
    let elements = match parsed {
        Value::Array(elements) => elements,
        other => {
            return Err(CoreError::MalformedBody(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    if elements.is_empty() {
        return Err(CoreError::NoProducts);
    }

    Ok((method, elements))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

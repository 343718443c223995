use serde_json::{Map, Value};

/// Returned when the response parses but carries no usable text.
pub const NO_CONTENT_FOUND: &str = "No content found in response";

/// Prefix of the diagnostic returned when the response cannot be parsed.
pub const ERROR_PARSING_PREFIX: &str = "Error Parsing: ";

/// A JSON value of the wrong type at some level of the response.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid type: {found}, expected {expected} at `{path}`")]
struct ShapeError {
    found: &'static str,
    expected: &'static str,
    path: &'static str,
}

/// Extract the answer text from a raw `generateContent` response body.
///
/// The body is expected to look like
/// `{"candidates":[{"content":{"parts":[{"text":"..."}]}}]}` where any level
/// may be missing, `null` or empty. Never fails: malformed JSON or a level
/// of the wrong type yields `"Error Parsing: <reason>"`, and a response
/// without text yields [`NO_CONTENT_FOUND`]. Only the first candidate and
/// its first part are consulted.
pub fn extract_answer(raw: &str) -> String {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return format!("{ERROR_PARSING_PREFIX}{e}"),
    };

    match first_text(&value) {
        Ok(Some(text)) => text.to_string(),
        Ok(None) => NO_CONTENT_FOUND.to_string(),
        Err(e) => format!("{ERROR_PARSING_PREFIX}{e}"),
    }
}

fn first_text(response: &Value) -> Result<Option<&str>, ShapeError> {
    let response = object(response, "response")?;

    let candidate = match array(response.get("candidates"), "candidates")? {
        None | Some([]) => return Ok(None),
        Some([first, ..]) => object(first, "candidates[0]")?,
    };

    let content = match candidate.get("content") {
        None | Some(Value::Null) => return Ok(None),
        Some(content) => object(content, "candidates[0].content")?,
    };

    let part = match array(content.get("parts"), "candidates[0].content.parts")? {
        None | Some([]) => return Ok(None),
        Some([first, ..]) => object(first, "candidates[0].content.parts[0]")?,
    };

    match part.get("text") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(other) => Err(mismatch(other, "a string", "candidates[0].content.parts[0].text")),
    }
}

fn object<'a>(value: &'a Value, path: &'static str) -> Result<&'a Map<String, Value>, ShapeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(mismatch(other, "an object", path)),
    }
}

/// Missing and `null` both read as absent.
fn array<'a>(value: Option<&'a Value>, path: &'static str) -> Result<Option<&'a [Value]>, ShapeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(mismatch(other, "an array", path)),
    }
}

fn mismatch(found: &Value, expected: &'static str, path: &'static str) -> ShapeError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };

    ShapeError {
        found,
        expected,
        path,
    }
}

// Field level validation errors in the shape clients already consume.
//
// Purpose
// - Turn `validator` failures into a flat list of `{type, value, msg, path, location}` items.
//
// Boundaries
// - No HTTP types here. The http layer wraps the list into a 400 response.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use validator::ValidationErrors;

const FIELD: &str = "field";
const BODY: &str = "body";

// Never echoed back to clients.
const SECRET_FIELDS: [&str; 1] = ["password"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    pub msg: String,
    pub path: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn new(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            kind: FIELD,
            value: None,
            msg: msg.into(),
            path: path.into(),
            location: BODY,
        }
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        if !SECRET_FIELDS.contains(&self.path.as_str()) {
            self.value = Some(value);
        }
        self
    }
}

/// Flatten `validator` errors into wire errors, ordered by path so responses are stable.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, failures) in errors.field_errors() {
        let field: &str = &field;
        let path = camel_case(field);
        for failure in failures.iter() {
            let msg = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {path}"));
            let mut error = FieldError::new(path.clone(), msg);
            if let Some(value) = failure.params.get("value") {
                error = error.with_value(value.clone());
            }
            out.push(error);
        }
    }
    sort_by_path(&mut out);
    out
}

/// Merge the outcome of a derived `validate()` with hand written checks.
pub fn merge(result: Result<(), ValidationErrors>, extra: Vec<FieldError>) -> Vec<FieldError> {
    let mut out = match result {
        Ok(()) => Vec::new(),
        Err(errors) => field_errors(&errors),
    };
    out.extend(extra);
    sort_by_path(&mut out);
    out
}

fn sort_by_path(errors: &mut [FieldError]) {
    errors.sort_by(|a, b| a.path.cmp(&b.path));
}

/// Calendar date, or date and time with optional fraction and offset.
pub fn is_iso8601(raw: &str) -> bool {
    const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
        || LOCAL_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(raw, fmt).is_ok())
}

pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

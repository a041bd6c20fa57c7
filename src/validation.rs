//! # Request Validation
//!
//! Declared-shape checks applied to request bodies before any store call.
//!
//! Validation is a pure function from raw JSON to a normalized value or a
//! field-level rejection. It holds no state and performs no I/O. Unknown
//! extra fields are ignored, not rejected. Path-parameter validation for
//! the relational namespace (id must be an integer) happens at extraction
//! time in the HTTP layer; the document namespace treats the id as an
//! opaque string and defers format checking to the store adapter.

use serde_json::Value;
use thiserror::Error;

use crate::model::ResourceBody;

/// Rejection produced when a request body does not match the declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body was not a JSON object.
    #[error("body must be a JSON object")]
    NotAnObject,

    /// A required field was absent.
    #[error("body must have required property '{0}'")]
    MissingField(&'static str),

    /// A required field was present with the wrong primitive type.
    #[error("property '{0}' must be a string")]
    WrongType(&'static str),
}

/// Validates a create/update body against `{name: string, description: string}`.
///
/// Both fields are required strings; `description` may be empty. Any other
/// fields in the object are ignored.
pub fn parse_resource_body(value: &Value) -> Result<ResourceBody, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = require_string(object, "name")?;
    let description = require_string(object, "description")?;

    Ok(ResourceBody { name, description })
}

fn require_string(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType(field)),
    }
}

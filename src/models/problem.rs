//! Problem input type.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::io::Read;

/// Caller-supplied input to the pipeline.
///
/// Stages dispatch on [`Problem::classify`] with an exhaustive `match`.
/// Anything that is neither text nor a mapping degrades to empty results
/// downstream instead of failing.
///
/// Deserialization always goes through `From<Value>`, so a serialized
/// problem reads back with the same classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Problem {
    /// Free-form text.
    Text(String),
    /// A key/value mapping.
    Structured(Map<String, Value>),
    /// Any other shape (numbers, booleans, null, arrays).
    Other(Value),
}

/// Borrowed view of a [`Problem`] by shape.
///
/// `Other` wrapping a JSON string or object is viewed as text or a mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProblemRef<'a> {
    /// Text input.
    Text(&'a str),
    /// Mapping input.
    Structured(&'a Map<String, Value>),
    /// Anything else.
    Other(&'a Value),
}

impl Problem {
    /// Creates a text problem.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the shape the pipeline dispatches on.
    #[must_use]
    pub fn classify(&self) -> ProblemRef<'_> {
        match self {
            Self::Text(text) | Self::Other(Value::String(text)) => ProblemRef::Text(text),
            Self::Structured(map) | Self::Other(Value::Object(map)) => ProblemRef::Structured(map),
            Self::Other(value) => ProblemRef::Other(value),
        }
    }

    /// Returns a short label for the shape, used in logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self.classify() {
            ProblemRef::Text(_) => "text",
            ProblemRef::Structured(_) => "structured",
            ProblemRef::Other(_) => "other",
        }
    }

    /// Parses a problem from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `input` is not valid JSON.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| crate::Error::InvalidInput(format!("problem is not valid JSON: {e}")))?;
        Ok(Self::from(value))
    }

    /// Builds a problem from raw input, as text or as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `json` is set and `input` does not parse.
    pub fn from_input(input: String, json: bool) -> crate::Result<Self> {
        if json {
            Self::from_json(&input)
        } else {
            Ok(Self::from(input))
        }
    }

    /// Reads raw input from `reader` and builds a problem from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OperationFailed`] if reading fails, or
    /// [`crate::Error::InvalidInput`] if `json` is set and the input does not parse.
    pub fn read_from<R: Read>(mut reader: R, json: bool) -> crate::Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|e| crate::Error::OperationFailed {
                operation: "read_problem".to_string(),
                cause: e.to_string(),
            })?;
        Self::from_input(input, json)
    }
}

impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<Value> for Problem {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Structured(map),
            other => Self::Other(other),
        }
    }
}

impl From<String> for Problem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Problem {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Map<String, Value>> for Problem {
    fn from(map: Map<String, Value>) -> Self {
        Self::Structured(map)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Structured(map) => write!(f, "{}", Value::Object(map.clone())),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

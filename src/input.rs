//! Process list parsing.
//!
//! Two formats are accepted:
//!
//! - **Line format**: one `name arrival burst` triple per line, e.g. `P1 0 8`.
//!   Blank lines and `#` comments are skipped; a line reading `fin` or `end`
//!   (any case) stops input.
//! - **JSON**: an array of `{"name", "arrival_time", "burst_time"}` objects.
//!
//! Every parsed process is validated before it is returned.

use std::fmt;

use crate::models::ProcessSpec;
use crate::validation::{validate_batch, validate_process, ValidationError};

/// Errors produced while reading process definitions.
#[derive(Debug)]
pub enum InputError {
    /// A line did not have exactly three fields.
    FieldCount { line: usize, found: usize },
    /// A time field was not an integer.
    InvalidNumber { line: usize, field: String },
    /// The values parsed but are not a valid process.
    Invalid { line: usize, source: ValidationError },
    /// Malformed JSON document.
    Json(serde_json::Error),
    /// One or more JSON entries failed validation.
    InvalidBatch(Vec<ValidationError>),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::FieldCount { line, found } => write!(
                f,
                "line {line}: expected 3 values (name arrival burst), found {found}"
            ),
            InputError::InvalidNumber { line, field } => {
                write!(f, "line {line}: '{field}' is not an integer")
            }
            InputError::Invalid { line, source } => write!(f, "line {line}: {source}"),
            InputError::Json(e) => write!(f, "invalid JSON process list: {e}"),
            InputError::InvalidBatch(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid process list: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Invalid { source, .. } => Some(source),
            InputError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Json(e)
    }
}

/// Whether a line terminates interactive input.
pub fn is_terminator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.eq_ignore_ascii_case("fin") || trimmed.eq_ignore_ascii_case("end")
}

/// Parses a single `name arrival burst` line.
///
/// `line_no` is only used for error reporting.
pub fn parse_process_line(line: &str, line_no: usize) -> Result<ProcessSpec, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(InputError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let parse_time = |field: &str| {
        field.parse::<i64>().map_err(|_| InputError::InvalidNumber {
            line: line_no,
            field: field.to_string(),
        })
    };

    let spec = ProcessSpec::new(fields[0], parse_time(fields[1])?, parse_time(fields[2])?);
    validate_process(&spec).map_err(|source| InputError::Invalid {
        line: line_no,
        source,
    })?;
    Ok(spec)
}

/// Parses a multi-line process list, stopping at the first terminator line.
///
/// Fails on the first malformed line.
pub fn parse_process_list(text: &str) -> Result<Vec<ProcessSpec>, InputError> {
    let mut specs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if is_terminator(trimmed) {
            break;
        }
        specs.push(parse_process_line(trimmed, idx + 1)?);
    }
    Ok(specs)
}

/// Parses a JSON array of process definitions.
pub fn parse_json(text: &str) -> Result<Vec<ProcessSpec>, InputError> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(text)?;
    validate_batch(&specs).map_err(InputError::InvalidBatch)?;
    Ok(specs)
}

//! Tool argument validation.
//!
//! Checks caller arguments against a tool's declared parameters, applies
//! defaults and returns the normalized values. Parameters are checked in
//! declaration order and the first violation is reported.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    catalog::{ParamDefault, ParamKind, ParamSpec, ToolDefinition},
    dextools::chains::{self, Chain},
    error::{AppError, Result},
};

/// Arguments after validation, ready to be placed into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedArgs {
    /// Resolved chain, when the tool takes one.
    pub chain: Option<&'static Chain>,
    /// Normalized values, in declaration order. Absent optionals without a
    /// default are skipped.
    pub values: Vec<(&'static ParamSpec, String)>,
}

impl ValidatedArgs {
    /// Value of a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.iter().find(|(spec, _)| spec.name == name).map(|(_, value)| value.as_str())
    }
}

/// Validate `args` against `tool`'s parameters.
pub fn validate_args(
    tool: &'static ToolDefinition,
    args: &Map<String, Value>,
) -> Result<ValidatedArgs> {
    let mut chain = None;
    let mut values = Vec::with_capacity(tool.params.len());

    for spec in tool.params {
        let raw = match raw_value(spec, args)? {
            Some(raw) => raw,
            None if spec.required => return Err(AppError::MissingParameter(spec.name.to_string())),
            None => match default_value(spec.default) {
                Some(value) => {
                    values.push((spec, value));
                    continue;
                }
                None => continue,
            },
        };

        let value = match spec.kind {
            ParamKind::ChainId => {
                let resolved = chains::find_chain(&raw)
                    .ok_or_else(|| AppError::UnsupportedChain(raw.clone()))?;
                chain = Some(resolved);
                resolved.id.to_string()
            }
            ParamKind::Address(role) => {
                if !chains::is_valid_address(&raw, chain) {
                    return Err(AppError::InvalidAddress { role: role.as_str(), address: raw });
                }
                raw
            }
            ParamKind::Timestamp => {
                parse_timestamp(&raw).ok_or_else(|| AppError::InvalidDate {
                    param: spec.name.to_string(),
                    value: raw.clone(),
                })?;
                raw
            }
            ParamKind::Integer { min, max } => {
                let number = raw.parse::<u64>().map_err(|_| AppError::InvalidParameter {
                    param: spec.name.to_string(),
                    reason: format!("expected a non-negative integer, got '{}'", raw),
                })?;
                if !(min..=max).contains(&number) {
                    return Err(AppError::InvalidParameter {
                        param: spec.name.to_string(),
                        reason: format!("must be between {} and {}, got {}", min, max, number),
                    });
                }
                number.to_string()
            }
            ParamKind::SortOrder => {
                let order = raw.to_lowercase();
                if order != "asc" && order != "desc" {
                    return Err(AppError::InvalidParameter {
                        param: spec.name.to_string(),
                        reason: format!("must be 'asc' or 'desc', got '{}'", raw),
                    });
                }
                order
            }
            ParamKind::Text => raw,
        };

        values.push((spec, value));
    }

    check_date_range(&values)?;

    Ok(ValidatedArgs { chain, values })
}

/// Extract an argument as a trimmed string. `null` and blank strings count
/// as absent.
fn raw_value(spec: &ParamSpec, args: &Map<String, Value>) -> Result<Option<String>> {
    let value = match args.get(spec.name) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let raw = match (value, spec.kind) {
        (Value::String(s), _) => s.trim().to_string(),
        (Value::Number(n), ParamKind::Integer { .. }) => match n.as_u64() {
            Some(n) => n.to_string(),
            None => {
                return Err(AppError::InvalidParameter {
                    param: spec.name.to_string(),
                    reason: format!("expected a non-negative integer, got {}", n),
                })
            }
        },
        (other, _) => {
            return Err(AppError::InvalidParameter {
                param: spec.name.to_string(),
                reason: format!(
                    "expected a {}, got {}",
                    expected_type(spec.kind),
                    json_type(other)
                ),
            })
        }
    };

    Ok(if raw.is_empty() { None } else { Some(raw) })
}

fn default_value(default: ParamDefault) -> Option<String> {
    let year = Utc::now().year();
    match default {
        ParamDefault::None => None,
        ParamDefault::Text(text) => Some(text.to_string()),
        ParamDefault::Integer(n) => Some(n.to_string()),
        ParamDefault::YearStart => Some(format!("{}-01-01T00:00:00", year)),
        ParamDefault::YearEnd => Some(format!("{}-12-31T23:59:59", year)),
    }
}

fn expected_type(kind: ParamKind) -> &'static str {
    match kind {
        ParamKind::Integer { .. } => "integer",
        _ => "string",
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse an ISO 8601 timestamp.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`, with offset), naive date-times
/// with optional fractional seconds (`2024-01-01T00:00:00`, `2024-01-01T00:00`)
/// and plain dates (`2024-01-01`). Offsets are converted to UTC.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `from_date` must not come after `to_date`.
fn check_date_range(values: &[(&'static ParamSpec, String)]) -> Result<()> {
    let find = |name: &str| {
        values.iter().find(|(spec, _)| spec.name == name).and_then(|(_, v)| parse_timestamp(v))
    };

    if let (Some(from), Some(to)) = (find("from_date"), find("to_date")) {
        if from > to {
            return Err(AppError::InvalidParameter {
                param: "from_date".to_string(),
                reason: "must not be after to_date".to_string(),
            });
        }
    }
    Ok(())
}

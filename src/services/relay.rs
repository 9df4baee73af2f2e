//! Response relay.
//!
//! Turns upstream JSON (or a failure) into the envelope returned to callers.

use serde_json::{json, Value};

use crate::{
    catalog::{AddressRole, ResponseHook},
    error::AppError,
    types::ResponseEnvelope,
};

/// Wrap a successful upstream body.
///
/// DEXTools already answers with `{statusCode, data, ...}`; such bodies are
/// forwarded unchanged. Anything else is wrapped under the HTTP status.
pub fn relay_success(status: u16, body: Value, hook: ResponseHook) -> ResponseEnvelope {
    let mut body = match body {
        Value::Object(map) if map.contains_key("statusCode") && map.contains_key("data") => {
            Value::Object(map)
        }
        other => json!({ "statusCode": status, "data": other }),
    };

    if let ResponseHook::EmptyLocks(role) = hook {
        explain_empty_locks(&mut body, role);
    }

    ResponseEnvelope::Success(body)
}

/// Error envelope for a failed call.
pub fn relay_error(err: &AppError) -> ResponseEnvelope {
    ResponseEnvelope::from_error(err)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Most pools and tokens carry no locks, so an empty `data` is replaced by
/// an explicit `hasLocks: false` record.
fn explain_empty_locks(body: &mut Value, role: AddressRole) {
    let Some(map) = body.as_object_mut() else { return };
    if !map.get("data").map(is_empty).unwrap_or(false) {
        return;
    }

    let (message, note) = match role {
        AddressRole::Token => (
            "No token locks found for this token. This is normal - most tokens don't have \
             locked allocations.",
            "Token locks are a security feature where team tokens or allocations are locked \
             to prevent market dumps. Most tokens don't have this feature.",
        ),
        AddressRole::Pool | AddressRole::Factory => (
            "No liquidity locks found for this pool. This is normal - most pools don't have \
             locked liquidity.",
            "Liquidity locks are a security feature where developers lock their liquidity to \
             prevent 'rug pulls'. Most pools don't have this feature.",
        ),
    };

    map.insert("message".to_string(), Value::String(message.to_string()));
    map.insert("data".to_string(), json!({ "hasLocks": false, "note": note }));
}

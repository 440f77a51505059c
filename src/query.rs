//! Request-to-query-string encoding for GET and DELETE calls.
//!
//! Request structs are flattened to a parameter map through their serde
//! representation, so one routine serves every endpoint descriptor. The
//! formatting rules differ from plain JSON on purpose: booleans become
//! `1`/`0`, sequences repeat as `key[]=` pairs, and empty strings are
//! dropped entirely (the server treats absent and empty filters the same
//! for reads, unlike writes where JSON bodies keep them).

use serde::Serialize;
use serde_json::{Map, Value};

/// Flatten a request value into a parameter map.
///
/// Non-struct values contribute no parameters, matching the dispatcher's
/// tolerance for unit request types.
pub(crate) fn to_params<Q>(request: &Q) -> Map<String, Value>
where
    Q: Serialize + ?Sized,
{
    match serde_json::to_value(request) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Append the encoded parameters to `path`, choosing `?` or `&` by whether
/// the path already has a query component. Paths come back unchanged when
/// every parameter is filtered out.
pub(crate) fn append_query(path: &str, params: &Map<String, Value>) -> String {
    let mut pairs: Vec<String> = Vec::new();
    for (key, value) in params {
        encode_entry(&mut pairs, key, value);
    }

    if pairs.is_empty() {
        return path.to_string();
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{}", pairs.join("&"))
}

fn encode_entry(pairs: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(text) => {
            if !text.is_empty() {
                pairs.push(format!("{key}={}", urlencoding::encode(text)));
            }
        }
        Value::Number(number) => pairs.push(format!("{key}={number}")),
        Value::Bool(true) => pairs.push(format!("{key}=1")),
        Value::Bool(false) => pairs.push(format!("{key}=0")),
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Number(number) => pairs.push(format!("{key}[]={number}")),
                    Value::String(text) => {
                        if !text.is_empty() {
                            pairs.push(format!("{key}[]={}", urlencoding::encode(text)));
                        }
                    }
                    other => {
                        pairs.push(format!("{key}[]={}", urlencoding::encode(&other.to_string())))
                    }
                }
            }
        }
        other => pairs.push(format!("{key}={}", urlencoding::encode(&other.to_string()))),
    }
}

//! Decoding of Firestore's typed-value JSON encoding into plain JSON.
//!
//! Every field value on the wire is an object with exactly one key naming
//! its type, e.g. `{"stringValue": "hi"}` or
//! `{"arrayValue": {"values": [{"stringValue": "a"}]}}`.

use serde_json::{Map, Number, Value};

use roomcast_core::error::AppError;
use roomcast_core::result::AppResult;

/// Decode a `fields` map.
pub fn decode_fields(fields: &Map<String, Value>) -> AppResult<Map<String, Value>> {
    fields
        .iter()
        .map(|(name, value)| {
            decode_value(value)
                .map(|decoded| (name.clone(), decoded))
                .map_err(|e| AppError::validation(format!("Field '{name}': {}", e.message)))
        })
        .collect()
}

/// Decode one typed value.
pub fn decode_value(value: &Value) -> AppResult<Value> {
    let Some(object) = value.as_object() else {
        return Err(AppError::validation("Typed value must be a JSON object"));
    };
    let mut entries = object.iter();
    let (Some((tag, inner)), None) = (entries.next(), entries.next()) else {
        return Err(AppError::validation(
            "Typed value must have exactly one type key",
        ));
    };

    match tag.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => match inner {
            Value::Bool(_) => Ok(inner.clone()),
            _ => Err(AppError::validation("booleanValue must be a boolean")),
        },
        // int64 travels as a decimal string.
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|_| AppError::validation(format!("Invalid integerValue '{s}'"))),
            Value::Number(_) => Ok(inner.clone()),
            _ => Err(AppError::validation("integerValue must be a string")),
        },
        "doubleValue" => match inner {
            Value::Number(_) => Ok(inner.clone()),
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| AppError::validation(format!("Invalid doubleValue '{s}'"))),
            _ => Err(AppError::validation("doubleValue must be a number")),
        },
        "stringValue" | "timestampValue" | "bytesValue" | "referenceValue" => match inner {
            Value::String(_) => Ok(inner.clone()),
            _ => Err(AppError::validation(format!("{tag} must be a string"))),
        },
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            values
                .iter()
                .map(decode_value)
                .collect::<AppResult<Vec<_>>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => decode_fields(fields).map(Value::Object),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(AppError::validation(format!("Unknown value type '{other}'"))),
    }
}

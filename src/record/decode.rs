//! Best-effort decoding of engine records.
//!
//! Every field access is an optional lookup with an explicit default. The only
//! hard failure is an in-band error, which is checked before anything else.

use super::event::ProgressEvent;
use crate::error::{Error, Result};
use serde_json::Value;

/// Decode one raw record into a [`ProgressEvent`].
///
/// Missing or wrong-typed fields default to an empty string or zero. A
/// non-empty `error` string (or `errorDetail.message`) is returned as
/// [`Error::InBand`].
pub fn decode(record: &Value) -> Result<ProgressEvent> {
    if let Some(message) = in_band_error(record) {
        return Err(Error::InBand(message.to_owned()));
    }

    let detail = record.get("progressDetail");
    Ok(ProgressEvent {
        id: string_field(record, "id"),
        status: string_field(record, "status"),
        current: byte_field(detail, "current"),
        total: byte_field(detail, "total"),
    })
}

fn in_band_error(record: &Value) -> Option<&str> {
    let error = record.get("error").and_then(Value::as_str).filter(|s| !s.is_empty());
    error.or_else(|| {
        record
            .get("errorDetail")
            .and_then(|detail| detail.get("message"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}

fn string_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

// Numbers may arrive as floats; truncate and keep them non-negative.
fn byte_field(detail: Option<&Value>, key: &str) -> i64 {
    detail
        .and_then(|d| d.get(key))
        .and_then(Value::as_f64)
        .map(|n| n.trunc() as i64)
        .unwrap_or(0)
        .max(0)
}

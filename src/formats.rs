use crate::DeferredNow;
use log::kv::{self, Key, Value, VisitSource};
use log::Record;
use serde_json::{Map, Value as JsonValue};
use std::io::{Error as IoError, ErrorKind, Write};

/// Function type for format functions.
///
/// If you want to write the log lines in your own format,
/// implement a function with this signature and provide it to
/// [`Logger::format()`](struct.Logger.html#method.format).
///
/// ## Parameters
///
/// - `write`: the output stream
///
/// - `now`: the timestamp that you should use if you want a timestamp to appear
///   in the log line
///
/// - `record`: the log line's content and metadata, as provided by the log
///   crate's macros.
///
pub type FormatFunction = fn(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IoError>;

/// A logline-formatter that produces compact single-line text like <br>
/// ```2023-07-11T08:15:30Z INFO listening port=8080 peer=::1```
///
/// The line consists of the RFC3339 UTC timestamp, the uppercase severity,
/// the message, and one `key=value` token per attribute, in attribute order.
/// String values are written verbatim. Values of other kinds are written
/// through their structured serialization: scalars as-is, and nested maps
/// flattened into dotted keys, so an attribute `req = {"peer": {"ip": "::1"}}`
/// becomes `req.peer.ip=::1`. Attributes with an empty key are skipped.
///
/// # Errors
///
/// See `std::write`
pub fn text_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IoError> {
    write!(
        w,
        "{} {} {}",
        now.format_rfc3339(),
        record.level(),
        record.args()
    )?;
    let mut visitor = TextAttrVisitor { w, error: None };
    if record.key_values().visit(&mut visitor).is_err() {
        return Err(visitor
            .error
            .unwrap_or_else(|| IoError::new(ErrorKind::Other, "attribute source failed")));
    }
    Ok(())
}

/// A logline-formatter that produces one JSON object per line, like <br>
/// ```{"timestamp":"2023-07-11T08:15:30Z","severity":"INFO","message":"listening","source":"src/main.rs:42","port":8080}```
///
/// The keys `timestamp` (RFC3339 UTC), `severity` (uppercase), and `message`
/// are always present; `source` (`file:line`) is added when the record carries
/// its origin. Every attribute becomes an additional key with its structurally
/// serialized value, so nested attributes stay nested. Attributes with an
/// empty key are skipped; an attribute named like a standard key replaces it.
///
/// # Errors
///
/// See `std::write`
pub fn json_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IoError> {
    let mut object = Map::new();
    object.insert(
        "timestamp".to_string(),
        JsonValue::String(now.format_rfc3339()),
    );
    object.insert(
        "severity".to_string(),
        JsonValue::String(record.level().to_string()),
    );
    object.insert(
        "message".to_string(),
        JsonValue::String(record.args().to_string()),
    );
    if let (Some(file), Some(line)) = (record.file(), record.line()) {
        object.insert(
            "source".to_string(),
            JsonValue::String(format!("{}:{}", file, line)),
        );
    }

    let mut visitor = JsonAttrVisitor {
        object: &mut object,
    };
    record
        .key_values()
        .visit(&mut visitor)
        .map_err(|_| IoError::new(ErrorKind::Other, "attribute source failed"))?;

    let line = serde_json::to_string(&object)?;
    w.write_all(line.as_bytes())
}

struct TextAttrVisitor<'a> {
    w: &'a mut dyn Write,
    error: Option<IoError>,
}

impl<'kvs> VisitSource<'kvs> for TextAttrVisitor<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        if let Err(e) = append_attr(self.w, key.as_str(), &value) {
            self.error = Some(e);
            return Err(kv::Error::msg("appending attribute failed"));
        }
        Ok(())
    }
}

fn append_attr(w: &mut dyn Write, key: &str, value: &Value<'_>) -> Result<(), IoError> {
    if key.is_empty() {
        return Ok(());
    }
    if let Some(s) = value.to_borrowed_str() {
        return write!(w, " {}={}", key, s);
    }
    match serde_json::to_value(value) {
        Ok(json) => append_json_attr(w, key, &json),
        // values that refuse structured serialization fall back to Display
        Err(_) => write!(w, " {}={}", key, value),
    }
}

fn append_json_attr(w: &mut dyn Write, key: &str, json: &JsonValue) -> Result<(), IoError> {
    match json {
        JsonValue::Object(map) => {
            for (name, value) in map {
                append_json_attr(w, &format!("{}.{}", key, name), value)?;
            }
            Ok(())
        }
        JsonValue::String(s) => write!(w, " {}={}", key, s),
        other => write!(w, " {}={}", key, other),
    }
}

struct JsonAttrVisitor<'a> {
    object: &'a mut Map<String, JsonValue>,
}

impl<'kvs> VisitSource<'kvs> for JsonAttrVisitor<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        if key.as_str().is_empty() {
            return Ok(());
        }
        let json = serde_json::to_value(&value)
            .unwrap_or_else(|_| JsonValue::String(value.to_string()));
        self.object.insert(key.as_str().to_string(), json);
        Ok(())
    }
}

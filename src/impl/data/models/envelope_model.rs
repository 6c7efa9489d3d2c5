use serde::Deserialize;
use serde_json::Value;

/// API responses come either wrapped as `{"data": ...}` (optionally with
/// status fields alongside) or bare. A body carrying a `data` key is always
/// treated as wrapped, so errors inside `data` surface as they are.
pub(crate) fn parse_envelope<T>(s: &str) -> serde_json::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_str::<Value>(s)? {
        Value::Object(mut body) if body.contains_key("data") => {
            T::deserialize(body.remove("data").unwrap_or(Value::Null))
        }
        body => T::deserialize(body),
    }
}

//! Generic recursive key rewriting over JSON values.

use serde_json::Value;

/// Rewrite every object key in `value` with `key_fn`, recursing through
/// nested objects and arrays.
///
/// Scalars (strings, numbers, booleans, null) are returned unchanged, and
/// array order and length are preserved. If two distinct keys map to the
/// same rewritten key, the one visited last in the source map's iteration
/// order wins, matching plain map-construction semantics.
pub fn rewrite_keys<F>(value: Value, key_fn: &F) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key_fn(&key), rewrite_keys(value, key_fn)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, key_fn))
                .collect(),
        ),
        scalar => scalar,
    }
}

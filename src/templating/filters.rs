//! Custom Tera filters.
//!
//! Filters here are total: malformed or missing input renders as the empty
//! string instead of aborting the render. Any decision that could fail is
//! made in the tree builder before rendering starts.

use std::collections::HashMap;

use tera::Value;

/// Replace hyphens with underscores, for Python-safe identifiers derived
/// from project names (e.g. the Postgres database name).
///
/// Non-string input renders as the empty string.
pub fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let out = match value.as_str() {
        Some(s) => s.replace('-', "_"),
        None => String::new(),
    };
    Ok(Value::String(out))
}

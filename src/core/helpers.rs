//! Reshaping utilities over record collections.
//!
//! Every helper fails with [`CatalogError::MissingField`] when a key it is
//! asked to read is absent from a record, and preserves input order.

use crate::domain::model::Record;
use crate::utils::error::{CatalogError, Result};
use serde_json::{Number, Value};
use std::collections::{HashMap, HashSet};

/// Canonical text of a JSON value, used to hash values that `Value` itself
/// cannot hash.
///
/// Numbers compare by value, so `1` and `1.0` share a key. Numbers nested in
/// arrays or objects still compare by their JSON text.
pub fn value_key(value: &Value) -> String {
    match value {
        Value::Number(n) => number_key(n),
        other => other.to_string(),
    }
}

fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // integral floats inside the exactly representable range print as integers
        Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// `record[field]` for every record, in input order.
pub fn project(records: &[Record], field: &str) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|record| record.field(field).cloned())
        .collect()
}

/// Concatenation of [`project`] over each group, in order.
pub fn flatten_project(groups: &[Vec<Record>], field: &str) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    for group in groups {
        values.extend(project(group, field)?);
    }
    Ok(values)
}

/// New records holding only `fields`.
pub fn pick_fields(records: &[Record], fields: &[&str]) -> Result<Vec<Record>> {
    records
        .iter()
        .map(|record| {
            let mut data = HashMap::with_capacity(fields.len());
            for field in fields {
                data.insert(field.to_string(), record.field(field)?.clone());
            }
            Ok(Record { data })
        })
        .collect()
}

/// Merges every `(l, r)` pair whose `key` values are equal, right winning on
/// field collisions.
///
/// Output is left-major: all matches of the first left record in right's
/// order, then the matches of the second left record, and so on. Duplicate
/// keys on either side yield every combination.
pub fn inner_join(left: &[Record], right: &[Record], key: &str) -> Result<Vec<Record>> {
    let mut index: HashMap<String, Vec<&Record>> = HashMap::new();
    for record in right {
        index
            .entry(value_key(record.field(key)?))
            .or_default()
            .push(record);
    }

    let mut joined = Vec::new();
    for l in left {
        let Some(matches) = index.get(&value_key(l.field(key)?)) else {
            continue;
        };
        for r in matches {
            let mut merged = l.clone();
            merged
                .data
                .extend(r.data.iter().map(|(k, v)| (k.clone(), v.clone())));
            joined.push(merged);
        }
    }

    Ok(joined)
}

/// Moves each record's `old_name` value to `new_name`.
pub fn rename_field(records: Vec<Record>, old_name: &str, new_name: &str) -> Result<Vec<Record>> {
    records
        .into_iter()
        .map(|mut record| {
            let value = record
                .data
                .remove(old_name)
                .ok_or_else(|| CatalogError::missing_field(old_name))?;
            record.data.insert(new_name.to_string(), value);
            Ok(record)
        })
        .collect()
}

/// Drops repeated values, keeping first occurrences in order.
pub fn distinct(values: Vec<Value>) -> Vec<Value> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value_key(value)))
        .collect()
}

/// A JSON array of objects as a record collection.
pub fn records_from_value(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Array(items) => items.into_iter().map(Record::from_value).collect(),
        other => Err(CatalogError::schema(format!(
            "expected a JSON array of objects, got {}",
            other
        ))),
    }
}

pub fn value_as_string(value: &Value, field: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CatalogError::schema(format!("field '{}' is not a string: {}", field, value)))
}

pub fn values_as_strings(values: &[Value], field: &str) -> Result<Vec<String>> {
    values.iter().map(|v| value_as_string(v, field)).collect()
}

//! Predicates and enforcement functions.
//!
//! Enforcement functions take `(value, property_name)` and either return the
//! extracted, typed value or a [`FormError`] naming the property. They are
//! pure: nothing is mutated on either path.

use chrono::NaiveDate;

use super::value::Value;
use crate::error::{FormError, Result};

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A string containing at least one non-whitespace character.
pub fn is_non_empty_string(value: &Value) -> bool {
    matches!(value, Value::Str(s) if !s.trim().is_empty())
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// An integer. Booleans are not integers.
pub fn is_int(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

/// A tuple of one or more integers.
pub fn is_int_tuple(value: &Value) -> bool {
    matches!(value, Value::Tuple(items) if !items.is_empty() && items.iter().all(is_int))
}

/// A non-empty map whose keys and values are all strings.
pub fn is_string_keyed_string_map(value: &Value) -> bool {
    matches!(value, Value::Map(entries) if !entries.is_empty()
        && entries.iter().all(|(k, v)| matches!((k, v), (Value::Str(_), Value::Str(_)))))
}

// ---------------------------------------------------------------------------
// Enforcement on dynamic values
// ---------------------------------------------------------------------------

/// Property names end up in error messages, so they must be readable.
fn check_property_name(property: &str) -> Result<()> {
    if property.trim().is_empty() {
        return Err(FormError::wrong_type("property_name", "a non-blank string"));
    }
    Ok(())
}

fn check_not_null(value: &Value, property: &str) -> Result<()> {
    if value.is_null() {
        return Err(FormError::NullValue(property.to_owned()));
    }
    check_property_name(property)
}

/// Require a non-blank string.
pub fn enforce_string<'a>(value: &'a Value, property: &str) -> Result<&'a str> {
    check_not_null(value, property)?;
    match value {
        Value::Str(s) if s.trim().is_empty() => Err(FormError::EmptyString(property.to_owned())),
        Value::Str(s) => Ok(s),
        _ => Err(FormError::wrong_type(property, "a string")),
    }
}

/// Require a calendar date.
pub fn enforce_date(value: &Value, property: &str) -> Result<NaiveDate> {
    check_not_null(value, property)?;
    match value {
        Value::Date(d) => Ok(*d),
        _ => Err(FormError::wrong_type(property, "a date")),
    }
}

/// Require an integer of any sign.
pub fn enforce_int(value: &Value, property: &str) -> Result<i64> {
    check_not_null(value, property)?;
    match value {
        Value::Int(n) => Ok(*n),
        _ => Err(FormError::wrong_type(property, "an int")),
    }
}

/// Require an integer `>= 0`.
pub fn enforce_non_negative_int(value: &Value, property: &str) -> Result<i64> {
    let n = enforce_int(value, property)?;
    enforce_non_negative(n, property)?;
    Ok(n)
}

/// Require an integer `> 0`.
pub fn enforce_positive_int(value: &Value, property: &str) -> Result<i64> {
    let n = enforce_int(value, property)?;
    enforce_positive(n, property)?;
    Ok(n)
}

/// Require a tuple of one or more integers.
pub fn enforce_int_tuple(value: &Value, property: &str) -> Result<Vec<i64>> {
    check_not_null(value, property)?;
    let items = match value {
        Value::Tuple(items) => items,
        _ => return Err(FormError::wrong_type(property, "an int tuple")),
    };
    if items.is_empty() {
        return Err(FormError::EmptyCollection(property.to_owned()));
    }
    items
        .iter()
        .map(|item| {
            item.as_int()
                .ok_or_else(|| FormError::wrong_type(property, "a tuple of ints only"))
        })
        .collect()
}

/// Require a non-empty sequence (list or tuple) of non-blank strings.
pub fn enforce_string_list(value: &Value, property: &str) -> Result<Vec<String>> {
    check_not_null(value, property)?;
    let items = match value {
        Value::List(items) | Value::Tuple(items) => items,
        _ => return Err(FormError::wrong_type(property, "a sequence of strings")),
    };
    if items.is_empty() {
        return Err(FormError::EmptyCollection(property.to_owned()));
    }
    items
        .iter()
        .map(|item| enforce_string(item, property).map(str::to_owned))
        .collect()
}

/// Require a non-empty map of string keys to string values.
pub fn enforce_string_map(value: &Value, property: &str) -> Result<Vec<(String, String)>> {
    check_not_null(value, property)?;
    let entries = match value {
        Value::Map(entries) => entries,
        _ => return Err(FormError::wrong_type(property, "a map")),
    };
    if entries.is_empty() {
        return Err(FormError::EmptyCollection(property.to_owned()));
    }
    entries
        .iter()
        .map(|(k, v)| match (k, v) {
            (Value::Str(k), Value::Str(v)) => Ok((k.clone(), v.clone())),
            _ => Err(FormError::wrong_type(property, "a map of string keys to string values")),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Enforcement on typed values
// ---------------------------------------------------------------------------

/// Typed counterpart of [`enforce_string`] for callers that already hold a `&str`.
pub fn enforce_text(value: &str, property: &str) -> Result<()> {
    check_property_name(property)?;
    if value.trim().is_empty() {
        return Err(FormError::EmptyString(property.to_owned()));
    }
    Ok(())
}

pub fn enforce_non_negative(value: i64, property: &str) -> Result<()> {
    check_property_name(property)?;
    if value < 0 {
        return Err(FormError::out_of_range(property, format!("must not be negative, got {value}")));
    }
    Ok(())
}

pub fn enforce_positive(value: i64, property: &str) -> Result<()> {
    check_property_name(property)?;
    if value <= 0 {
        return Err(FormError::out_of_range(property, format!("must be positive, got {value}")));
    }
    Ok(())
}

/// Narrow an already-validated integer to `i32`.
pub fn to_i32(value: i64, property: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| FormError::out_of_range(property, format!("{value} does not fit in 32 bits")))
}

//! Serde helpers for inconsistent vendor JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Accept the several spellings vendors use for boolean flags.
//! - Read an explicit `null` as the field's default.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//! - Normalizing units or performing domain conversions.
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - `null` is treated like an absent field.
//! - These helpers must not log or print values; errors are generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    U64(u64),
    I64(i64),
    String(String),
}

/// Keep a string-or-number field as its string form.
pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(StringOrNumber::String(s)) => Ok(Some(s)),
        Some(StringOrNumber::U64(v)) => Ok(Some(v.to_string())),
        Some(StringOrNumber::I64(v)) => Ok(Some(v.to_string())),
        Some(StringOrNumber::F64(v)) => Ok(Some(v.to_string())),
    }
}

/// Integer field that may arrive as a number, a numeric string, or `null` (read as 0).
///
/// Fractional values are truncated.
pub fn i64_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    match value {
        None => Ok(0),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(0),
        Some(StringOrNumber::String(s)) => s.trim().parse::<i64>().map_err(D::Error::custom),
        Some(StringOrNumber::U64(v)) => i64::try_from(v).map_err(D::Error::custom),
        Some(StringOrNumber::I64(v)) => Ok(v),
        Some(StringOrNumber::F64(v)) => Ok(v as i64),
    }
}

/// Boolean flag spelled as `true`, `1`, `"1"` or `"true"`; anything else is false.
pub fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Flag>::deserialize(deserializer)?;
    Ok(match value {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::U64(v)) => v == 1,
        Some(Flag::I64(v)) => v == 1,
        Some(Flag::String(s)) => {
            let s = s.trim();
            s == "1" || s.eq_ignore_ascii_case("true")
        }
    })
}

/// Any `Default` field where the vendor may send `null` instead of omitting the key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

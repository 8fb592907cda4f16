//! Wire types returned by the user lookup endpoint.
//!
//! DESIGN
//! ======
//! The endpoint returns a much larger record (address, company, ...). Only the
//! fields the form renders are kept; everything else is ignored by serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};

/// A user record as returned by the lookup endpoint.
///
/// `User::default()` is the "nothing fetched yet" value: the name display
/// renders it as empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Numeric user identifier; 0 when absent or not a non-negative integer.
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl User {
    /// Whether this is still the placeholder value from before any fetch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }
}

/// Accept whatever the endpoint sends for `id`. Only `name` is rendered, so an
/// unusable id decodes as 0 rather than failing the lookup.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let id = match value {
        serde_json::Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && float.fract() == 0.0 && *float >= 0.0 && *float <= u64::MAX as f64)
                .map(|float| float as u64)
        }),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(id.unwrap_or_default())
}

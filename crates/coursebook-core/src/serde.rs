use serde::{Deserialize, Deserializer};

/// Treats a JSON `null` the same as an absent or empty string.
///
/// Combine with `#[serde(default)]` so that required text fields can be
/// reported by validation instead of failing deserialization.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

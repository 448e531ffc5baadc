use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = serde_json::Value::String(normalized);
    serde_json::from_value(json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

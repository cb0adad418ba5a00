use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn list_items_url(graph_url: &str, site_id: &str, list_id: &str) -> String {
    format!(
        "{}/sites/{}/lists/{}/items?$select=fields&$expand=fields",
        graph_url.trim_end_matches('/'),
        site_id,
        list_id
    )
}

pub fn lists_url(graph_url: &str, site_id: &str) -> String {
    format!("{}/sites/{}/lists", graph_url.trim_end_matches('/'), site_id)
}

pub fn token_url(authority_url: &str, tenant_id: &str) -> String {
    format!(
        "{}/{}/oauth2/v2.0/token",
        authority_url.trim_end_matches('/'),
        tenant_id
    )
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Case-insensitive: does `haystack` contain any of the lowercase `needles`?
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Accepts a string, number or bool as text. Null, blanks and nested values
/// become `None`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };
    Ok(text.filter(|s| !s.trim().is_empty()))
}

pub fn lenient_required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

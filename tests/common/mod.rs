use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn catalog() -> Value {
    json!([
        {"categorie": "Techniek", "vak": "Natuurkunde", "onderwerp": "Intro", "url": "https://example.org/intro",
         "prijs": "Gratis", "Taal": "NL", "Platform": "Oculus"},
        {"categorie": "Talen", "vak": "Engels", "onderwerp": "Grammar", "url": "https://example.org/grammar",
         "prijs": "€ 5", "taal": "English"},
        {"categorie": "Techniek", "vak": "Natuurkunde", "onderwerp": "Energie", "url": "https://example.org/energie"}
    ])
}

/// The same records the way Graph wraps them in list items.
pub fn graph_page(records: &Value, next_link: Option<&str>) -> String {
    let items: Vec<Value> = records
        .as_array()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, fields)| json!({"id": (i + 1).to_string(), "fields": fields}))
        .collect();
    let mut page = json!({"value": items});
    if let Some(next_link) = next_link {
        page["@odata.nextLink"] = json!(next_link);
    }
    page.to_string()
}

pub fn fallback_file(records: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", records).unwrap();
    file
}

use crate::api::RawRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// One resource inside a subject, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub onderwerp: String,
    pub url: String,
    pub prijs: String,
    pub taal: String,
    pub platform: String,
}

impl From<&RawRecord> for Entry {
    fn from(record: &RawRecord) -> Self {
        Self {
            onderwerp: record.onderwerp.clone(),
            url: record.url.clone(),
            prijs: record.price().to_string(),
            taal: record.language().to_string(),
            platform: record.platform().to_string(),
        }
    }
}

pub type Subjects = IndexMap<String, Vec<Entry>>;

/// category → subject → entries, all in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grouping {
    categories: IndexMap<String, Subjects>,
}

impl Grouping {
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Subjects)> {
        self.categories
            .iter()
            .map(|(name, subjects)| (name.as_str(), subjects))
    }

    pub fn subject(&self, category: &str, subject: &str) -> Option<&[Entry]> {
        self.categories
            .get(category)
            .and_then(|subjects| subjects.get(subject))
            .map(Vec::as_slice)
    }

    /// First category (in page order) that has a subject with this name.
    pub fn find_subject(&self, subject: &str) -> Option<(&str, &[Entry])> {
        self.categories.iter().find_map(|(category, subjects)| {
            subjects
                .get(subject)
                .map(|entries| (category.as_str(), entries.as_slice()))
        })
    }

    pub fn entry_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|subjects| subjects.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn push(&mut self, record: &RawRecord) {
        self.categories
            .entry(record.categorie.clone())
            .or_default()
            .entry(record.vak.clone())
            .or_default()
            .push(Entry::from(record));
    }
}

pub fn group_records(records: &[RawRecord]) -> Grouping {
    let mut grouping = Grouping::default();
    for record in records {
        grouping.push(record);
    }
    grouping
}

use crate::constants::{DEFAULT_PRICE, DUTCH_MARKERS, ENGLISH_MARKERS, FREE_MARKER, VR_MARKERS};
use crate::group::{Entry, Grouping};
use crate::utils::contains_any;
use indexmap::IndexMap;

/// What the search box and the filter checkboxes currently say.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub vr_only: bool,
    pub free_only: bool,
    pub paid_only: bool,
    pub dutch_only: bool,
    pub english_only: bool,
}

impl FilterState {
    pub fn search(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_query(entry)
            && self.matches_platform(entry)
            && self.matches_price(entry)
            && self.matches_language(entry)
    }

    fn matches_query(&self, entry: &Entry) -> bool {
        entry
            .onderwerp
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    fn matches_platform(&self, entry: &Entry) -> bool {
        !self.vr_only || contains_any(&entry.platform, &VR_MARKERS)
    }

    // Toggles in one group are OR-ed; a group with nothing checked lets everything through.
    fn matches_price(&self, entry: &Entry) -> bool {
        if !self.free_only && !self.paid_only {
            return true;
        }
        (self.free_only && is_free(&entry.prijs)) || (self.paid_only && is_paid(&entry.prijs))
    }

    fn matches_language(&self, entry: &Entry) -> bool {
        if !self.dutch_only && !self.english_only {
            return true;
        }
        (self.dutch_only && contains_any(&entry.taal, &DUTCH_MARKERS))
            || (self.english_only && contains_any(&entry.taal, &ENGLISH_MARKERS))
    }
}

fn is_free(price: &str) -> bool {
    price.to_lowercase().contains(FREE_MARKER)
}

fn is_paid(price: &str) -> bool {
    let price = price.to_lowercase();
    price != FREE_MARKER && price != DEFAULT_PRICE.to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryVisibility {
    pub visible: bool,
    pub subjects: IndexMap<String, bool>,
}

/// Per-tile and per-section visibility for one filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    categories: IndexMap<String, CategoryVisibility>,
}

impl Visibility {
    pub fn category_visible(&self, category: &str) -> bool {
        self.categories
            .get(category)
            .map_or(false, |category| category.visible)
    }

    pub fn subject_visible(&self, category: &str, subject: &str) -> bool {
        self.categories
            .get(category)
            .and_then(|category| category.subjects.get(subject))
            .copied()
            .unwrap_or(false)
    }

    pub fn visible_subjects(&self) -> usize {
        self.categories
            .values()
            .flat_map(|category| category.subjects.values())
            .filter(|visible| **visible)
            .count()
    }
}

pub fn visibility(grouping: &Grouping, filter: &FilterState) -> Visibility {
    let categories = grouping
        .categories()
        .map(|(category, subjects)| {
            let subjects: IndexMap<String, bool> = subjects
                .iter()
                .map(|(subject, entries)| {
                    (subject.clone(), entries.iter().any(|entry| filter.matches(entry)))
                })
                .collect();
            let visible = subjects.values().any(|visible| *visible);
            (category.to_string(), CategoryVisibility { visible, subjects })
        })
        .collect();
    Visibility { categories }
}

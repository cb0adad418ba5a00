//! Application state: the loaded catalog, the filter inputs and the popup.

use crate::api::RawRecord;
use crate::error::{GalleryError, Result};
use crate::filter::{visibility, FilterState, Visibility};
use crate::group::{group_records, Grouping};
use crate::modal::Modal;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    grouping: Grouping,
    filter: FilterState,
    modal: Modal,
}

impl Gallery {
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut gallery = Self::default();
        gallery.load(records);
        gallery
    }

    /// Replaces the catalog. The popup is closed because its subject may be gone.
    pub fn load(&mut self, records: &[RawRecord]) {
        self.grouping = group_records(records);
        self.modal.close();
        debug!(
            "Grouped {} records into {} categories",
            records.len(),
            self.grouping.categories().count()
        );
    }

    pub fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn visibility(&self) -> Visibility {
        visibility(&self.grouping, &self.filter)
    }

    pub fn open_subject(&mut self, category: &str, subject: &str) -> Result<()> {
        let entries =
            self.grouping
                .subject(category, subject)
                .ok_or_else(|| GalleryError::UnknownSubject {
                    category: category.to_string(),
                    subject: subject.to_string(),
                })?;
        self.modal.open(category, subject, entries);
        Ok(())
    }

    pub fn open_first_subject_named(&mut self, subject: &str) -> Result<()> {
        let (category, entries) =
            self.grouping
                .find_subject(subject)
                .ok_or_else(|| GalleryError::UnknownSubject {
                    category: String::new(),
                    subject: subject.to_string(),
                })?;
        self.modal.open(category, subject, entries);
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }
}

use crate::group::Entry;

/// The detail popup. There is at most one; opening replaces its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Hidden,
    Visible {
        category: String,
        subject: String,
        entries: Vec<Entry>,
    },
}

impl Modal {
    pub fn open(&mut self, category: &str, subject: &str, entries: &[Entry]) {
        *self = Modal::Visible {
            category: category.to_string(),
            subject: subject.to_string(),
            entries: entries.to_vec(),
        };
    }

    pub fn close(&mut self) {
        *self = Modal::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Modal::Visible { .. })
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            Modal::Visible { subject, .. } => Some(subject),
            Modal::Hidden => None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        match self {
            Modal::Visible { entries, .. } => entries,
            Modal::Hidden => &[],
        }
    }
}

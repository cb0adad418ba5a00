//! HTML output. Everything the page shows is derived from a [`Gallery`];
//! nothing is read back from the document.

use crate::constants::{CATEGORIES_SLOT, FILTERS_SLOT, MODAL_SLOT};
use crate::error::Result;
use crate::filter::FilterState;
use crate::gallery::Gallery;
use crate::group::Entry;
use crate::modal::Modal;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use serde::Serialize;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::error;

const BUILTIN_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="nl">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Leermiddelen</title>
<style>
body { font-family: sans-serif; margin: 0 2rem; }
.filters { display: flex; flex-wrap: wrap; gap: 1rem; margin: 1rem 0; }
.category h2 { border-bottom: 1px solid #ccc; }
.subject-container { display: inline-block; margin: .5rem; padding: 1rem; border: 1px solid #ddd; border-radius: 6px; cursor: pointer; }
.modal { position: fixed; inset: 0; align-items: center; justify-content: center; background: rgba(0, 0, 0, .4); }
.modal-content { background: #fff; padding: 1.5rem; max-width: 40rem; border-radius: 6px; }
#linksList span { margin-left: .75rem; color: #555; }
</style>
</head>
<body>
<header>
<h1>Leermiddelen</h1>
<!-- gallery:filters -->
</header>
<!-- gallery:categories -->
<!-- gallery:modal -->
</body>
</html>
"#;

const CLOSED_ANCHOR: &str = "gallery-closed";

const MODAL_STYLE: &str = r#"<style>
.modal { display: none; }
.modal:target { display: flex !important; }
#gallery-closed:target ~ #popupModal, .subject-modal:target ~ #popupModal { display: none !important; }
</style>
"#;

const SLOTS: [&str; 3] = [FILTERS_SLOT, CATEGORIES_SLOT, MODAL_SLOT];

/// Page skeleton with slots for the filter bar, the category container and
/// the popup. A slot left out of the template drops that part of the page.
#[derive(Debug, Clone)]
pub struct Layout {
    template: String,
    generated_at: Option<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(BUILTIN_LAYOUT.to_string())
    }
}

impl Layout {
    pub fn new(template: String) -> Self {
        let layout = Self {
            template,
            generated_at: None,
        };
        for slot in layout.missing_slots() {
            error!("Layout has no {} slot, leaving it out", slot);
        }
        layout
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    pub fn stamped(mut self, at: OffsetDateTime) -> Result<Self> {
        self.generated_at = Some(at.format(&Rfc3339)?);
        Ok(self)
    }

    pub fn missing_slots(&self) -> Vec<&'static str> {
        SLOTS
            .into_iter()
            .filter(|slot| !self.template.contains(slot))
            .collect()
    }
}

#[derive(Serialize)]
struct SubjectInfo<'a> {
    items: &'a [Entry],
}

fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        r#" style="display: none""#
    }
}

fn checkbox(id: &str, label: &str, checked: bool) -> String {
    format!(
        "<label class=\"filter-option\"><input type=\"checkbox\" id=\"{}\"{}> {}</label>\n",
        id,
        if checked { " checked" } else { "" },
        label
    )
}

pub fn render_filters(filter: &FilterState) -> String {
    let mut html = String::from("<div class=\"filters\">\n");
    html.push_str(&format!(
        "<input type=\"search\" id=\"searchInput\" placeholder=\"Zoek een onderwerp\" value=\"{}\">\n",
        attr(&filter.query)
    ));
    html.push_str(&checkbox("vrFilter", "VR", filter.vr_only));
    html.push_str(&checkbox("freeFilter", "Gratis", filter.free_only));
    html.push_str(&checkbox("paidFilter", "Betaald", filter.paid_only));
    html.push_str(&checkbox("nlFilter", "Nederlands", filter.dutch_only));
    html.push_str(&checkbox("engFilter", "Engels", filter.english_only));
    html.push_str("</div>\n");
    html
}

fn modal_id(index: usize) -> String {
    format!("modal-{}", index + 1)
}

/// The category container: one section per category, one tile per subject.
/// Each tile carries its entries as JSON in `data-subject-info`. With
/// `link_tiles` the tile is an anchor to its popup, numbered in page order
/// like [`render_subject_modals`].
pub fn render_categories(gallery: &Gallery, link_tiles: bool) -> Result<String> {
    let visibility = gallery.visibility();
    let mut html = String::from("<main id=\"categoryContainer\">\n");
    let mut index = 0;

    for (category, subjects) in gallery.grouping().categories() {
        html.push_str(&format!(
            "<section class=\"category\"{}>\n<h2>{}</h2>\n",
            display(visibility.category_visible(category)),
            text(category)
        ));
        for (subject, entries) in subjects {
            let info = serde_json::to_string(&SubjectInfo { items: entries })?;
            let label = if link_tiles {
                format!(
                    "<a class=\"subject-link\" href=\"#{}\"><p>{}</p></a>",
                    modal_id(index),
                    text(subject)
                )
            } else {
                format!("<p>{}</p>", text(subject))
            };
            html.push_str(&format!(
                "<div class=\"subject-container\" data-category=\"{}\" data-subject=\"{}\" data-subject-info=\"{}\"{}>\n{}\n</div>\n",
                attr(category),
                attr(subject),
                attr(&info),
                display(visibility.subject_visible(category, subject)),
                label
            ));
            index += 1;
        }
        html.push_str("</section>\n");
    }

    html.push_str("</main>\n");
    Ok(html)
}

fn entry_list(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<li><a href=\"{}\" target=\"_blank\">{}</a><span class=\"platform\">Platform: {}</span><span class=\"taal\">Taal: {}</span><span class=\"prijs\">Prijs: {}</span></li>\n",
                attr(&entry.url),
                text(&entry.onderwerp),
                text(&entry.platform),
                text(&entry.taal),
                text(&entry.prijs)
            )
        })
        .collect()
}

fn close_links(continue_attr: &str) -> (String, String) {
    (
        format!("<a class=\"close\" href=\"#{}\">&times;</a>\n", CLOSED_ANCHOR),
        format!(
            "<a {} href=\"#{}\">Doorgaan</a>\n",
            continue_attr, CLOSED_ANCHOR
        ),
    )
}

/// One popup per tile, shown while its id is the URL fragment.
pub fn render_subject_modals(gallery: &Gallery) -> String {
    let mut html = String::new();
    let subjects = gallery
        .grouping()
        .categories()
        .flat_map(|(_, subjects)| subjects.iter());

    for (index, (subject, entries)) in subjects.enumerate() {
        let (close, proceed) = close_links("class=\"button ga-door\"");
        html.push_str(&format!(
            "<div id=\"{}\" class=\"modal subject-modal\">\n<div class=\"modal-content\">\n{}<h2 class=\"selected-subject\">{}</h2>\n<ul class=\"links-list\">\n{}</ul>\n{}</div>\n</div>\n",
            modal_id(index),
            close,
            text(subject),
            entry_list(entries),
            proceed
        ));
    }
    html
}

/// The popup driven by [`Modal`] state.
pub fn render_modal(modal: &Modal) -> String {
    let (close, proceed) = close_links("id=\"gaDoorButton\" class=\"button\"");
    format!(
        "<div id=\"popupModal\" class=\"modal\" style=\"display: {}\">\n<div class=\"modal-content\">\n{}<h2 id=\"selectedSubject\">{}</h2>\n<ul id=\"linksList\">\n{}</ul>\n{}</div>\n</div>\n",
        if modal.is_visible() { "flex" } else { "none" },
        close,
        text(modal.subject().unwrap_or_default()),
        entry_list(modal.entries()),
        proceed
    )
}

// The closed anchor and the tile popups must precede #popupModal for the sibling rules.
fn render_modals(gallery: &Gallery) -> String {
    let mut html = String::from(MODAL_STYLE);
    html.push_str(&format!("<span id=\"{}\"></span>\n", CLOSED_ANCHOR));
    html.push_str(&render_subject_modals(gallery));
    html.push_str(&render_modal(gallery.modal()));
    html
}

pub fn render_page(gallery: &Gallery, layout: &Layout) -> Result<String> {
    let with_modals = layout.template.contains(MODAL_SLOT);
    let mut page = layout
        .template
        .replace(FILTERS_SLOT, &render_filters(gallery.filter()))
        .replace(CATEGORIES_SLOT, &render_categories(gallery, with_modals)?)
        .replace(MODAL_SLOT, &render_modals(gallery));

    if let Some(at) = &layout.generated_at {
        let footer = format!("<footer>Gegenereerd op {}</footer>\n</body>", text(at));
        page = page.replacen("</body>", &footer, 1);
    }
    Ok(page)
}

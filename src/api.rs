use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_PLATFORM, DEFAULT_PRICE};
use crate::utils::{lenient_required, lenient_text};
use serde::Deserialize;

/// One page of a Graph collection.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink", default)]
    pub next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub fields: RawRecord,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteList {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenError {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// A catalog row as it comes from the list service or the fallback file.
///
/// Column values may arrive as strings or numbers; empty values count as
/// absent. Language and platform exist under two spellings, the capitalized
/// column wins when both are filled.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient_required")]
    pub categorie: String,
    #[serde(default, deserialize_with = "lenient_required")]
    pub vak: String,
    #[serde(default, deserialize_with = "lenient_required")]
    pub onderwerp: String,
    #[serde(default, deserialize_with = "lenient_required")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub prijs: Option<String>,
    #[serde(rename = "Taal", default, deserialize_with = "lenient_text")]
    pub taal_column: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub taal: Option<String>,
    #[serde(rename = "Platform", default, deserialize_with = "lenient_text")]
    pub platform_column: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: Option<String>,
}

impl RawRecord {
    pub fn new(categorie: &str, vak: &str, onderwerp: &str, url: &str) -> Self {
        Self {
            categorie: categorie.to_string(),
            vak: vak.to_string(),
            onderwerp: onderwerp.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_price(mut self, prijs: &str) -> Self {
        self.prijs = Some(prijs.to_string());
        self
    }

    pub fn with_language(mut self, taal: &str) -> Self {
        self.taal = Some(taal.to_string());
        self
    }

    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    pub fn price(&self) -> &str {
        self.prijs.as_deref().unwrap_or(DEFAULT_PRICE)
    }

    pub fn language(&self) -> &str {
        self.taal_column
            .as_deref()
            .or(self.taal.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn platform(&self) -> &str {
        self.platform_column
            .as_deref()
            .or(self.platform.as_deref())
            .unwrap_or(DEFAULT_PLATFORM)
    }
}

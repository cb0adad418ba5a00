//! Where catalog records come from: the SharePoint list through Microsoft
//! Graph, or the static JSON document used when the list is unreachable.

use crate::api::{ListItem, Page, RawRecord, SiteList};
use crate::auth::{acquire_token, Credentials};
use crate::constants::{AUTHORITY_URL, GRAPH_URL};
use crate::error::{GalleryError, Result};
use crate::utils::{is_remote, list_items_url, lists_url};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct GraphSettings {
    pub graph_url: String,
    pub authority_url: String,
    pub site_id: Option<String>,
    pub list_id: Option<String>,
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Pre-issued bearer token; skips the token request.
    pub access_token: Option<String>,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            graph_url: GRAPH_URL.to_string(),
            authority_url: AUTHORITY_URL.to_string(),
            site_id: None,
            list_id: None,
            tenant_id: None,
            client_id: None,
            client_secret: None,
            access_token: None,
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(GalleryError::MissingConfig(name))
}

pub struct GraphSource {
    client: Client,
    settings: GraphSettings,
}

impl GraphSource {
    pub fn new(client: Client, settings: GraphSettings) -> Self {
        Self { client, settings }
    }

    async fn bearer(&self) -> Result<String> {
        if let Ok(token) = required(&self.settings.access_token, "GRAPH_ACCESS_TOKEN") {
            return Ok(token.to_string());
        }
        let credentials = Credentials {
            tenant_id: required(&self.settings.tenant_id, "TENANT_ID")?.to_string(),
            client_id: required(&self.settings.client_id, "CLIENT_ID")?.to_string(),
            client_secret: required(&self.settings.client_secret, "CLIENT_SECRET")?.to_string(),
        };
        acquire_token(&self.client, &self.settings.authority_url, &credentials).await
    }

    /// Reads every page of a Graph collection, following `@odata.nextLink`.
    async fn fetch_pages<T: DeserializeOwned>(
        &self,
        token: &str,
        first: String,
    ) -> Result<Vec<T>> {
        let mut values = Vec::new();
        let mut next = Some(first);

        while let Some(url) = next {
            debug!("GET {}", url);
            let response = self.client.get(&url).bearer_auth(token).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(GalleryError::Status { url, status });
            }
            let page: Page<T> = response.json().await?;
            values.extend(page.value);
            next = page.next_link;
        }
        Ok(values)
    }

    pub async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        let site_id = required(&self.settings.site_id, "SITE_ID")?;
        let list_id = required(&self.settings.list_id, "LIST_ID")?;
        let token = self.bearer().await?;

        let url = list_items_url(&self.settings.graph_url, site_id, list_id);
        let items: Vec<ListItem> = self.fetch_pages(&token, url).await?;
        if items.is_empty() {
            return Err(GalleryError::EmptyResponse);
        }
        Ok(items.into_iter().map(|item| item.fields).collect())
    }

    pub async fn fetch_lists(&self) -> Result<Vec<SiteList>> {
        let site_id = required(&self.settings.site_id, "SITE_ID")?;
        let token = self.bearer().await?;
        self.fetch_pages(&token, lists_url(&self.settings.graph_url, site_id))
            .await
    }
}

/// Loads the static fallback document: a flat JSON array of records, read
/// from disk or fetched when `location` is an http(s) URL.
pub async fn load_fallback(client: &Client, location: &str) -> Result<Vec<RawRecord>> {
    let bytes = if is_remote(location) {
        let response = client.get(location).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                url: location.to_string(),
                status,
            });
        }
        response.bytes().await?.to_vec()
    } else {
        tokio::fs::read(location).await?
    };
    Ok(serde_json::from_slice(&bytes)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

#[derive(Debug)]
pub struct Loaded {
    pub records: Vec<RawRecord>,
    pub origin: Origin,
}

/// Remote list first, the fallback document only once that has failed or
/// come back empty. No retries.
pub async fn load_records(
    client: &Client,
    remote: Option<&GraphSource>,
    fallback: &str,
) -> Result<Loaded> {
    if let Some(remote) = remote {
        match remote.fetch_records().await {
            Ok(records) => {
                info!("Loaded {} records from the list service", records.len());
                return Ok(Loaded {
                    records,
                    origin: Origin::Remote,
                });
            }
            Err(e) => warn!("Error loading list data, using {}: {}", fallback, e),
        }
    }

    match load_fallback(client, fallback).await {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), fallback);
            Ok(Loaded {
                records,
                origin: Origin::Fallback,
            })
        }
        Err(e) => {
            error!("Error loading {}: {}", fallback, e);
            Err(e)
        }
    }
}

use crate::api::{TokenError, TokenResponse};
use crate::constants::GRAPH_SCOPE;
use crate::error::{GalleryError, Result};
use crate::utils::token_url;
use reqwest::Client;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Client-credentials grant against the Microsoft identity platform.
pub async fn acquire_token(
    client: &Client,
    authority_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = token_url(authority_url, &credentials.tenant_id);
    debug!("Requesting Graph token from {}", url);

    let response = client
        .post(&url)
        .form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<TokenError>(&body) {
            Ok(TokenError {
                error,
                error_description: Some(description),
            }) => format!("{}: {}", error, description),
            Ok(TokenError { error, .. }) => error,
            Err(_) => format!("status {}", status),
        };
        return Err(GalleryError::Auth(message));
    }

    let token: TokenResponse = response.json().await?;
    Ok(token.access_token)
}

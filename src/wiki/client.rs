use anyhow::{Context, Result, bail};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::ResolvedWiki;

const USER_AGENT: &str = concat!("buddy/", env!("CARGO_PKG_VERSION"));

/// Returned in place of content when the page has no storage body.
pub const NO_CONTENT: &str = "No content found.";

#[derive(Debug, Deserialize)]
struct ContentResponse {
    body: ContentBody,
}

#[derive(Debug, Deserialize)]
struct ContentBody {
    storage: Storage,
}

#[derive(Debug, Deserialize)]
struct Storage {
    value: Option<String>,
}

/// Fetches page bodies from a Confluence-style content API.
pub struct PageClient {
    client: Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl PageClient {
    pub fn new(base_url: String, username: String, api_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            username,
            api_token,
        }
    }

    pub fn from_config(config: &ResolvedWiki) -> Self {
        Self::new(
            config.base_url.clone(),
            config.username.clone(),
            config.api_token.clone(),
        )
    }

    /// URL of the content resource for `page_id`, with the storage body expanded.
    pub fn page_url(&self, page_id: &str) -> String {
        format!(
            "{}/wiki/rest/api/content/{page_id}?expand=body.storage",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Returns the storage-format body of a page.
    ///
    /// A non-success HTTP status is not an error: the returned text is then
    /// `Error: <status>` so callers can show it in place of the content.
    ///
    /// # Errors
    ///
    /// Returns an error if the page id is blank, the request cannot be sent,
    /// or a successful response does not have the expected JSON shape.
    pub async fn fetch_page_content(&self, page_id: &str) -> Result<String> {
        let page_id = page_id.trim();
        if page_id.is_empty() {
            bail!("Page id cannot be empty");
        }

        let url = self.page_url(page_id);
        tracing::info!(%url, "fetching page content");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header(ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Failed to connect to wiki: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, page_id, "page fetch failed");
            return Ok(format!("Error: {status}"));
        }

        let body = response
            .text()
            .await
            .context("Failed to read wiki response body")?;
        parse_page_body(&body)
    }
}

fn parse_page_body(body: &str) -> Result<String> {
    let content: ContentResponse =
        serde_json::from_str(body).context("Unexpected wiki response: missing body.storage")?;

    Ok(content
        .body
        .storage
        .value
        .unwrap_or_else(|| NO_CONTENT.to_string()))
}

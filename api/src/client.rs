//! Thin REST client over the backend endpoints. One outstanding request per
//! page, no retries: transient failures bubble up to the view as a message.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{ArticleDetail, ArticleSummary, NarrativeCluster};

/// Overridable at build time. Must be absolute: the HTTP client does not
/// resolve relative URLs against the page origin.
const BASE_URL: &str = match option_env!("BIASLENS_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// `GET /articles`: every analyzed article, newest first.
pub async fn fetch_articles() -> Result<Vec<ArticleSummary>, ApiError> {
    get_json("/articles").await
}

/// `GET /articles/{id}`: full detail for one article, 404 if unknown.
pub async fn fetch_article(id: &str) -> Result<ArticleDetail, ApiError> {
    get_json(&format!("/articles/{id}")).await
}

/// `GET /narratives`: the current narrative clusters.
pub async fn fetch_narratives() -> Result<Vec<NarrativeCluster>, ApiError> {
    get_json("/narratives").await
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{BASE_URL}{path}");

    let response = CLIENT.get(&url).send().await.map_err(|err| {
        tracing::warn!("request to {url} failed: {err}");
        ApiError::Network(err)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("request to {url} returned status {status}");
        return Err(ApiError::from_status(status.as_u16()));
    }

    response.json::<T>().await.map_err(|err| {
        tracing::warn!("couldn't decode response from {url}: {err}");
        ApiError::Decode(err)
    })
}

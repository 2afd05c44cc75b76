pub mod hooks;

use crate::models::api::{PoolDetail, PoolList, RawApiResponse};
use crate::models::pool::PoolRecord;
use crate::models::query::{FilterCriteria, PoolsQuery, SortSpec};
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const LIST_ERROR: &str = "Failed to fetch pools";
const DETAIL_ERROR: &str = "Failed to fetch pool details";

/// HTTP client for the pools API.
#[derive(Clone)]
pub struct PoolsClient {
    client: Client,
    base_url: Url,
}

impl PoolsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid pools API url: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("pools API url cannot be a base: {base_url}");
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET /api/pools` with the given filters and sort.
    pub async fn fetch_pools(
        &self,
        criteria: &FilterCriteria,
        sort: Option<&SortSpec>,
    ) -> Result<Vec<PoolRecord>> {
        let url = self.endpoint(&["api", "pools"]);
        let query = PoolsQuery::from_parts(criteria, sort);
        debug!("Fetching pools from: {url} ({query:?})");

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .context(LIST_ERROR)?;

        let list: PoolList = read_payload(response, LIST_ERROR).await?;
        Ok(list.pools)
    }

    /// `GET /api/pools/{id}`.
    pub async fn fetch_pool(&self, id: &str) -> Result<PoolRecord> {
        let url = self.endpoint(&["api", "pools", id]);
        debug!("Fetching pool details from: {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context(DETAIL_ERROR)?;

        let detail: PoolDetail = read_payload(response, DETAIL_ERROR).await?;
        Ok(detail.pool)
    }
}

async fn read_payload<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback: &'static str,
) -> Result<T> {
    if !response.status().is_success() {
        debug!("{fallback}: HTTP {}", response.status());
        bail!(fallback);
    }

    let response_text = response.text().await.context(fallback)?;
    let parsed: RawApiResponse<T> = serde_json::from_str(&response_text).context(fallback)?;

    if !parsed.success {
        return Err(anyhow!(parsed.error.unwrap_or_else(|| fallback.to_string())));
    }
    parsed.data.ok_or_else(|| anyhow!(fallback))
}

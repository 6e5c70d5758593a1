//! reqwest-backed portal client

use super::{Cluster, FetchFailure, FetchResponse, FetchResult, PortalApi, STATUS_OK};
use anyhow::{bail, Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Url;
use std::time::Duration;

/// HTTP client for the cluster portal
#[derive(Clone)]
pub struct PortalClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("Invalid portal API URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Portal API URL cannot carry a path: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
        })
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments.iter().copied());
        }
        url
    }

    fn clusters_url(&self) -> Url {
        self.endpoint(&["api", "clusters"])
    }

    /// `{base}/api/{subscription}/{resourceGroup}/{name}/alerts`
    fn alerts_url(&self, cluster: &Cluster) -> Url {
        self.endpoint(&[
            "api",
            &cluster.subscription,
            &cluster.resource_group,
            &cluster.name,
            "alerts",
        ])
    }

    async fn get_json(client: reqwest::Client, url: Url) -> FetchResult {
        tracing::debug!("GET {}", url);

        let response = client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchFailure::transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status != STATUS_OK {
            return Err(FetchFailure::from_status(status));
        }

        let data = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchFailure::transport(format!("Invalid response body: {}", e)))?;

        Ok(FetchResponse { status, data })
    }
}

impl PortalApi for PortalClient {
    fn list_clusters(&self) -> BoxFuture<'static, Result<Vec<Cluster>, FetchFailure>> {
        let client = self.client.clone();
        let url = self.clusters_url();
        async move {
            let response = Self::get_json(client, url).await?;
            serde_json::from_value(response.data)
                .map_err(|e| FetchFailure::transport(format!("Invalid cluster list: {}", e)))
        }
        .boxed()
    }

    fn fetch_alerts(&self, cluster: Cluster) -> BoxFuture<'static, FetchResult> {
        let client = self.client.clone();
        let url = self.alerts_url(&cluster);
        Self::get_json(client, url).boxed()
    }
}

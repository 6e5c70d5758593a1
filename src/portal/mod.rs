//! Cluster portal API - the external collaborators of the alerts view
//!
//! The alerts controller never talks HTTP itself. It asks a [`PortalApi`]
//! for the cluster list and for one cluster's alerts, and gets back either a
//! [`FetchResponse`] or a [`FetchFailure`].
//!
//! Implementations:
//! - [`PortalClient`]: reqwest client against a live portal
//! - [`crate::demo::DemoPortal`]: canned data for offline use and tests

mod client;

pub use client::PortalClient;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP status treated as a successful fetch
pub const STATUS_OK: u16 = 200;

/// A cluster as reported by the portal's cluster list
///
/// Only `name` matters to the alerts view; the rest is carried so the
/// fetch collaborator can build its request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cluster {
    pub key: String,
    pub name: String,
    pub subscription: String,
    pub resource_group: String,
    pub id: String,
    pub version: String,
    pub created_date: String,
    pub provisioned_by: String,
    pub state: String,
    pub failed_state: String,
    pub console_link: String,
    pub resource_id: String,
}

impl Cluster {
    /// Minimal cluster with only a name (tests, demo data)
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A response from the portal, before status interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

impl FetchResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            status: STATUS_OK,
            data,
        }
    }
}

/// The one error kind of the alerts view: "fetch failed"
///
/// Covers both non-200 responses and transport failures. Transport failures
/// carry status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub status: u16,
    pub status_text: String,
}

impl FetchFailure {
    /// Failure from a non-200 HTTP status
    pub fn from_status(status: u16) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self {
            status,
            status_text,
        }
    }

    /// Failure that never produced an HTTP status (connect, timeout, decode)
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            status_text: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.status_text)
        } else {
            write!(f, "{} {}", self.status, self.status_text)
        }
    }
}

impl std::error::Error for FetchFailure {}

pub type FetchResult = Result<FetchResponse, FetchFailure>;

/// Source of cluster and alert data
///
/// Object-safe so the TUI can hold an `Arc<dyn PortalApi>` and hand clones to
/// spawned fetch tasks.
pub trait PortalApi: Send + Sync {
    /// Fetch the list of clusters the dashboard can select from
    fn list_clusters(&self) -> BoxFuture<'static, Result<Vec<Cluster>, FetchFailure>>;

    /// Fetch the alerts of one cluster
    fn fetch_alerts(&self, cluster: Cluster) -> BoxFuture<'static, FetchResult>;
}

// Demo mode: serve canned clusters and alerts without a portal
//
// Useful for trying the dashboard offline and as the test double for the
// fetch path. Each call sleeps for a configurable latency so the in-flight
// state is visible in the UI.
//
// One cluster always fails with 503 to show the error banner.
//
// Run with: CLUSTER_ALERTS_DEMO=1 cargo run --release

use crate::portal::{Cluster, FetchFailure, FetchResponse, FetchResult, PortalApi};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;

/// Cluster whose alerts endpoint always answers 503
pub const DEMO_FAILING_CLUSTER: &str = "aro-dev-westeurope";

#[derive(Debug, Clone)]
pub struct DemoPortal {
    latency: Duration,
}

impl Default for DemoPortal {
    fn default() -> Self {
        Self::with_latency(Duration::from_millis(600))
    }
}

impl DemoPortal {
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

fn demo_cluster(name: &str, region_group: &str, version: &str, state: &str) -> Cluster {
    Cluster {
        key: name.to_string(),
        name: name.to_string(),
        subscription: "00000000-0000-0000-0000-000000000000".to_string(),
        resource_group: region_group.to_string(),
        id: format!(
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourcegroups/{}/providers/microsoft.redhatopenshift/openshiftclusters/{}",
            region_group, name
        ),
        version: version.to_string(),
        created_date: "2026-03-02T09:14:00Z".to_string(),
        provisioned_by: "demo".to_string(),
        state: state.to_string(),
        failed_state: String::new(),
        console_link: format!("https://console-openshift-console.apps.{}.demo", name),
        resource_id: String::new(),
    }
}

pub fn demo_clusters() -> Vec<Cluster> {
    vec![
        demo_cluster("aro-prod-eastus", "rg-prod-eastus", "4.15.27", "Succeeded"),
        demo_cluster("aro-prod-westus2", "rg-prod-westus2", "4.14.38", "Succeeded"),
        demo_cluster("aro-stage-eastus", "rg-stage", "4.16.3", "Updating"),
        demo_cluster(DEMO_FAILING_CLUSTER, "rg-dev", "4.16.3", "Failed"),
    ]
}

fn alert(name: &str, severity: &str, namespace: &str, summary: &str) -> Value {
    json!({
        "alertname": name,
        "status": "firing",
        "severity": severity,
        "namespace": namespace,
        "summary": summary,
    })
}

pub fn demo_alerts(cluster: &str) -> Value {
    let watchdog = alert(
        "Watchdog",
        "none",
        "openshift-monitoring",
        "An alert that should always be firing to certify that Alertmanager is working properly.",
    );
    let alerts = match cluster {
        "aro-prod-eastus" => vec![
            watchdog,
            alert(
                "KubePodCrashLooping",
                "warning",
                "openshift-ingress",
                "Pod is crash looping.",
            ),
        ],
        "aro-prod-westus2" => vec![watchdog],
        "aro-stage-eastus" => vec![
            watchdog,
            alert(
                "ClusterOperatorDegraded",
                "warning",
                "openshift-cluster-version",
                "Cluster operator has been degraded for 30 minutes.",
            ),
            alert(
                "KubeNodeNotReady",
                "critical",
                "openshift-monitoring",
                "Node is not ready.",
            ),
            alert(
                "etcdMembersDown",
                "critical",
                "openshift-etcd",
                "etcd cluster members are down.",
            ),
        ],
        _ => Vec::new(),
    };
    Value::Array(alerts)
}

impl PortalApi for DemoPortal {
    fn list_clusters(&self) -> BoxFuture<'static, Result<Vec<Cluster>, FetchFailure>> {
        let latency = self.latency;
        async move {
            sleep(latency).await;
            Ok(demo_clusters())
        }
        .boxed()
    }

    fn fetch_alerts(&self, cluster: Cluster) -> BoxFuture<'static, FetchResult> {
        let latency = self.latency;
        async move {
            sleep(latency).await;
            if cluster.name == DEMO_FAILING_CLUSTER {
                return Err(FetchFailure::from_status(503));
            }
            Ok(FetchResponse::ok(demo_alerts(&cluster.name)))
        }
        .boxed()
    }
}

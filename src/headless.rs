// Headless mode - one gate cycle without the TUI
//
// Loads the cluster list, selects the named cluster on the alerts panel and
// drives the same controller the dashboard uses, then prints the outcome.

use crate::alerts::model::alert_rows;
use crate::alerts::{dispatch, AlertsController, Resolution, SelectionContext, ALERTS_PANEL};
use crate::portal::{FetchFailure, PortalApi};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug)]
pub enum Outcome {
    Alerts(Value),
    Failed(FetchFailure),
}

/// Run one fetch cycle for `cluster_name`
pub async fn fetch_once(portal: Arc<dyn PortalApi>, cluster_name: &str) -> Result<Outcome> {
    let clusters = portal
        .list_clusters()
        .await
        .map_err(|failure| anyhow!("Failed to load cluster list: {}", failure))?;

    let cluster = clusters
        .into_iter()
        .find(|c| c.name == cluster_name)
        .with_context(|| format!("Unknown cluster: {}", cluster_name))?;

    let ctx = SelectionContext {
        cluster_name: cluster.name.clone(),
        current_cluster: Some(cluster),
        active_panel: ALERTS_PANEL.to_string(),
        cluster_loaded: true,
    };

    let mut controller = AlertsController::new();
    let request = controller
        .evaluate(&ctx)
        .context("Alerts fetch was not authorized")?;

    let (tx, mut rx) = dispatch::completion_channel();
    dispatch::spawn_fetch(portal, request, tx);
    let completion = rx
        .recv()
        .await
        .context("Fetch task ended without a result")?;

    match controller.resolve(completion, &ctx) {
        Resolution::Applied => Ok(Outcome::Alerts(controller.data().clone())),
        Resolution::Failed => {
            let failure = controller
                .error()
                .cloned()
                .context("Failed fetch left no error")?;
            Ok(Outcome::Failed(failure))
        }
        other => Err(anyhow!("Unexpected fetch resolution: {:?}", other)),
    }
}

/// Plain-text table of alert rows
pub fn format_table(payload: &Value) -> String {
    let rows = alert_rows(payload);
    if rows.is_empty() {
        return "No alerts\n".to_string();
    }

    let mut out = format!(
        "{:<10} {:<32} {:<30} {:<8} {}\n",
        "SEVERITY", "ALERT", "NAMESPACE", "STATUS", "SUMMARY"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<10} {:<32} {:<30} {:<8} {}\n",
            row.severity, row.alertname, row.namespace, row.status, row.summary
        ));
    }
    out
}

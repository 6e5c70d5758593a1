//! Runs authorized fetches on the tokio runtime
//!
//! The controller stays on the UI task. Each fetch runs in its own task and
//! reports back over a channel, so completions are applied one at a time in
//! the order they resolve.

use super::controller::{FetchCompletion, FetchRequest};
use crate::portal::PortalApi;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type CompletionSender = mpsc::UnboundedSender<FetchCompletion>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<FetchCompletion>;

pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    mpsc::unbounded_channel()
}

/// Issue `request` against `portal`. Not cancellable.
///
/// If the receiver is gone by the time the fetch resolves, the result is
/// dropped.
pub fn spawn_fetch(
    portal: Arc<dyn PortalApi>,
    request: FetchRequest,
    tx: CompletionSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let FetchRequest { tag, cluster } = request;
        let result = portal.fetch_alerts(cluster).await;
        if tx.send(FetchCompletion { tag, result }).is_err() {
            tracing::debug!("Alerts view closed before fetch resolved");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::gate::RequestTag;
    use crate::demo::DemoPortal;
    use crate::portal::Cluster;
    use std::time::Duration;

    fn request(name: &str) -> FetchRequest {
        FetchRequest {
            tag: RequestTag {
                seq: 1,
                cluster: name.to_string(),
            },
            cluster: Cluster::named(name),
        }
    }

    #[tokio::test]
    async fn completion_arrives_on_channel() {
        let portal: Arc<dyn PortalApi> = Arc::new(DemoPortal::with_latency(Duration::ZERO));
        let (tx, mut rx) = completion_channel();

        spawn_fetch(portal, request("aro-prod-eastus"), tx)
            .await
            .unwrap();

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.tag.cluster, "aro-prod-eastus");
        assert!(completion.result.is_ok());
    }

    #[tokio::test]
    async fn closed_receiver_is_harmless() {
        let portal: Arc<dyn PortalApi> = Arc::new(DemoPortal::with_latency(Duration::ZERO));
        let (tx, rx) = completion_channel();
        drop(rx);

        // Task finishes without panicking
        spawn_fetch(portal, request("aro-prod-eastus"), tx)
            .await
            .unwrap();
    }
}

//! Alerts controller - gate, state slots and detail link behind one owner
//!
//! The owner (TUI app or headless runner) calls [`AlertsController::evaluate`]
//! whenever the selection may have changed, runs any returned
//! [`FetchRequest`], and feeds the outcome back through
//! [`AlertsController::resolve`].

use super::gate::{FetchGate, FetchPhase, RequestTag, SelectionContext};
use super::store::AlertState;
use super::sync::{DetailLink, DetailUpdate};
use crate::portal::{Cluster, FetchFailure, FetchResult, STATUS_OK};
use serde_json::Value;
use tokio::sync::mpsc;

/// A request the gate authorized; the owner must run it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub tag: RequestTag,
    pub cluster: Cluster,
}

/// Outcome of a fetch, delivered back to the owner's loop
#[derive(Debug)]
pub struct FetchCompletion {
    pub tag: RequestTag,
    pub result: FetchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Payload stored and published
    Applied,
    /// Failure stored in the error slot
    Failed,
    /// Selection moved on while the request was out; result discarded
    Stale,
    /// Not the request in flight
    Ignored,
}

#[derive(Debug, Default)]
pub struct AlertsController {
    gate: FetchGate,
    state: AlertState,
    link: DetailLink,
}

impl AlertsController {
    pub fn new() -> Self {
        Self {
            gate: FetchGate::new(),
            state: AlertState::new(),
            link: DetailLink::new(),
        }
    }

    pub fn data(&self) -> &Value {
        self.state.data()
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.state.error()
    }

    pub fn phase(&self) -> &FetchPhase {
        self.gate.phase()
    }

    /// Subscribe the detail view to fetched alerts
    pub fn attach_detail(&mut self) -> mpsc::UnboundedReceiver<DetailUpdate> {
        self.link.attach()
    }

    pub fn is_fetching(&self) -> bool {
        self.gate.is_in_flight()
    }

    pub fn evaluate(&mut self, ctx: &SelectionContext) -> Option<FetchRequest> {
        match self.gate.evaluate(ctx) {
            Ok(tag) => {
                tracing::info!("Fetching alerts for {} (request #{})", tag.cluster, tag.seq);
                let cluster = ctx
                    .current_cluster
                    .clone()
                    .unwrap_or_else(|| Cluster::named(&tag.cluster));
                Some(FetchRequest { tag, cluster })
            }
            Err(reason) => {
                tracing::trace!("Alerts gate closed for {:?}: {:?}", ctx.cluster_name, reason);
                None
            }
        }
    }

    /// Apply a completed fetch against the selection as it is *now*
    pub fn resolve(&mut self, completion: FetchCompletion, ctx: &SelectionContext) -> Resolution {
        let FetchCompletion { tag, result } = completion;

        if !self.gate.settle(&tag) {
            tracing::debug!("Ignoring completion for request #{}", tag.seq);
            return Resolution::Ignored;
        }

        if tag.cluster != ctx.selected_name() {
            tracing::info!(
                "Discarding alerts for {}: selection is now {:?}",
                tag.cluster,
                ctx.selected_name()
            );
            return Resolution::Stale;
        }

        match result {
            Ok(response) if response.status == STATUS_OK => {
                tracing::info!("Alerts loaded for {}", tag.cluster);
                if self.link.is_attached() {
                    self.link.publish(DetailUpdate {
                        item: response.data.clone(),
                        active_panel: ctx.active_panel.clone(),
                    });
                }
                self.state.set_data(response.data);
                Resolution::Applied
            }
            Ok(response) => {
                let failure = FetchFailure::from_status(response.status);
                tracing::warn!("Alerts fetch for {} failed: {}", tag.cluster, failure);
                self.state.set_error(failure);
                Resolution::Failed
            }
            Err(failure) => {
                tracing::warn!("Alerts fetch for {} failed: {}", tag.cluster, failure);
                self.state.set_error(failure);
                Resolution::Failed
            }
        }
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.state.dismiss_error()
    }

    /// Manual refresh; the next evaluation fetches again for the same cluster
    pub fn refresh(&mut self) -> bool {
        self.gate.rearm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::FetchResponse;
    use serde_json::json;

    fn ctx(name: &str) -> SelectionContext {
        SelectionContext {
            cluster_name: name.to_string(),
            current_cluster: Some(Cluster::named(name)),
            active_panel: "ClusterAlerts".to_string(),
            cluster_loaded: true,
        }
    }

    fn ok(data: Value) -> FetchResult {
        Ok(FetchResponse::ok(data))
    }

    #[test]
    fn success_sets_data_and_publishes_once() {
        let mut controller = AlertsController::new();
        let mut rx = controller.attach_detail();
        let selection = ctx("prod-1");

        let request = controller.evaluate(&selection).unwrap();
        assert_eq!(request.cluster.name, "prod-1");
        assert!(controller.evaluate(&selection).is_none());

        let payload = json!([{"alertname": "KubeNodeNotReady"}]);
        let outcome = controller.resolve(
            FetchCompletion {
                tag: request.tag,
                result: ok(payload.clone()),
            },
            &selection,
        );

        assert_eq!(outcome, Resolution::Applied);
        assert_eq!(controller.data(), &payload);
        assert_eq!(
            rx.try_recv().unwrap(),
            DetailUpdate {
                item: payload,
                active_panel: "ClusterAlerts".to_string(),
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn success_without_detail_view_still_stores_data() {
        let mut controller = AlertsController::new();
        let rx = controller.attach_detail();
        drop(rx);
        let selection = ctx("prod-1");

        let request = controller.evaluate(&selection).unwrap();
        let payload = json!([{"alertname": "Watchdog"}]);
        let outcome = controller.resolve(
            FetchCompletion {
                tag: request.tag,
                result: ok(payload.clone()),
            },
            &selection,
        );

        assert_eq!(outcome, Resolution::Applied);
        assert_eq!(controller.data(), &payload);
    }

    #[test]
    fn success_leaves_existing_error_alone() {
        let mut controller = AlertsController::new();
        let selection = ctx("prod-1");

        let first = controller.evaluate(&selection).unwrap();
        controller.resolve(
            FetchCompletion {
                tag: first.tag,
                result: Err(FetchFailure::from_status(502)),
            },
            &selection,
        );
        controller.refresh();

        let second = controller.evaluate(&selection).unwrap();
        controller.resolve(
            FetchCompletion {
                tag: second.tag,
                result: ok(json!([])),
            },
            &selection,
        );
        assert_eq!(controller.error().map(|e| e.status), Some(502));
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut controller = AlertsController::new();
        let mut rx = controller.attach_detail();
        let selection = ctx("prod-1");

        let first = controller.evaluate(&selection).unwrap();
        controller.resolve(
            FetchCompletion {
                tag: first.tag,
                result: ok(json!(["old"])),
            },
            &selection,
        );
        rx.try_recv().unwrap();

        controller.refresh();
        let second = controller.evaluate(&selection).unwrap();
        let outcome = controller.resolve(
            FetchCompletion {
                tag: second.tag,
                result: Ok(FetchResponse {
                    status: 404,
                    data: json!(null),
                }),
            },
            &selection,
        );

        assert_eq!(outcome, Resolution::Failed);
        assert_eq!(controller.data(), &json!(["old"]));
        let error = controller.error().unwrap();
        assert_eq!(error.status, 404);
        assert_eq!(error.status_text, "Not Found");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dismiss_clears_error_and_does_not_refetch() {
        let mut controller = AlertsController::new();
        let selection = ctx("prod-1");

        let request = controller.evaluate(&selection).unwrap();
        controller.resolve(
            FetchCompletion {
                tag: request.tag,
                result: Err(FetchFailure::transport("timed out")),
            },
            &selection,
        );

        assert!(controller.dismiss_error());
        assert!(controller.error().is_none());
        assert_eq!(controller.data(), &json!([]));
        assert!(controller.evaluate(&selection).is_none());
    }

    #[test]
    fn stale_completion_is_discarded_and_new_selection_fetches() {
        let mut controller = AlertsController::new();
        let mut rx = controller.attach_detail();

        let request = controller.evaluate(&ctx("prod-1")).unwrap();
        let moved = ctx("prod-2");
        assert!(controller.evaluate(&moved).is_none());

        let outcome = controller.resolve(
            FetchCompletion {
                tag: request.tag,
                result: ok(json!(["prod-1 alerts"])),
            },
            &moved,
        );
        assert_eq!(outcome, Resolution::Stale);
        assert_eq!(controller.data(), &json!([]));
        assert!(rx.try_recv().is_err());

        let next = controller.evaluate(&moved).unwrap();
        assert_eq!(next.cluster.name, "prod-2");
    }

    #[test]
    fn duplicate_completion_publishes_once() {
        let mut controller = AlertsController::new();
        let mut rx = controller.attach_detail();
        let selection = ctx("prod-1");
        let request = controller.evaluate(&selection).unwrap();

        for _ in 0..2 {
            controller.resolve(
                FetchCompletion {
                    tag: request.tag.clone(),
                    result: ok(json!(["same"])),
                },
                &selection,
            );
        }

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unattached_detail_view_is_skipped() {
        let mut controller = AlertsController::new();
        let selection = ctx("prod-1");
        let request = controller.evaluate(&selection).unwrap();
        let outcome = controller.resolve(
            FetchCompletion {
                tag: request.tag,
                result: ok(json!(["a"])),
            },
            &selection,
        );
        assert_eq!(outcome, Resolution::Applied);
        assert_eq!(controller.data(), &json!(["a"]));
    }
}

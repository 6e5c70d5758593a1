//! Fetch gate - decides when a new alerts request may be issued
//!
//! State machine:
//!
//! ```text
//!            evaluate (panel, loaded, name ok)
//!   Idle ───────────────────────────────────────▶ InFlight(tag)
//!    ▲                                                │
//!    │ selection name != done name,                   │ settle(tag)
//!    │ panel left, or manual refresh                  ▼
//!    └─────────────────────────────────────────── Done(name)
//! ```
//!
//! `InFlight` is left only by settling the matching tag, so at most one fetch
//! is outstanding no matter how often the gate is evaluated.

use crate::portal::Cluster;

/// Panel identifier that shows alerts (compared case-insensitively)
pub const ALERTS_PANEL: &str = "clusteralerts";

/// Snapshot of what the dashboard currently has selected
///
/// Rebuilt by the owner on every render/input; the alerts view never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    pub cluster_name: String,
    pub current_cluster: Option<Cluster>,
    pub active_panel: String,
    pub cluster_loaded: bool,
}

impl SelectionContext {
    /// Name of the selected cluster, or "" when nothing is selected
    pub fn selected_name(&self) -> &str {
        self.current_cluster
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    pub fn alerts_panel_active(&self) -> bool {
        self.active_panel.eq_ignore_ascii_case(ALERTS_PANEL)
    }
}

/// Identity of one issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub seq: u64,
    pub cluster: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    InFlight(RequestTag),
    Done(String),
}

impl FetchPhase {
    pub fn label(&self) -> String {
        match self {
            FetchPhase::Idle => "idle".to_string(),
            FetchPhase::InFlight(tag) => format!("fetching {}", tag.cluster),
            FetchPhase::Done(name) => format!("loaded {}", name),
        }
    }
}

/// Why the gate refused to issue a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denied {
    WrongPanel,
    NotLoaded,
    NoCluster,
    Busy,
    AlreadyLoaded,
}

#[derive(Debug, Default)]
pub struct FetchGate {
    phase: FetchPhase,
    next_seq: u64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, FetchPhase::InFlight(_))
    }

    /// Evaluate the gate against the current selection.
    ///
    /// On authorization the phase moves to `InFlight` before returning, so a
    /// second evaluation ahead of the completion is denied with `Busy`.
    ///
    /// Evaluating with another panel active re-arms a settled gate, so
    /// coming back to the alerts panel fetches again.
    pub fn evaluate(&mut self, ctx: &SelectionContext) -> Result<RequestTag, Denied> {
        if !ctx.alerts_panel_active() {
            if self.rearm() {
                tracing::debug!("Alerts gate re-armed: panel {:?} active", ctx.active_panel);
            }
            return Err(Denied::WrongPanel);
        }
        self.rearm_if_selection_changed(ctx);

        match &self.phase {
            FetchPhase::InFlight(_) => return Err(Denied::Busy),
            FetchPhase::Done(_) => return Err(Denied::AlreadyLoaded),
            FetchPhase::Idle => {}
        }
        if !ctx.cluster_loaded {
            return Err(Denied::NotLoaded);
        }
        let name = ctx.selected_name();
        if name.is_empty() {
            return Err(Denied::NoCluster);
        }

        self.next_seq += 1;
        let tag = RequestTag {
            seq: self.next_seq,
            cluster: name.to_string(),
        };
        self.phase = FetchPhase::InFlight(tag.clone());
        Ok(tag)
    }

    /// Mark the request identified by `tag` as resolved.
    ///
    /// Returns false (and changes nothing) when `tag` is not the request
    /// currently in flight.
    pub fn settle(&mut self, tag: &RequestTag) -> bool {
        match &self.phase {
            FetchPhase::InFlight(current) if current == tag => {
                self.phase = FetchPhase::Done(tag.cluster.clone());
                true
            }
            _ => false,
        }
    }

    /// Manual refresh: allow the next evaluation to fetch again.
    ///
    /// Has no effect while a request is outstanding.
    pub fn rearm(&mut self) -> bool {
        if let FetchPhase::Done(_) = self.phase {
            self.phase = FetchPhase::Idle;
            true
        } else {
            false
        }
    }

    fn rearm_if_selection_changed(&mut self, ctx: &SelectionContext) {
        if let FetchPhase::Done(name) = &self.phase {
            if name != ctx.selected_name() {
                tracing::debug!(
                    "Alerts gate re-armed: selection moved from {:?} to {:?}",
                    name,
                    ctx.selected_name()
                );
                self.phase = FetchPhase::Idle;
            }
        }
    }
}

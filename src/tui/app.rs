// TUI application state
//
// Owns the cluster selection, the alerts controller and the detail view.
// Every input or message ends with `sync_alerts()`, which rebuilds the
// selection context and lets the fetch gate decide whether to issue a request.

use super::components::Toast;
use super::theme::{Theme, ThemeKind};
use crate::alerts::dispatch::{self, CompletionSender};
use crate::alerts::{AlertsController, DetailUpdate, FetchCompletion, Resolution, SelectionContext};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::portal::{Cluster, FetchFailure, PortalApi};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Outcome of one cluster list request
pub type ClusterListResult = Result<Vec<Cluster>, FetchFailure>;
pub type ClusterListSender = mpsc::UnboundedSender<ClusterListResult>;

/// Detail panels of the selected cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Alerts,
}

impl DetailTab {
    /// Tabs in display order
    pub fn all() -> &'static [DetailTab] {
        &[DetailTab::Overview, DetailTab::Alerts]
    }

    /// Get the next tab in cycle
    pub fn next(self) -> Self {
        let tabs = Self::all();
        let current = tabs.iter().position(|&t| t == self).unwrap_or(0);
        tabs[(current + 1) % tabs.len()]
    }

    /// Get the previous tab in cycle
    pub fn prev(self) -> Self {
        let tabs = Self::all();
        let current = tabs.iter().position(|&t| t == self).unwrap_or(0);
        tabs[(current + tabs.len() - 1) % tabs.len()]
    }

    /// Panel identifier handed to the fetch gate
    pub fn id(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Alerts => "ClusterAlerts",
        }
    }

    /// Label shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Alerts => "Alerts",
        }
    }

    /// Look up a tab by panel identifier, ignoring case
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|tab| tab.id().eq_ignore_ascii_case(id))
    }
}

/// Detail list view, kept in sync through its own update channel
#[derive(Debug)]
pub struct DetailView {
    rx: mpsc::UnboundedReceiver<DetailUpdate>,
    /// Last alerts payload received
    pub item: Value,
    /// Panel that was active when `item` was published
    pub active_panel: String,
    /// Total updates applied since startup
    pub updates: usize,
}

impl DetailView {
    pub fn new(rx: mpsc::UnboundedReceiver<DetailUpdate>) -> Self {
        Self {
            rx,
            item: Value::Null,
            active_panel: String::new(),
            updates: 0,
        }
    }

    /// Apply every pending update; returns how many arrived
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.rx.try_recv() {
            self.item = update.item;
            self.active_panel = update.active_panel;
            self.updates += 1;
            applied += 1;
        }
        applied
    }
}

/// Main application state for the TUI
pub struct App {
    /// Clusters returned by the portal, in portal order
    pub clusters: Vec<Cluster>,
    /// Whether the cluster list has loaded at least once
    pub clusters_loaded: bool,
    /// Whether a cluster list request is outstanding
    pub clusters_loading: bool,
    /// Last cluster list failure, cleared by a successful load
    pub cluster_error: Option<FetchFailure>,
    /// Index of the selected cluster
    pub selected: usize,
    /// Current detail tab
    pub tab: DetailTab,

    /// Fetch gate, alerts data and error slots
    pub alerts: AlertsController,
    /// Detail view fed by the alerts controller
    pub detail: DetailView,

    /// Current color theme
    pub theme: Theme,
    /// Transient notification (copy, refresh)
    pub toast: Option<Toast>,
    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,
    /// Where clusters come from, shown in the title bar
    pub source_label: String,
    /// Whether the app should quit
    pub should_quit: bool,

    portal: Arc<dyn PortalApi>,
    completions: CompletionSender,
    cluster_lists: ClusterListSender,
    animation_frame: usize,
    /// When the app started (for uptime display)
    start_time: Instant,
}

impl App {
    pub fn new(
        config: &Config,
        portal: Arc<dyn PortalApi>,
        log_buffer: LogBuffer,
        completions: CompletionSender,
        cluster_lists: ClusterListSender,
    ) -> Self {
        let mut alerts = AlertsController::new();
        let detail = DetailView::new(alerts.attach_detail());

        let source_label = if config.demo_mode {
            "demo".to_string()
        } else {
            config.api_url.clone()
        };

        Self {
            clusters: Vec::new(),
            clusters_loaded: false,
            clusters_loading: false,
            cluster_error: None,
            selected: 0,
            tab: DetailTab::from_id(&config.initial_panel).unwrap_or_default(),
            alerts,
            detail,
            theme: ThemeKind::from_name(&config.theme).theme(),
            toast: None,
            log_buffer,
            source_label,
            should_quit: false,
            portal,
            completions,
            cluster_lists,
            animation_frame: 0,
            start_time: Instant::now(),
        }
    }

    /// Cluster under the cursor, if the list is non-empty
    pub fn current_cluster(&self) -> Option<&Cluster> {
        self.clusters.get(self.selected)
    }

    /// Snapshot of the selection for the fetch gate
    pub fn selection_context(&self) -> SelectionContext {
        let current_cluster = self.current_cluster().cloned();
        SelectionContext {
            cluster_name: current_cluster
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            current_cluster,
            active_panel: self.tab.id().to_string(),
            cluster_loaded: self.clusters_loaded,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────────────────────

    /// Evaluate the fetch gate and start a fetch if it opens
    pub fn sync_alerts(&mut self) {
        let ctx = self.selection_context();
        if let Some(request) = self.alerts.evaluate(&ctx) {
            dispatch::spawn_fetch(self.portal.clone(), request, self.completions.clone());
        }
    }

    /// Apply a finished fetch, then give the gate another look
    pub fn on_fetch_completed(&mut self, completion: FetchCompletion) {
        let ctx = self.selection_context();
        if self.alerts.resolve(completion, &ctx) == Resolution::Applied {
            self.detail.drain();
        }
        self.sync_alerts();
    }

    /// Start loading the cluster list unless a load is already running
    pub fn request_clusters(&mut self) {
        if self.clusters_loading {
            return;
        }
        self.clusters_loading = true;
        tracing::info!("Loading cluster list from {}", self.source_label);

        let portal = self.portal.clone();
        let tx = self.cluster_lists.clone();
        tokio::spawn(async move {
            let result = portal.list_clusters().await;
            if tx.send(result).is_err() {
                tracing::debug!("Cluster list arrived after the dashboard closed");
            }
        });
    }

    /// Store a cluster list result, keeping the selection on the same name
    pub fn on_clusters_loaded(&mut self, result: ClusterListResult) {
        self.clusters_loading = false;
        match result {
            Ok(clusters) => {
                tracing::info!("Loaded {} clusters", clusters.len());
                let previous = self.current_cluster().map(|c| c.name.clone());
                self.clusters = clusters;
                self.selected = previous
                    .and_then(|name| self.clusters.iter().position(|c| c.name == name))
                    .unwrap_or(0);
                self.clusters_loaded = true;
                self.cluster_error = None;
            }
            Err(failure) => {
                tracing::warn!("Failed to load cluster list: {}", failure);
                self.cluster_error = Some(failure);
            }
        }
        self.sync_alerts();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the cursor down, stopping at the last cluster
    pub fn select_next(&mut self) {
        if !self.clusters.is_empty() {
            self.selected = (self.selected + 1).min(self.clusters.len() - 1);
        }
    }

    /// Move the cursor up, stopping at the first cluster
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Switch to a specific tab
    pub fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    /// Switch to the previous tab
    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    /// `r`: reload the cluster list if it never loaded, otherwise re-arm alerts
    pub fn refresh(&mut self) {
        if !self.clusters_loaded {
            self.request_clusters();
        } else if self.alerts.refresh() {
            self.show_toast("↻ Refreshing alerts");
        }
    }

    /// Dismiss the alerts error banner
    ///
    /// The banner is only drawn on the alerts tab; elsewhere this does nothing.
    pub fn dismiss_error(&mut self) -> bool {
        self.tab == DetailTab::Alerts && self.alerts.dismiss_error()
    }

    /// Copy the current alerts payload to the clipboard as JSON
    pub fn copy_alerts(&mut self) {
        match super::clipboard::copy_json(self.alerts.data()) {
            Ok(bytes) => self.show_toast(format!("✓ Copied {} bytes of alerts", bytes)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame housekeeping
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Clear the toast once it has been visible long enough
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Advance the spinner and pick up pending detail updates
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.detail.drain();
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Elapsed time since start, formatted as HH:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::FetchPhase;
    use crate::demo::{DemoPortal, DEMO_FAILING_CLUSTER};
    use std::time::Duration;

    struct Harness {
        app: App,
        completions: mpsc::UnboundedReceiver<FetchCompletion>,
        clusters: mpsc::UnboundedReceiver<ClusterListResult>,
    }

    fn harness() -> Harness {
        let (completions_tx, completions) = dispatch::completion_channel();
        let (clusters_tx, clusters) = mpsc::unbounded_channel();
        let config = Config {
            demo_mode: true,
            ..Config::default()
        };
        let app = App::new(
            &config,
            Arc::new(DemoPortal::with_latency(Duration::ZERO)),
            LogBuffer::new(),
            completions_tx,
            clusters_tx,
        );
        Harness {
            app,
            completions,
            clusters,
        }
    }

    async fn load_clusters(h: &mut Harness) {
        h.app.request_clusters();
        let result = h.clusters.recv().await.unwrap();
        h.app.on_clusters_loaded(result);
    }

    #[test]
    fn tab_ids_round_trip_case_insensitively() {
        assert_eq!(DetailTab::from_id("clusteralerts"), Some(DetailTab::Alerts));
        assert_eq!(DetailTab::from_id("OVERVIEW"), Some(DetailTab::Overview));
        assert_eq!(DetailTab::from_id("nodes"), None);
        assert_eq!(DetailTab::Overview.next(), DetailTab::Alerts);
        assert_eq!(DetailTab::Overview.prev(), DetailTab::Alerts);
    }

    #[tokio::test]
    async fn nothing_fetches_before_clusters_load() {
        let mut h = harness();
        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        assert_eq!(h.app.alerts.phase(), &FetchPhase::Idle);
        assert!(!h.app.selection_context().cluster_loaded);
    }

    #[tokio::test]
    async fn overview_tab_does_not_fetch() {
        let mut h = harness();
        load_clusters(&mut h).await;
        assert_eq!(h.app.tab, DetailTab::Overview);
        assert_eq!(h.app.alerts.phase(), &FetchPhase::Idle);
    }

    #[tokio::test]
    async fn alerts_tab_fetches_and_updates_detail_view() {
        let mut h = harness();
        load_clusters(&mut h).await;

        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        assert!(matches!(h.app.alerts.phase(), FetchPhase::InFlight(_)));

        let completion = h.completions.recv().await.unwrap();
        h.app.on_fetch_completed(completion);

        assert_eq!(
            h.app.alerts.phase(),
            &FetchPhase::Done("aro-prod-eastus".to_string())
        );
        assert_eq!(h.app.detail.updates, 1);
        assert_eq!(h.app.detail.active_panel, "ClusterAlerts");
        assert_eq!(&h.app.detail.item, h.app.alerts.data());
    }

    #[tokio::test]
    async fn moving_selection_fetches_next_cluster() {
        let mut h = harness();
        load_clusters(&mut h).await;
        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        let first = h.completions.recv().await.unwrap();
        h.app.on_fetch_completed(first);

        h.app.select_next();
        h.app.sync_alerts();
        let second = h.completions.recv().await.unwrap();
        assert_eq!(second.tag.cluster, "aro-prod-westus2");
        h.app.on_fetch_completed(second);
        assert_eq!(h.app.detail.updates, 2);
    }

    #[tokio::test]
    async fn failing_cluster_shows_error_until_dismissed() {
        let mut h = harness();
        load_clusters(&mut h).await;
        let failing = h
            .app
            .clusters
            .iter()
            .position(|c| c.name == DEMO_FAILING_CLUSTER)
            .unwrap();
        h.app.selected = failing;
        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();

        let completion = h.completions.recv().await.unwrap();
        h.app.on_fetch_completed(completion);
        assert_eq!(h.app.alerts.error().map(|e| e.status), Some(503));

        assert!(h.app.dismiss_error());
        assert!(h.app.alerts.error().is_none());
        h.app.sync_alerts();
        assert!(h.completions.try_recv().is_err());
    }

    #[tokio::test]
    async fn reselecting_alerts_tab_refetches() {
        let mut h = harness();
        load_clusters(&mut h).await;
        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        let first = h.completions.recv().await.unwrap();
        h.app.on_fetch_completed(first);

        h.app.set_tab(DetailTab::Overview);
        h.app.sync_alerts();
        assert_eq!(h.app.alerts.phase(), &FetchPhase::Idle);

        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        assert!(matches!(h.app.alerts.phase(), FetchPhase::InFlight(_)));
        let again = h.completions.recv().await.unwrap();
        assert_eq!(again.tag.cluster, "aro-prod-eastus");
    }

    #[tokio::test]
    async fn error_is_kept_while_banner_is_hidden() {
        let mut h = harness();
        load_clusters(&mut h).await;
        let failing = h
            .app
            .clusters
            .iter()
            .position(|c| c.name == DEMO_FAILING_CLUSTER)
            .unwrap();
        h.app.selected = failing;
        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        let completion = h.completions.recv().await.unwrap();
        h.app.on_fetch_completed(completion);

        h.app.set_tab(DetailTab::Overview);
        assert!(!h.app.dismiss_error());
        assert_eq!(h.app.alerts.error().map(|e| e.status), Some(503));
    }

    #[tokio::test]
    async fn refresh_refetches_same_cluster() {
        let mut h = harness();
        load_clusters(&mut h).await;
        h.app.set_tab(DetailTab::Alerts);
        h.app.sync_alerts();
        let first = h.completions.recv().await.unwrap();
        h.app.on_fetch_completed(first);

        h.app.refresh();
        h.app.sync_alerts();
        let again = h.completions.recv().await.unwrap();
        assert_eq!(again.tag.cluster, "aro-prod-eastus");
        assert!(h.app.toast.is_some());
    }

    #[test]
    fn selection_is_clamped() {
        let (completions_tx, _completions) = dispatch::completion_channel();
        let (clusters_tx, _clusters) = mpsc::unbounded_channel();
        let mut app = App::new(
            &Config::default(),
            Arc::new(DemoPortal::default()),
            LogBuffer::new(),
            completions_tx,
            clusters_tx,
        );
        app.select_next();
        app.select_prev();
        assert_eq!(app.selected, 0);
        assert_eq!(app.selection_context().selected_name(), "");
    }
}

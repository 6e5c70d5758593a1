//! Detail view synchronization
//!
//! The detail view subscribes through a [`DetailLink`] and receives one
//! [`DetailUpdate`] per applied fetch. The alerts view never reads back from it.

use serde_json::Value;
use tokio::sync::mpsc;

/// Copy of freshly fetched alerts for the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct DetailUpdate {
    pub item: Value,
    pub active_panel: String,
}

/// Optional sender half of the detail view's update channel
#[derive(Debug, Default)]
pub struct DetailLink {
    tx: Option<mpsc::UnboundedSender<DetailUpdate>>,
}

impl DetailLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a detail view. Replaces any previously attached one.
    pub fn attach(&mut self) -> mpsc::UnboundedReceiver<DetailUpdate> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.tx = Some(tx);
        rx
    }

    #[cfg(test)]
    pub fn detach(&mut self) {
        self.tx = None;
    }

    /// Whether a live detail view is listening
    pub fn is_attached(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Push an update. Silently skipped when nothing is attached; a closed
    /// receiver detaches the link.
    pub fn publish(&mut self, update: DetailUpdate) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        if tx.send(update).is_err() {
            tracing::debug!("Detail view went away, dropping link");
            self.tx = None;
            return false;
        }
        true
    }
}

//! Cluster alerts view logic
//!
//! - `gate`: when to fetch (explicit Idle / InFlight / Done state machine)
//! - `store`: data and error slots
//! - `sync`: update channel to the detail view
//! - `controller`: composes the three and resolves completions
//! - `dispatch`: runs fetches on tokio and reports back
//! - `model`: alert rows pulled out of the opaque payload for display

pub mod controller;
pub mod dispatch;
pub mod gate;
pub mod model;
pub mod store;
pub mod sync;

pub use controller::{AlertsController, FetchCompletion, Resolution};
pub use gate::{FetchPhase, SelectionContext, ALERTS_PANEL};
pub use sync::DetailUpdate;

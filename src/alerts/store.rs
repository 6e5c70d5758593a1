//! Alert state slots: last fetched payload and last failure
//!
//! Direct replacement only. Writing one slot never touches the other.

use crate::portal::FetchFailure;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct AlertState {
    data: Value,
    error: Option<FetchFailure>,
}

impl Default for AlertState {
    fn default() -> Self {
        Self {
            data: Value::Array(Vec::new()),
            error: None,
        }
    }
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = data;
    }

    pub fn set_error(&mut self, error: FetchFailure) {
        self.error = Some(error);
    }

    /// Banner dismissal. Returns whether there was anything to clear.
    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_empty() {
        let state = AlertState::new();
        assert_eq!(state.data(), &json!([]));
        assert!(state.error().is_none());
    }

    #[test]
    fn slots_are_independent() {
        let mut state = AlertState::new();
        state.set_data(json!([{"alertname": "A"}]));
        state.set_error(FetchFailure::from_status(500));

        assert_eq!(state.data(), &json!([{"alertname": "A"}]));
        assert!(state.dismiss_error());
        assert_eq!(state.data(), &json!([{"alertname": "A"}]));
        assert!(!state.dismiss_error());
    }
}

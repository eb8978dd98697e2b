//! Navigator that records every location it is sent to.

use std::sync::{Mutex, PoisonError};

use crate::domain::gateway::{Location, Navigator};

#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Location>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent location, if any navigation happened
    pub fn current(&self) -> Option<Location> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<Location> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, location: Location) {
        tracing::debug!(path = %location.path, "Navigate");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location);
    }
}

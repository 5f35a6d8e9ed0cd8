//! Idle pool of libcurl easy handles.
//!
//! A handle keeps its connection cache across `reset`, so returning handles to
//! the pool lets consecutive navigations to the same host reuse connections.

use std::sync::{Mutex, PoisonError};

use curl::easy::Easy;

/// Idle handles kept around for reuse.
const MAX_IDLE_HANDLES: usize = 4;

#[derive(Default)]
pub(crate) struct HandlePool {
    idle: Mutex<Vec<Easy>>,
}

impl HandlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes an idle handle or creates a new one. Callers must `reset` it.
    pub fn checkout(&self) -> Easy {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_else(Easy::new)
    }

    pub fn checkin(&self, easy: Easy) {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < MAX_IDLE_HANDLES {
            idle.push(easy);
        }
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

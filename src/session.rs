// src/session.rs
//! Single-flight guard for interactive callers
//!
//! A session runs at most one simulation at a time. A request that arrives
//! while another is in flight is refused with [`RcError::SessionBusy`] rather
//! than queued. Each run is tagged with a generation number; calling
//! [`SimulationSession::invalidate`] (e.g. after the parameters changed)
//! marks every earlier generation stale so its result can be dropped.

use crate::config::SimulationParameters;
use crate::error::{RcError, RcResult};
use crate::mc::mc_engine::{simulate_and_compare_checked, SimulationOutput};
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, TryLockError};

/// Result of a session run together with the generation it belongs to
#[derive(Debug)]
pub struct Tagged<T> {
    pub generation: u64,
    pub value: T,
}

#[derive(Debug, Default)]
pub struct SimulationSession {
    active: Mutex<()>,
    generation: AtomicU64,
}

impl SimulationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` unless another run is already active
    pub fn try_run_with<T, F: FnOnce() -> T>(&self, f: F) -> RcResult<Tagged<T>> {
        let _guard = match self.active.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Err(RcError::SessionBusy),
            // a panicked run leaves nothing behind worth protecting
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("session run {} started", generation);
        let value = f();
        Ok(Tagged { generation, value })
    }

    /// Validate and simulate under the session guard
    pub fn try_run(&self, params: &SimulationParameters) -> RcResult<Tagged<SimulationOutput>> {
        self.try_run_with(|| simulate_and_compare_checked(params))
            .and_then(|tagged| {
                Ok(Tagged {
                    generation: tagged.generation,
                    value: tagged.value?,
                })
            })
    }

    /// Mark every run started so far as stale
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// True if no run has started and no invalidation happened since `generation`
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

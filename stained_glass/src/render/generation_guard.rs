use crate::error::*;

use once_cell::sync::{Lazy};

use std::sync::*;

///
/// The states that a generation guard can be in
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationState {
    /// No image is being generated
    Idle,

    /// An image is being generated: further requests are rejected until it finishes
    Generating,
}

///
/// Ensures that only one image is generated at a time
///
/// `begin()` moves the guard from `Idle` to `Generating` and returns a ticket. Dropping the ticket is the only way
/// to move back to `Idle`. Requests that arrive while a generation is in progress are rejected rather than queued.
///
#[derive(Debug)]
pub struct GenerationGuard {
    state: Mutex<GenerationState>,
}

///
/// Held for the duration of a generation: the guard returns to `Idle` when this is dropped
///
#[derive(Debug)]
pub struct GenerationTicket<'a> {
    guard: &'a GenerationGuard,
}

/// The guard shared by every renderer that uses `GenerationGuard::process_wide()`
static PROCESS_GENERATION_GUARD: Lazy<Arc<GenerationGuard>> = Lazy::new(|| Arc::new(GenerationGuard::new()));

impl GenerationGuard {
    ///
    /// Creates a new guard in the idle state
    ///
    pub fn new() -> Self {
        GenerationGuard { state: Mutex::new(GenerationState::Idle) }
    }

    ///
    /// Returns the guard shared by the whole process
    ///
    pub fn process_wide() -> Arc<GenerationGuard> {
        Arc::clone(&PROCESS_GENERATION_GUARD)
    }

    #[inline]
    fn lock_state(&self) -> MutexGuard<'_, GenerationState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    ///
    /// The current state of this guard
    ///
    pub fn state(&self) -> GenerationState {
        *self.lock_state()
    }

    ///
    /// Starts a generation, or returns `GenerationInProgress` if one is already running
    ///
    pub fn begin(&self) -> Result<GenerationTicket<'_>> {
        let mut state = self.lock_state();

        match *state {
            GenerationState::Idle       => {
                *state = GenerationState::Generating;
                Ok(GenerationTicket { guard: self })
            }

            GenerationState::Generating => {
                log::debug!("Dropping generation request: a generation is already in progress");
                Err(GlassError::GenerationInProgress)
            }
        }
    }

    ///
    /// Finishes the current generation
    ///
    fn finish(&self) {
        *self.lock_state() = GenerationState::Idle;
    }
}

impl Default for GenerationGuard {
    fn default() -> Self {
        GenerationGuard::new()
    }
}

impl<'a> Drop for GenerationTicket<'a> {
    fn drop(&mut self) {
        self.guard.finish();
    }
}

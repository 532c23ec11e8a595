//! One generation feature instance (the search box or the random picker).
//!
//! A session owns the most recently generated [`Recipe`] and tracks requests
//! in flight. Every request is tagged with a sequence number; a response is
//! only applied if no newer request was issued (or `cancel` called) while it
//! was outstanding.

use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::generator::RecipeGenerator;
use crate::model::{Recipe, RecipeRequest};
use crate::RecipeError;

/// Outcome of a request that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The recipe is now the session's current recipe
    Fresh(Recipe),
    /// A newer request or a cancellation overtook this one; nothing changed
    Superseded,
}

#[derive(Debug, Default)]
struct SessionState {
    latest_seq: u64,
    in_flight: usize,
    current: Option<Recipe>,
}

fn lock_state(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    // The guarded state is plain data, so a poisoned lock is still usable
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Counts one outstanding request until dropped, including when the
/// caller drops the `generate` future before it completes
struct InFlight<'a> {
    state: &'a Mutex<SessionState>,
}

impl<'a> InFlight<'a> {
    /// Take the next sequence number and mark a request as outstanding
    fn enter(state: &'a Mutex<SessionState>) -> (Self, u64) {
        let mut guard = lock_state(state);
        guard.latest_seq += 1;
        guard.in_flight += 1;
        (InFlight { state }, guard.latest_seq)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut guard = lock_state(self.state);
        guard.in_flight = guard.in_flight.saturating_sub(1);
    }
}

pub struct RecipeSession {
    generator: Arc<RecipeGenerator>,
    state: Mutex<SessionState>,
}

impl RecipeSession {
    pub fn new(generator: Arc<RecipeGenerator>) -> Self {
        RecipeSession {
            generator,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        lock_state(&self.state)
    }

    /// The most recent successfully generated recipe, if any
    pub fn current(&self) -> Option<Recipe> {
        self.state().current.clone()
    }

    /// Whether any request is still outstanding
    pub fn is_loading(&self) -> bool {
        self.state().in_flight > 0
    }

    /// Discard the result of every request issued so far
    pub fn cancel(&self) {
        let mut state = self.state();
        state.latest_seq += 1;
        debug!("Cancelled requests up to sequence {}", state.latest_seq);
    }

    /// Generate a recipe and make it current unless overtaken.
    ///
    /// Validation errors are returned before a sequence number is taken,
    /// so they never invalidate a request already in flight. A failure of
    /// the latest request leaves the current recipe unchanged.
    pub async fn generate(&self, request: &RecipeRequest) -> Result<Generation, RecipeError> {
        request.validate()?;

        let (in_flight, seq) = InFlight::enter(&self.state);
        debug!("Request {} started for {}", seq, request);

        let result = self.generator.generate(request).await;
        drop(in_flight);

        let mut state = self.state();

        if seq != state.latest_seq {
            info!(
                "Discarding response {} for {}; request {} is newer",
                seq, request, state.latest_seq
            );
            return Ok(Generation::Superseded);
        }

        match result {
            Ok(recipe) => {
                state.current = Some(recipe.clone());
                Ok(Generation::Fresh(recipe))
            }
            Err(e) => {
                warn!("Request {} for {} failed: {}", seq, request, e);
                Err(e)
            }
        }
    }
}

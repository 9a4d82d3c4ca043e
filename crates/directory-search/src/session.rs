//! Query-driven search session.
//!
//! A [`SearchSession`] turns a stream of query edits into published
//! [`SearchState`] snapshots. Each non-blank edit spawns one search; a
//! newer edit aborts the older task, and the generation stamped on the
//! state keeps a late finisher from overwriting newer results.

use std::sync::Arc;

use directory_core::{Coordinates, Poi, PreferenceStore};
use directory_providers::{Geocoder, PlacesBackend};
use futures::future::{AbortHandle, Abortable, Aborted};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::location::{LocationError, LocationProvider};
use crate::origin::resolve_origin;

/// What observers see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// The latest query text, verbatim.
    pub query: String,
    pub results: Vec<Poi>,
    pub loading: bool,
    /// Bumped on every query change and on [`SearchSession::cancel`].
    pub generation: u64,
}

/// How one search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The backend answered; provider failures already degraded to empty.
    Completed(Vec<Poi>),
    /// Location permission was denied; an empty set was published.
    PermissionDenied,
    /// A newer query or an explicit cancel superseded this search. Nothing
    /// was published.
    Cancelled,
}

impl SearchOutcome {
    /// Results to show; empty unless the search completed.
    #[must_use]
    pub fn into_results(self) -> Vec<Poi> {
        match self {
            Self::Completed(results) => results,
            Self::PermissionDenied | Self::Cancelled => Vec::new(),
        }
    }
}

/// A spawned search.
pub struct SearchHandle {
    generation: u64,
    task: JoinHandle<SearchOutcome>,
}

impl SearchHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits for the search to finish.
    pub async fn outcome(self) -> SearchOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => SearchOutcome::Cancelled,
        }
    }
}

struct InFlight {
    generation: u64,
    abort: AbortHandle,
}

struct Shared {
    backend: Arc<dyn PlacesBackend>,
    preferences: Arc<dyn PreferenceStore>,
    location: Arc<dyn LocationProvider>,
    geocoder: Arc<dyn Geocoder>,
    state: watch::Sender<SearchState>,
}

impl Shared {
    async fn run(&self, query: &str) -> SearchOutcome {
        let prefs = self.preferences.snapshot();
        let origin =
            match resolve_origin(&prefs, self.location.as_ref(), self.geocoder.as_ref()).await {
                Ok(origin) => origin,
                Err(LocationError::PermissionDenied) => {
                    tracing::warn!(query, "location permission not granted; no results");
                    return SearchOutcome::PermissionDenied;
                }
                Err(err) => {
                    tracing::warn!(query, error = %err, "location lookup failed; searching without bias");
                    Coordinates::ORIGIN
                }
            };

        tracing::debug!(
            provider = %self.backend.provider(),
            query,
            %origin,
            radius_miles = prefs.search_radius_miles,
            "dispatching search"
        );
        SearchOutcome::Completed(self.backend.search(query, origin).await)
    }

    /// Publishes `outcome` only if `generation` is still current. Returns
    /// whether it was published.
    fn publish(&self, generation: u64, outcome: &SearchOutcome) -> bool {
        self.state.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.results = match outcome {
                SearchOutcome::Completed(results) => results.clone(),
                SearchOutcome::PermissionDenied | SearchOutcome::Cancelled => Vec::new(),
            };
            state.loading = false;
            true
        })
    }
}

/// Drives searches from query edits and publishes their state.
///
/// Dropping the session aborts the in-flight search.
pub struct SearchSession {
    shared: Arc<Shared>,
    in_flight: Option<InFlight>,
}

impl SearchSession {
    #[must_use]
    pub fn new(
        backend: Arc<dyn PlacesBackend>,
        preferences: Arc<dyn PreferenceStore>,
        location: Arc<dyn LocationProvider>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            shared: Arc::new(Shared {
                backend,
                preferences,
                location,
                geocoder,
                state,
            }),
            in_flight: None,
        }
    }

    /// A receiver that observes every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.shared.state.subscribe()
    }

    /// A copy of the current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.shared.state.borrow().clone()
    }

    /// Records a query edit.
    ///
    /// A blank query clears the results at once without touching the
    /// network and returns `None`. Otherwise the previous search is
    /// aborted, `loading` is set, and the new search is spawned on the
    /// current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn on_query_change(&mut self, query: &str) -> Option<SearchHandle> {
        self.abort_in_flight();
        let blank = query.trim().is_empty();

        let mut generation = 0;
        self.shared.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.query = query.to_owned();
            if blank {
                state.results.clear();
                state.loading = false;
            } else {
                state.loading = true;
            }
        });
        if blank {
            return None;
        }

        let (abort, registration) = AbortHandle::new_pair();
        let shared = Arc::clone(&self.shared);
        let query = query.to_owned();
        let task = tokio::spawn(async move {
            let search = Abortable::new(shared.run(&query), registration);
            match search.await {
                Ok(outcome) => {
                    if !shared.publish(generation, &outcome) {
                        tracing::debug!(query = %query, generation, "discarding stale results");
                        return SearchOutcome::Cancelled;
                    }
                    outcome
                }
                Err(Aborted) => {
                    tracing::debug!(query = %query, generation, "search cancelled");
                    SearchOutcome::Cancelled
                }
            }
        });

        self.in_flight = Some(InFlight { generation, abort });
        Some(SearchHandle { generation, task })
    }

    /// Runs one search for `query` without publishing anything.
    ///
    /// A blank query completes with no results and no network call.
    pub async fn search_once(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::Completed(Vec::new());
        }
        self.shared.run(query).await
    }

    /// Aborts the in-flight search, if any, and clears `loading`.
    ///
    /// Results already on screen stay; the aborted search publishes nothing.
    /// An idle session is left untouched and observers are not notified.
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        self.shared.state.send_if_modified(|state| {
            if !state.loading {
                return false;
            }
            state.generation += 1;
            state.loading = false;
            true
        });
    }

    fn abort_in_flight(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        tracing::debug!(generation = in_flight.generation, "superseding search");
        in_flight.abort.abort();
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort.abort();
        }
    }
}

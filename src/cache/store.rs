//! In-memory airport store
//!
//! Holds the flattened airport list loaded once at startup. The list is
//! published with a single assignment and is read-only from then on, so any
//! number of queries can run concurrently without locking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use super::AirportQuery;
use crate::data::{transform, AirportSource, FlatAirport};

/// Lifecycle of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Nothing loaded yet
    Empty,
    /// A load is in progress
    Loading,
    /// The snapshot is published and serving queries
    Ready,
}

/// Immutable result of the initial load
#[derive(Debug)]
struct Snapshot {
    airports: Box<[FlatAirport]>,
    loaded_at: DateTime<Utc>,
}

/// Read-only airport cache populated by a single call to [`AirportStore::load`]
#[derive(Debug, Default)]
pub struct AirportStore {
    loading: AtomicBool,
    snapshot: OnceLock<Snapshot>,
}

impl AirportStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from `source`
    ///
    /// Fetches once, keeps every record that flattens successfully in
    /// upstream order, then publishes the result. Only the first call has
    /// any effect; later calls neither fetch nor modify the snapshot.
    pub async fn load<S: AirportSource>(&self, source: &S) {
        if self.loading.swap(true, Ordering::AcqRel) {
            tracing::warn!("Airport store already loaded, ignoring repeated load");
            return;
        }

        tracing::info!("Initializing airport cache");
        let raw_airports = source.fetch_all().await;
        let fetched = raw_airports.len();

        let airports: Box<[FlatAirport]> = raw_airports
            .iter()
            .filter_map(|raw| transform(raw.as_ref()))
            .collect();
        let retained = airports.len();

        let snapshot = Snapshot {
            airports,
            loaded_at: Utc::now(),
        };
        if self.snapshot.set(snapshot).is_err() {
            tracing::error!("Airport snapshot was published twice; keeping the first");
            return;
        }

        tracing::info!(
            fetched,
            retained,
            skipped = fetched - retained,
            "Airport cache initialized with {} entries",
            retained
        );
    }

    /// Current lifecycle state
    pub fn state(&self) -> StoreState {
        if self.snapshot.get().is_some() {
            StoreState::Ready
        } else if self.loading.load(Ordering::Acquire) {
            StoreState::Loading
        } else {
            StoreState::Empty
        }
    }

    /// All cached airports in load order, empty until the store is ready
    pub fn airports(&self) -> &[FlatAirport] {
        self.snapshot
            .get()
            .map(|snapshot| &snapshot.airports[..])
            .unwrap_or(&[])
    }

    /// When the snapshot was published
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.get().map(|snapshot| snapshot.loaded_at)
    }

    pub fn len(&self) -> usize {
        self.airports().len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports().is_empty()
    }

    /// Filters the cached airports
    ///
    /// Supplied criteria combine with AND; blank criteria are ignored.
    /// Results keep load order. No match yields an empty list.
    pub fn query(&self, query: &AirportQuery) -> Vec<FlatAirport> {
        let criteria = query.normalized();
        if criteria.is_unconstrained() {
            return self.airports().to_vec();
        }
        self.airports()
            .iter()
            .filter(|airport| criteria.matches(airport))
            .cloned()
            .collect()
    }

    /// Looks up a cached airport by code, ignoring case
    pub fn get(&self, airport_code: &str) -> Option<&FlatAirport> {
        self.airports()
            .iter()
            .find(|airport| airport.airport_code.eq_ignore_ascii_case(airport_code))
    }
}

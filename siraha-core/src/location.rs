//! Acquisition of the current user position.
//!
//! Position lookups may overlap and complete out of order.
//! [`LocationRequests`] makes sure that only the result of the
//! most recently issued request is committed.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    time::Duration,
};

use thiserror::Error;

use crate::entities::GeoPoint;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAXIMUM_AGE: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    /// Give up if no position is available within this time.
    pub timeout: Duration,
    /// Accept a cached position that is not older than this.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_TIMEOUT,
            maximum_age: DEFAULT_MAXIMUM_AGE,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Permission to access the location was denied")]
    PermissionDenied,
    #[error("The current position is unavailable")]
    PositionUnavailable,
    #[error("Timed out while acquiring the current position")]
    Timeout,
}

pub trait LocationProvider {
    fn current_position(&self, opts: &PositionOptions) -> Result<GeoPoint, LocationError>;
}

/// Identifies a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Committed,
    /// A newer request has been issued in the meantime.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedLocation {
    pub token: RequestToken,
    pub result: Result<GeoPoint, LocationError>,
}

#[derive(Debug, Default)]
pub struct LocationRequests {
    issued: AtomicU64,
    latest: Mutex<Option<CommittedLocation>>,
}

impl LocationRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request and invalidates all pending ones.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.issued.load(Ordering::SeqCst) == token.0
    }

    /// Stores the result unless a newer request has been issued
    /// or a newer result has already been committed.
    pub fn commit(&self, token: RequestToken, result: Result<GeoPoint, LocationError>) -> Commit {
        let mut latest = match self.latest.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !self.is_current(token) {
            log::debug!(
                "Discarding stale location result of request #{}",
                token.generation()
            );
            return Commit::Stale;
        }
        if latest.as_ref().map(|l| l.token > token).unwrap_or(false) {
            return Commit::Stale;
        }
        *latest = Some(CommittedLocation { token, result });
        Commit::Committed
    }

    pub fn latest(&self) -> Option<CommittedLocation> {
        match self.latest.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// The most recently committed position, if the
    /// corresponding request succeeded.
    pub fn position(&self) -> Option<GeoPoint> {
        self.latest().and_then(|l| l.result.ok())
    }

    /// Issues a request, queries the provider and commits the result.
    pub fn request<P>(
        &self,
        provider: &P,
        opts: &PositionOptions,
    ) -> (Commit, Result<GeoPoint, LocationError>)
    where
        P: LocationProvider + ?Sized,
    {
        let token = self.begin();
        let result = provider.current_position(opts);
        (self.commit(token, result), result)
    }
}

/// Provides a position that is known in advance,
/// e.g. from a configuration file or the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Option<GeoPoint>);

impl LocationProvider for FixedLocation {
    fn current_position(&self, _: &PositionOptions) -> Result<GeoPoint, LocationError> {
        match self.0 {
            Some(pos) if pos.is_valid() => Ok(pos),
            Some(_) | None => Err(LocationError::PositionUnavailable),
        }
    }
}

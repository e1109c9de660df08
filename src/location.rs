//! Asynchronous position lookup on top of a blocking [`LocationProvider`].

use siraha_core::location::{
    Commit, LocationError, LocationProvider, LocationRequests, PositionOptions,
};
use siraha_entities::geo::GeoPoint;
use std::{future::Future, sync::Arc};
use tokio::{task, time};

/// Queries the provider without blocking the runtime.
///
/// The request is registered immediately, so a request that is
/// issued later always supersedes this one, no matter which of
/// them resolves first.
pub fn acquire_position<P>(
    provider: Arc<P>,
    requests: Arc<LocationRequests>,
    opts: PositionOptions,
) -> impl Future<Output = Result<GeoPoint, LocationError>>
where
    P: LocationProvider + Send + Sync + 'static,
{
    let token = requests.begin();
    async move {
        log::debug!("Acquiring position (request #{})", token.generation());
        let lookup = task::spawn_blocking(move || provider.current_position(&opts));
        let result = match time::timeout(opts.timeout, lookup).await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                log::warn!("Position lookup failed: {err}");
                Err(LocationError::PositionUnavailable)
            }
            Err(_) => Err(LocationError::Timeout),
        };
        if requests.commit(token, result) == Commit::Stale {
            log::debug!(
                "Ignoring result of superseded request #{}",
                token.generation()
            );
        }
        result
    }
}

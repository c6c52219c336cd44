use crate::domain::events::Event;
use crate::location::{LocationSource, UpdatePolicy};
use tokio::sync::mpsc::Sender;
use tracing::{instrument, trace, warn};

/// Pulls fixes from the source and forwards the ones the policy admits to the
/// store. Returns when the source ends or the store is gone.
#[instrument(skip_all)]
pub async fn listen<S: LocationSource>(mut source: S, mut policy: UpdatePolicy, tx: Sender<Event>) {
    while let Some(fix) = source.next_fix().await {
        if !policy.admit(&fix) {
            trace!("🔹 Dropped location fix: {:?}", fix);
            continue;
        }

        if tx.send(Event::LocationChanged(fix)).await.is_err() {
            warn!("🔴 The store is gone, stopping location updates");
            return;
        }
    }
}

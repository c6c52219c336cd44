use crate::app_config::Scatter;
use crate::domain::ViewState;
use crate::domain::events::Event;
use crate::view_reducer::reduce;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::{self, Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, instrument};

pub type StoreSnapshot = Arc<ViewState>;

#[derive(Debug)]
pub struct Store {
    state: StoreSnapshot,
    scatter: Scatter,
    rng: StdRng,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<StoreSnapshot>,
    notifier_rx: WatchReceiver<StoreSnapshot>,
}

impl Store {
    pub fn new(rx: Receiver<Event>, scatter: Scatter) -> Self {
        Store::with_rng(rx, scatter, StdRng::from_os_rng())
    }

    /// Lets tests pin the RNG to a known seed.
    pub fn with_rng(rx: Receiver<Event>, scatter: Scatter, rng: StdRng) -> Self {
        let state = Arc::new(ViewState::default());
        let (notifier_tx, notifier_rx) = watch::channel::<StoreSnapshot>(state.clone());

        Store {
            state,
            scatter,
            rng,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<StoreSnapshot> {
        self.notifier_rx.clone()
    }

    /// Drains events, reducing each into the current state. Only actual state
    /// changes are published, so the camera feedback echoed back by the map
    /// service converges instead of re-rendering forever.
    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);

            let next = reduce(&self.state, event, &self.scatter, &mut self.rng);
            if *self.state == next {
                debug!("🔵 State is unchanged, not notifying listeners");
                continue;
            }

            self.state = Arc::new(next);
            self.notifier_tx.send(self.state.clone()).unwrap_or_default();
        }
    }
}

use crate::flickr::Photo;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use tokio::sync::mpsc as tokio_mpsc;
use tracing::info;

/// Events emitted by the feed service
#[derive(Debug, Clone, PartialEq)]
pub enum FeedProgress {
    /// The debounce timer fired and a request is going out
    Loading { tags: String, page: u32 },
    /// Full item list for `tags`, to be windowed for `page`
    Loaded {
        tags: String,
        page: u32,
        items: Arc<Vec<Photo>>,
    },
    Failed { tags: String, message: String },
}

type SubscriptionId = u64;
type Subscriptions = Arc<Mutex<HashMap<SubscriptionId, tokio_mpsc::UnboundedSender<FeedProgress>>>>;

/// Fan-out of feed progress to any number of subscribers
#[derive(Clone)]
pub struct FeedProgressHandle {
    subscriptions: Subscriptions,
    next_id: Arc<AtomicU64>,
}

impl FeedProgressHandle {
    /// Create a new progress handle and spawn the dispatch task
    pub fn new(
        mut progress_rx: tokio_mpsc::UnboundedReceiver<FeedProgress>,
        runtime_handle: tokio::runtime::Handle,
    ) -> Self {
        let subscriptions: Subscriptions = Arc::new(Mutex::new(HashMap::new()));
        let subscriptions_clone = subscriptions.clone();

        runtime_handle.spawn(async move {
            while let Some(progress) = progress_rx.recv().await {
                let mut subs = match subscriptions_clone.lock() {
                    Ok(subs) => subs,
                    Err(poisoned) => poisoned.into_inner(),
                };
                // Senders fail once the receiver is dropped
                subs.retain(|_, tx| tx.send(progress.clone()).is_ok());
            }
            info!("Feed progress channel closed, exiting");
        });

        Self {
            subscriptions,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Subscribe to all progress updates. Dropping the receiver unsubscribes.
    pub fn subscribe_all(&self) -> tokio_mpsc::UnboundedReceiver<FeedProgress> {
        let (tx, rx) = tokio_mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let mut subs = match self.subscriptions.lock() {
            Ok(subs) => subs,
            Err(poisoned) => poisoned.into_inner(),
        };
        subs.insert(id, tx);
        rx
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscriptions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

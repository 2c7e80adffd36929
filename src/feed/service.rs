use crate::feed::progress::{FeedProgress, FeedProgressHandle};
use crate::flickr::PhotoSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Quiet period before a query change hits the network
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Commands sent to the feed service
#[derive(Debug, Clone, PartialEq)]
pub enum FeedCommand {
    Search { tags: String, page: u32 },
}

/// Handle to the feed service for sending commands
#[derive(Clone)]
pub struct FeedHandle {
    command_tx: tokio_mpsc::UnboundedSender<FeedCommand>,
    progress_handle: FeedProgressHandle,
}

impl FeedHandle {
    /// Request the feed for `tags`, windowed to `page`.
    ///
    /// Restarts the debounce timer; only the last request of a burst is sent.
    pub fn search(&self, tags: String, page: u32) {
        let _ = self.command_tx.send(FeedCommand::Search { tags, page });
    }

    pub fn subscribe_progress(&self) -> tokio_mpsc::UnboundedReceiver<FeedProgress> {
        self.progress_handle.subscribe_all()
    }
}

/// Owns the debounce timer and issues feed reads
pub struct FeedService {
    source: Arc<dyn PhotoSource>,
    debounce: Duration,
    command_rx: tokio_mpsc::UnboundedReceiver<FeedCommand>,
    progress_tx: tokio_mpsc::UnboundedSender<FeedProgress>,
    pending: Option<JoinHandle<()>>,
}

impl FeedService {
    pub fn start(
        source: Arc<dyn PhotoSource>,
        debounce: Duration,
        runtime_handle: tokio::runtime::Handle,
    ) -> FeedHandle {
        let (command_tx, command_rx) = tokio_mpsc::unbounded_channel();
        let (progress_tx, progress_rx) = tokio_mpsc::unbounded_channel();

        let progress_handle = FeedProgressHandle::new(progress_rx, runtime_handle.clone());

        let service = FeedService {
            source,
            debounce,
            command_rx,
            progress_tx,
            pending: None,
        };
        runtime_handle.spawn(service.run());

        FeedHandle {
            command_tx,
            progress_handle,
        }
    }

    async fn run(mut self) {
        info!("FeedService started (debounce {:?})", self.debounce);

        while let Some(command) = self.command_rx.recv().await {
            match command {
                FeedCommand::Search { tags, page } => self.schedule(tags, page),
            }
        }

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        info!("FeedService command channel closed, exiting");
    }

    fn schedule(&mut self, tags: String, page: u32) {
        if let Some(pending) = self.pending.take() {
            // No-op if the timer already fired
            pending.abort();
        }

        debug!("Scheduling feed read for '{}' page {}", tags, page);
        let source = self.source.clone();
        let progress_tx = self.progress_tx.clone();
        let debounce = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            // Detached so a later reschedule cannot cancel a request in flight
            tokio::spawn(fetch(source, tags, page, progress_tx));
        }));
    }
}

async fn fetch(
    source: Arc<dyn PhotoSource>,
    tags: String,
    page: u32,
    progress_tx: tokio_mpsc::UnboundedSender<FeedProgress>,
) {
    let _ = progress_tx.send(FeedProgress::Loading {
        tags: tags.clone(),
        page,
    });

    let progress = match source.fetch_photos(&tags).await {
        Ok(items) => {
            info!("Fetched {} photos for '{}'", items.len(), tags);
            FeedProgress::Loaded {
                tags,
                page,
                items: Arc::new(items),
            }
        }
        Err(e) => {
            error!("Error fetching data for '{}': {}", tags, e);
            FeedProgress::Failed {
                tags,
                message: e.to_string(),
            }
        }
    };
    let _ = progress_tx.send(progress);
}

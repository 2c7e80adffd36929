use crate::feed::{FeedHandle, FeedProgress, FeedState};
use crate::AppContext;
use dioxus::prelude::*;
use tracing::debug;

/// Hook to access the feed service
pub fn use_feed_service() -> FeedHandle {
    let context = use_context::<AppContext>();
    context.feed_handle.clone()
}

/// Shared feed view state
#[derive(Clone)]
pub struct SharedFeedState {
    pub state: Signal<FeedState>,
}

/// Provider that owns the feed view state.
///
/// Folds service progress into the state and re-issues a search whenever
/// the query or the page changes.
#[component]
pub fn FeedStateProvider(children: Element) -> Element {
    let context = use_context::<AppContext>();
    let page_size = context.config.page_size;
    let state = use_signal(move || FeedState::new(page_size));
    let shared_state = SharedFeedState { state };

    use_context_provider(|| shared_state.clone());

    let feed = use_feed_service();

    use_effect({
        let feed = feed.clone();
        let mut state = shared_state.state;
        move || {
            let mut progress_rx = feed.subscribe_progress();
            spawn(async move {
                while let Some(progress) = progress_rx.recv().await {
                    match progress {
                        FeedProgress::Loading { .. } => state.write().begin_loading(),
                        FeedProgress::Loaded { items, page, .. } => {
                            state.write().apply_items(&items, page)
                        }
                        FeedProgress::Failed { .. } => state.write().apply_failure(),
                    }
                }
            });
        }
    });

    // Only the query and page drive requests, not loading or results
    let search_key = use_memo(move || {
        let state = state.read();
        (state.query.clone(), state.page)
    });

    use_effect(move || {
        let (tags, page) = search_key();
        debug!("Search key changed: '{}' page {}", tags, page);
        feed.search(tags, page);
    });

    rsx! {
        {children}
    }
}

/// Hook to access the feed view state
pub fn use_feed_state() -> Signal<FeedState> {
    let state = use_context::<SharedFeedState>();
    state.state
}

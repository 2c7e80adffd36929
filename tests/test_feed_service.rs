#![cfg(feature = "test-utils")]

mod support;
use std::sync::Arc;
use std::time::Duration;

use crate::support::{next_progress, tracing_init};
use flickr_feed::feed::{FeedProgress, FeedService, FeedState, FeedStatus, DEFAULT_DEBOUNCE};
use flickr_feed::test_support::{sample_photos, MockPhotoSource};

fn start(source: Arc<MockPhotoSource>) -> flickr_feed::feed::FeedHandle {
    tracing_init();
    FeedService::start(source, DEFAULT_DEBOUNCE, tokio::runtime::Handle::current())
}

/// Fold events into a view state until the next `Loaded` or `Failed`
async fn settle(
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<FeedProgress>,
    state: &mut FeedState,
) -> FeedProgress {
    loop {
        let event = next_progress(rx).await;
        match &event {
            FeedProgress::Loading { .. } => state.begin_loading(),
            FeedProgress::Loaded { items, page, .. } => {
                state.apply_items(items, *page);
                return event;
            }
            FeedProgress::Failed { .. } => {
                state.apply_failure();
                return event;
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_keystrokes_sends_one_request() {
    let source = Arc::new(MockPhotoSource::new().with_photos("nat", sample_photos("nat", 3)));
    let handle = start(source.clone());
    let mut rx = handle.subscribe_progress();

    handle.search("n".to_string(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.search("na".to_string(), 1);
    tokio::time::sleep(Duration::from_millis(450)).await;
    handle.search("nat".to_string(), 1);

    assert_eq!(
        next_progress(&mut rx).await,
        FeedProgress::Loading {
            tags: "nat".to_string(),
            page: 1
        }
    );
    match next_progress(&mut rx).await {
        FeedProgress::Loaded { tags, items, .. } => {
            assert_eq!(tags, "nat");
            assert_eq!(items.len(), 3);
        }
        other => panic!("unexpected progress: {:?}", other),
    }

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(source.calls(), vec!["nat".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_is_sent_before_quiet_period() {
    let source = Arc::new(MockPhotoSource::new());
    let handle = start(source.clone());

    handle.search("city".to_string(), 1);
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(source.calls().is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(source.calls(), vec!["city".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_page_change_refetches_and_windows() {
    let photos = sample_photos("city", 25);
    let source = Arc::new(MockPhotoSource::new().with_photos("city", photos.clone()));
    let handle = start(source.clone());
    let mut rx = handle.subscribe_progress();
    let mut state = FeedState::default();

    state.set_query("ci".to_string());
    state.select_suggestion("city");
    handle.search(state.query.clone(), state.page);
    settle(&mut rx, &mut state).await;
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.photos, photos[0..10].to_vec());

    assert!(state.next_page());
    assert!(state.next_page());
    handle.search(state.query.clone(), state.page);
    settle(&mut rx, &mut state).await;

    assert_eq!(state.page, 3);
    assert_eq!(state.photos, photos[20..25].to_vec());
    assert!(!state.has_next());
    assert_eq!(source.calls(), vec!["city".to_string(), "city".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_previous_photos() {
    let source = Arc::new(
        MockPhotoSource::new()
            .with_photos("art", sample_photos("art", 4))
            .failing_for("broken"),
    );
    let handle = start(source);
    let mut rx = handle.subscribe_progress();
    let mut state = FeedState::default();

    handle.search("art".to_string(), 1);
    settle(&mut rx, &mut state).await;
    assert_eq!(state.photos.len(), 4);

    handle.search("broken".to_string(), 1);
    let event = settle(&mut rx, &mut state).await;
    assert!(matches!(event, FeedProgress::Failed { ref tags, .. } if tags == "broken"));
    assert!(!state.loading);
    assert_eq!(state.photos.len(), 4);
    assert_eq!(state.status(), FeedStatus::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_empty_feed_renders_empty_status() {
    let source = Arc::new(MockPhotoSource::new());
    let handle = start(source);
    let mut rx = handle.subscribe_progress();
    let mut state = FeedState::default();

    handle.search("nothing-tagged-like-this".to_string(), 1);
    settle(&mut rx, &mut state).await;
    assert_eq!(state.status(), FeedStatus::Empty);
}

#[tokio::test(start_paused = true)]
async fn test_request_in_flight_is_not_cancelled() {
    let source = Arc::new(
        MockPhotoSource::new()
            .with_photos("slow", sample_photos("slow", 2))
            .with_delay("slow", Duration::from_secs(5))
            .with_photos("fast", sample_photos("fast", 7)),
    );
    let handle = start(source.clone());
    let mut rx = handle.subscribe_progress();
    let mut state = FeedState::default();

    handle.search("slow".to_string(), 1);
    tokio::time::sleep(Duration::from_millis(600)).await;
    handle.search("fast".to_string(), 1);

    let first = settle(&mut rx, &mut state).await;
    assert!(matches!(first, FeedProgress::Loaded { ref tags, .. } if tags == "fast"));
    assert_eq!(state.photos.len(), 7);

    // The older response lands last and wins
    let second = settle(&mut rx, &mut state).await;
    assert!(matches!(second, FeedProgress::Loaded { ref tags, .. } if tags == "slow"));
    assert_eq!(state.photos.len(), 2);
    assert_eq!(source.calls(), vec!["slow".to_string(), "fast".to_string()]);
}

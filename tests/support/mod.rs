use flickr_feed::feed::FeedProgress;
use tokio::sync::mpsc::UnboundedReceiver;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Wait for the next progress event, failing the test if the service goes quiet
pub async fn next_progress(rx: &mut UnboundedReceiver<FeedProgress>) -> FeedProgress {
    tokio::time::timeout(std::time::Duration::from_secs(30), rx.recv())
        .await
        .expect("timed out waiting for feed progress")
        .expect("feed progress channel closed")
}

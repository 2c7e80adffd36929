use std::sync::Arc;
use tracing::info;

use flickr_feed::config::Config;
use flickr_feed::feed::FeedService;
use flickr_feed::flickr::FlickrClient;
use flickr_feed::ui::{make_config, App};
use flickr_feed::AppContext;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!("Starting with {:?}", config);

    // Feed service runs on its own runtime, outlives the window
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let client = FlickrClient::with_endpoint(config.feed_url.clone(), config.jsonp_callback.clone());
    let feed_handle = FeedService::start(Arc::new(client), config.debounce, runtime.handle().clone());

    let app_context = AppContext {
        config,
        feed_handle,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(app_context)
        .launch(App);
}

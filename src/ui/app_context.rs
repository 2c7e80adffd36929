use crate::config;
use crate::feed::FeedHandle;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub feed_handle: FeedHandle,
}

pub mod pagination;
pub mod progress;
pub mod service;
pub mod state;
pub mod suggestions;

pub use progress::FeedProgress;
pub use service::{FeedHandle, FeedService, DEFAULT_DEBOUNCE};
pub use state::{FeedState, FeedStatus};
pub use suggestions::{suggest_tags, TAG_VOCABULARY};

pub mod feed_hooks;
pub mod feed_page;
pub mod gallery;
pub mod pagination_controls;
pub mod photo_card;
pub mod search_box;
pub mod suggestion_list;

pub use feed_hooks::{use_feed_state, FeedStateProvider};
pub use feed_page::FeedPage;
pub use gallery::Gallery;
pub use pagination_controls::PaginationControls;
pub use photo_card::PhotoCard;
pub use search_box::SearchBox;
pub use suggestion_list::SuggestionList;

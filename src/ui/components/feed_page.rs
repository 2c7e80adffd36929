use super::{Gallery, PaginationControls, SearchBox, SuggestionList};
use dioxus::prelude::*;

/// Main feed viewer page
#[component]
pub fn FeedPage() -> Element {
    rsx! {
        div { class: "flickr-container",
            h1 { "Flickr Public Feed Viewer" }
            SearchBox {}
            SuggestionList {}
            Gallery {}
            PaginationControls {}
        }
    }
}

use super::{use_feed_state, PhotoCard};
use crate::feed::FeedStatus;
use dioxus::prelude::*;

/// Photo grid, or a status line while loading or when nothing matched
#[component]
pub fn Gallery() -> Element {
    let state = use_feed_state();
    let status = state.read().status();
    let photos = state.read().photos.clone();

    rsx! {
        div { class: "gallery",
            if status == FeedStatus::Loading {
                p { class: "gallery-status", "Loading..." }
            } else if status == FeedStatus::Empty {
                p { class: "gallery-status", "No results found" }
            } else {
                for photo in photos.iter() {
                    PhotoCard { key: "{photo.link}", photo: photo.clone() }
                }
            }
        }
    }
}

use super::use_feed_state;
use dioxus::prelude::*;

/// Previous / Next buttons; each is disabled at its bound
#[component]
pub fn PaginationControls() -> Element {
    let mut state = use_feed_state();
    let (paginated, page, total_pages, has_previous, has_next) = {
        let state = state.read();
        (
            state.is_paginated(),
            state.page,
            state.total_pages,
            state.has_previous(),
            state.has_next(),
        )
    };

    if !paginated {
        return rsx! {};
    }

    rsx! {
        div { class: "pagination",
            button {
                disabled: !has_previous,
                onclick: move |_| {
                    state.write().previous_page();
                },
                "Previous"
            }
            span { class: "page-indicator", "Page {page} of {total_pages}" }
            button {
                disabled: !has_next,
                onclick: move |_| {
                    state.write().next_page();
                },
                "Next"
            }
        }
    }
}

use super::use_feed_state;
use dioxus::prelude::*;
use tracing::debug;

/// Autocomplete list under the search box; hidden when empty
#[component]
pub fn SuggestionList() -> Element {
    let mut state = use_feed_state();
    let suggestions = state.read().suggestions.clone();

    if suggestions.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "suggestions-list",
            for tag in suggestions {
                li {
                    key: "{tag}",
                    onclick: move |_| {
                        debug!("Selected suggestion '{}'", tag);
                        state.write().select_suggestion(tag);
                    },
                    "{tag}"
                }
            }
        }
    }
}

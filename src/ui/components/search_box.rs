use super::use_feed_state;
use dioxus::prelude::*;

#[component]
pub fn SearchBox() -> Element {
    let mut state = use_feed_state();
    let query = state.read().query.clone();

    rsx! {
        input {
            class: "search-input",
            r#type: "text",
            placeholder: "Search by tag...",
            value: "{query}",
            oninput: move |event: FormEvent| {
                state.write().set_query(event.value());
            },
        }
    }
}

use crate::flickr::Photo;
use dioxus::prelude::*;

/// Single feed item: thumbnail linking to the large image, plus metadata
#[component]
pub fn PhotoCard(photo: Photo) -> Element {
    let large_url = photo.large_image_url();
    let title = photo.display_title();
    let author = photo.display_author();
    let tags = photo.display_tags();

    rsx! {
        div { class: "photo-card",
            a { href: "{large_url}", target: "_blank", rel: "noreferrer",
                img { src: "{photo.media.m}", alt: "{title}" }
            }
            div { class: "photo-info",
                h3 { "{title}" }
                p { "By: {author}" }
                p { "Tags: {tags}" }
            }
        }
    }
}

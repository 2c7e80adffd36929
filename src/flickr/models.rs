use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Thumbnail variants attached to a feed item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoMedia {
    /// Medium-size thumbnail URL (suffix `_m`)
    pub m: String,
}

/// A single item of the Flickr public feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub link: String,
    #[serde(default)]
    pub title: Option<String>,
    pub media: PhotoMedia,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub date_taken: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Top-level feed payload
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub items: Vec<Photo>,
}

fn quoted_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(.*?)""#).expect("static regex"))
}

impl Photo {
    /// Large image URL, derived by swapping the first `_m` for `_b`
    pub fn large_image_url(&self) -> String {
        self.media.m.replacen("_m", "_b", 1)
    }

    /// Display name from an author string like `nobody@flickr.com ("Jane")`
    pub fn author_name(&self) -> Option<&str> {
        quoted_name_regex()
            .captures(&self.author)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "Untitled",
        }
    }

    pub fn display_author(&self) -> &str {
        self.author_name().unwrap_or("Unknown")
    }

    pub fn display_tags(&self) -> &str {
        match self.tags.as_deref() {
            Some(tags) if !tags.trim().is_empty() => tags,
            _ => "None",
        }
    }

    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|t| t.split_whitespace().collect())
            .unwrap_or_default()
    }
}

use crate::feed::pagination::{self, PAGE_SIZE};
use crate::feed::suggestions::suggest_tags;
use crate::flickr::Photo;

/// What the gallery area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Empty,
    Ready,
}

/// View state of the feed page
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub suggestions: Vec<&'static str>,
    pub photos: Vec<Photo>,
    page_size: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            loading: false,
            suggestions: Vec::new(),
            photos: Vec::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_paginated(&self) -> bool {
        self.page_size > 0
    }

    /// Typing in the search box. Suggestions follow the query immediately.
    pub fn set_query(&mut self, query: String) {
        self.suggestions = suggest_tags(&query);
        self.query = query;
    }

    pub fn select_suggestion(&mut self, tag: &str) {
        self.query = tag.to_string();
        self.suggestions.clear();
        self.page = 1;
    }

    pub fn has_previous(&self) -> bool {
        pagination::has_previous(self.page)
    }

    pub fn has_next(&self) -> bool {
        pagination::has_next(self.page, self.total_pages)
    }

    /// Returns false when already on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns false when already on the first page
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Show the window of `items` for `page`, the page the fetch was issued for
    pub fn apply_items(&mut self, items: &[Photo], page: u32) {
        self.photos = pagination::page_window(items, page, self.page_size).to_vec();
        self.total_pages = pagination::total_pages(items.len(), self.page_size);
        self.loading = false;
    }

    /// Failed fetches keep whatever was displayed before
    pub fn apply_failure(&mut self) {
        self.loading = false;
    }

    pub fn status(&self) -> FeedStatus {
        if self.loading {
            FeedStatus::Loading
        } else if self.photos.is_empty() {
            FeedStatus::Empty
        } else {
            FeedStatus::Ready
        }
    }
}

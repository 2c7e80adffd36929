// Test support utilities for both unit and integration tests

use crate::flickr::{FlickrError, Photo, PhotoMedia, PhotoSource};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Mock photo source for testing
///
/// Serves canned photos per tag instead of calling Flickr and records every
/// request it receives.
#[derive(Default)]
pub struct MockPhotoSource {
    photos: Mutex<HashMap<String, Vec<Photo>>>,
    delays: Mutex<HashMap<String, Duration>>,
    failing: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockPhotoSource {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `photos` for `tags`
    pub fn with_photos(self, tags: &str, photos: Vec<Photo>) -> Self {
        self.photos.lock().unwrap().insert(tags.to_string(), photos);
        self
    }

    /// Delay responses for `tags` to simulate a slow request
    pub fn with_delay(self, tags: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(tags.to_string(), delay);
        self
    }

    /// Fail every request for `tags`
    pub fn failing_for(self, tags: &str) -> Self {
        self.failing.lock().unwrap().push(tags.to_string());
        self
    }

    /// Tags of every request received so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PhotoSource for MockPhotoSource {
    async fn fetch_photos(&self, tags: &str) -> Result<Vec<Photo>, FlickrError> {
        self.calls.lock().unwrap().push(tags.to_string());

        let delay = self.delays.lock().unwrap().get(tags).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().iter().any(|t| t == tags) {
            return Err(FlickrError::Status(500));
        }

        Ok(self
            .photos
            .lock()
            .unwrap()
            .get(tags)
            .cloned()
            .unwrap_or_default())
    }
}

/// `count` distinct photos tagged with `tag`
pub fn sample_photos(tag: &str, count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| Photo {
            link: format!("https://www.flickr.com/photos/{}/{}/", tag, i),
            title: Some(format!("{} {}", tag, i)),
            media: PhotoMedia {
                m: format!("https://live.staticflickr.com/65535/{}_{}_m.jpg", tag, i),
            },
            author: format!("nobody@flickr.com (\"{} fan\")", tag),
            tags: Some(tag.to_string()),
            author_id: None,
            date_taken: None,
            published: None,
            description: None,
        })
        .collect()
}

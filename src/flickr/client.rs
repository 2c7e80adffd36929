use crate::flickr::models::{FeedResponse, Photo};
use reqwest::{Client, Error as ReqwestError};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_FEED_URL: &str = "https://www.flickr.com/services/feeds/photos_public.gne";
pub const DEFAULT_JSONP_CALLBACK: &str = "JSONP_CALLBACK";

#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Feed returned status {0}")]
    Status(u16),
    #[error("Malformed JSONP payload: {0}")]
    Jsonp(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Anything that can produce the photos tagged with a given query
#[async_trait::async_trait]
pub trait PhotoSource: Send + Sync {
    async fn fetch_photos(&self, tags: &str) -> Result<Vec<Photo>, FlickrError>;
}

/// Client for Flickr's public photo feed
pub struct FlickrClient {
    client: Client,
    feed_url: String,
    callback: String,
}

impl FlickrClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_FEED_URL.to_string(), DEFAULT_JSONP_CALLBACK.to_string())
    }

    pub fn with_endpoint(feed_url: String, callback: String) -> Self {
        Self {
            client: Client::new(),
            feed_url,
            callback,
        }
    }

    /// Fetch the public feed filtered by `tags`
    pub async fn fetch_public_feed(&self, tags: &str) -> Result<FeedResponse, FlickrError> {
        debug!("Flickr feed request: tags='{}'", tags);

        let response = self
            .client
            .get(&self.feed_url)
            .query(&[
                ("format", "json"),
                ("tags", tags),
                ("jsoncallback", self.callback.as_str()),
            ])
            .header("User-Agent", "flickr_feed/0.1")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Flickr feed returned {}", status);
            return Err(FlickrError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_jsonp(&body, &self.callback)
    }
}

impl Default for FlickrClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PhotoSource for FlickrClient {
    async fn fetch_photos(&self, tags: &str) -> Result<Vec<Photo>, FlickrError> {
        let feed = self.fetch_public_feed(tags).await?;
        debug!("Flickr feed returned {} items", feed.items.len());
        Ok(feed.items)
    }
}

/// Decode a `callback({...})` body into a feed response.
///
/// A bare JSON object is accepted as well.
pub fn decode_jsonp(body: &str, callback: &str) -> Result<FeedResponse, FlickrError> {
    let json = strip_callback(body.trim(), callback)?;
    let json = unescape_single_quotes(json);
    Ok(serde_json::from_str(&json)?)
}

fn strip_callback<'a>(body: &'a str, callback: &str) -> Result<&'a str, FlickrError> {
    if body.starts_with('{') {
        return Ok(body);
    }

    let inner = body
        .strip_prefix(callback)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .ok_or_else(|| FlickrError::Jsonp(format!("expected {}( prefix", callback)))?;

    let inner = inner.trim_end();
    let inner = inner.strip_suffix(';').unwrap_or(inner).trim_end();
    inner
        .strip_suffix(')')
        .ok_or_else(|| FlickrError::Jsonp("missing closing parenthesis".to_string()))
}

// Flickr escapes apostrophes as \' which is not valid JSON
fn unescape_single_quotes(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => out.push('\''),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

pub mod client;
pub mod models;

pub use client::{FlickrClient, FlickrError, PhotoSource};
pub use models::{FeedResponse, Photo, PhotoMedia};

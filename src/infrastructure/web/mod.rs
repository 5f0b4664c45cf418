//! Listing page retrieval

pub mod fetcher;

pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher, slice_body};

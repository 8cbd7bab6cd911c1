pub mod traits;
pub mod parser;
pub mod raw_dates;
pub mod http;

pub use traits::FeedFetcher;
pub use http::HttpFeedFetcher;

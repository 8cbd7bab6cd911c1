pub mod article;
pub mod dates;
pub mod feed;
pub mod raw;

pub use article::ArticleRecord;
pub use feed::{FeedInfo, FeedResult, FeedStatus};
pub use raw::{RawEntry, RawFeed};

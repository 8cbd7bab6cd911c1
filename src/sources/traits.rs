use crate::domain::RawFeed;
use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    /// Retrieve and parse the feed document behind `url`.
    ///
    /// Transport and unrecoverable parse failures come back as `Err`; a
    /// document that only parsed after repair comes back as `Ok` with
    /// `RawFeed::malformed` set.
    fn fetch(&self, url: &str) -> DigestResult<RawFeed>;
}

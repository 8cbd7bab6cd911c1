pub mod normalize_service;
pub mod summary_service;
pub mod digest_service;
pub mod catalog_service;

pub use normalize_service::{normalize, FeedNormalizer};
pub use summary_service::{select_articles, SummaryOptions, SummaryRenderer};
pub use digest_service::{DigestService, RunSummary};
pub use catalog_service::CatalogService;

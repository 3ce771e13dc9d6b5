//! Sitemap engine: URL records, builders, batching and XML writers.

pub mod batcher;
pub mod builders;
pub mod dictionary;
pub mod escape;
pub mod index;
pub mod record;
pub mod writer;

pub use record::{Alternate, UrlRecord};

/// URLs per dictionary sitemap unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Upper bound on URLs in one sitemap file set by the sitemap protocol.
pub const MAX_BATCH_SIZE: usize = 50_000;

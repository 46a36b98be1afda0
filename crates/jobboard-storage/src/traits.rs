use async_trait::async_trait;
use jobboard_common::error::Result;
use jobboard_common::time::parse_posted_date;
use jobboard_common::types::{JobDocument, JobUpdate};

use crate::query::JobQuery;

/// A document collection holding job postings, keyed by the application-level id.
///
/// Single-document writes are atomic. Nothing spans more than one document.
#[async_trait]
pub trait JobCollection: Send + Sync {
    async fn insert_one(&self, doc: JobDocument) -> Result<()>;
    async fn insert_many(&self, docs: Vec<JobDocument>) -> Result<usize>;
    /// Matching documents ordered by `postedDate` then id, at most `limit` of them.
    async fn find(&self, query: &JobQuery, limit: usize) -> Result<Vec<JobDocument>>;
    async fn find_one(&self, id: &str) -> Result<Option<JobDocument>>;
    /// Merges the set fields of `update` into one document and returns the result.
    async fn update_one(&self, id: &str, update: &JobUpdate) -> Result<Option<JobDocument>>;
    async fn delete_one(&self, id: &str) -> Result<bool>;
    async fn delete_all(&self) -> Result<u64>;
    async fn ping(&self) -> Result<()>;
    async fn close(&self) -> Result<()>;
}

/// Orders by parsed `postedDate`. Unparseable dates sort first, by raw text.
pub(crate) fn sort_documents(docs: &mut [JobDocument]) {
    docs.sort_by_cached_key(|doc| {
        (
            parse_posted_date(&doc.posted_date).ok(),
            doc.posted_date.clone(),
            doc.id.clone(),
        )
    });
}

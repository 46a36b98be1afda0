use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use jobboard_common::error::{JobboardError, Result};
use jobboard_common::types::{JobDocument, JobUpdate};

use crate::query::JobQuery;
use crate::traits::{JobCollection, sort_documents};

#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    docs: Arc<RwLock<HashMap<String, JobDocument>>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn docs_read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, JobDocument>>> {
        self.docs
            .read()
            .map_err(|_| JobboardError::InternalError("job collection lock poisoned".to_string()))
    }

    fn docs_write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, JobDocument>>> {
        self.docs
            .write()
            .map_err(|_| JobboardError::InternalError("job collection lock poisoned".to_string()))
    }
}

#[async_trait]
impl JobCollection for MemoryCollection {
    async fn insert_one(&self, doc: JobDocument) -> Result<()> {
        self.docs_write()?.insert(doc.id.clone(), doc);
        Ok(())
    }

    async fn insert_many(&self, docs: Vec<JobDocument>) -> Result<usize> {
        let count = docs.len();
        let mut stored = self.docs_write()?;
        for doc in docs {
            stored.insert(doc.id.clone(), doc);
        }
        Ok(count)
    }

    async fn find(&self, query: &JobQuery, limit: usize) -> Result<Vec<JobDocument>> {
        let mut docs: Vec<JobDocument> = self
            .docs_read()?
            .values()
            .filter(|doc| query.matches(doc))
            .cloned()
            .collect();
        sort_documents(&mut docs);
        docs.truncate(limit);
        Ok(docs)
    }

    async fn find_one(&self, id: &str) -> Result<Option<JobDocument>> {
        Ok(self.docs_read()?.get(id).cloned())
    }

    async fn update_one(&self, id: &str, update: &JobUpdate) -> Result<Option<JobDocument>> {
        let mut docs = self.docs_write()?;
        let Some(doc) = docs.get_mut(id) else {
            return Ok(None);
        };
        doc.apply(update);
        Ok(Some(doc.clone()))
    }

    async fn delete_one(&self, id: &str) -> Result<bool> {
        Ok(self.docs_write()?.remove(id).is_some())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut docs = self.docs_write()?;
        let removed = docs.len() as u64;
        docs.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<()> {
        self.docs_read().map(|_| ())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

use std::sync::Arc;

use jobboard_common::error::{JobboardError, Result};
use jobboard_common::time;
use jobboard_common::types::{Job, JobCreate, JobDocument, JobFilter, JobUpdate};
use jobboard_storage::{JobCollection, JobQuery, LIST_LIMIT};
use tracing::{debug, info};

/// Job record operations over an injected collection handle.
#[derive(Clone)]
pub struct JobService {
    collection: Arc<dyn JobCollection>,
}

impl JobService {
    pub fn new(collection: Arc<dyn JobCollection>) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> Arc<dyn JobCollection> {
        Arc::clone(&self.collection)
    }

    pub async fn create(&self, input: JobCreate) -> Result<Job> {
        let doc = JobDocument::from_create(input, time::now());
        self.collection.insert_one(doc.clone()).await?;
        info!(job_id = %doc.id, "job created");
        doc.into_job()
    }

    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let query = JobQuery::from_filter(filter);
        let docs = self.collection.find(&query, LIST_LIMIT).await?;
        debug!(
            filtered = !filter.is_empty(),
            predicates = query.predicates().len(),
            found = docs.len(),
            "listed jobs"
        );
        docs.into_iter().map(JobDocument::into_job).collect()
    }

    pub async fn get(&self, id: &str) -> Result<Job> {
        self.find_document(id).await?.into_job()
    }

    /// Applies the non-null fields of `update`. An empty update issues no write.
    pub async fn update(&self, id: &str, update: JobUpdate) -> Result<Job> {
        if update.is_empty() {
            return self.get(id).await;
        }

        let doc = self
            .collection
            .update_one(id, &update)
            .await?
            .ok_or_else(|| JobboardError::JobNotFound(id.to_string()))?;
        info!(job_id = %id, "job updated");
        doc.into_job()
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.collection.delete_one(id).await? {
            return Err(JobboardError::JobNotFound(id.to_string()));
        }
        info!(job_id = %id, "job deleted");
        Ok(())
    }

    async fn find_document(&self, id: &str) -> Result<JobDocument> {
        self.collection
            .find_one(id)
            .await?
            .ok_or_else(|| JobboardError::JobNotFound(id.to_string()))
    }
}

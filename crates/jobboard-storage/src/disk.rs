use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use jobboard_common::error::{JobboardError, Result};
use jobboard_common::types::{JobDocument, JobUpdate};
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::query::JobQuery;
use crate::traits::{JobCollection, sort_documents};

const COLLECTION_DIR_NAME: &str = "jobs";
const DOCUMENT_EXTENSION: &str = "json";

/// Job collection stored as one JSON document per job under
/// `<data_dir>/<database>/jobs/<id>.json`.
#[derive(Debug, Clone)]
pub struct DiskCollection {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl DiskCollection {
    pub async fn open(data_dir: impl AsRef<Path>, database: &str) -> Result<Self> {
        validate_database_name(database)?;
        let dir = data_dir
            .as_ref()
            .join(database)
            .join(COLLECTION_DIR_NAME);
        fs::create_dir_all(&dir).await?;
        debug!(path = %dir.display(), "opened disk job collection");

        Ok(Self {
            dir,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{DOCUMENT_EXTENSION}"))
    }

    async fn read_document(&self, id: &str) -> Result<Option<JobDocument>> {
        if !is_valid_id(id) {
            return Ok(None);
        }

        match fs::read(self.document_path(id)).await {
            Ok(bytes) => decode(&bytes, id).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_document(&self, doc: &JobDocument) -> Result<()> {
        if !is_valid_id(&doc.id) {
            return Err(JobboardError::InvalidArgument(format!(
                "job id is not a valid document key: {}",
                doc.id
            )));
        }

        let data = serde_json::to_vec_pretty(doc).map_err(|err| {
            JobboardError::InternalError(format!("failed to serialize job {}: {err}", doc.id))
        })?;
        let tmp_path = self.dir.join(format!(".{}.tmp-{}", doc.id, Uuid::new_v4()));
        fs::write(&tmp_path, data).await?;
        if let Err(err) = fs::rename(&tmp_path, self.document_path(&doc.id)).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<JobDocument>> {
        let mut docs = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !is_document_path(&path) {
                continue;
            }

            // a scan skips what it cannot decode; `find_one` stays strict
            match fs::read(&path).await {
                Ok(bytes) => match decode(&bytes, &path.display().to_string()) {
                    Ok(doc) => docs.push(doc),
                    Err(err) => warn!(error = %err, "skipping undecodable job document"),
                },
                // removed between listing and reading
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(docs)
    }
}

#[async_trait]
impl JobCollection for DiskCollection {
    async fn insert_one(&self, doc: JobDocument) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write_document(&doc).await
    }

    async fn insert_many(&self, docs: Vec<JobDocument>) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        for doc in &docs {
            self.write_document(doc).await?;
        }
        Ok(docs.len())
    }

    async fn find(&self, query: &JobQuery, limit: usize) -> Result<Vec<JobDocument>> {
        let mut docs: Vec<JobDocument> = self
            .read_all()
            .await?
            .into_iter()
            .filter(|doc| query.matches(doc))
            .collect();
        sort_documents(&mut docs);
        docs.truncate(limit);
        Ok(docs)
    }

    async fn find_one(&self, id: &str) -> Result<Option<JobDocument>> {
        self.read_document(id).await
    }

    async fn update_one(&self, id: &str, update: &JobUpdate) -> Result<Option<JobDocument>> {
        let _guard = self.write_lock.lock().await;
        let Some(mut doc) = self.read_document(id).await? else {
            return Ok(None);
        };
        if doc.apply(update) {
            self.write_document(&doc).await?;
        }
        Ok(Some(doc))
    }

    async fn delete_one(&self, id: &str) -> Result<bool> {
        if !is_valid_id(id) {
            return Ok(false);
        }

        let _guard = self.write_lock.lock().await;
        match fs::remove_file(self.document_path(id)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_all(&self) -> Result<u64> {
        let _guard = self.write_lock.lock().await;
        let mut removed = 0;
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !is_document_path(&path) {
                continue;
            }
            match fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(removed)
    }

    async fn ping(&self) -> Result<()> {
        let metadata = fs::metadata(&self.dir).await?;
        if !metadata.is_dir() {
            return Err(JobboardError::InternalError(format!(
                "job collection path is not a directory: {}",
                self.dir.display()
            )));
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        // waits out any in-flight write
        let _guard = self.write_lock.lock().await;
        debug!(path = %self.dir.display(), "closed disk job collection");
        Ok(())
    }
}

fn decode(bytes: &[u8], origin: &str) -> Result<JobDocument> {
    serde_json::from_slice(bytes).map_err(|err| {
        JobboardError::InternalError(format!("failed to deserialize job document {origin}: {err}"))
    })
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_document_path(path: &Path) -> bool {
    let is_hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
    is_json && !is_hidden
}

fn validate_database_name(database: &str) -> Result<()> {
    if database.is_empty() || !is_valid_id(database) {
        return Err(JobboardError::InvalidArgument(format!(
            "invalid database name: {database:?}"
        )));
    }
    Ok(())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::time::{format_posted_date, parse_posted_date};

/// A job posting as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub posted_date: DateTime<Utc>,
    pub applicants: i64,
    pub experience: Option<String>,
    pub deadline: Option<String>,
}

/// A job posting as persisted in a collection. `posted_date` keeps its ISO-8601 text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDocument {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub posted_date: String,
    #[serde(default)]
    pub applicants: i64,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCreate {
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub experience: Option<String>,
    pub deadline: Option<String>,
    pub applicants: Option<i64>,
}

/// Partial update. Absent and `null` fields are both left untouched, so a field
/// cannot be cleared through an update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub applicants: Option<i64>,
    pub experience: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
}

impl JobDocument {
    pub fn from_create(input: JobCreate, posted_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            company: input.company,
            location: input.location,
            status: input.status,
            job_type: input.job_type,
            salary: input.salary,
            description: input.description,
            posted_date: format_posted_date(&posted_date),
            applicants: input.applicants.unwrap_or(0),
            experience: input.experience,
            deadline: input.deadline,
        }
    }

    /// Overwrites every field set in `update`. Returns whether anything was applied.
    pub fn apply(&mut self, update: &JobUpdate) -> bool {
        if update.is_empty() {
            return false;
        }

        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(&mut self.title, &update.title);
        set(&mut self.company, &update.company);
        set(&mut self.location, &update.location);
        set(&mut self.status, &update.status);
        set(&mut self.job_type, &update.job_type);
        set(&mut self.salary, &update.salary);
        set(&mut self.description, &update.description);
        set(&mut self.applicants, &update.applicants);
        if update.experience.is_some() {
            self.experience = update.experience.clone();
        }
        if update.deadline.is_some() {
            self.deadline = update.deadline.clone();
        }
        true
    }

    pub fn into_job(self) -> Result<Job> {
        let posted_date = parse_posted_date(&self.posted_date)?;
        Ok(Job {
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            status: self.status,
            job_type: self.job_type,
            salary: self.salary,
            description: self.description,
            posted_date,
            applicants: self.applicants,
            experience: self.experience,
            deadline: self.deadline,
        })
    }
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.status.is_none()
            && self.job_type.is_none()
            && self.salary.is_none()
            && self.description.is_none()
            && self.applicants.is_none()
            && self.experience.is_none()
            && self.deadline.is_none()
    }
}

/// Builds a filter from query pairs. A repeated key keeps its last value and
/// unknown keys are ignored.
impl FromIterator<(String, String)> for JobFilter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "status" => &mut filter.status,
                "jobType" => &mut filter.job_type,
                "location" => &mut filter.location,
                "search" => &mut filter.search,
                _ => continue,
            };
            *slot = Some(value);
        }
        filter
    }
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        [&self.status, &self.job_type, &self.location, &self.search]
            .iter()
            .all(|value| value.as_deref().is_none_or(str::is_empty))
    }
}

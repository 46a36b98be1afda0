//! Demo-data maintenance. Kept apart from [`crate::service::JobService`] since a
//! seed wipes the whole collection.

use chrono::{DateTime, Utc};
use jobboard_common::error::Result;
use jobboard_common::time;
use jobboard_common::types::{JobCreate, JobDocument};
use jobboard_storage::JobCollection;
use tracing::{info, warn};

struct SampleJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    status: &'static str,
    job_type: &'static str,
    salary: &'static str,
    description: &'static str,
    applicants: i64,
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        title: "Senior Full Stack Developer",
        company: "Tech Solutions Inc",
        location: "New York, NY",
        status: "Active",
        job_type: "Full-time",
        salary: "$120,000 - $150,000",
        description: "We are looking for an experienced Full Stack Developer to join our team.",
        applicants: 25,
    },
    SampleJob {
        title: "Frontend React Developer",
        company: "Digital Dynamics",
        location: "San Francisco, CA",
        status: "Active",
        job_type: "Full-time",
        salary: "$100,000 - $130,000",
        description: "Join our team as a Frontend Developer specializing in React.",
        applicants: 18,
    },
    SampleJob {
        title: "Backend Python Engineer",
        company: "CloudTech Systems",
        location: "Austin, TX",
        status: "Active",
        job_type: "Full-time",
        salary: "$110,000 - $140,000",
        description: "Experienced Python developer needed for backend development.",
        applicants: 32,
    },
    SampleJob {
        title: "UI/UX Designer",
        company: "Creative Studios",
        location: "Los Angeles, CA",
        status: "Active",
        job_type: "Full-time",
        salary: "$90,000 - $120,000",
        description: "Looking for a talented UI/UX designer to create amazing user experiences.",
        applicants: 42,
    },
    SampleJob {
        title: "DevOps Engineer",
        company: "Infrastructure Co",
        location: "Seattle, WA",
        status: "Inactive",
        job_type: "Full-time",
        salary: "$115,000 - $145,000",
        description: "DevOps engineer to manage and optimize our infrastructure.",
        applicants: 15,
    },
    SampleJob {
        title: "Mobile App Developer",
        company: "AppWorks Ltd",
        location: "Boston, MA",
        status: "Active",
        job_type: "Contract",
        salary: "$95,000 - $125,000",
        description: "Contract position for mobile app development using React Native.",
        applicants: 28,
    },
    SampleJob {
        title: "Data Scientist",
        company: "Analytics Pro",
        location: "Chicago, IL",
        status: "Active",
        job_type: "Full-time",
        salary: "$130,000 - $160,000",
        description: "Data scientist position focusing on machine learning and analytics.",
        applicants: 37,
    },
    SampleJob {
        title: "QA Engineer",
        company: "Quality Systems",
        location: "Denver, CO",
        status: "Closed",
        job_type: "Full-time",
        salary: "$85,000 - $110,000",
        description: "Quality assurance engineer for automated testing.",
        applicants: 12,
    },
    SampleJob {
        title: "Product Manager",
        company: "Innovation Hub",
        location: "New York, NY",
        status: "Active",
        job_type: "Full-time",
        salary: "$125,000 - $155,000",
        description: "Product manager to lead product strategy and development.",
        applicants: 20,
    },
    SampleJob {
        title: "Junior Web Developer",
        company: "StartUp Tech",
        location: "Portland, OR",
        status: "Active",
        job_type: "Part-time",
        salary: "$60,000 - $80,000",
        description: "Entry-level web developer position for passionate individuals.",
        applicants: 45,
    },
];

pub const SAMPLE_JOB_COUNT: usize = SAMPLE_JOBS.len();

impl SampleJob {
    fn to_document(&self, posted_date: DateTime<Utc>) -> JobDocument {
        let input = JobCreate {
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            status: self.status.to_string(),
            job_type: self.job_type.to_string(),
            salary: self.salary.to_string(),
            description: self.description.to_string(),
            experience: None,
            deadline: None,
            applicants: Some(self.applicants),
        };
        JobDocument::from_create(input, posted_date)
    }
}

/// The fixed sample batch, each with a fresh id.
pub fn sample_jobs(posted_date: DateTime<Utc>) -> Vec<JobDocument> {
    SAMPLE_JOBS
        .iter()
        .map(|sample| sample.to_document(posted_date))
        .collect()
}

/// Drops every job and inserts the sample batch. Returns the inserted count.
///
/// Not transactional: a concurrent listing can observe the empty collection.
pub async fn seed(collection: &dyn JobCollection) -> Result<usize> {
    let removed = collection.delete_all().await?;
    if removed > 0 {
        warn!(removed, "seed discarded existing jobs");
    }

    let inserted = collection.insert_many(sample_jobs(time::now())).await?;
    info!(inserted, "seeded sample jobs");
    Ok(inserted)
}

pub mod error;
pub mod time;
pub mod types;

pub use error::{JobboardError, Result};
pub use types::{Job, JobCreate, JobDocument, JobFilter, JobUpdate};

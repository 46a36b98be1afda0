pub mod disk;
pub mod memory;
pub mod query;
pub mod traits;

pub use disk::DiskCollection;
pub use memory::MemoryCollection;
pub use query::{Field, JobQuery, Predicate};
pub use traits::JobCollection;

/// Upper bound on the number of documents a single listing returns.
pub const LIST_LIMIT: usize = 1000;

use jobboard_common::types::{JobDocument, JobFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Company,
    Location,
    Status,
    JobType,
}

impl Field {
    fn value<'a>(&self, doc: &'a JobDocument) -> &'a str {
        match self {
            Self::Title => &doc.title,
            Self::Company => &doc.company,
            Self::Location => &doc.location,
            Self::Status => &doc.status,
            Self::JobType => &doc.job_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Equals { field: Field, value: String },
    /// Case-insensitive literal substring match against any of `fields`.
    AnyContains { fields: Vec<Field>, needle: String },
}

impl Predicate {
    fn matches(&self, doc: &JobDocument) -> bool {
        match self {
            Self::Equals { field, value } => field.value(doc) == value,
            Self::AnyContains { fields, needle } => fields
                .iter()
                .any(|field| field.value(doc).to_lowercase().contains(needle.as_str())),
        }
    }
}

/// Conjunction of predicates. The empty query matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    predicates: Vec<Predicate>,
}

impl JobQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_filter(filter: &JobFilter) -> Self {
        let mut query = Self::default();
        let exact = [
            (Field::Status, &filter.status),
            (Field::JobType, &filter.job_type),
            (Field::Location, &filter.location),
        ];
        for (field, value) in exact {
            if let Some(value) = non_empty(value) {
                query = query.with(Predicate::Equals {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if let Some(search) = non_empty(&filter.search) {
            query = query.with(Predicate::AnyContains {
                fields: vec![Field::Title, Field::Company],
                needle: search.to_lowercase(),
            });
        }
        query
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, doc: &JobDocument) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(doc))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

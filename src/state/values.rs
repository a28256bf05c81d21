//! Form value set submitted by the signup form

use serde::{Serialize, Serializer};

/// Job type offered by the select field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Designer,
    Development,
    Product,
    Other,
}

impl JobType {
    /// All job types in select order
    pub const ALL: [JobType; 4] = [
        JobType::Designer,
        JobType::Development,
        JobType::Product,
        JobType::Other,
    ];

    /// Option value as serialized on submit
    pub fn value(&self) -> &'static str {
        match self {
            Self::Designer => "designer",
            Self::Development => "development",
            Self::Product => "product",
            Self::Other => "other",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Designer => "Designer",
            Self::Development => "Developer",
            Self::Product => "Product Manager",
            Self::Other => "Other",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Designer => 0,
            Self::Development => 1,
            Self::Product => 2,
            Self::Other => 3,
        }
    }

    /// Cycle forward through the placeholder and the four options
    pub fn next(current: Option<JobType>) -> Option<JobType> {
        match current {
            None => Some(Self::ALL[0]),
            Some(job) => Self::ALL.get(job.index() + 1).copied(),
        }
    }

    /// Cycle backward through the placeholder and the four options
    pub fn prev(current: Option<JobType>) -> Option<JobType> {
        match current {
            None => Some(Self::ALL[Self::ALL.len() - 1]),
            Some(job) if job.index() == 0 => None,
            Some(job) => Some(Self::ALL[job.index() - 1]),
        }
    }
}

/// Current values of every signup field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub accepted_terms: bool,
    #[serde(serialize_with = "serialize_job_type")]
    pub job_type: Option<JobType>,
}

/// An unselected job type is submitted as an empty string
fn serialize_job_type<S>(job_type: &Option<JobType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(job_type.map(|j| j.value()).unwrap_or_default())
}

use crate::domain::value::{BatchId, JobId, MobileNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a send. The variant always mirrors the submitted [`SendTarget`](crate::SendTarget).
pub enum SendResult {
    Single {
        mobile_number: MobileNumber,
        job_id: JobId,
    },
    Batch {
        batch_id: BatchId,
    },
}

impl SendResult {
    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            Self::Single { job_id, .. } => Some(job_id),
            Self::Batch { .. } => None,
        }
    }

    pub fn batch_id(&self) -> Option<&BatchId> {
        match self {
            Self::Single { .. } => None,
            Self::Batch { batch_id } => Some(batch_id),
        }
    }
}

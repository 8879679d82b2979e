use crate::error::AppError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A single to-do entry. Timestamps are RFC 3339 strings so the persisted
/// form round-trips without losing sub-second precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    pub done: bool,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Task {
    /// A fresh pending task stamped with the current time. Empty descriptions
    /// are rejected upstream, before a `Task` is ever constructed.
    pub fn new(description: &str) -> Result<Self, AppError> {
        Ok(Self {
            description: description.to_string(),
            done: false,
            created_at: now_rfc3339()?,
            completed_at: None,
        })
    }
}

pub(crate) fn now_rfc3339() -> Result<String, AppError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}

//! URL submission responses.

use serde::{Deserialize, Serialize};

/// Outcome reported by `POST /api/submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Queued,
    Exists,
    AlreadyQueued,
    Other,
}

impl SubmitStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "queued" => Self::Queued,
            "exists" => Self::Exists,
            "already_queued" => Self::AlreadyQueued,
            _ => Self::Other,
        }
    }

    /// Informational outcomes: nothing new was queued, nothing went wrong.
    pub fn is_info(&self) -> bool {
        matches!(self, Self::Exists | Self::AlreadyQueued)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitUrlResponse {
    #[serde(default)]
    pub id: String,
    pub url: String,
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl SubmitUrlResponse {
    pub fn submit_status(&self) -> SubmitStatus {
        SubmitStatus::parse(&self.status)
    }
}

/// Response of the direct indexer, `POST /index-url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexUrlResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_status_mapping() {
        assert_eq!(SubmitStatus::parse("queued"), SubmitStatus::Queued);
        assert!(SubmitStatus::parse("exists").is_info());
        assert!(SubmitStatus::parse("already_queued").is_info());
        assert!(!SubmitStatus::parse("queued").is_info());
        assert_eq!(SubmitStatus::parse("rejected"), SubmitStatus::Other);
    }
}

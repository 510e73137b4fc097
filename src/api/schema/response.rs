use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The command object the platform echoes back on a 200/201.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredCommand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never produced a status line: connect, DNS, timeout or body read.
    Transport(String),
    /// The platform answered with a non-2xx status.
    Rejected { status: u16, body: String },
    /// A 2xx reply whose body is not a command object.
    Decode { status: u16, reason: String },
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(why) => write!(f, "request failed: {why}"),
            Self::Rejected { status, body } => write!(f, "rejected with {status}: {body}"),
            Self::Decode { status, reason } => {
                write!(f, "accepted with {status} but reply was unreadable: {reason}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

/// What happened to one definition of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub result: Result<RegisteredCommand, SubmissionError>,
}

impl Submission {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_platform_reply_ignoring_extra_fields() {
        let body = r#"{
            "id": "1040000000000000001",
            "application_id": "900000000000000001",
            "guild_id": "800000000000000001",
            "name": "kab",
            "description": "Schedule an event to clean up inactive members.",
            "version": "1040000000000000002",
            "default_member_permissions": null,
            "type": 1
        }"#;
        let cmd: RegisteredCommand = serde_json::from_str(body).unwrap();

        assert_eq!(cmd.id, "1040000000000000001");
        assert_eq!(cmd.name, "kab");
        assert_eq!(cmd.version.as_deref(), Some("1040000000000000002"));
    }

    #[test]
    fn rejection_display_carries_status_and_body() {
        let err = SubmissionError::Rejected {
            status: 401,
            body: r#"{"message": "401: Unauthorized", "code": 0}"#.to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"rejected with 401: {"message": "401: Unauthorized", "code": 0}"#
        );
    }
}

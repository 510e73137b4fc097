use crate::api::schema::response::{Submission, SubmissionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Error,
    Invalid,
    Warning,
    Success,
}

impl ResponseType {
    fn emoji(self) -> &'static str {
        match self {
            ResponseType::Error => "❌",
            ResponseType::Invalid => "🚫",
            ResponseType::Warning => "⚠️",
            ResponseType::Success => "✅",
        }
    }

    fn of(submission: &Submission) -> Self {
        match &submission.result {
            Ok(_) => ResponseType::Success,
            Err(SubmissionError::Rejected { .. }) => ResponseType::Invalid,
            Err(SubmissionError::Decode { .. }) => ResponseType::Warning,
            Err(SubmissionError::Transport(_)) => ResponseType::Error,
        }
    }
}

/// One line per submission, e.g. `✅ /kab registered (id 1040000000000000001)`.
pub fn line(submission: &Submission) -> String {
    let emoji = ResponseType::of(submission).emoji();
    match &submission.result {
        Ok(cmd) => match &cmd.version {
            Some(version) => format!(
                "{emoji} /{} registered (id {}, version {version})",
                submission.name, cmd.id
            ),
            None => format!("{emoji} /{} registered (id {})", submission.name, cmd.id),
        },
        Err(why) => format!("{emoji} /{} not registered: {why}", submission.name),
    }
}

pub fn summary(submissions: &[Submission]) -> String {
    let ok = submissions.iter().filter(|s| s.is_ok()).count();
    format!("{ok} of {} commands registered", submissions.len())
}

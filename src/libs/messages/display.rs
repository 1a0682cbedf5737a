//! Display implementation for user-facing messages.
//!
//! All text printed by the application is defined here, so the wording of
//! the confirmation dialog and of the log lines can be reviewed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === ISSUE MESSAGES ===
            Message::IssueOk(key, summary) if summary.is_empty() => format!("Issue OK: {}", key),
            Message::IssueOk(key, summary) => format!("Issue OK: {} — {}", key, summary),
            Message::IssueLine(key, summary) if summary.is_empty() => format!("Issue: {}", key),
            Message::IssueLine(key, summary) => format!("Issue: {} ({})", summary, key),

            // === WINDOW MESSAGES ===
            Message::WindowPreview(range, duration, date) => format!("Time: {} ({})\nDate: {}", range, duration, date),

            // === WORKLOG MESSAGES ===
            Message::WorklogSubmitted(duration, key, range) => format!("Worklog submitted: {} to {} ({})", duration, key, range),
            Message::WorklogCanceled => "Worklog canceled by user.".to_string(),
            Message::WorklogAutoConfirmed => "Confirmation skipped (--prompt yes)".to_string(),
            Message::CheckCompleted(key) => format!("Check passed, nothing was logged to {}", key),

            // === CONFIRMATION MESSAGES ===
            Message::ConfirmationHeader => "Confirm time entry for today:".to_string(),
            Message::ConfirmationPrompt => "Log this entry?".to_string(),
            Message::DialogNonZeroExit(status, stderr) => format!("osascript returned non-zero: {}, stderr={}", status, stderr),
            Message::DialogDismissedLabel(label, stdout) => format!("Popup dismissed (label={}, stdout={:?})", label, stdout),
            Message::DialogDismissed(stdout, stderr) => format!("Popup dismissed (stdout={:?}, stderr={:?})", stdout, stderr),
            Message::DialogLaunchFailed(error) => format!("Could not open confirmation dialog: {}", error),
            Message::ConsolePromptFailed(error) => format!("Could not read confirmation from terminal: {}", error),
        };
        write!(f, "{}", s)
    }
}

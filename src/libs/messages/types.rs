//! User-facing message catalogue.

/// Every line the tool prints. Rendered through `Display` and emitted with the
/// `msg_*!` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === ISSUE MESSAGES ===
    IssueOk(String, String), // key, summary
    /// Issue line of the confirmation text.
    IssueLine(String, String), // key, summary

    // === WINDOW MESSAGES ===
    WindowPreview(String, String, String), // time range, duration, date

    // === WORKLOG MESSAGES ===
    WorklogSubmitted(String, String, String), // duration, key, time range
    WorklogCanceled,
    /// Shown when `--prompt yes` skips the question.
    WorklogAutoConfirmed,
    CheckCompleted(String), // key

    // === CONFIRMATION MESSAGES ===
    ConfirmationHeader,
    ConfirmationPrompt,
    /// `osascript` exited with an error, usually the Cancel button.
    DialogNonZeroExit(String, String), // exit status, stderr
    DialogDismissedLabel(String, String), // label, stdout
    DialogDismissed(String, String), // stdout, stderr
    DialogLaunchFailed(String), // error
    ConsolePromptFailed(String), // error
}

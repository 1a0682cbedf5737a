//! User confirmation before anything is written to Jira.
//!
//! The orchestration only sees the [`Prompter`] trait. On macOS the entry is
//! shown in a native `osascript` dialog; elsewhere a terminal prompt is used.
//! Every failure while asking (the dialog cannot be launched, exits non-zero,
//! the terminal is not interactive) counts as "not confirmed", so a broken
//! prompt can cancel a run but can never submit one.

use super::formatter::{format_date, format_minutes, format_time_range};
use super::messages::Message;
use super::window::TimeWindow;
use crate::{msg_info, msg_print, msg_warning};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::{Path, PathBuf};
use std::process::Command;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Button labels treated as consent, compared lower-cased.
pub const ACCEPTED_LABELS: [&str; 6] = ["confirm", "yes", "ok", "sí", "si", "aceptar"];

pub const CLOCK_ICON: &str = "/System/Applications/Clock.app/Contents/Resources/AppIcon.icns";

pub trait Prompter {
    /// Shows `message` and returns whether the user accepted it.
    fn confirm(&self, message: &str) -> bool;
}

/// Which [`Prompter`] to use for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PromptKind {
    /// Native dialog on macOS, terminal prompt elsewhere
    #[default]
    Auto,
    /// Native macOS dialog
    Dialog,
    /// Terminal yes/no prompt
    Console,
    /// Confirm without asking
    Yes,
}

impl PromptKind {
    pub fn prompter(self) -> Box<dyn Prompter> {
        match self {
            PromptKind::Auto if cfg!(target_os = "macos") => Box::new(OsaScriptDialog::new()),
            PromptKind::Auto => Box::new(ConsolePrompt),
            PromptKind::Dialog => Box::new(OsaScriptDialog::new()),
            PromptKind::Console => Box::new(ConsolePrompt),
            PromptKind::Yes => Box::new(AutoConfirm),
        }
    }
}

/// Text shown to the user for today's entry.
pub fn confirmation_message(issue_key: &str, summary: &str, window: &TimeWindow) -> String {
    format!(
        "{}\n{}\n{}",
        Message::ConfirmationHeader,
        Message::IssueLine(issue_key.to_string(), summary.to_string()),
        Message::WindowPreview(
            format_time_range(&window.start, &window.end),
            format_minutes(window.minutes),
            format_date(&window.start),
        ),
    )
}

/// Escapes text for an AppleScript string literal.
pub fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Builds the `display dialog` script with Cancel/Confirm buttons.
pub fn dialog_script(message: &str, icon: Option<&Path>) -> String {
    let icon_clause = match icon {
        Some(path) => format!("with icon file (POSIX file \"{}\")", escape_applescript(&path.to_string_lossy())),
        None => "with icon note".to_string(),
    };
    format!(
        "display dialog \"{}\" buttons {{\"Cancel\",\"Confirm\"}} default button \"Confirm\" {} with title \"{}\"",
        escape_applescript(message),
        icon_clause,
        escape_applescript(APP_METADATA_DIALOG_TITLE)
    )
}

/// Interprets the dialog process result.
///
/// `button returned:Confirm` style output is matched on the label after the
/// first colon; anything else is searched for an accepted label.
pub fn parse_dialog_output(exit_ok: bool, stdout: &str, stderr: &str) -> bool {
    if !exit_ok {
        return false;
    }
    let out = stdout.trim();
    if let Some((_, label)) = out.split_once(':') {
        let label = label.trim().to_lowercase();
        if ACCEPTED_LABELS.contains(&label.as_str()) {
            return true;
        }
        msg_info!(Message::DialogDismissedLabel(label, out.to_string()));
        return false;
    }
    let lowered = out.to_lowercase();
    if ACCEPTED_LABELS.iter().any(|token| lowered.contains(token)) {
        return true;
    }
    msg_info!(Message::DialogDismissed(out.to_string(), stderr.trim().to_string()));
    false
}

/// Native dialog through `osascript`.
#[derive(Debug, Clone)]
pub struct OsaScriptDialog {
    program: PathBuf,
    icon: PathBuf,
}

impl OsaScriptDialog {
    pub fn new() -> Self {
        Self::with_program("osascript")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            icon: PathBuf::from(CLOCK_ICON),
        }
    }

    fn script(&self, message: &str) -> String {
        let icon = self.icon.exists().then_some(self.icon.as_path());
        dialog_script(message, icon)
    }
}

impl Default for OsaScriptDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for OsaScriptDialog {
    fn confirm(&self, message: &str) -> bool {
        let output = match Command::new(&self.program).arg("-e").arg(self.script(message)).output() {
            Ok(output) => output,
            Err(e) => {
                msg_warning!(Message::DialogLaunchFailed(e.to_string()));
                return false;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(status = %output.status, stdout = %stdout.trim(), "dialog finished");

        if !output.status.success() {
            let status = output.status.code().map_or_else(|| "signal".to_string(), |code| code.to_string());
            msg_warning!(Message::DialogNonZeroExit(status, stderr.trim().to_string()));
            return false;
        }
        parse_dialog_output(true, &stdout, &stderr)
    }
}

/// Terminal yes/no prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl Prompter for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        msg_print!(message);
        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmationPrompt.to_string())
            .default(true)
            .interact()
        {
            Ok(confirmed) => confirmed,
            Err(e) => {
                msg_warning!(Message::ConsolePromptFailed(e.to_string()));
                false
            }
        }
    }
}

/// Accepts every entry. Only reachable through an explicit `--prompt yes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Prompter for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        msg_print!(message);
        msg_info!(Message::WorklogAutoConfirmed);
        true
    }
}

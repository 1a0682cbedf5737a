//! `log` command: the default run.
//!
//! Computes today's window, checks the issue, asks for confirmation and posts
//! the worklog. Declining the prompt ends the run without touching Jira.

use crate::{
    api::{IssueTracker, Jira, WorklogEntry},
    libs::{
        config::Config,
        error::WorklogError,
        formatter::{format_minutes, format_time_range},
        messages::Message,
        prompt::{confirmation_message, PromptKind, Prompter},
        window::TimeWindow,
    },
    msg_info, msg_success,
};
use chrono::{DateTime, Utc};
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct LogArgs {
    #[arg(short, long, help = "Issue key to log against, overrides ISSUE_KEY")]
    pub issue: Option<String>,
    #[arg(long, value_enum, default_value_t = PromptKind::Auto, help = "How to ask for confirmation")]
    pub prompt: PromptKind,
}

/// How a run ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Submitted,
    Canceled,
}

pub async fn cmd(args: LogArgs, config: Config) -> Result<Outcome, WorklogError> {
    let config = config.with_issue_key(args.issue.as_deref());
    let jira = Jira::new(&config)?;
    let prompter = args.prompt.prompter();
    run(&config, &jira, prompter.as_ref(), Utc::now()).await
}

/// Computes the window, checks the issue, asks for confirmation and posts the
/// worklog. Nothing is posted unless `prompter` confirms.
pub async fn run<T: IssueTracker>(
    config: &Config,
    tracker: &T,
    prompter: &dyn Prompter,
    now: DateTime<Utc>,
) -> Result<Outcome, WorklogError> {
    let window = TimeWindow::compute(config.timezone, &config.schedule, now)?;

    let summary = tracker.issue_summary(&config.issue_key).await?;
    msg_info!(Message::IssueOk(config.issue_key.clone(), summary.clone()));

    if !prompter.confirm(&confirmation_message(&config.issue_key, &summary, &window)) {
        msg_info!(Message::WorklogCanceled);
        return Ok(Outcome::Canceled);
    }

    tracker.post_worklog(&config.issue_key, &WorklogEntry::new(&window)).await?;
    msg_success!(Message::WorklogSubmitted(
        format_minutes(window.minutes),
        config.issue_key.clone(),
        format_time_range(&window.start, &window.end),
    ));
    Ok(Outcome::Submitted)
}

//! `check` command: validates configuration, window and issue access
//! without prompting or posting anything.

use crate::{
    api::{IssueTracker, Jira},
    libs::{
        config::Config,
        error::WorklogError,
        formatter::{format_date, format_minutes, format_time_range},
        messages::Message,
        window::TimeWindow,
    },
    msg_info, msg_print, msg_success,
};
use chrono::{DateTime, Utc};
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    #[arg(short, long, help = "Issue key to check, overrides ISSUE_KEY")]
    pub issue: Option<String>,
}

pub async fn cmd(args: CheckArgs, config: Config) -> Result<(), WorklogError> {
    let config = config.with_issue_key(args.issue.as_deref());
    let jira = Jira::new(&config)?;
    run(&config, &jira, Utc::now()).await.map(|_| ())
}

/// Same validation as a real run, without prompting or posting.
pub async fn run<T: IssueTracker>(config: &Config, tracker: &T, now: DateTime<Utc>) -> Result<TimeWindow, WorklogError> {
    let window = TimeWindow::compute(config.timezone, &config.schedule, now)?;
    let summary = tracker.issue_summary(&config.issue_key).await?;

    msg_info!(Message::IssueOk(config.issue_key.clone(), summary));
    msg_print!(Message::WindowPreview(
        format_time_range(&window.start, &window.end),
        format_minutes(window.minutes),
        format_date(&window.start),
    ));
    msg_success!(Message::CheckCompleted(config.issue_key.clone()));
    Ok(window)
}

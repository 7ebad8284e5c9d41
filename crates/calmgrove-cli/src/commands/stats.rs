use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Full progress snapshot
    Show,
    /// Current consecutive-day streak
    Streak,
}

pub async fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = common::build_context()?;
    let progress = ctx.tracker.refresh().await;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(progress)?);
        }
        StatsAction::Streak => {
            println!("{}", progress.current_streak);
        }
    }
    Ok(())
}

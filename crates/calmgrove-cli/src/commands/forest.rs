use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum ForestAction {
    /// List unlocked trees, newest first
    List,
}

pub async fn run(action: ForestAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = common::build_context()?;
    let progress = ctx.tracker.refresh().await;

    match action {
        ForestAction::List => {
            println!("{}", serde_json::to_string_pretty(&progress.trees)?);
        }
    }
    Ok(())
}

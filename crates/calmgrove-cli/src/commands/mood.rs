use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record today's mood check-in
    Log {
        /// Mood rating, 1-5
        #[arg(long)]
        rating: u8,
        /// Optional journal note
        #[arg(long)]
        note: Option<String>,
    },
}

pub async fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = common::build_context()?;

    match action {
        MoodAction::Log { rating, note } => {
            match ctx.tracker.record_mood_checkin(rating, note).await? {
                Some(checkin) => println!("{}", serde_json::to_string_pretty(&checkin)?),
                None => println!("guest mode: check-in not persisted"),
            }
        }
    }
    Ok(())
}

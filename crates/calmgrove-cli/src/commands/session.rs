use std::time::Duration;

use clap::Subcommand;

use calmgrove_core::{Event, KvStore, SessionEngine, SessionMode, SessionState};

use crate::common;

const ENGINE_KEY: &str = "session_engine";

#[derive(Subcommand)]
pub enum SessionAction {
    /// Begin a session from setup
    Start {
        /// Target duration in minutes (defaults to the configured value)
        #[arg(long)]
        minutes: Option<u64>,
        /// Session mode: calm-focus, deep-sleep, focus-garden, breathing
        #[arg(long)]
        mode: Option<String>,
        /// Pre-session mood rating, 1-5
        #[arg(long, default_value = "3")]
        mood: u8,
    },
    /// Suspend the running session
    Pause,
    /// Continue a paused session
    Resume,
    /// Advance the session by one second
    Tick,
    /// Print current session state as JSON
    Status,
    /// Collect the post-session mood and record the session
    Finish {
        /// Post-session mood rating, 1-5
        #[arg(long)]
        mood: u8,
    },
    /// Reset to setup state
    Reset,
    /// Start a session and tick it live until it completes
    Run {
        #[arg(long)]
        minutes: Option<u64>,
        #[arg(long)]
        mode: Option<String>,
        #[arg(long, default_value = "3")]
        mood: u8,
    },
}

fn load_engine(kv: &dyn KvStore) -> SessionEngine {
    if let Ok(Some(json)) = kv.get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<SessionEngine>(&json) {
            return engine;
        }
    }
    SessionEngine::new()
}

fn save_engine(kv: &dyn KvStore, engine: &SessionEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    kv.set(ENGINE_KEY, &json)?;
    Ok(())
}

fn resolve_start(
    config: &calmgrove_core::Config,
    minutes: Option<u64>,
    mode: Option<String>,
) -> Result<(SessionMode, u64), Box<dyn std::error::Error>> {
    let minutes = minutes.unwrap_or(config.session.default_duration_min);
    let mode: SessionMode = mode
        .as_deref()
        .unwrap_or(&config.session.default_mode)
        .parse()?;
    Ok((mode, minutes * 60))
}

pub async fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = common::build_context()?;
    let mut engine = load_engine(ctx.kv.as_ref());

    match action {
        SessionAction::Start {
            minutes,
            mode,
            mood,
        } => {
            let (mode, target_secs) = resolve_start(&ctx.config, minutes, mode)?;
            let event = engine.start(mode, target_secs, mood)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        SessionAction::Pause => {
            match engine.pause() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
            }
        }
        SessionAction::Resume => {
            match engine.resume() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
            }
        }
        SessionAction::Tick => {
            if let Some(event) = engine.tick() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            }
        }
        SessionAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        SessionAction::Finish { mood } => {
            let summary = engine.finish(mood)?;
            let record = ctx.tracker.record_session(summary).await;
            println!("{}", serde_json::to_string_pretty(&record)?);
            println!("{}", serde_json::to_string_pretty(ctx.tracker.progress())?);
        }
        SessionAction::Reset => {
            let event = engine.reset();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        SessionAction::Run {
            minutes,
            mode,
            mood,
        } => {
            let (mode, target_secs) = resolve_start(&ctx.config, minutes, mode)?;
            engine.reset();
            let event = engine.start(mode, target_secs, mood)?;
            println!("{}", serde_json::to_string_pretty(&event)?);

            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await; // First tick fires immediately.
            while engine.state() == SessionState::Active {
                interval.tick().await;
                match engine.tick() {
                    Some(Event::BreathPhaseChanged { phase, .. }) => {
                        println!("{}", phase.label());
                    }
                    Some(event @ Event::SessionCompleted { .. }) => {
                        println!("{}", serde_json::to_string_pretty(&event)?);
                    }
                    _ => {}
                }
            }
        }
    }

    save_engine(ctx.kv.as_ref(), &engine)?;
    Ok(())
}

mod config;
mod io;
mod persistence;
mod scanner;

use anyhow::{Context, Result};
use io::SpyIo;
use persistence::JsonSaveStore;
use scanner::PromptScanner;
use std::time::{SystemTime, UNIX_EPOCH};
use vaultrun_core::{Engine, GameIo, Pace, SaveStore, Session};

fn main() -> Result<()> {
    let game_config = config::load_config()?;
    let save_path =
        persistence::default_save_path().context("no home directory for the save file")?;
    let store = JsonSaveStore::new(save_path);
    let mut io = SpyIo::new(true);
    let mut scanner = PromptScanner;

    let mut resume = false;
    let mut session = None;
    if store.exists() {
        io.show("Saved session detected. Resume? (y/n)", Pace::Instant);
        let choice = io.get_input("> ").trim().to_lowercase();
        if matches!(choice.as_str(), "y" | "yes") {
            match store.load() {
                Some(loaded) => {
                    session = Some(loaded);
                    resume = true;
                }
                None => io.show("Save file corrupt. Starting fresh.", Pace::Instant),
            }
        }
    }
    let mut session = session.unwrap_or_default();

    loop {
        io.apply_visual_settings(&session.visual);
        {
            let mut engine = Engine::new(
                &mut io,
                &store,
                &mut scanner,
                &mut session,
                game_config.clone(),
                run_seed(),
                resume,
            );
            engine.run();
        }
        if let Err(err) = store.save(&session) {
            io.show(&format!("[WARN] {err}"), Pace::Instant);
        }

        io.show("Play again? (y/n)", Pace::Instant);
        let choice = io.get_input("> ").trim().to_lowercase();
        if !matches!(choice.as_str(), "y" | "yes") {
            break;
        }
        resume = false;
        session = Session {
            visual: session.visual.clone(),
            side_missions_enabled: session.side_missions_enabled,
            calibration_enabled: session.calibration_enabled,
            ..Session::default()
        };
    }
    Ok(())
}

fn run_seed() -> u64 {
    if let Ok(raw) = std::env::var("VAULTRUN_SEED") {
        if let Ok(seed) = raw.parse() {
            return seed;
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0xC0FFEE)
}

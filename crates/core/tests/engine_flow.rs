use std::cell::RefCell;
use std::collections::VecDeque;
use vaultrun_core::{
    Card, CardScanner, Engine, GameConfig, GameIo, Pace, RunOutcome, SaveError, SaveStore,
    ScanError, Session, VisualSettings,
};

/// IO provider fed from a canned input script. Once the script runs dry it
/// answers "exit" so a desynchronized test terminates instead of hanging.
struct ScriptedIo {
    inputs: VecDeque<String>,
    messages: Vec<String>,
}

impl ScriptedIo {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|input| input.to_string()).collect(),
            messages: Vec::new(),
        }
    }

    fn saw(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.contains(needle))
    }
}

impl GameIo for ScriptedIo {
    fn show(&mut self, message: &str, _pace: Pace) {
        self.messages.push(message.to_string());
    }

    fn display_card(&mut self, card: Card) {
        self.messages.push(card.to_string());
    }

    fn get_input(&mut self, _prompt: &str) -> String {
        self.inputs.pop_front().unwrap_or_else(|| "exit".to_string())
    }

    fn clear_screen(&mut self) {}

    fn apply_visual_settings(&mut self, _settings: &VisualSettings) {}
}

#[derive(Default)]
struct MemStore {
    saved: RefCell<Option<Session>>,
    fail: bool,
}

impl MemStore {
    fn failing() -> Self {
        Self {
            saved: RefCell::new(None),
            fail: true,
        }
    }
}

impl SaveStore for MemStore {
    fn exists(&self) -> bool {
        self.saved.borrow().is_some()
    }

    fn load(&self) -> Option<Session> {
        self.saved.borrow().clone()
    }

    fn save(&self, session: &Session) -> Result<(), SaveError> {
        if self.fail {
            return Err(SaveError("disk offline".into()));
        }
        *self.saved.borrow_mut() = Some(session.clone());
        Ok(())
    }
}

struct NoScanner;

impl CardScanner for NoScanner {
    fn scan(&mut self, _target_label: &str) -> Result<Option<String>, ScanError> {
        Err(ScanError("no camera".into()))
    }
}

fn quiet_session() -> Session {
    Session {
        calibration_enabled: false,
        ..Session::default()
    }
}

fn run_engine(
    io: &mut ScriptedIo,
    store: &MemStore,
    session: &mut Session,
    config: GameConfig,
) -> RunOutcome {
    let mut scanner = NoScanner;
    let mut engine = Engine::new(io, store, &mut scanner, session, config, 42, false);
    engine.run()
}

#[test]
fn exit_command_terminates_and_persists() {
    let mut io = ScriptedIo::new(&["exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Disconnected);
    assert!(io.saw("HOW TO PLAY:"));
    assert!(io.saw("[EXIT] Session saved. Disconnecting..."));
    assert_eq!(store.load().as_ref(), Some(&session));
}

#[test]
fn a_round_resolves_with_a_verdict() {
    let mut io = ScriptedIo::new(&["h", "exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Disconnected);
    assert!(io.saw("Current card:"));
    assert!(io.saw("Next card:"));
    assert!(io.saw("WIN +") || io.saw("LOSS -") || io.saw("Joker breach!"));
}

#[test]
fn invalid_predictions_retry_without_consuming_a_card() {
    let mut io = ScriptedIo::new(&["sideways", "h", "exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();

    run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert!(io.saw("Invalid prediction. Use higher (h) or lower (l)."));
    assert!(io.saw("Next card:"));
}

#[test]
fn busts_when_the_stake_is_unaffordable() {
    let mut io = ScriptedIo::new(&[]);
    let store = MemStore::default();
    let mut session = quiet_session();
    session.balance = 100;

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Busted);
    assert!(io.saw("[SYSTEM] Funds depleted. Mission terminated."));
}

#[test]
fn busts_immediately_on_empty_balance() {
    let mut io = ScriptedIo::new(&[]);
    let store = MemStore::default();
    let mut session = quiet_session();
    session.balance = 0;

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Busted);
    assert!(io.saw("[SYSTEM] Balance depleted. Better luck next time."));
}

#[test]
fn reaching_the_threshold_plays_the_extraction_scene() {
    let mut io = ScriptedIo::new(&["h"]);
    let store = MemStore::default();
    let mut session = quiet_session();
    let config = GameConfig {
        victory_threshold: 1,
        ..GameConfig::default()
    };

    let outcome = run_engine(&mut io, &store, &mut session, config);

    assert_eq!(outcome, RunOutcome::VaultDrained);
    assert!(io.saw("Mission status: COMPLETE."));
}

#[test]
fn shop_command_routes_through_the_menu_and_back() {
    let mut io = ScriptedIo::new(&["shop", "b", "exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Disconnected);
    assert!(session.visited_shop);
    assert!(io.saw("=== BLACK MARKET TERMINAL ==="));
}

#[test]
fn settings_command_flips_toggles() {
    let mut io = ScriptedIo::new(&["settings", "3", "b", "exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();

    run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert!(session.visited_settings);
    assert!(!session.side_missions_enabled);
}

#[test]
fn save_failures_surface_as_warnings() {
    let mut io = ScriptedIo::new(&["save", "exit"]);
    let store = MemStore::failing();
    let mut session = quiet_session();

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Disconnected);
    assert!(io.saw("[WARN] save failed: disk offline"));
}

#[test]
fn mission_offer_appears_on_the_interval() {
    let mut io = ScriptedIo::new(&["h", "y", "exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();
    let config = GameConfig {
        mission_interval: 1,
        ..GameConfig::default()
    };

    run_engine(&mut io, &store, &mut session, config);

    assert!(io.saw("=== SIDE MISSION ==="));
    assert!(io.saw("Mission accepted."));
}

#[test]
fn missions_stay_quiet_when_disabled() {
    let mut io = ScriptedIo::new(&["h", "h", "exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();
    session.side_missions_enabled = false;
    let config = GameConfig {
        mission_interval: 1,
        ..GameConfig::default()
    };

    run_engine(&mut io, &store, &mut session, config);

    assert!(!io.saw("=== SIDE MISSION ==="));
}

#[test]
fn calibration_degrades_when_the_camera_is_gone() {
    let mut io = ScriptedIo::new(&["scan", "exit"]);
    let store = MemStore::default();
    let mut session = Session::default();

    let outcome = run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Disconnected);
    assert!(io.saw("[CALIBRATION] Recalibration required for this deck."));
    assert!(io.saw("Calibration skipped: cant connect to the camera."));
}

#[test]
fn calibration_outsourcing_charges_ten_percent() {
    let mut io = ScriptedIo::new(&["pay", "exit"]);
    let store = MemStore::default();
    let mut session = Session::default();

    run_engine(&mut io, &store, &mut session, GameConfig::default());

    assert!(io.saw("Outsourced calibration. Fee deducted: 500."));
    assert_eq!(session.balance, 4500);
}

#[test]
fn resume_greets_instead_of_replaying_the_intro() {
    let mut io = ScriptedIo::new(&["exit"]);
    let store = MemStore::default();
    let mut session = quiet_session();
    let mut scanner = NoScanner;
    let mut engine = Engine::new(
        &mut io,
        &store,
        &mut scanner,
        &mut session,
        GameConfig::default(),
        42,
        true,
    );
    engine.run();

    assert!(io.saw("> SESSION RESTORED."));
    assert!(!io.saw("> Incoming encrypted message..."));
}

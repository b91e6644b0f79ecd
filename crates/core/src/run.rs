use crate::achievements::{self, RoundContext};
use crate::{
    settings, shop, Card, CardCounter, CardScanner, Deck, DeckError, DeckWatcher, GameConfig,
    GameIo, MissionDef, MissionState, Pace, RngState, SaveStore, Session,
};
use std::cell::RefCell;
use std::rc::Rc;

mod calibrate;
mod missions;
mod round;
mod text;

/// Engine phases. `Dealing` is the only phase that resolves rounds; menu
/// phases always hand control back to it. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Startup,
    Dealing,
    Shopping,
    Settings,
    Achievements,
    Terminated,
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Lifetime extraction hit the victory threshold.
    VaultDrained,
    /// Balance could no longer cover the stake.
    Busted,
    /// The player exited via command.
    Disconnected,
}

/// The round engine. Owns the per-run state (deck, current card, mission
/// slots, counters) and borrows the session plus all external capabilities;
/// it is the sole mutator of the session while `run` executes.
pub struct Engine<'a> {
    io: &'a mut dyn GameIo,
    store: &'a dyn SaveStore,
    scanner: &'a mut dyn CardScanner,
    session: &'a mut Session,
    config: GameConfig,
    rng: RngState,
    state: GameState,
    outcome: RunOutcome,
    deck: Deck,
    current_card: Option<Card>,
    watcher: DeckWatcher,
    counter: Rc<RefCell<CardCounter>>,
    active_mission: Option<MissionState>,
    pending_mission: Option<&'static MissionDef>,
    rounds_completed: u32,
    resume: bool,
}

impl<'a> Engine<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        io: &'a mut dyn GameIo,
        store: &'a dyn SaveStore,
        scanner: &'a mut dyn CardScanner,
        session: &'a mut Session,
        config: GameConfig,
        seed: u64,
        resume: bool,
    ) -> Self {
        let counter = Rc::new(RefCell::new(CardCounter::default()));
        let mut watcher = DeckWatcher::default();
        watcher.attach(counter.clone());
        Self {
            io,
            store,
            scanner,
            session,
            config,
            rng: RngState::from_seed(seed),
            state: GameState::Startup,
            outcome: RunOutcome::Disconnected,
            deck: Deck::default(),
            current_card: None,
            watcher,
            counter,
            active_mission: None,
            pending_mission: None,
            rounds_completed: 0,
            resume,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Drive the state machine until termination, then write the final
    /// checkpoint and report how the run ended.
    pub fn run(&mut self) -> RunOutcome {
        self.io.apply_visual_settings(&self.session.visual);
        while self.state != GameState::Terminated {
            match self.state {
                GameState::Startup => self.handle_startup(),
                GameState::Dealing => self.handle_dealing(),
                GameState::Shopping => {
                    shop::open_shop(self.io, self.session, self.store);
                    self.run_unlock_pass(&RoundContext::default());
                    self.state = GameState::Dealing;
                }
                GameState::Settings => {
                    settings::open_settings(self.io, self.session);
                    self.checkpoint();
                    self.state = GameState::Dealing;
                }
                GameState::Achievements => {
                    achievements::open_achievements(self.io, self.session);
                    self.state = GameState::Dealing;
                }
                GameState::Terminated => {}
            }
        }
        self.checkpoint();
        self.outcome
    }

    fn handle_startup(&mut self) {
        self.io.clear_screen();
        if self.resume {
            self.io.show("> SESSION RESTORED.", Pace::Instant);
        } else {
            self.show_intro_story();
        }
        self.show_rules();
        self.run_unlock_pass(&RoundContext::default());
        self.prime_new_deck(true);
        self.current_card = Some(self.deal_starting_card());
        self.state = GameState::Dealing;
    }

    /// Resolve rounds back to back until a command, menu, or terminal
    /// condition changes the state.
    fn handle_dealing(&mut self) {
        while self.state == GameState::Dealing {
            if self.session.balance <= 0 {
                self.io.show(
                    "[SYSTEM] Balance depleted. Better luck next time.",
                    Pace::Instant,
                );
                self.terminate(RunOutcome::Busted);
                return;
            }
            if self.session.balance < self.stake_amount() {
                self.io
                    .show("[SYSTEM] Funds depleted. Mission terminated.", Pace::Typed);
                self.io.show("We will get 'em next time...", Pace::Typed);
                self.terminate(RunOutcome::Busted);
                return;
            }
            if self.pending_mission.is_some() && self.active_mission.is_none() {
                self.offer_side_mission();
                if self.state != GameState::Dealing {
                    return;
                }
            }

            if self.deck.is_empty() {
                self.prime_new_deck(false);
                self.current_card = Some(self.deal_starting_card());
            }
            if self.current_card.is_none() {
                self.current_card = Some(self.deal_starting_card());
            }

            self.run_round();
        }
    }

    fn terminate(&mut self, outcome: RunOutcome) {
        self.outcome = outcome;
        self.state = GameState::Terminated;
    }

    fn stake_amount(&self) -> i64 {
        crate::stake_amount(self.session.base_bet, &self.session.upgrades)
    }

    /// Persist the session; a failed save is a warning, never an abort.
    fn checkpoint(&mut self) {
        if let Err(err) = self.store.save(self.session) {
            self.io.show(&format!("[WARN] {err}"), Pace::Instant);
        }
    }

    /// Run the achievement evaluator and announce anything newly unlocked.
    fn run_unlock_pass(&mut self, ctx: &RoundContext) {
        for key in achievements::newly_unlocked(self.session, ctx, &self.config) {
            self.session.unlock(key);
            self.io.show(
                &format!("[ACHIEVEMENT UNLOCKED] {}", achievements::name_for(key)),
                Pace::Instant,
            );
            self.checkpoint();
        }
    }

    /// Deal one card, notifying deck observers. Exhaustion rolls straight
    /// into a new deck cycle.
    fn deal_card(&mut self) -> Card {
        loop {
            match self.deck.deal() {
                Ok(card) => {
                    self.watcher.notify(self.deck.remaining());
                    return card;
                }
                Err(DeckError::Empty) => self.prime_new_deck(false),
            }
        }
    }

    /// Deal until a non-joker turns up to anchor the next round.
    fn deal_starting_card(&mut self) -> Card {
        loop {
            if self.deck.is_empty() {
                self.prime_new_deck(false);
            }
            let card = self.deal_card();
            if !card.is_joker() {
                return card;
            }
            self.io
                .show("Joker intercepted. Cycling buffer...", Pace::Instant);
        }
    }

    /// Build and shuffle a fresh deck sized by the joker upgrade, then run
    /// the per-deck calibration gate.
    fn prime_new_deck(&mut self, initial: bool) {
        if !initial {
            for line in text::RESHUFFLE_SEQUENCE {
                self.io.show(line, Pace::Typed);
            }
            self.record_deck_completion();
        }
        let jokers = self.config.base_jokers * self.session.upgrades.joker_multiplier();
        self.deck = Deck::build(jokers);
        self.deck.shuffle(&mut self.rng);
        self.watcher.notify(self.deck.remaining());
        self.calibrate();
        if !initial {
            self.remind_optional_menus();
        }
    }

    fn record_deck_completion(&mut self) {
        self.session.decks_completed += 1;
        self.run_unlock_pass(&RoundContext::default());
    }

    fn remind_optional_menus(&mut self) {
        if !self.session.visited_shop || !self.session.visited_settings {
            self.io.show(
                "Reminder: type 'shop' or 'settings' to upgrade your rig.",
                Pace::Instant,
            );
        }
    }

    fn show_intro_story(&mut self) {
        for line in text::INTRO_STORY {
            self.io.show(line, Pace::Typed);
        }
        for line in text::TITLE_ART {
            self.io.show(line, Pace::Instant);
        }
        for line in text::SYSTEM_BOOT {
            self.io.show(line, Pace::Typed);
        }
    }

    fn show_rules(&mut self) {
        for line in text::RULES {
            self.io.show(line, Pace::Instant);
        }
    }
}

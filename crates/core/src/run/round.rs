use super::*;
use crate::{Command, PayoutTable, Prediction, WinOdds, HELP_LINES};

impl Engine<'_> {
    /// Resolve a single higher/lower round against the current card.
    pub(super) fn run_round(&mut self) {
        let Some(current) = self.current_card else {
            return;
        };

        let blind_active = self
            .active_mission
            .as_ref()
            .is_some_and(|mission| mission.is_blind());
        let reverse_active = self
            .active_mission
            .as_ref()
            .is_some_and(|mission| mission.is_reverse());

        self.io.show("", Pace::Instant);
        self.io.show(&"=".repeat(46), Pace::Instant);
        self.io.show(
            &format!(
                "Balance: {} | Extracted: {}",
                self.session.balance, self.session.total_credits
            ),
            Pace::Instant,
        );
        if let Some(mission) = &self.active_mission {
            self.io
                .show(&format!("Side mission: {}", mission.def.title), Pace::Instant);
        }
        self.io.show(&"-".repeat(46), Pace::Instant);
        if blind_active {
            self.io.show("Current card: [HIDDEN]", Pace::Instant);
        } else {
            self.io.show("Current card:", Pace::Instant);
            self.io.display_card(current);
        }

        let odds = self.counter.borrow().win_odds(current);
        let payouts = PayoutTable::build(
            odds,
            self.stake_amount(),
            self.config.house_edge,
            &self.session.upgrades,
        );
        self.display_odds(odds, &payouts, blind_active);

        let Some(prediction) = self.prompt_prediction(&payouts) else {
            return;
        };

        let win_probability = win_probability(odds, prediction, reverse_active);
        self.session.balance -= payouts.stake;
        let next_card = self.deal_card();
        self.io.show("Next card:", Pace::Instant);
        self.io.display_card(next_card);

        if next_card.is_joker() {
            self.io.show("Joker breach! Auto-win.", Pace::Instant);
            if let Some(payout) = payouts.for_prediction(prediction) {
                let payout = self.apply_bonus_multiplier(payout);
                self.apply_win(payout, payouts.stake);
            }
            let mission_completed = self.update_mission_after_round(true);
            self.after_round(true, win_probability, mission_completed);
            self.check_final_extraction();
            if self.state != GameState::Dealing {
                return;
            }
            self.current_card = Some(self.deal_starting_card());
            self.check_deck_depleted(None);
            return;
        }

        let win = is_prediction_correct(current, next_card, prediction, reverse_active);
        if win {
            match payouts.for_prediction(prediction) {
                Some(payout) => {
                    let payout = self.apply_bonus_multiplier(payout);
                    self.apply_win(payout, payouts.stake);
                }
                None => self
                    .io
                    .show("No payout available for that call.", Pace::Instant),
            }
        } else {
            self.apply_loss(payouts.stake);
        }

        let mission_completed = self.update_mission_after_round(win);
        self.after_round(win, win_probability, mission_completed);
        if self.session.balance <= 0 {
            self.io.show(
                "[SYSTEM] Balance depleted. Better luck next time.",
                Pace::Instant,
            );
            self.terminate(RunOutcome::Busted);
            return;
        }
        self.check_final_extraction();
        if self.state != GameState::Dealing {
            return;
        }
        self.check_deck_depleted(Some(next_card));
    }

    /// Ask for the player's call. Returns `None` when a command interrupted
    /// the round (no card is consumed in that case).
    fn prompt_prediction(&mut self, payouts: &PayoutTable) -> Option<Prediction> {
        loop {
            let raw = self.io.get_input("Higher or lower? [H/L] > ");
            if let Some(command) = Command::parse(&raw) {
                if self.apply_command(command) {
                    return None;
                }
                continue;
            }
            match Prediction::parse(&raw) {
                Ok(prediction) => {
                    if payouts.for_prediction(prediction).is_none() {
                        self.io
                            .show("No winning outcomes for that call.", Pace::Instant);
                        continue;
                    }
                    return Some(prediction);
                }
                Err(err) => self.io.show(&err.to_string(), Pace::Instant),
            }
        }
    }

    /// Execute an intercepted command. Returns true when the round must be
    /// abandoned because the state changed.
    pub(super) fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Shop => {
                self.io
                    .show("[SHOP] Routing to the black market...", Pace::Instant);
                self.state = GameState::Shopping;
                true
            }
            Command::Settings => {
                self.io
                    .show("[SETTINGS] Opening visual controls...", Pace::Instant);
                self.state = GameState::Settings;
                true
            }
            Command::Achievements => {
                self.io
                    .show("[ACHIEVEMENTS] Pulling classified record...", Pace::Instant);
                self.state = GameState::Achievements;
                true
            }
            Command::Save => {
                match self.store.save(self.session) {
                    Ok(()) => self.io.show("[SAVE] Session written to disk.", Pace::Instant),
                    Err(err) => self.io.show(&format!("[WARN] {err}"), Pace::Instant),
                }
                false
            }
            Command::Exit => {
                self.checkpoint();
                self.io
                    .show("[EXIT] Session saved. Disconnecting...", Pace::Instant);
                self.terminate(RunOutcome::Disconnected);
                true
            }
            Command::Help => {
                for line in HELP_LINES {
                    self.io.show(line, Pace::Instant);
                }
                false
            }
        }
    }

    fn display_odds(&mut self, odds: WinOdds, payouts: &PayoutTable, blind: bool) {
        if blind {
            self.io
                .show("Blind round active. Odds are classified.", Pace::Instant);
            self.io
                .show(&format!("Stake: {}", payouts.stake), Pace::Instant);
            return;
        }
        if self.session.upgrades.ai_counter {
            self.io.show("Odds:", Pace::Instant);
            self.io.show("AI Counter:", Pace::Instant);
            self.show_odds_line("Higher", odds.higher);
            self.show_odds_line("Lower", odds.lower);
            if odds.joker > 0.0 {
                self.show_odds_line("Joker auto-win", odds.joker);
            }
            self.io
                .show(&format!("Stake: {}", payouts.stake), Pace::Instant);
            self.io.show(
                &format!(
                    "Payout if Higher: {} | Payout if Lower: {}",
                    payout_label(payouts.higher),
                    payout_label(payouts.lower)
                ),
                Pace::Instant,
            );
            return;
        }
        self.io.show(
            "Odds: [LOCKED] Install the AI Card Counter to reveal.",
            Pace::Instant,
        );
        self.io.show(
            &format!("Stake: {} | Payout: [LOCKED]", payouts.stake),
            Pace::Instant,
        );
    }

    fn show_odds_line(&mut self, label: &str, probability: f64) {
        if probability <= 0.0 {
            self.io.show(&format!("{label}: N/A"), Pace::Instant);
        } else {
            self.io
                .show(&format!("{label}: {:.1}%", probability * 100.0), Pace::Instant);
        }
    }

    fn apply_bonus_multiplier(&self, payout: i64) -> i64 {
        match &self.active_mission {
            Some(mission) if mission.def.bonus_multiplier > 1 => {
                payout * mission.def.bonus_multiplier
            }
            _ => payout,
        }
    }

    fn apply_win(&mut self, payout: i64, stake: i64) {
        self.session.balance += payout;
        let profit = payout - stake;
        if profit > 0 {
            self.session.total_credits += profit;
        }
        self.io.show(
            &format!("WIN +{profit} | Balance: {}", self.session.balance),
            Pace::Instant,
        );
    }

    fn apply_loss(&mut self, stake: i64) {
        self.io.show(
            &format!("LOSS -{stake} | Balance: {}", self.session.balance),
            Pace::Instant,
        );
    }

    /// Streak bookkeeping, the achievement pass, and mission scheduling.
    fn after_round(&mut self, win: bool, win_probability: f64, mission_completed: bool) {
        self.rounds_completed += 1;
        if win {
            self.session.win_streak += 1;
            self.session.max_win_streak = self.session.max_win_streak.max(self.session.win_streak);
        } else {
            self.session.win_streak = 0;
        }
        let ctx = RoundContext {
            win,
            win_probability,
            mission_completed,
        };
        self.run_unlock_pass(&ctx);
        self.maybe_schedule_side_mission();
    }

    fn check_final_extraction(&mut self) {
        if self.session.total_credits < self.config.victory_threshold {
            return;
        }
        self.final_extraction();
        self.terminate(RunOutcome::VaultDrained);
    }

    fn final_extraction(&mut self) {
        self.io.clear_screen();
        for line in text::FINAL_EXTRACTION {
            self.io.show(line, Pace::Slow);
        }
        for line in text::PURGE_ART {
            self.io.show(line, Pace::Instant);
        }
    }

    /// Roll into a fresh cycle when the deck ran dry, otherwise carry the
    /// dealt card over as the next round's current card.
    fn check_deck_depleted(&mut self, next_card: Option<Card>) {
        if self.deck.is_empty() {
            self.prime_new_deck(false);
            self.current_card = Some(self.deal_starting_card());
            return;
        }
        if let Some(card) = next_card {
            self.current_card = Some(card);
        }
    }
}

fn payout_label(payout: Option<i64>) -> String {
    payout.map_or_else(|| "N/A".to_string(), |value| value.to_string())
}

/// Classify the raw comparison, then apply reverse-mission inversion. Equal
/// ranks always lose, reverse or not.
fn is_prediction_correct(current: Card, next: Card, prediction: Prediction, reverse: bool) -> bool {
    if next.rank == current.rank {
        return false;
    }
    let correct = match prediction {
        Prediction::Higher => next.rank > current.rank,
        Prediction::Lower => next.rank < current.rank,
    };
    if reverse {
        !correct
    } else {
        correct
    }
}

fn win_probability(odds: WinOdds, prediction: Prediction, reverse: bool) -> f64 {
    match (prediction, reverse) {
        (Prediction::Higher, false) | (Prediction::Lower, true) => odds.higher,
        (Prediction::Lower, false) | (Prediction::Higher, true) => odds.lower,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_prediction_correct, win_probability};
    use crate::{Card, Prediction, Rank, Suit, WinOdds};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn equal_ranks_always_lose() {
        let current = card(Rank::Seven);
        let next = Card::new(Rank::Seven, Suit::Hearts);
        assert!(!is_prediction_correct(current, next, Prediction::Higher, false));
        assert!(!is_prediction_correct(current, next, Prediction::Lower, false));
        assert!(!is_prediction_correct(current, next, Prediction::Higher, true));
    }

    #[test]
    fn reverse_inverts_the_classification() {
        let current = card(Rank::Seven);
        let next = card(Rank::King);
        assert!(is_prediction_correct(current, next, Prediction::Higher, false));
        assert!(!is_prediction_correct(current, next, Prediction::Higher, true));
        assert!(is_prediction_correct(current, next, Prediction::Lower, true));
    }

    #[test]
    fn win_probability_follows_the_effective_direction() {
        let odds = WinOdds {
            higher: 0.7,
            lower: 0.2,
            joker: 0.0,
        };
        assert_eq!(win_probability(odds, Prediction::Higher, false), 0.7);
        assert_eq!(win_probability(odds, Prediction::Higher, true), 0.2);
        assert_eq!(win_probability(odds, Prediction::Lower, true), 0.7);
    }
}

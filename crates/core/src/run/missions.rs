use super::*;
use crate::{Command, MissionProgress};

impl Engine<'_> {
    /// Queue a mission offer once per interval, provided no mission is
    /// already queued or running.
    pub(super) fn maybe_schedule_side_mission(&mut self) {
        if !self.session.side_missions_enabled || self.config.mission_interval == 0 {
            return;
        }
        if self.active_mission.is_some() || self.pending_mission.is_some() {
            return;
        }
        if self.rounds_completed == 0 || self.rounds_completed % self.config.mission_interval != 0
        {
            return;
        }
        self.pending_mission = Some(MissionDef::random(&mut self.rng));
    }

    /// Present the queued mission. A command interrupt re-queues the offer
    /// so it comes back after the menu.
    pub(super) fn offer_side_mission(&mut self) {
        let Some(definition) = self.pending_mission.take() else {
            return;
        };
        if !self.session.side_missions_enabled {
            return;
        }

        self.io.show("", Pace::Instant);
        self.io.show("=== SIDE MISSION ===", Pace::Instant);
        self.io.show(definition.title, Pace::Instant);
        for line in definition.description {
            self.io.show(&format!("- {line}"), Pace::Instant);
        }
        if let Some(ratio) = definition.skip_penalty_ratio {
            let percent = (ratio * 100.0).round() as i64;
            self.io.show(
                &format!("Skip penalty: {percent}% of balance."),
                Pace::Instant,
            );
        } else {
            self.io
                .show("Skip this mission to forfeit the bonus.", Pace::Instant);
        }

        loop {
            let raw = self
                .io
                .get_input("Accept mission? [Y/skip] > ")
                .trim()
                .to_lowercase();
            if let Some(command) = Command::parse(&raw) {
                if self.apply_command(command) {
                    self.pending_mission = Some(definition);
                    return;
                }
                continue;
            }
            match raw.as_str() {
                "" | "y" | "yes" | "accept" => {
                    self.active_mission = Some(MissionState::start(definition));
                    self.io.show("Mission accepted.", Pace::Instant);
                    return;
                }
                "skip" | "s" | "n" | "no" => {
                    self.apply_mission_skip(definition);
                    return;
                }
                _ => self
                    .io
                    .show("Type 'y' to accept or 'skip' to skip.", Pace::Instant),
            }
        }
    }

    fn apply_mission_skip(&mut self, definition: &'static MissionDef) {
        if let Some(ratio) = definition.skip_penalty_ratio {
            let fee = ((self.session.balance as f64 * ratio).round() as i64).max(1);
            self.session.balance = (self.session.balance - fee).max(0);
            self.io.show(
                &format!("Skip fee paid: {fee}. Mission aborted."),
                Pace::Instant,
            );
        } else {
            self.io
                .show("Mission skipped. Bonus forfeited.", Pace::Instant);
        }
    }

    /// Advance the active mission with the round's mission-adjusted outcome.
    /// Returns true when the round completed it.
    pub(super) fn update_mission_after_round(&mut self, win: bool) -> bool {
        let Some(mission) = self.active_mission.as_mut() else {
            return false;
        };
        match mission.advance(win) {
            MissionProgress::Ongoing => false,
            MissionProgress::Completed { double_balance } => {
                if double_balance {
                    let before = self.session.balance;
                    self.session.balance *= 2;
                    self.session.total_credits += before;
                    self.io.show(
                        &format!(
                            "Double or Nothing success! Balance doubled to {}.",
                            self.session.balance
                        ),
                        Pace::Instant,
                    );
                }
                self.io.show("Side mission complete.", Pace::Instant);
                self.active_mission = None;
                true
            }
            MissionProgress::Failed => {
                self.io.show("Side mission ended.", Pace::Instant);
                self.active_mission = None;
                false
            }
        }
    }
}

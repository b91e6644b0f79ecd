use crate::RngState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionKind {
    DoubleOrNothing,
    BigMoney,
    LuckySeven,
    GoneBlind,
    ReversePsychology,
}

/// Static description of a side mission. `rounds` and `wins_required` are
/// mutually exclusive triggers: duration-based missions set `rounds`,
/// streak-based ones set `wins_required`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionDef {
    pub kind: MissionKind,
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub rounds: u32,
    pub wins_required: u32,
    pub bonus_multiplier: i64,
    pub reverse_logic: bool,
    pub blind_rounds: u32,
    pub skip_penalty_ratio: Option<f64>,
}

impl MissionDef {
    pub const ALL: [MissionDef; 5] = [
        MissionDef {
            kind: MissionKind::DoubleOrNothing,
            title: "DOUBLE OR NOTHING",
            description: &[
                "Win 3 rounds in a row to double your balance.",
                "Fail and you just carry on as normal.",
            ],
            rounds: 0,
            wins_required: 3,
            bonus_multiplier: 1,
            reverse_logic: false,
            blind_rounds: 0,
            skip_penalty_ratio: None,
        },
        MissionDef {
            kind: MissionKind::BigMoney,
            title: "BIG MONEY",
            description: &["Your next win pays 5x."],
            rounds: 1,
            wins_required: 0,
            bonus_multiplier: 5,
            reverse_logic: false,
            blind_rounds: 0,
            skip_penalty_ratio: None,
        },
        MissionDef {
            kind: MissionKind::LuckySeven,
            title: "LUCKY SEVEN",
            description: &[
                "Next 7 rounds pay triple.",
                "First loss ends the bonus early.",
            ],
            rounds: 7,
            wins_required: 0,
            bonus_multiplier: 3,
            reverse_logic: false,
            blind_rounds: 0,
            skip_penalty_ratio: None,
        },
        MissionDef {
            kind: MissionKind::GoneBlind,
            title: "GONE BLIND",
            description: &[
                "Next 3 rounds you play blind.",
                "Pay 10% of balance to skip.",
            ],
            rounds: 3,
            wins_required: 0,
            bonus_multiplier: 1,
            reverse_logic: false,
            blind_rounds: 3,
            skip_penalty_ratio: Some(0.10),
        },
        MissionDef {
            kind: MissionKind::ReversePsychology,
            title: "REVERSE PSYCHOLOGY",
            description: &[
                "Next 3 rounds you must guess wrong to win.",
                "Equal still loses.",
            ],
            rounds: 3,
            wins_required: 0,
            bonus_multiplier: 1,
            reverse_logic: true,
            blind_rounds: 0,
            skip_penalty_ratio: None,
        },
    ];

    pub fn random(rng: &mut RngState) -> &'static MissionDef {
        let idx = (rng.next_u64() % Self::ALL.len() as u64) as usize;
        &Self::ALL[idx]
    }
}

/// What one round did to an active mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionProgress {
    Ongoing,
    Completed { double_balance: bool },
    Failed,
}

/// Runtime state for the single active mission. Discarded once the mission
/// resolves or the run ends; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionState {
    pub def: &'static MissionDef,
    pub rounds_left: u32,
    pub wins_in_row: u32,
    pub active: bool,
    pub completed: bool,
    pub failed: bool,
}

impl MissionState {
    pub fn start(def: &'static MissionDef) -> Self {
        let rounds = if def.rounds > 0 {
            def.rounds
        } else {
            def.wins_required
        };
        Self {
            def,
            rounds_left: rounds,
            wins_in_row: 0,
            active: true,
            completed: false,
            failed: false,
        }
    }

    pub fn is_blind(&self) -> bool {
        self.def.blind_rounds > 0 && self.rounds_left > 0
    }

    pub fn is_reverse(&self) -> bool {
        self.def.reverse_logic && self.rounds_left > 0
    }

    /// Advance the mission by one resolved round. `win` is the
    /// mission-adjusted outcome (reverse missions already applied).
    pub fn advance(&mut self, win: bool) -> MissionProgress {
        debug_assert!(self.active);
        let progress = match self.def.kind {
            MissionKind::DoubleOrNothing => {
                if win {
                    self.wins_in_row += 1;
                    if self.wins_in_row >= self.def.wins_required {
                        MissionProgress::Completed {
                            double_balance: true,
                        }
                    } else {
                        MissionProgress::Ongoing
                    }
                } else {
                    MissionProgress::Failed
                }
            }
            MissionKind::BigMoney => {
                if win {
                    MissionProgress::Completed {
                        double_balance: false,
                    }
                } else {
                    MissionProgress::Failed
                }
            }
            MissionKind::LuckySeven | MissionKind::ReversePsychology => {
                if win {
                    self.rounds_left -= 1;
                    if self.rounds_left == 0 {
                        MissionProgress::Completed {
                            double_balance: false,
                        }
                    } else {
                        MissionProgress::Ongoing
                    }
                } else {
                    MissionProgress::Failed
                }
            }
            MissionKind::GoneBlind => {
                self.rounds_left -= 1;
                if self.rounds_left == 0 {
                    MissionProgress::Completed {
                        double_balance: false,
                    }
                } else {
                    MissionProgress::Ongoing
                }
            }
        };
        match progress {
            MissionProgress::Ongoing => {}
            MissionProgress::Completed { .. } => {
                self.completed = true;
                self.active = false;
            }
            MissionProgress::Failed => {
                self.failed = true;
                self.active = false;
            }
        }
        progress
    }
}

use serde::{Deserialize, Serialize};

/// Tunable balance numbers. Defaults mirror the shipped game; a frontend may
/// override them from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Fraction shaved off the nominal payout multiplier.
    pub house_edge: f64,
    /// Lifetime extracted credits that end the run with a win.
    pub victory_threshold: i64,
    /// Jokers per deck before the Double Jokers upgrade.
    pub base_jokers: u32,
    /// A side mission is offered every this many rounds.
    pub mission_interval: u32,
    /// Share of the balance charged to outsource a calibration scan.
    pub outsource_fee_ratio: f64,
    pub high_roller_credits: i64,
    pub long_haul_decks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            house_edge: 0.06,
            victory_threshold: 100_000_000,
            base_jokers: 2,
            mission_interval: 15,
            outsource_fee_ratio: 0.10,
            high_roller_credits: 1_000_000,
            long_haul_decks: 5,
        }
    }
}

use crate::{Prediction, WinOdds};
use serde::{Deserialize, Serialize};

/// Upgrade levels bought in the shop. Every multiplier is an exact power of
/// two of its level; levels only ever grow within a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpgradeState {
    pub odds_level: u32,
    pub bet_level: u32,
    pub ai_counter: bool,
    pub joker_level: u32,
}

impl UpgradeState {
    pub fn odds_multiplier(&self) -> u64 {
        1u64 << self.odds_level
    }

    pub fn bet_multiplier(&self) -> i64 {
        1i64 << self.bet_level
    }

    pub fn joker_multiplier(&self) -> u32 {
        1u32 << self.joker_level
    }
}

/// Stake and total payout per direction for one round. A direction with no
/// winning outcomes carries no payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutTable {
    pub stake: i64,
    pub higher: Option<i64>,
    pub lower: Option<i64>,
}

impl PayoutTable {
    pub fn build(odds: WinOdds, stake: i64, house_edge: f64, upgrades: &UpgradeState) -> Self {
        Self {
            stake,
            higher: payout_for(stake, odds.higher, house_edge, upgrades),
            lower: payout_for(stake, odds.lower, house_edge, upgrades),
        }
    }

    pub fn for_prediction(&self, prediction: Prediction) -> Option<i64> {
        match prediction {
            Prediction::Higher => self.higher,
            Prediction::Lower => self.lower,
        }
    }
}

pub fn stake_amount(base_bet: i64, upgrades: &UpgradeState) -> i64 {
    base_bet * upgrades.bet_multiplier()
}

/// Total payout for a winning call: fair odds scaled by the house edge and
/// the odds upgrade, never below the stake itself.
pub fn payout_for(
    stake: i64,
    probability: f64,
    house_edge: f64,
    upgrades: &UpgradeState,
) -> Option<i64> {
    if probability <= 0.0 {
        return None;
    }
    let multiplier = (1.0 / probability) * (1.0 - house_edge) * upgrades.odds_multiplier() as f64;
    let payout = (stake as f64 * multiplier).round() as i64;
    Some(payout.max(stake))
}

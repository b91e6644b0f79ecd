use crate::achievements::{default_achievements, merge_achievements};
use crate::UpgradeState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VisualSettings {
    pub show_card_art: bool,
    pub typewriter: bool,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            show_card_art: true,
            typewriter: true,
        }
    }
}

/// The single mutable aggregate for a run. Created fresh or loaded from the
/// save store, threaded by reference through every component, and persisted
/// at explicit checkpoints. Unknown keys from newer saves ride along in
/// `extra` so a round-trip never loses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Session {
    pub balance: i64,
    pub total_credits: i64,
    pub base_bet: i64,
    pub decks_completed: u32,
    pub win_streak: u32,
    pub max_win_streak: u32,
    pub upgrades: UpgradeState,
    pub visual: VisualSettings,
    pub side_missions_enabled: bool,
    pub calibration_enabled: bool,
    pub achievements: BTreeMap<String, bool>,
    pub visited_shop: bool,
    pub visited_settings: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            balance: 5000,
            total_credits: 5000,
            base_bet: 200,
            decks_completed: 0,
            win_streak: 0,
            max_win_streak: 0,
            upgrades: UpgradeState::default(),
            visual: VisualSettings::default(),
            side_missions_enabled: true,
            calibration_enabled: true,
            achievements: default_achievements(),
            visited_shop: false,
            visited_settings: false,
            extra: serde_json::Map::new(),
        }
    }
}

impl Session {
    /// Fill missing catalog achievement keys after a load. Keys the catalog
    /// does not know are kept as-is.
    pub fn normalize(&mut self) {
        self.achievements = merge_achievements(std::mem::take(&mut self.achievements));
    }

    pub fn unlocked(&self, key: &str) -> bool {
        self.achievements.get(key).copied().unwrap_or(false)
    }

    /// Mark an achievement unlocked. Returns false when it already was.
    pub fn unlock(&mut self, key: &str) -> bool {
        if self.unlocked(key) {
            return false;
        }
        self.achievements.insert(key.to_string(), true);
        true
    }
}

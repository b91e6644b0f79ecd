use crate::{shop, GameConfig, GameIo, Pace, Session};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl AchievementDef {
    pub const ALL: [AchievementDef; 10] = [
        AchievementDef {
            key: "first_deck",
            name: "First time?",
            description: "Complete your first deck.",
        },
        AchievementDef {
            key: "win_streak_5",
            name: "Winning streak",
            description: "Win 5 rounds in a row.",
        },
        AchievementDef {
            key: "win_streak_10",
            name: "On fire",
            description: "Win 10 rounds in a row.",
        },
        AchievementDef {
            key: "statistical_anomaly",
            name: "Statistical Anomaly",
            description: "Win a round with <10% odds.",
        },
        AchievementDef {
            key: "market_manipulator",
            name: "Market manipulator",
            description: "Max out every shop upgrade.",
        },
        AchievementDef {
            key: "long_haul",
            name: "In it for the long haul",
            description: "Complete 5 decks.",
        },
        AchievementDef {
            key: "vault_breaker",
            name: "Vault breaker",
            description: "Reach 100 million credits.",
        },
        AchievementDef {
            key: "first_purchase",
            name: "First purchase",
            description: "Buy your first upgrade.",
        },
        AchievementDef {
            key: "shadow_operator",
            name: "Shadow operator",
            description: "Complete a side mission successfully.",
        },
        AchievementDef {
            key: "high_roller",
            name: "High roller",
            description: "Reach 1 million credits.",
        },
    ];
}

pub fn default_achievements() -> BTreeMap<String, bool> {
    AchievementDef::ALL
        .iter()
        .map(|def| (def.key.to_string(), false))
        .collect()
}

/// Merge stored achievement state into catalog defaults. Missing catalog
/// keys come back locked; stored keys the catalog no longer knows are kept,
/// so newer or older saves round-trip without loss.
pub fn merge_achievements(stored: BTreeMap<String, bool>) -> BTreeMap<String, bool> {
    let mut state = default_achievements();
    for (key, value) in stored {
        state.insert(key, value);
    }
    state
}

pub fn name_for(key: &str) -> &str {
    AchievementDef::ALL
        .iter()
        .find(|def| def.key == key)
        .map(|def| def.name)
        .unwrap_or(key)
}

/// Round-scoped facts the session alone cannot answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundContext {
    pub win: bool,
    pub win_probability: f64,
    pub mission_completed: bool,
}

/// Stateless unlock pass. Returns the catalog keys whose predicate holds and
/// which the session has not unlocked yet; running it again on the same
/// state returns nothing new.
pub fn newly_unlocked(
    session: &Session,
    ctx: &RoundContext,
    config: &GameConfig,
) -> Vec<&'static str> {
    let mut keys = Vec::new();
    let mut check = |satisfied: bool, key: &'static str| {
        if satisfied && !session.unlocked(key) {
            keys.push(key);
        }
    };

    check(session.decks_completed >= 1, "first_deck");
    check(
        session.decks_completed >= config.long_haul_decks,
        "long_haul",
    );
    check(session.win_streak >= 5, "win_streak_5");
    check(session.win_streak >= 10, "win_streak_10");
    check(
        ctx.win && ctx.win_probability < 0.10,
        "statistical_anomaly",
    );
    check(
        session.total_credits >= config.high_roller_credits,
        "high_roller",
    );
    check(
        session.total_credits >= config.victory_threshold,
        "vault_breaker",
    );

    let upgrades = &session.upgrades;
    check(
        upgrades.odds_level > 0
            || upgrades.bet_level > 0
            || upgrades.ai_counter
            || upgrades.joker_level > 0,
        "first_purchase",
    );
    check(
        upgrades.odds_level >= shop::ODDS_AUGMENTER.max_level
            && upgrades.bet_level >= shop::BET_AMPLIFIER.max_level
            && upgrades.ai_counter
            && upgrades.joker_level >= shop::DOUBLE_JOKERS.max_level,
        "market_manipulator",
    );
    check(ctx.mission_completed, "shadow_operator");

    keys
}

/// Render the achievements list and wait for the player to return.
pub fn open_achievements(io: &mut dyn GameIo, session: &Session) {
    io.show("", Pace::Instant);
    io.show("=== ACHIEVEMENTS ===", Pace::Instant);
    for def in AchievementDef::ALL {
        let status = if session.unlocked(def.key) {
            "UNLOCKED"
        } else {
            "LOCKED"
        };
        io.show(
            &format!("[{status}] {} - {}", def.name, def.description),
            Pace::Instant,
        );
    }
    io.get_input("Press Enter to return...");
}

use crate::{GameIo, Pace, SaveStore, Session, UpgradeState};
use thiserror::Error;

/// A purchasable upgrade. Level-based items double in cost per level;
/// one-shot items (`max_level` 1) are a flat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: i64,
    pub max_level: u32,
}

pub const ODDS_AUGMENTER: ShopItem = ShopItem {
    key: "1",
    name: "Odds Augmenter",
    description: "Doubles payout multiplier per level.",
    base_cost: 4000,
    max_level: 7,
};

pub const BET_AMPLIFIER: ShopItem = ShopItem {
    key: "2",
    name: "Bet Amplifier",
    description: "Doubles your base stake per level.",
    base_cost: 3000,
    max_level: 7,
};

pub const AI_CARD_COUNTER: ShopItem = ShopItem {
    key: "3",
    name: "AI Card Counter",
    description: "Reveals exact win percentages.",
    base_cost: 30000,
    max_level: 1,
};

pub const DOUBLE_JOKERS: ShopItem = ShopItem {
    key: "4",
    name: "Double Jokers",
    description: "Doubles joker count per deck.",
    base_cost: 60000,
    max_level: 1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Odds,
    Bet,
    AiCounter,
    Jokers,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::Odds,
        UpgradeKind::Bet,
        UpgradeKind::AiCounter,
        UpgradeKind::Jokers,
    ];

    pub fn item(self) -> &'static ShopItem {
        match self {
            UpgradeKind::Odds => &ODDS_AUGMENTER,
            UpgradeKind::Bet => &BET_AMPLIFIER,
            UpgradeKind::AiCounter => &AI_CARD_COUNTER,
            UpgradeKind::Jokers => &DOUBLE_JOKERS,
        }
    }

    pub fn level(self, upgrades: &UpgradeState) -> u32 {
        match self {
            UpgradeKind::Odds => upgrades.odds_level,
            UpgradeKind::Bet => upgrades.bet_level,
            UpgradeKind::AiCounter => u32::from(upgrades.ai_counter),
            UpgradeKind::Jokers => upgrades.joker_level,
        }
    }

    fn raise(self, upgrades: &mut UpgradeState) {
        match self {
            UpgradeKind::Odds => upgrades.odds_level += 1,
            UpgradeKind::Bet => upgrades.bet_level += 1,
            UpgradeKind::AiCounter => upgrades.ai_counter = true,
            UpgradeKind::Jokers => upgrades.joker_level += 1,
        }
    }

    fn matches_choice(self, choice: &str) -> bool {
        let aliases: &[&str] = match self {
            UpgradeKind::Odds => &["odds", "augmenter"],
            UpgradeKind::Bet => &["bet", "stake"],
            UpgradeKind::AiCounter => &["ai", "counter"],
            UpgradeKind::Jokers => &["joker", "jokers"],
        };
        choice == self.item().key || aliases.contains(&choice)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("upgrade already at max level")]
    AtMaxLevel,
    #[error("not enough credits")]
    InsufficientFunds,
}

pub fn next_cost(item: &ShopItem, level: u32) -> i64 {
    item.base_cost * (1i64 << level)
}

/// Deduct the cost and raise the level. Returns the credits spent.
pub fn purchase(session: &mut Session, kind: UpgradeKind) -> Result<i64, ShopError> {
    let item = kind.item();
    let level = kind.level(&session.upgrades);
    if level >= item.max_level {
        return Err(ShopError::AtMaxLevel);
    }
    let cost = next_cost(item, level);
    if session.balance < cost {
        return Err(ShopError::InsufficientFunds);
    }
    session.balance -= cost;
    kind.raise(&mut session.upgrades);
    Ok(cost)
}

/// Interactive shop loop. Saves after every purchase attempt that changed
/// the session; save failures are reported and the loop carries on.
pub fn open_shop(io: &mut dyn GameIo, session: &mut Session, store: &dyn SaveStore) {
    session.visited_shop = true;
    loop {
        io.show("", Pace::Instant);
        io.show("=== BLACK MARKET TERMINAL ===", Pace::Instant);
        io.show(
            &format!("Balance: {} credits", session.balance),
            Pace::Instant,
        );
        for kind in UpgradeKind::ALL {
            show_item(io, kind, kind.level(&session.upgrades));
        }
        io.show("B) Back to mission", Pace::Instant);

        let choice = io
            .get_input("What would you like to buy? ")
            .trim()
            .to_lowercase();
        if matches!(choice.as_str(), "b" | "back" | "exit") {
            break;
        }
        let Some(kind) = UpgradeKind::ALL
            .into_iter()
            .find(|kind| kind.matches_choice(&choice))
        else {
            io.show("Unknown selection.", Pace::Instant);
            continue;
        };

        match purchase(session, kind) {
            Ok(_) => io.show("Purchase confirmed.", Pace::Instant),
            Err(ShopError::AtMaxLevel) => {
                let message = if kind.item().max_level == 1 {
                    "Upgrade already installed."
                } else {
                    "Upgrade already at max level."
                };
                io.show(message, Pace::Instant);
            }
            Err(ShopError::InsufficientFunds) => {
                io.show("You cant afford that, pick something else.", Pace::Instant);
            }
        }
        if let Err(err) = store.save(session) {
            io.show(&format!("[WARN] {err}"), Pace::Instant);
        }
    }
}

fn show_item(io: &mut dyn GameIo, kind: UpgradeKind, level: u32) {
    let item = kind.item();
    let (status, cost_label) = if level >= item.max_level {
        ("MAX".to_string(), "N/A".to_string())
    } else {
        (format!("Lv {level}"), next_cost(item, level).to_string())
    };
    io.show(
        &format!(
            "{}) {} [{status}] - {} (Cost: {cost_label})",
            item.key, item.name, item.description
        ),
        Pace::Instant,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_double_per_level() {
        assert_eq!(next_cost(&ODDS_AUGMENTER, 0), 4000);
        assert_eq!(next_cost(&ODDS_AUGMENTER, 1), 8000);
        assert_eq!(next_cost(&ODDS_AUGMENTER, 3), 32000);
        assert_eq!(next_cost(&BET_AMPLIFIER, 2), 12000);
    }

    #[test]
    fn purchase_deducts_and_raises_level() {
        let mut session = Session {
            balance: 10_000,
            ..Session::default()
        };
        let cost = purchase(&mut session, UpgradeKind::Bet).expect("purchase");
        assert_eq!(cost, 3000);
        assert_eq!(session.balance, 7000);
        assert_eq!(session.upgrades.bet_level, 1);
    }

    #[test]
    fn purchase_rejects_when_broke_or_maxed() {
        let mut session = Session {
            balance: 100,
            ..Session::default()
        };
        assert_eq!(
            purchase(&mut session, UpgradeKind::Odds),
            Err(ShopError::InsufficientFunds)
        );
        assert_eq!(session.balance, 100);

        session.balance = 1_000_000;
        session.upgrades.ai_counter = true;
        assert_eq!(
            purchase(&mut session, UpgradeKind::AiCounter),
            Err(ShopError::AtMaxLevel)
        );
    }

    #[test]
    fn choices_match_keys_and_aliases() {
        assert!(UpgradeKind::Odds.matches_choice("1"));
        assert!(UpgradeKind::Odds.matches_choice("augmenter"));
        assert!(UpgradeKind::Jokers.matches_choice("jokers"));
        assert!(!UpgradeKind::Bet.matches_choice("jokers"));
    }
}

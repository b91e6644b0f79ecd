//! Narrative text shown by the engine through the IO boundary.

pub(super) const INTRO_STORY: [&str; 18] = [
    "> Incoming encrypted message...",
    "> Decrypting...",
    "",
    "\"Hey old friend. I know you're out of the game, but we need you.",
    " Evil Corp. Ring any bells? They're up to something catastrophic.",
    " We can't touch them legally - too well connected.",
    "",
    " But we found an opening. Their online casino has a card game called Higher or Lower.",
    " Our analysts found an exploit in the RNG.",
    " We've already patched your terminal with the algorithm.",
    "",
    " Your mission: Play Higher or Lower to drain them dry!",
    " Every dollar you take is a dollar they can't use for... whatever they're planning.",
    "",
    " The cards are in your favor now, operator.",
    " Good luck.",
    " - [REDACTED]\"",
    "",
];

pub(super) const TITLE_ART: [&str; 37] = [
    r" _______   _______    ______   ______  __    __ ",
    r"/       \ /       \  /      \ /      |/  \  /  |",
    r"$$$$$$$  |$$$$$$$  |/$$$$$$  |$$$$$$/ $$  \ $$ |",
    r"$$ |  $$ |$$ |__$$ |$$ |__$$ |  $$ |  $$$  \$$ |",
    r"$$ |  $$ |$$    $$< $$    $$ |  $$ |  $$$$  $$ |",
    r"$$ |  $$ |$$$$$$$  |$$$$$$$$ |  $$ |  $$ $$ $$ |",
    r"$$ |__$$ |$$ |  $$ |$$ |  $$ | _$$ |_ $$ |$$$$ |",
    r"$$    $$/ $$ |  $$ |$$ |  $$ |/ $$   |$$ | $$$ |",
    r"$$$$$$$/  $$/   $$/ $$/   $$/ $$$$$$/ $$/   $$/ ",
    r"                                                ",
    r"                                                ",
    r"                                                ",
    r" ________  __    __  ________                   ",
    r"/        |/  |  /  |/        |                  ",
    r"$$$$$$$$/ $$ |  $$ |$$$$$$$$/                   ",
    r"   $$ |   $$ |__$$ |$$ |__                      ",
    r"   $$ |   $$    $$ |$$    |                     ",
    r"   $$ |   $$$$$$$$ |$$$$$/                      ",
    r"   $$ |   $$ |  $$ |$$ |_____                   ",
    r"   $$ |   $$ |  $$ |$$       |                  ",
    r"   $$/    $$/   $$/ $$$$$$$$/                   ",
    r"                                                ",
    r"                                                ",
    r"                                                ",
    r" __     __   ______   __    __  __     ________ ",
    r"/  |   /  | /      \ /  |  /  |/  |   /        |",
    r"$$ |   $$ |/$$$$$$  |$$ |  $$ |$$ |   $$$$$$$$/ ",
    r"$$ |   $$ |$$ |__$$ |$$ |  $$ |$$ |      $$ |   ",
    r"$$  \ /$$/ $$    $$ |$$ |  $$ |$$ |      $$ |   ",
    r" $$  /$$/  $$$$$$$$ |$$ |  $$ |$$ |      $$ |   ",
    r"  $$ $$/   $$ |  $$ |$$ \__$$ |$$ |_____ $$ |   ",
    r"   $$$/    $$ |  $$ |$$    $$/ $$       |$$ |   ",
    r"    $/     $$/   $$/  $$$$$$/  $$$$$$$$/ $$/    ",
    r"                                                ",
    r"                                                ",
    r"                                                ",
    "DRAIN THE VAULT: INFINITE CARD COUNTER",
];

pub(super) const SYSTEM_BOOT: [&str; 6] = [
    "",
    "> SYSTEM INITIALIZED...",
    "> ACCESS GRANTED TO CASINO_CORE_V4.2",
    "> MISSION: DRAIN THE VAULT",
    "> INFO: Play higher or lower until you have drained the vault of Evil Corp.",
    "",
];

pub(super) const RULES: [&str; 17] = [
    "HOW TO PLAY:",
    "- Predict higher or lower each round.",
    "- Equal ranks count as a loss.",
    "- Jokers trigger an automatic win.",
    "- Each round auto-stakes your base bet (upgraded via the shop).",
    "- Payouts scale with the odds and any Odds Augmenter upgrades.",
    "- Side missions trigger every 15 rounds (toggle in settings).",
    "- Calibration may be required between decks (toggle in settings).",
    "- Type 'shop' at any prompt to buy upgrades.",
    "- Type 'settings' at any prompt to toggle visuals, missions, and calibration",
    "- Type 'achievements' to view unlocked badges.",
    "- Type 'save' to write your session.",
    "- Type 'exit' to save and leave immediately.",
    "- Type 'help' to show all command shortcuts.",
    "NOTE: Every deck requires you to recalibrate. You will need a real physical deck.",
    "If this calibration with the camera is not working, toggle it off, or pay to skip.",
    "",
];

pub(super) const RESHUFFLE_SEQUENCE: [&str; 5] = [
    "",
    "> DECK DEPLETED.",
    "> FORCING BUFFER RESET...",
    "> SHUFFLING NEW 52-CARD BLOCK.",
    "> ODDS RECALIBRATING...",
];

pub(super) const FINAL_EXTRACTION: [&str; 9] = [
    "> Incoming secure channel...",
    "> [REDACTED]: Operator... do you see that spike?",
    "> That's it. One hundred million extracted.",
    "> Evil Corp's vault just flatlined.",
    "",
    "> You did what we couldn't. The money trail is severed.",
    "> Stand down, old friend. You've earned the shadows.",
    "",
    "> Mission status: COMPLETE.",
];

pub(super) const PURGE_ART: [&str; 3] = [
    "===================================",
    "           SYSTEM PURGE            ",
    "===================================",
];

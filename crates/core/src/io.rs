use crate::{Card, Session, VisualSettings};
use thiserror::Error;

/// Message delivery pace. `Typed` honours the typewriter toggle; `Slow` is
/// the dramatic pace used by cut scenes regardless of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Instant,
    Typed,
    Slow,
}

/// Terminal boundary. All calls block; `get_input` is the only one that
/// returns data.
pub trait GameIo {
    fn show(&mut self, message: &str, pace: Pace);
    fn display_card(&mut self, card: Card);
    fn get_input(&mut self, prompt: &str) -> String;
    fn clear_screen(&mut self);
    fn apply_visual_settings(&mut self, settings: &VisualSettings);
}

#[derive(Debug, Error)]
#[error("save failed: {0}")]
pub struct SaveError(pub String);

/// Session persistence boundary. A failed load reads as "no save present";
/// a failed save is surfaced to the caller, never swallowed.
pub trait SaveStore {
    fn exists(&self) -> bool;
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), SaveError>;
}

#[derive(Debug, Error)]
#[error("scanner unavailable: {0}")]
pub struct ScanError(pub String);

/// Camera calibration boundary. Blocks until the target card is recognized
/// (`Some(label)`) or the operator abandons the scan (`None`).
pub trait CardScanner {
    fn scan(&mut self, target_label: &str) -> Result<Option<String>, ScanError>;
}

use crate::{GameIo, Pace, Session};

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

/// Interactive settings loop: visual toggles plus the side-mission and
/// calibration feature switches.
pub fn open_settings(io: &mut dyn GameIo, session: &mut Session) {
    session.visited_settings = true;
    loop {
        io.show("", Pace::Instant);
        io.show("=== VISUAL SETTINGS ===", Pace::Instant);
        io.show(
            &format!("1) Card art: {}", on_off(session.visual.show_card_art)),
            Pace::Instant,
        );
        io.show(
            &format!(
                "2) Typewriter effect: {}",
                on_off(session.visual.typewriter)
            ),
            Pace::Instant,
        );
        io.show(
            &format!(
                "3) Side missions: {}",
                on_off(session.side_missions_enabled)
            ),
            Pace::Instant,
        );
        io.show(
            &format!("4) Calibration: {}", on_off(session.calibration_enabled)),
            Pace::Instant,
        );
        io.show("B) Back to mission", Pace::Instant);

        let choice = io.get_input("Select an option: ").trim().to_lowercase();
        match choice.as_str() {
            "b" | "back" | "exit" => break,
            "1" => {
                session.visual.show_card_art = !session.visual.show_card_art;
                io.apply_visual_settings(&session.visual);
            }
            "2" => {
                session.visual.typewriter = !session.visual.typewriter;
                io.apply_visual_settings(&session.visual);
            }
            "3" => session.side_missions_enabled = !session.side_missions_enabled,
            "4" => session.calibration_enabled = !session.calibration_enabled,
            _ => io.show("Unknown selection.", Pace::Instant),
        }
    }
}

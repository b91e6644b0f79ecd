use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use vaultrun_core::{Card, GameIo, Pace, VisualSettings};

/// Spy-terminal IO provider: typewriter pacing, ANSI styling keyed off the
/// message shape, and ASCII card art.
pub struct SpyIo {
    show_card_art: bool,
    typewriter: bool,
    colour: bool,
    typed_delay: Duration,
    slow_delay: Duration,
}

impl SpyIo {
    pub fn new(colour: bool) -> Self {
        Self {
            show_card_art: true,
            typewriter: true,
            colour,
            typed_delay: Duration::from_millis(30),
            slow_delay: Duration::from_millis(80),
        }
    }

    fn style_message(&self, message: &str) -> String {
        if !self.colour || message.is_empty() {
            return message.to_string();
        }
        let stripped = message.trim_start();
        if stripped.starts_with("WIN") {
            message.green().bold().to_string()
        } else if stripped.starts_with("LOSS") {
            message.red().bold().to_string()
        } else if stripped.starts_with('>') || stripped.starts_with('[') {
            message.cyan().to_string()
        } else if message.contains("===") {
            message.yellow().bold().to_string()
        } else {
            message.to_string()
        }
    }

    fn colourise(&self, text: &str, card: Card) -> String {
        if !self.colour {
            return text.to_string();
        }
        if card.suit.is_red() {
            text.red().bold().to_string()
        } else {
            text.blue().bold().to_string()
        }
    }

    fn typewriter_print(&self, message: &str, delay: Duration) {
        let mut stdout = io::stdout();
        for ch in message.chars() {
            print!("{ch}");
            let _ = stdout.flush();
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        println!();
    }

    fn render_card(card: Card) -> [String; 7] {
        let label = short_rank_label(card);
        let glyph = card.suit.glyph();
        [
            "+---------+".to_string(),
            format!("|{label:<2}       |"),
            "|         |".to_string(),
            format!("|    {glyph}    |"),
            "|         |".to_string(),
            format!("|       {label:>2}|"),
            "+---------+".to_string(),
        ]
    }
}

fn short_rank_label(card: Card) -> &'static str {
    if card.is_joker() {
        return "JOKER";
    }
    card.rank.scan_label()
}

impl GameIo for SpyIo {
    fn show(&mut self, message: &str, pace: Pace) {
        let message = self.style_message(message);
        match pace {
            Pace::Instant => println!("{message}"),
            Pace::Typed => {
                if self.typewriter {
                    self.typewriter_print(&message, self.typed_delay);
                } else {
                    println!("{message}");
                }
            }
            Pace::Slow => self.typewriter_print(&message, self.slow_delay),
        }
    }

    fn display_card(&mut self, card: Card) {
        if !self.show_card_art {
            println!("{}", self.colourise(&card.to_string(), card));
            return;
        }
        println!();
        for line in Self::render_card(card) {
            println!("{}", self.colourise(&line, card));
        }
        println!("{}", self.colourise(&format!("\n{card}"), card));
    }

    fn get_input(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(['\n', '\r']).to_string()
    }

    fn clear_screen(&mut self) {
        let _ = execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
    }

    fn apply_visual_settings(&mut self, settings: &VisualSettings) {
        self.show_card_art = settings.show_card_art;
        self.typewriter = settings.typewriter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultrun_core::{Rank, Suit};

    #[test]
    fn rank_labels_stay_short() {
        assert_eq!(short_rank_label(Card::new(Rank::Ten, Suit::Clubs)), "10");
        assert_eq!(short_rank_label(Card::new(Rank::Queen, Suit::Hearts)), "Q");
        assert_eq!(short_rank_label(Card::joker()), "JOKER");
    }

    #[test]
    fn styling_is_passthrough_without_colour() {
        let io = SpyIo::new(false);
        assert_eq!(io.style_message("WIN +200 | Balance: 5200"), "WIN +200 | Balance: 5200");
        assert_eq!(
            io.colourise("text", Card::new(Rank::Two, Suit::Hearts)),
            "text"
        );
    }

    #[test]
    fn card_art_box_holds_the_rank_in_both_corners() {
        let lines = SpyIo::render_card(Card::new(Rank::Four, Suit::Hearts));
        assert_eq!(lines[0], "+---------+");
        assert!(lines[1].starts_with("|4 "));
        assert!(lines[5].ends_with(" 4|"));
        assert!(lines[3].contains('♥'));
    }
}

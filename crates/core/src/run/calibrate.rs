use super::*;

impl Engine<'_> {
    /// Per-deck calibration gate: scan the target card or pay to outsource.
    /// A dead scanner degrades to a skip instead of crashing the loop.
    pub(super) fn calibrate(&mut self) {
        if !self.session.calibration_enabled {
            return;
        }
        self.checkpoint();
        let Some(target) = self.calibration_target() else {
            return;
        };
        let target_label = target.scan_label();
        self.io.show(
            "[CALIBRATION] Recalibration required for this deck.",
            Pace::Instant,
        );
        self.io
            .show(&format!("[CALIBRATION] Target card: {target}"), Pace::Instant);
        loop {
            let choice = self
                .io
                .get_input("Scan card or pay to outsource [scan/pay] > ")
                .trim()
                .to_lowercase();
            match choice.as_str() {
                "scan" | "s" => {
                    self.io.show(
                        "Please show the card requested up the camera.",
                        Pace::Instant,
                    );
                    self.io
                        .show("Launching scanner... Press 'q' to quit.", Pace::Instant);
                    match self.scanner.scan(&target_label) {
                        Ok(Some(detected)) => {
                            self.io.show(
                                &format!("Calibration locked on: {detected}"),
                                Pace::Instant,
                            );
                            return;
                        }
                        Ok(None) => self.io.show(
                            "Scanner closed. Try again or pay to outsource.",
                            Pace::Instant,
                        ),
                        Err(err) => {
                            self.io.show(
                                "Calibration skipped: cant connect to the camera.",
                                Pace::Instant,
                            );
                            self.io.show(&err.to_string(), Pace::Instant);
                            return;
                        }
                    }
                }
                "pay" | "p" | "outsource" => {
                    let fee = ((self.session.balance as f64 * self.config.outsource_fee_ratio)
                        .round() as i64)
                        .max(1);
                    self.session.balance = (self.session.balance - fee).max(0);
                    self.io.show(
                        &format!("Outsourced calibration. Fee deducted: {fee}."),
                        Pace::Instant,
                    );
                    return;
                }
                _ => self
                    .io
                    .show("Type 'scan' or 'pay' to continue.", Pace::Instant),
            }
        }
    }

    fn calibration_target(&mut self) -> Option<Card> {
        let candidates: Vec<Card> = self
            .deck
            .remaining()
            .iter()
            .copied()
            .filter(|card| !card.is_joker())
            .collect();
        self.rng.pick(&candidates).copied()
    }
}

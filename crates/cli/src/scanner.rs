use std::io::{self, Write};
use vaultrun_core::{CardScanner, ScanError};

/// Stand-in for the camera pipeline: the operator keys in the label the
/// scanner would have detected. `q` abandons the scan, matching the live
/// scanner's quit key.
#[derive(Debug, Default)]
pub struct PromptScanner;

impl CardScanner for PromptScanner {
    fn scan(&mut self, target_label: &str) -> Result<Option<String>, ScanError> {
        loop {
            print!("[SCANNER] Enter detected label ('q' to quit) > ");
            if io::stdout().flush().is_err() {
                return Err(ScanError("terminal unavailable".into()));
            }
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                Err(err) => return Err(ScanError(err.to_string())),
            }
            let label = line.trim().to_uppercase();
            if label == "Q" {
                return Ok(None);
            }
            if label == target_label {
                return Ok(Some(label));
            }
            println!("No stable lock on {label}. Looking for {target_label}.");
        }
    }
}

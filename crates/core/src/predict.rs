use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid prediction. Use higher (h) or lower (l).")]
pub struct InvalidPrediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Higher,
    Lower,
}

impl Prediction {
    /// Parse player input. Accepts aliases and forgives one-letter typos
    /// against "high"/"higher"/"low"/"lower".
    pub fn parse(raw: &str) -> Result<Self, InvalidPrediction> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "h" | "hi" | "high" | "higher" => return Ok(Prediction::Higher),
            "l" | "lo" | "low" | "lower" => return Ok(Prediction::Lower),
            _ => {}
        }
        fuzzy_match(&normalized).ok_or(InvalidPrediction)
    }
}

fn fuzzy_match(word: &str) -> Option<Prediction> {
    const TARGETS: [(&str, Prediction); 4] = [
        ("high", Prediction::Higher),
        ("higher", Prediction::Higher),
        ("low", Prediction::Lower),
        ("lower", Prediction::Lower),
    ];
    TARGETS
        .iter()
        .find(|(target, _)| levenshtein(word, target) <= 1)
        .map(|(_, prediction)| *prediction)
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, a_char) in a.iter().enumerate() {
        let mut current = vec![i + 1];
        for (j, b_char) in b.iter().enumerate() {
            let insert = current[j] + 1;
            let delete = previous[j + 1] + 1;
            let replace = previous[j] + usize::from(a_char != b_char);
            current.push(insert.min(delete).min(replace));
        }
        previous = current;
    }
    previous[b.len()]
}

//! Polarity-based sentiment classification.
//!
//! The polarity model sits behind a trait so the classifier stays
//! model-agnostic; the built-in implementation is a weighted German
//! lexicon scorer. Model failures degrade to a distinct outcome instead
//! of propagating — the pipeline never crashes over sentiment.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;
use log::error;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Classification boundaries on the polarity score. Exactly 0.2 is
/// still neutral.
const POSITIVE_BOUND: f64 = 0.2;
const NEGATIVE_BOUND: f64 = -0.2;

/// A collaborator that maps text to a polarity score in [-1.0, 1.0].
pub trait PolarityModel {
    fn polarity(&self, text: &str) -> Result<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "POSITIV 😊"),
            SentimentLabel::Negative => write!(f, "NEGATIV 😠"),
            SentimentLabel::Neutral => write!(f, "NEUTRAL 😐"),
        }
    }
}

/// Terminal outcome of one sentiment pass. The two sentinel variants are
/// valid results, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SentimentOutcome {
    Scored { label: SentimentLabel, score: f64 },
    NoEligibleWords,
    AnalysisFailed,
}

impl fmt::Display for SentimentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentOutcome::Scored { label, score } => {
                write!(f, "{label} (Score {score:.2})")
            }
            SentimentOutcome::NoEligibleWords => {
                write!(f, "Keine zulässigen Wörter zum Auswerten")
            }
            SentimentOutcome::AnalysisFailed => write!(f, "ANALYSE FEHLGESCHLAGEN"),
        }
    }
}

/// Maps a polarity score to its label.
pub fn label_for(polarity: f64) -> SentimentLabel {
    if polarity > POSITIVE_BOUND {
        SentimentLabel::Positive
    } else if polarity < NEGATIVE_BOUND {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Classifies a token sequence.
///
/// An empty sequence returns [`SentimentOutcome::NoEligibleWords`]
/// without invoking the model. Otherwise the tokens are joined
/// space-separated and scored; the outcome carries the label and the
/// polarity rounded to two decimals. A model error is logged and
/// reported as [`SentimentOutcome::AnalysisFailed`].
pub fn classify_sentiment(words: &[String], model: &dyn PolarityModel) -> SentimentOutcome {
    if words.is_empty() {
        return SentimentOutcome::NoEligibleWords;
    }
    match model.polarity(&words.join(" ")) {
        Ok(polarity) => SentimentOutcome::Scored {
            label: label_for(polarity),
            score: (polarity * 100.0).round() / 100.0,
        },
        Err(e) => {
            error!("sentiment model failed: {e:#}");
            SentimentOutcome::AnalysisFailed
        }
    }
}

/// Word weights in [-1.0, 1.0], three tiers per direction.
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut lexicon = HashMap::new();

    let positive_strong = [
        "fantastisch", "wunderbar", "hervorragend", "ausgezeichnet", "großartig",
        "perfekt", "genial", "brillant", "exzellent", "traumhaft", "herrlich",
        "begeistert", "liebe",
    ];
    for word in positive_strong {
        lexicon.insert(word, 1.0);
    }

    let positive_moderate = [
        "gut", "schön", "toll", "super", "prima", "erfreulich", "positiv",
        "gelungen", "erfolgreich", "freude", "glücklich", "zufrieden",
        "angenehm", "freundlich", "hilfreich", "beliebt", "lecker", "gewinn",
        "sieg", "gewonnen", "optimistisch", "verbesserung", "aufschwung",
        "sonnig", "spannend",
    ];
    for word in positive_moderate {
        lexicon.insert(word, 0.7);
    }

    let positive_mild = [
        "okay", "ordentlich", "solide", "brauchbar", "akzeptabel", "nett",
        "interessant", "stabil", "hoffnung", "chance",
    ];
    for word in positive_mild {
        lexicon.insert(word, 0.3);
    }

    let negative_strong = [
        "katastrophal", "schrecklich", "furchtbar", "entsetzlich", "grauenhaft",
        "miserabel", "katastrophe", "desaster", "verheerend", "hass", "idiot",
        "scheiße",
    ];
    for word in negative_strong {
        lexicon.insert(word, -1.0);
    }

    let negative_moderate = [
        "schlecht", "schlimm", "traurig", "wütend", "ärgerlich", "enttäuschend",
        "enttäuscht", "negativ", "problem", "probleme", "fehler", "krise",
        "angst", "gefahr", "gefährlich", "verlust", "verloren", "gescheitert",
        "pessimistisch", "zerstört", "zerstörung", "gewalt", "sorge", "sorgen",
        "schaden", "streit", "unglück", "dumm", "blöd", "mist", "verdammt",
        "skandal",
    ];
    for word in negative_moderate {
        lexicon.insert(word, -0.7);
    }

    let negative_mild = [
        "mäßig", "langweilig", "schwierig", "unsicher", "fraglich",
        "bedenklich", "kritisch", "teuer", "schwach", "leider",
    ];
    for word in negative_mild {
        lexicon.insert(word, -0.3);
    }

    lexicon
});

/// Built-in polarity model: average lexicon weight over the words the
/// lexicon knows, clamped to [-1.0, 1.0]. Text without any lexicon hit
/// scores 0.0.
#[derive(Debug, Default)]
pub struct LexiconModel;

impl PolarityModel for LexiconModel {
    fn polarity(&self, text: &str) -> Result<f64> {
        let mut sum = 0.0;
        let mut hits = 0u32;
        for word in text.split_whitespace() {
            if let Some(weight) = LEXICON.get(word) {
                sum += weight;
                hits += 1;
            }
        }
        if hits == 0 {
            return Ok(0.0);
        }
        Ok((sum / f64::from(hits)).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Fixed(f64);

    impl PolarityModel for Fixed {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn threshold_boundaries() {
        assert_eq!(label_for(0.35), SentimentLabel::Positive);
        assert_eq!(label_for(-0.5), SentimentLabel::Negative);
        assert_eq!(label_for(0.0), SentimentLabel::Neutral);
        // boundary is exclusive of positive
        assert_eq!(label_for(0.2), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.2), SentimentLabel::Neutral);
    }

    #[test]
    fn score_is_rounded_for_display() {
        let outcome = classify_sentiment(&words(&["egal"]), &Fixed(0.349));
        assert_eq!(
            outcome,
            SentimentOutcome::Scored {
                label: SentimentLabel::Positive,
                score: 0.35
            }
        );
        assert_eq!(outcome.to_string(), "POSITIV 😊 (Score 0.35)");
    }

    #[test]
    fn empty_sequence_skips_the_model() {
        struct Unreachable;
        impl PolarityModel for Unreachable {
            fn polarity(&self, _text: &str) -> Result<f64> {
                panic!("model must not be invoked for empty input");
            }
        }
        let outcome = classify_sentiment(&[], &Unreachable);
        assert_eq!(outcome, SentimentOutcome::NoEligibleWords);
    }

    #[test]
    fn model_error_degrades_to_failed_outcome() {
        struct Broken;
        impl PolarityModel for Broken {
            fn polarity(&self, _text: &str) -> Result<f64> {
                Err(anyhow!("model unavailable"))
            }
        }
        let outcome = classify_sentiment(&words(&["wort"]), &Broken);
        assert_eq!(outcome, SentimentOutcome::AnalysisFailed);
        assert_eq!(outcome.to_string(), "ANALYSE FEHLGESCHLAGEN");
    }

    #[test]
    fn lexicon_model_scores_direction() {
        let model = LexiconModel;
        let positive = model.polarity("fantastisch wunderbar großartig").unwrap();
        assert!(positive > POSITIVE_BOUND);
        let negative = model.polarity("schrecklich furchtbar miserabel").unwrap();
        assert!(negative < NEGATIVE_BOUND);
        // balanced hits cancel out
        let mixed = model.polarity("gut schlecht").unwrap();
        assert_eq!(mixed, 0.0);
        // no lexicon hits at all
        assert_eq!(model.polarity("haus baum straße").unwrap(), 0.0);
    }
}

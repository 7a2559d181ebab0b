use crate::domain::model::{EngineInfo, SafeText};
use crate::domain::ports::Scorer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::OnceLock;

static INFO: EngineInfo = EngineInfo {
    label: "vader",
    min: -1.0,
    max: 1.0,
    min_meaning: "negative emotion",
    max_meaning: "positive emotion",
};

// Valences on the usual -4..+4 lexicon scale.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.5),
    ("annoying", -1.8),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("badly", -2.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("broken", -1.6),
    ("clean", 1.7),
    ("crap", -2.4),
    ("cruel", -2.8),
    ("delight", 2.9),
    ("delightful", 2.9),
    ("disappointed", -2.2),
    ("disappointing", -2.1),
    ("disaster", -3.1),
    ("disgust", -2.9),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("evil", -3.4),
    ("excellent", 2.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.4),
    ("fantastic", 2.6),
    ("fresh", 1.3),
    ("fun", 2.3),
    ("funny", 1.9),
    ("garbage", -2.1),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.3),
    ("great", 3.1),
    ("greatest", 3.2),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.9),
    ("hates", -1.9),
    ("helpful", 1.8),
    ("horrible", -2.5),
    ("horrid", -2.5),
    ("hurt", -2.2),
    ("idiot", -2.3),
    ("joy", 2.8),
    ("kind", 2.4),
    ("liar", -2.7),
    ("lie", -1.8),
    ("like", 1.5),
    ("liked", 1.7),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 3.0),
    ("mad", -2.2),
    ("nasty", -2.6),
    ("nice", 1.8),
    ("nightmare", -2.6),
    ("offensive", -2.2),
    ("pain", -2.3),
    ("pathetic", -2.6),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("poor", -2.1),
    ("positive", 2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("recommend", 1.6),
    ("rude", -2.0),
    ("sad", -2.1),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("scam", -2.2),
    ("smile", 2.0),
    ("stupid", -2.4),
    ("super", 2.9),
    ("superb", 3.1),
    ("terrible", -2.1),
    ("terribly", -2.4),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("toxic", -2.5),
    ("trash", -2.0),
    ("ugly", -2.6),
    ("unhappy", -1.8),
    ("useless", -1.8),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wonderful", 2.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "didnt", "doesnt", "dont", "isnt", "neither", "never",
    "no", "none", "nor", "not", "shouldnt", "wasnt", "werent", "wont", "wouldnt",
];

// Degree modifiers: positive entries push valence away from zero, negative
// entries pull it toward zero.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

const NEGATION_DAMPENER: f64 = -0.74;
const CAPS_EMPHASIS: f64 = 0.733;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

fn lexicon() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| LEXICON.iter().copied().collect())
}

fn boosters() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| BOOSTERS.iter().copied().collect())
}

/// Local rule-based sentiment engine: lexicon valences adjusted for
/// negation, degree modifiers, all-caps emphasis and exclamation marks,
/// compressed into [-1, +1]. Deterministic, never fails, never suspends.
#[derive(Debug, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }

    fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let words: Vec<String> = tokens.iter().map(|t| normalize(t)).collect();
        let caps_differential =
            tokens.iter().any(|t| is_all_caps(t)) && !tokens.iter().all(|t| is_all_caps(t));

        let mut sum = 0.0;
        for (i, word) in words.iter().enumerate() {
            let Some(&valence) = lexicon().get(word.as_str()) else {
                continue;
            };
            let mut valence = valence;

            if caps_differential && is_all_caps(tokens[i]) {
                valence += CAPS_EMPHASIS * valence.signum();
            }

            if i >= 1 {
                if let Some(&boost) = boosters().get(words[i - 1].as_str()) {
                    valence += boost * valence.signum();
                }
            }

            let negated = (i >= 1 && NEGATIONS.contains(&words[i - 1].as_str()))
                || (i >= 2 && NEGATIONS.contains(&words[i - 2].as_str()));
            if negated {
                valence *= NEGATION_DAMPENER;
            }

            sum += valence;
        }

        if sum != 0.0 {
            let exclamations = text.chars().filter(|c| *c == '!').count().min(MAX_EXCLAMATIONS);
            sum += exclamations as f64 * EXCLAMATION_BOOST * sum.signum();
        }

        normalize_score(sum)
    }
}

#[async_trait]
impl Scorer for VaderScorer {
    fn info(&self) -> &EngineInfo {
        &INFO
    }

    async fn score(&self, text: &SafeText) -> Result<f64> {
        Ok(self.compound(text.as_str()))
    }
}

fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(|c| c.is_alphabetic())
        && token.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

fn normalize_score(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

//! Two local engines over one pattern-style lexicon: word entries carry a
//! (polarity, subjectivity) pair and each engine averages one axis.

use crate::domain::model::{EngineInfo, SafeText};
use crate::domain::ports::Scorer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::OnceLock;

static POLARITY_INFO: EngineInfo = EngineInfo {
    label: "polarity",
    min: -1.0,
    max: 1.0,
    min_meaning: "negative",
    max_meaning: "positive",
};

static SUBJECTIVITY_INFO: EngineInfo = EngineInfo {
    label: "subjectivity",
    min: 0.0,
    max: 1.0,
    min_meaning: "objective",
    max_meaning: "subjective",
};

const LEXICON: &[(&str, (f64, f64))] = &[
    ("amazing", (0.6, 0.9)),
    ("angry", (-0.5, 0.8)),
    ("annoying", (-0.6, 0.9)),
    ("awesome", (1.0, 1.0)),
    ("awful", (-1.0, 1.0)),
    ("bad", (-0.7, 0.67)),
    ("beautiful", (0.85, 1.0)),
    ("best", (1.0, 0.3)),
    ("better", (0.5, 0.5)),
    ("boring", (-1.0, 1.0)),
    ("brilliant", (0.9, 0.9)),
    ("broken", (-0.4, 0.4)),
    ("clean", (0.37, 0.55)),
    ("cruel", (-0.9, 0.95)),
    ("delightful", (1.0, 1.0)),
    ("disappointing", (-0.6, 0.7)),
    ("disgusting", (-1.0, 1.0)),
    ("dumb", (-0.5, 0.7)),
    ("excellent", (1.0, 1.0)),
    ("fantastic", (0.4, 0.9)),
    ("fresh", (0.3, 0.5)),
    ("fun", (0.3, 0.2)),
    ("funny", (0.25, 0.8)),
    ("good", (0.7, 0.6)),
    ("great", (0.8, 0.75)),
    ("happy", (0.8, 1.0)),
    ("hate", (-0.8, 0.9)),
    ("hated", (-0.9, 0.9)),
    ("helpful", (0.4, 0.4)),
    ("horrible", (-1.0, 1.0)),
    ("interesting", (0.5, 0.5)),
    ("love", (0.5, 0.6)),
    ("loved", (0.7, 0.8)),
    ("mad", (-0.6, 0.9)),
    ("nasty", (-1.0, 1.0)),
    ("nice", (0.6, 1.0)),
    ("pathetic", (-1.0, 1.0)),
    ("perfect", (1.0, 1.0)),
    ("pleasant", (0.73, 0.76)),
    ("poor", (-0.4, 0.6)),
    ("rude", (-0.6, 0.9)),
    ("sad", (-0.5, 1.0)),
    ("safe", (0.5, 0.5)),
    ("stupid", (-0.8, 0.9)),
    ("superb", (1.0, 1.0)),
    ("terrible", (-1.0, 1.0)),
    ("toxic", (-0.6, 0.8)),
    ("ugly", (-0.7, 0.9)),
    ("useless", (-0.33, 0.33)),
    ("wonderful", (1.0, 1.0)),
    ("worst", (-1.0, 1.0)),
    ("wrong", (-0.5, 0.5)),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "didnt", "doesnt", "dont", "isnt", "never", "no",
    "not", "wasnt", "werent", "wont", "wouldnt",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("really", 1.3),
    ("slightly", 0.6),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("very", 1.3),
];

const NEGATION_FACTOR: f64 = -0.5;

fn lexicon() -> &'static HashMap<&'static str, (f64, f64)> {
    static MAP: OnceLock<HashMap<&'static str, (f64, f64)>> = OnceLock::new();
    MAP.get_or_init(|| LEXICON.iter().copied().collect())
}

fn intensifiers() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| INTENSIFIERS.iter().copied().collect())
}

/// Matched (polarity, subjectivity) pairs for every lexicon word in the
/// text, with intensifier and negation adjustments applied.
fn assess(text: &str) -> Vec<(f64, f64)> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|t| {
            t.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .collect();

    let mut hits = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let Some(&(polarity, subjectivity)) = lexicon().get(word.as_str()) else {
            continue;
        };
        let mut polarity = polarity;
        let mut subjectivity = subjectivity;

        if i >= 1 {
            if let Some(&factor) = intensifiers().get(words[i - 1].as_str()) {
                polarity = (polarity * factor).clamp(-1.0, 1.0);
                subjectivity = (subjectivity * factor).min(1.0);
            }
        }

        let negated = (i >= 1 && NEGATIONS.contains(&words[i - 1].as_str()))
            || (i >= 2 && NEGATIONS.contains(&words[i - 2].as_str()));
        if negated {
            polarity *= NEGATION_FACTOR;
        }

        hits.push((polarity, subjectivity));
    }
    hits
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return 0.0;
    }
    collected.iter().sum::<f64>() / collected.len() as f64
}

/// Average word polarity in [-1, +1]; 0.0 when no lexicon word matches.
#[derive(Debug, Default)]
pub struct PolarityScorer;

impl PolarityScorer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Scorer for PolarityScorer {
    fn info(&self) -> &EngineInfo {
        &POLARITY_INFO
    }

    async fn score(&self, text: &SafeText) -> Result<f64> {
        Ok(average(assess(text.as_str()).into_iter().map(|(p, _)| p)))
    }
}

/// Average word subjectivity in [0, 1]; 0.0 when no lexicon word matches.
#[derive(Debug, Default)]
pub struct SubjectivityScorer;

impl SubjectivityScorer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Scorer for SubjectivityScorer {
    fn info(&self) -> &EngineInfo {
        &SUBJECTIVITY_INFO
    }

    async fn score(&self, text: &SafeText) -> Result<f64> {
        Ok(average(assess(text.as_str()).into_iter().map(|(_, s)| s)))
    }
}

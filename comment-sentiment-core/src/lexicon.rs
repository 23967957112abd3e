//! Rule-based valence scoring for languages the general analyzer is not tuned
//! for. Follows the VADER scheme: lexicon valences in [-4, 4], booster and
//! negation words in a three-token window, emphasis from capitals and
//! exclamation marks, and `s / sqrt(s^2 + alpha)` normalisation for the
//! compound score.

use {
    std::collections::{HashMap, HashSet},
    once_cell::sync::Lazy,
    crate::{
        models::SentimentScore,
        sentiment::{ensure_not_empty, ScoringError, SentimentAnalyzer},
    },
};

const NORMALIZATION_ALPHA: f64 = 15.0;
const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const WINDOW_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

static PORTUGUESE_LEXICON: Lazy<HashMap<String, f64>> = Lazy::new(|| parse_lexicon(include_str!("../data/lexicon_pt.txt")));

static PORTUGUESE_NEGATIONS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        "não", "nao", "nunca", "jamais", "nem", "nada", "nenhum", "nenhuma", "ninguém", "ninguem",
        "sem", "tampouco",
    ].iter().map(|s| s.to_string()).collect()
});

static PORTUGUESE_BOOSTERS: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let increments = [
        "muito", "muita", "muitos", "muitas", "super", "extremamente", "totalmente", "completamente",
        "absolutamente", "demais", "bastante", "tão", "tao", "mais", "bem", "realmente", "incrivelmente",
    ];
    let decrements = [
        "pouco", "pouca", "quase", "meio", "levemente", "ligeiramente", "menos", "apenas", "mal",
    ];

    increments.iter().map(|w| (w.to_string(), BOOSTER_INCREMENT))
        .chain(decrements.iter().map(|w| (w.to_string(), -BOOSTER_INCREMENT)))
        .collect()
});

pub struct LexiconAnalyzer {
    lexicon: &'static HashMap<String, f64>,
    negations: &'static HashSet<String>,
    boosters: &'static HashMap<String, f64>,
    contrast_word: &'static str,
}

impl LexiconAnalyzer {
    pub fn portuguese() -> Self {
        Self {
            lexicon: &PORTUGUESE_LEXICON,
            negations: &PORTUGUESE_NEGATIONS,
            boosters: &PORTUGUESE_BOOSTERS,
            contrast_word: "mas",
        }
    }

    fn word_valences(&self, words: &[&str]) -> Vec<f64> {
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let caps_differential = has_caps_differential(words);

        let mut valences = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            let valence = match self.lexicon.get(word) {
                Some(valence) if !self.boosters.contains_key(word) => *valence,
                _ => {
                    valences.push(0.0);
                    continue;
                }
            };

            let mut valence = valence;
            if caps_differential && is_all_caps(words[i]) {
                valence += CAPS_INCREMENT * valence.signum();
            }

            let mut negated = false;
            for (distance, damping) in WINDOW_DAMPING.iter().enumerate().map(|(d, damping)| (d + 1, damping)) {
                if i < distance {
                    break;
                }

                let previous = &lowered[i - distance];
                if let Some(increment) = self.boosters.get(previous) {
                    let mut boost = increment * valence.signum();
                    if caps_differential && is_all_caps(words[i - distance]) {
                        boost += CAPS_INCREMENT * valence.signum();
                    }
                    valence += boost * damping;
                }

                if self.negations.contains(previous) {
                    negated = true;
                }
            }

            if negated {
                valence *= NEGATION_SCALAR;
            }

            valences.push(valence);
        }

        if let Some(contrast_index) = lowered.iter().position(|w| w == self.contrast_word) {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < contrast_index {
                    *valence *= 0.5;
                } else if i > contrast_index {
                    *valence *= 1.5;
                }
            }
        }

        valences
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore, ScoringError> {
        ensure_not_empty(text)?;

        let words: Vec<&str> = text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect();

        let valences = self.word_valences(&words);
        Ok(score_valences(&valences, punctuation_emphasis(text)))
    }
}

fn score_valences(valences: &[f64], emphasis: f64) -> SentimentScore {
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

    let mut positive_sum: f64 = valences.iter().filter(|v| **v > 0.0).map(|v| v + 1.0).sum();
    let mut negative_sum: f64 = valences.iter().filter(|v| **v < 0.0).map(|v| v - 1.0).sum();
    let neutral_count = valences.iter().filter(|v| **v == 0.0).count() as f64;

    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count;
    if total == 0.0 {
        return SentimentScore::new(0.0, 0.0, 0.0, 0.0);
    }

    SentimentScore::new(
        round_to(negative_sum.abs() / total, 3),
        round_to(neutral_count / total, 3),
        round_to(positive_sum / total, 3),
        round_to(compound, 4),
    )
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && word.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

fn has_caps_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

fn parse_lexicon(content: &str) -> HashMap<String, f64> {
    content.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (word, valence) = line.split_once('\t')?;
            Some((word.trim().to_lowercase(), valence.trim().parse().ok()?))
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

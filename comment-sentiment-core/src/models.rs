use serde::{Serialize, Deserialize};

pub const PORTUGUESE_LANGUAGE_TAG: &str = "pt";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Comment {
    pub text: String,
    pub language: String,
}

/// The four sub-scores returned by a lexicon analyzer. `compound` lies in
/// [-1, 1], the other three in [0, 1].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SentimentScore {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ClassifiedComment {
    pub text: String,
    pub language: String,
    pub score: SentimentScore,
    pub class: SentimentClass,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SentimentData {
    pub quantity: usize,
    pub percentual: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyseResult {
    pub video_tittle: String,
    pub comments_total: usize,
    pub comments_positive: SentimentData,
    pub comments_negative: SentimentData,
    pub comments_neutral: SentimentData,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub file_name: String,
    pub video_tittle: String,
}

impl Comment {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }

    pub fn is_portuguese(&self) -> bool {
        self.language.trim() == PORTUGUESE_LANGUAGE_TAG
    }

    pub fn classified(self, score: SentimentScore, class: SentimentClass) -> ClassifiedComment {
        ClassifiedComment {
            text: self.text,
            language: self.language,
            score,
            class,
        }
    }
}

impl SentimentScore {
    pub fn new(negative: f64, neutral: f64, positive: f64, compound: f64) -> Self {
        Self {
            negative,
            neutral,
            positive,
            compound,
        }
    }
}

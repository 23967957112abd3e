use {
    serde::Serialize,
    crate::models::{Comment, ClassifiedComment, SentimentClass, SentimentScore},
};

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Classified comments of a single analysis run, one ordered list per class.
/// Created empty for every run and dropped with it.
#[derive(Serialize, Default, Debug, Clone)]
pub struct SentimentBuckets {
    positive: Vec<ClassifiedComment>,
    negative: Vec<ClassifiedComment>,
    neutral: Vec<ClassifiedComment>,
}

impl SentimentClass {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentClass::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }
}

impl SentimentBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, comment: Comment, score: SentimentScore) -> SentimentClass {
        let class = SentimentClass::from_compound(score.compound);
        let classified = comment.classified(score, class);

        match class {
            SentimentClass::Positive => self.positive.push(classified),
            SentimentClass::Negative => self.negative.push(classified),
            SentimentClass::Neutral => self.neutral.push(classified),
        }

        class
    }

    pub fn bucket(&self, class: SentimentClass) -> &[ClassifiedComment] {
        match class {
            SentimentClass::Positive => &self.positive,
            SentimentClass::Negative => &self.negative,
            SentimentClass::Neutral => &self.neutral,
        }
    }

    pub fn positive(&self) -> &[ClassifiedComment] {
        &self.positive
    }

    pub fn negative(&self) -> &[ClassifiedComment] {
        &self.negative
    }

    pub fn neutral(&self) -> &[ClassifiedComment] {
        &self.neutral
    }

    pub fn total(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }
}

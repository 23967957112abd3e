use {
    std::panic::{catch_unwind, AssertUnwindSafe},
    thiserror::Error,
    vader_sentiment::SentimentIntensityAnalyzer,
    crate::{
        lexicon::LexiconAnalyzer,
        models::{Comment, SentimentScore},
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("comment text is empty")]
    EmptyText,

    #[error("analyzer did not return the {0} component")]
    MissingComponent(&'static str),

    #[error("analyzer panicked while scoring")]
    AnalyzerPanicked,
}

pub trait SentimentAnalyzer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore, ScoringError>;
}

/// Result of scoring one comment. A failed comment is dropped from the run,
/// it is never counted as neutral.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Scored(SentimentScore),
    Failed(ScoringError),
}

pub struct VaderAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

pub struct SentimentScorer {
    portuguese: Box<dyn SentimentAnalyzer>,
    general: Box<dyn SentimentAnalyzer>,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore, ScoringError> {
        ensure_not_empty(text)?;

        let scores = catch_unwind(AssertUnwindSafe(|| self.analyzer.polarity_scores(text)))
            .map_err(|_| ScoringError::AnalyzerPanicked)?;
        let component = |name: &'static str| scores.get(name).copied().ok_or(ScoringError::MissingComponent(name));

        Ok(SentimentScore::new(
            component("neg")?,
            component("neu")?,
            component("pos")?,
            component("compound")?,
        ))
    }
}

impl SentimentScorer {
    pub fn new(portuguese: Box<dyn SentimentAnalyzer>, general: Box<dyn SentimentAnalyzer>) -> Self {
        Self {
            portuguese,
            general,
        }
    }

    pub fn with_default_analyzers() -> Self {
        Self::new(
            Box::new(LexiconAnalyzer::portuguese()),
            Box::new(VaderAnalyzer::new()),
        )
    }

    pub fn score(&self, comment: &Comment) -> ScoreOutcome {
        let analyzer = if comment.is_portuguese() {
            &self.portuguese
        } else {
            &self.general
        };

        match catch_unwind(AssertUnwindSafe(|| analyzer.polarity_scores(&comment.text))) {
            Ok(Ok(score)) => ScoreOutcome::Scored(score),
            Ok(Err(err)) => ScoreOutcome::Failed(err),
            Err(_) => ScoreOutcome::Failed(ScoringError::AnalyzerPanicked),
        }
    }
}

pub(crate) fn ensure_not_empty(text: &str) -> Result<(), ScoringError> {
    if text.trim().is_empty() {
        Err(ScoringError::EmptyText)
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Returns a fixed compound score, tagging `neutral` with a marker so tests
    /// can tell which analyzer handled the comment.
    pub struct FixedAnalyzer {
        pub compound: f64,
        pub marker: f64,
    }

    impl SentimentAnalyzer for FixedAnalyzer {
        fn polarity_scores(&self, text: &str) -> Result<SentimentScore, ScoringError> {
            ensure_not_empty(text)?;
            Ok(SentimentScore::new(0.0, self.marker, 0.0, self.compound))
        }
    }

    struct PanickingAnalyzer;

    impl SentimentAnalyzer for PanickingAnalyzer {
        fn polarity_scores(&self, _text: &str) -> Result<SentimentScore, ScoringError> {
            panic!("lexicon exploded");
        }
    }

    fn marked_scorer() -> SentimentScorer {
        SentimentScorer::new(
            Box::new(FixedAnalyzer { compound: 0.5, marker: 1.0 }),
            Box::new(FixedAnalyzer { compound: -0.5, marker: 2.0 }),
        )
    }

    #[test]
    fn test_portuguese_tag_dispatches_to_portuguese_analyzer() {
        let outcome = marked_scorer().score(&Comment::new("muito bom", "pt"));
        assert_eq!(outcome, ScoreOutcome::Scored(SentimentScore::new(0.0, 1.0, 0.0, 0.5)));
    }

    #[test]
    fn test_other_tags_dispatch_to_general_analyzer() {
        let scorer = marked_scorer();

        for language in ["en", "es", "", "PT"] {
            match scorer.score(&Comment::new("some text", language)) {
                ScoreOutcome::Scored(score) => assert_eq!(score.neutral, 2.0, "language {:?}", language),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_text_fails() {
        let outcome = marked_scorer().score(&Comment::new("   ", "en"));
        assert_eq!(outcome, ScoreOutcome::Failed(ScoringError::EmptyText));
    }

    #[test]
    fn test_panicking_analyzer_is_converted_to_failure() {
        let scorer = SentimentScorer::new(Box::new(PanickingAnalyzer), Box::new(PanickingAnalyzer));
        let outcome = scorer.score(&Comment::new("anything", "pt"));
        assert_eq!(outcome, ScoreOutcome::Failed(ScoringError::AnalyzerPanicked));
    }

    #[test]
    fn test_vader_scores_english_polarity() {
        let analyzer = VaderAnalyzer::new();

        let positive = analyzer.polarity_scores("This video is great, I love it!").unwrap();
        assert!(positive.compound >= 0.05, "{:?}", positive);

        let negative = analyzer.polarity_scores("This is terrible and I hate it.").unwrap();
        assert!(negative.compound <= -0.05, "{:?}", negative);

        let sum = negative.negative + negative.neutral + negative.positive;
        assert!((sum - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_default_analyzers_score_both_languages() {
        let scorer = SentimentScorer::with_default_analyzers();

        match scorer.score(&Comment::new("Que vídeo excelente, adorei!", "pt")) {
            ScoreOutcome::Scored(score) => assert!(score.compound >= 0.05, "{:?}", score),
            other => panic!("unexpected outcome {:?}", other),
        }

        match scorer.score(&Comment::new("What an awful video", "en")) {
            ScoreOutcome::Scored(score) => assert!(score.compound <= -0.05, "{:?}", score),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}

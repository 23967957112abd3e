use {
    std::time::Duration,
    tracing::{debug, info},
    tokio_util::sync::CancellationToken,
    crate::{
        classifier::SentimentBuckets,
        config::Config,
        error::{Error, Result},
        keywords::extract_keywords,
        models::{AnalyseResult, Comment, FileData},
        progress::Progress,
        sentiment::{ScoreOutcome, SentimentScorer},
        statistics::aggregate,
        storage::Storage,
        title::normalize_title,
        tokenization::WordTokenizer,
    },
};

/// State owned by one classification run.
#[derive(Debug, Default)]
pub struct AnalysisRun {
    pub buckets: SentimentBuckets,
    pub dropped: usize,
}

pub struct AnalysisService {
    storage: Storage,
    scorer: SentimentScorer,
    tokenizer: WordTokenizer,
    progress_interval: Duration,
}

impl AnalysisService {
    pub fn new(storage: Storage, scorer: SentimentScorer, progress_interval: Duration) -> Self {
        Self {
            storage,
            scorer,
            tokenizer: WordTokenizer::new(),
            progress_interval,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Storage::new(&config.storage()),
            SentimentScorer::with_default_analyzers(),
            config.analysis().progress_interval(),
        )
    }

    /// Scores, classifies and aggregates every comment of `video_name`, then
    /// replaces the exported result files.
    pub fn analyse(&self, video_name: &str, cancel: &CancellationToken) -> Result<AnalyseResult> {
        let comments = self.storage.load_comments(video_name)?;
        info!("analysing {} comments for video {}", comments.len(), video_name);

        let run = self.classify_comments(comments, cancel)?;
        debug!("dropped {} comments that could not be scored", run.dropped);

        let result = aggregate(&run.buckets, &normalize_title(video_name));

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        self.storage.export_results(&run.buckets, &result)?;

        Ok(result)
    }

    pub fn classify_comments(&self, comments: Vec<Comment>, cancel: &CancellationToken) -> Result<AnalysisRun> {
        let mut run = AnalysisRun::default();
        let mut progress = Progress::new("scoring comments".to_owned(), self.progress_interval);

        for comment in comments {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            match self.scorer.score(&comment) {
                ScoreOutcome::Scored(score) => {
                    run.buckets.classify(comment, score);
                },
                ScoreOutcome::Failed(_) => run.dropped += 1,
            }

            progress.update();
        }

        progress.finish();
        Ok(run)
    }

    pub fn keywords(&self, video_name: &str) -> Result<Vec<String>> {
        let texts = self.storage.load_comment_texts(video_name)?;
        extract_keywords(&self.tokenizer, &texts)
    }

    pub fn files(&self) -> Result<Vec<FileData>> {
        self.storage.list_files()
    }
}

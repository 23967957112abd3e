use crate::{
    classifier::SentimentBuckets,
    models::{AnalyseResult, SentimentData},
};

const EMPTY_PERCENTAGE: &str = "0%";

pub fn aggregate(buckets: &SentimentBuckets, video_tittle: &str) -> AnalyseResult {
    let total = buckets.total();

    AnalyseResult {
        video_tittle: video_tittle.to_owned(),
        comments_total: total,
        comments_positive: sentiment_data(buckets.positive().len(), total),
        comments_negative: sentiment_data(buckets.negative().len(), total),
        comments_neutral: sentiment_data(buckets.neutral().len(), total),
    }
}

fn sentiment_data(quantity: usize, total: usize) -> SentimentData {
    let percentual = if total == 0 {
        EMPTY_PERCENTAGE.to_owned()
    } else {
        format_percentage(quantity as f64 / total as f64 * 100.0)
    };

    SentimentData {
        quantity,
        percentual,
    }
}

/// Rounds to two decimals, ties to even, and always keeps at least one, so
/// 60 renders as `60.0%`, 100/3 as `33.33%` and 3.125 as `3.12%`.
pub fn format_percentage(value: f64) -> String {
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.1}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}

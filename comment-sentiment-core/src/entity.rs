use {
    typed_builder::TypedBuilder,
    serde::Serialize,
    crate::models::{AnalyseResult, ClassifiedComment},
};

pub const CLASSIFIED_COMMENT_HEADER: [&str; 5] = [
    "comment",
    "score negative",
    "score neutral",
    "score positive",
    "score compound",
];

pub const ANALYSE_RESULT_HEADER: [&str; 8] = [
    "videoTittle",
    "commentsTotal",
    "positiveQuantity",
    "positivePercentual",
    "negativeQuantity",
    "negativePercentual",
    "neutralQuantity",
    "neutralPercentual",
];

// field order must match CLASSIFIED_COMMENT_HEADER
#[derive(TypedBuilder, Serialize, Debug)]
pub struct ClassifiedCommentEntity {
    comment: String,
    score_negative: f64,
    score_neutral: f64,
    score_positive: f64,
    score_compound: f64,
}

// field order must match ANALYSE_RESULT_HEADER
#[derive(TypedBuilder, Serialize, Debug)]
pub struct AnalyseResultEntity {
    video_tittle: String,
    comments_total: usize,
    positive_quantity: usize,
    positive_percentual: String,
    negative_quantity: usize,
    negative_percentual: String,
    neutral_quantity: usize,
    neutral_percentual: String,
}

pub fn into_classified_comment_entity(classified: &ClassifiedComment) -> ClassifiedCommentEntity {
    ClassifiedCommentEntity::builder()
        .comment(classified.text.clone())
        .score_negative(classified.score.negative)
        .score_neutral(classified.score.neutral)
        .score_positive(classified.score.positive)
        .score_compound(classified.score.compound)
        .build()
}

pub fn into_analyse_result_entity(result: &AnalyseResult) -> AnalyseResultEntity {
    AnalyseResultEntity::builder()
        .video_tittle(result.video_tittle.clone())
        .comments_total(result.comments_total)
        .positive_quantity(result.comments_positive.quantity)
        .positive_percentual(result.comments_positive.percentual.clone())
        .negative_quantity(result.comments_negative.quantity)
        .negative_percentual(result.comments_negative.percentual.clone())
        .neutral_quantity(result.comments_neutral.quantity)
        .neutral_percentual(result.comments_neutral.percentual.clone())
        .build()
}

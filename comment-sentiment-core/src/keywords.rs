use crate::{
    error::Result,
    stopwords::is_stopword,
    tokenization::WordTokenizer,
};

/// Removes stopwords from every comment independently. The output has one
/// entry per input comment, in input order; a comment made only of stopwords
/// yields an empty string.
pub fn extract_keywords<S: AsRef<str>>(tokenizer: &WordTokenizer, comments: &[S]) -> Result<Vec<String>> {
    comments.iter()
        .map(|comment| filter_comment(tokenizer, comment.as_ref()))
        .collect()
}

pub fn filter_comment(tokenizer: &WordTokenizer, comment: &str) -> Result<String> {
    let tokens = tokenizer.tokenize(comment)?;

    Ok(tokens.iter()
        .filter(|token| !is_stopword(token))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_removed_case_insensitively() {
        let keywords = extract_keywords(&WordTokenizer::new(), &["good product", "STOPWORD the It"]).unwrap();

        assert_eq!(keywords, vec!["good product", "STOPWORD"]);
    }

    #[test]
    fn test_one_entry_per_comment() {
        let comments = vec![
            "the".to_owned(),
            "a |;| tricky comment".to_owned(),
            "".to_owned(),
            "Eu adorei o vídeo".to_owned(),
        ];
        let keywords = extract_keywords(&WordTokenizer::new(), &comments).unwrap();

        assert_eq!(keywords.len(), comments.len());
        assert_eq!(keywords[0], "");
        assert_eq!(keywords[1], "| ; | tricky comment");
        assert_eq!(keywords[2], "");
        assert_eq!(keywords[3], "adorei vídeo");
    }

    #[test]
    fn test_languages_are_not_selected_per_comment() {
        let keywords = extract_keywords(&WordTokenizer::new(), &["the vídeo é very bom"]).unwrap();
        assert_eq!(keywords, vec!["vídeo bom"]);
    }

    #[test]
    fn test_contractions_are_matched_as_stopwords() {
        let keywords = extract_keywords(&WordTokenizer::new(), &["I don't like it's ending", "You're GREAT, isn't it?"]).unwrap();

        assert_eq!(keywords, vec!["like ending", "GREAT , ?"]);
    }

    #[test]
    fn test_punctuation_is_kept_as_tokens() {
        let keywords = extract_keywords(&WordTokenizer::new(), &["Amazing, the best!"]).unwrap();
        assert_eq!(keywords, vec!["Amazing , best !"]);
    }
}

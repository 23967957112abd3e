use {
    tokenizers::{
        pre_tokenizers::bert::BertPreTokenizer,
        OffsetReferential,
        OffsetType,
        PreTokenizedString,
        PreTokenizer,
    },
    crate::error::{Error, Result},
};

/// Word level tokenizer: splits on whitespace and isolates every punctuation
/// character as its own token, except apostrophes inside a word, so
/// contractions such as `don't` stay whole. Needs no vocabulary, so nothing
/// is downloaded.
#[derive(Clone, Copy)]
pub struct WordTokenizer {
    pre_tokenizer: BertPreTokenizer,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            pre_tokenizer: BertPreTokenizer,
        }
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut pretokenized = PreTokenizedString::from(text);
        self.pre_tokenizer.pre_tokenize(&mut pretokenized)
            .map_err(|err| Error::Tokenization(err.to_string()))?;

        let splits = pretokenized.get_splits(OffsetReferential::Original, OffsetType::Byte);

        // (token, end offset of the token in `text`)
        let mut tokens: Vec<(String, usize)> = Vec::with_capacity(splits.len());
        let mut i = 0;
        while i < splits.len() {
            let (token, (start, end), _) = splits[i];

            let joined = match (tokens.last_mut(), splits.get(i + 1)) {
                (Some((word, word_end)), Some((next, (next_start, next_end), _)))
                    if is_apostrophe(token)
                        && *word_end == start
                        && *next_start == end
                        && ends_with_alphanumeric(word.as_str())
                        && starts_with_alphanumeric(next) =>
                {
                    word.push_str(token);
                    word.push_str(next);
                    *word_end = *next_end;
                    true
                },
                _ => false,
            };

            if joined {
                i += 2;
            } else {
                tokens.push((token.to_owned(), end));
                i += 1;
            }
        }

        Ok(tokens.into_iter().map(|(token, _)| token).collect())
    }
}

fn is_apostrophe(token: &str) -> bool {
    token == "'" || token == "\u{2019}"
}

fn ends_with_alphanumeric(token: &str) -> bool {
    token.chars().next_back().map_or(false, char::is_alphanumeric)
}

fn starts_with_alphanumeric(token: &str) -> bool {
    token.chars().next().map_or(false, char::is_alphanumeric)
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_a_separate_token() {
        let tokens = WordTokenizer::new().tokenize("Great video, really!").unwrap();
        assert_eq!(tokens, vec!["Great", "video", ",", "really", "!"]);
    }

    #[test]
    fn test_accented_words_stay_whole() {
        let tokens = WordTokenizer::new().tokenize("Não gostei do vídeo").unwrap();
        assert_eq!(tokens, vec!["Não", "gostei", "do", "vídeo"]);
    }

    #[test]
    fn test_contractions_stay_whole() {
        let tokens = WordTokenizer::new().tokenize("I don't like it's ending").unwrap();
        assert_eq!(tokens, vec!["I", "don't", "like", "it's", "ending"]);

        let tokens = WordTokenizer::new().tokenize("rock'n'roll, you\u{2019}re right").unwrap();
        assert_eq!(tokens, vec!["rock'n'roll", ",", "you\u{2019}re", "right"]);
    }

    #[test]
    fn test_quoting_apostrophes_are_separate_tokens() {
        let tokens = WordTokenizer::new().tokenize("say 'hello' ' now").unwrap();
        assert_eq!(tokens, vec!["say", "'", "hello", "'", "'", "now"]);
    }

    #[test]
    fn test_blank_text_has_no_tokens() {
        assert!(WordTokenizer::new().tokenize("   ").unwrap().is_empty());
        assert!(WordTokenizer::new().tokenize("").unwrap().is_empty());
    }
}

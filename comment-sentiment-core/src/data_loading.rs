use {
    std::{fs::File, path::Path},
    crate::{
        error::Result,
        models::Comment,
    },
};

const TEXT_COLUMN: usize = 1;
const LANGUAGE_COLUMN: usize = 2;

/// Reads a per-video comments export. The first row is a header; column 1
/// holds the comment text and column 2 its language tag. Missing cells read
/// as empty strings.
pub fn read_comments(path: &Path) -> Result<Vec<Comment>> {
    let mut reader = comments_reader(path)?;

    let mut comments = Vec::new();
    for record in reader.records() {
        let record = record?;
        comments.push(Comment::new(
            record.get(TEXT_COLUMN).unwrap_or_default(),
            record.get(LANGUAGE_COLUMN).unwrap_or_default(),
        ));
    }

    Ok(comments)
}

pub fn read_comment_texts(path: &Path) -> Result<Vec<String>> {
    let mut reader = comments_reader(path)?;

    let mut texts = Vec::new();
    for record in reader.records() {
        texts.push(record?.get(TEXT_COLUMN).unwrap_or_default().to_owned());
    }

    Ok(texts)
}

fn comments_reader(path: &Path) -> Result<csv::Reader<File>> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::fs,
    };

    #[test]
    fn test_reads_text_and_language_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.csv");
        fs::write(&path, "author,comment,language\nana,\"Ótimo, adorei\",pt\nbob,Nice one,en\n").unwrap();

        let comments = read_comments(&path).unwrap();

        assert_eq!(comments, vec![
            Comment::new("Ótimo, adorei", "pt"),
            Comment::new("Nice one", "en"),
        ]);
        assert_eq!(read_comment_texts(&path).unwrap(), vec!["Ótimo, adorei", "Nice one"]);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.csv");
        fs::write(&path, "author,comment,language\ncarla\ndan,only text\n").unwrap();

        let comments = read_comments(&path).unwrap();

        assert_eq!(comments, vec![Comment::new("", ""), Comment::new("only text", "")]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_comments(&dir.path().join("missing.csv")).is_err());
    }
}

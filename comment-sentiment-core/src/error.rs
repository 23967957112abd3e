use {
    std::path::PathBuf,
    thiserror::Error,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("source file not found for video: {0}")]
    SourceNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read comments file: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to tokenize comments: {0}")]
    Tokenization(String),

    #[error("failed to export results to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("analysis run was cancelled")]
    Cancelled,
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SourceNotFound(_))
    }
}

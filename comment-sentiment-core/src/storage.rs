use {
    std::{
        fs,
        io::ErrorKind,
        path::PathBuf,
        sync::Mutex,
    },
    tracing::{info, warn},
    crate::{
        classifier::SentimentBuckets,
        config::StorageConfig,
        data_loading::{read_comment_texts, read_comments},
        entity::{
            into_analyse_result_entity,
            into_classified_comment_entity,
            ANALYSE_RESULT_HEADER,
            CLASSIFIED_COMMENT_HEADER,
        },
        error::{Error, Result},
        models::{AnalyseResult, ClassifiedComment, Comment, FileData},
        title::normalize_title,
    },
};

pub const POSITIVE_COMMENTS_FILE: &str = "PositiveComments.csv";
pub const NEGATIVE_COMMENTS_FILE: &str = "NegativeComments.csv";
pub const NEUTRAL_COMMENTS_FILE: &str = "NeutralComments.csv";
pub const ANALYSE_RESULT_FILE: &str = "AnalyseResult.csv";

const RESULT_DELIMITER: u8 = b';';

/// Source exports live in `comments_dir`, one file per video. Results of
/// the latest run are written to `results_dir`.
pub struct Storage {
    comments_dir: PathBuf,
    results_dir: PathBuf,
    source_extension: String,
    export_lock: Mutex<()>,
}

impl Storage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            comments_dir: config.comments_dir(),
            results_dir: config.results_dir(),
            source_extension: config.source_extension(),
            export_lock: Mutex::new(()),
        }
    }

    /// Names of the regular files in the comments directory, sorted.
    pub fn list_source_files(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.comments_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("comments directory does not exist: {}", self.comments_dir.display());
                return Ok(Vec::new());
            },
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(names)
    }

    pub fn list_files(&self) -> Result<Vec<FileData>> {
        Ok(self.list_source_files()?
            .into_iter()
            .map(|file_name| FileData {
                video_tittle: normalize_title(&file_name),
                file_name,
            })
            .collect())
    }

    pub fn resolve_source(&self, video_name: &str) -> Result<PathBuf> {
        let file_name = format!("{}.{}", video_name, self.source_extension);

        if self.list_source_files()?.contains(&file_name) {
            Ok(self.comments_dir.join(file_name))
        } else {
            Err(Error::SourceNotFound(video_name.to_owned()))
        }
    }

    pub fn load_comments(&self, video_name: &str) -> Result<Vec<Comment>> {
        read_comments(&self.resolve_source(video_name)?)
    }

    pub fn load_comment_texts(&self, video_name: &str) -> Result<Vec<String>> {
        read_comment_texts(&self.resolve_source(video_name)?)
    }

    /// Replaces the four result files. Everything is rendered and written to
    /// temporary files first, so a failure leaves the previous results intact.
    /// Concurrent exports are serialized so the four files always come from
    /// the same run.
    pub fn export_results(&self, buckets: &SentimentBuckets, result: &AnalyseResult) -> Result<()> {
        let _guard = self.export_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        fs::create_dir_all(&self.results_dir).map_err(|source| Error::Export {
            path: self.results_dir.clone(),
            source,
        })?;

        let files = vec![
            (POSITIVE_COMMENTS_FILE, render_bucket(buckets.positive())?),
            (NEGATIVE_COMMENTS_FILE, render_bucket(buckets.negative())?),
            (NEUTRAL_COMMENTS_FILE, render_bucket(buckets.neutral())?),
            (ANALYSE_RESULT_FILE, render_analyse_result(result)?),
        ];

        let mut staged = Vec::new();
        for (name, data) in files {
            let target = self.results_dir.join(name);
            let temporary = self.results_dir.join(format!("{}.tmp", name));

            if let Err(source) = fs::write(&temporary, data) {
                discard(&staged);
                discard(&[(temporary.clone(), target)]);
                return Err(Error::Export { path: temporary, source });
            }
            staged.push((temporary, target));
        }

        for (i, (temporary, target)) in staged.iter().enumerate() {
            if let Err(source) = fs::rename(temporary, target) {
                discard(&staged[i..]);
                return Err(Error::Export { path: target.clone(), source });
            }
        }

        info!("exported analysis results to {}", self.results_dir.display());
        Ok(())
    }
}

fn render_bucket(bucket: &[ClassifiedComment]) -> Result<Vec<u8>> {
    let mut output_data = Vec::new();

    {
        let mut csv_writer = result_writer(&mut output_data);
        csv_writer.write_record(CLASSIFIED_COMMENT_HEADER)?;
        for classified in bucket {
            csv_writer.serialize(into_classified_comment_entity(classified))?;
        }
        csv_writer.flush()?;
    }

    Ok(output_data)
}

fn render_analyse_result(result: &AnalyseResult) -> Result<Vec<u8>> {
    let mut output_data = Vec::new();

    {
        let mut csv_writer = result_writer(&mut output_data);
        csv_writer.write_record(ANALYSE_RESULT_HEADER)?;
        csv_writer.serialize(into_analyse_result_entity(result))?;
        csv_writer.flush()?;
    }

    Ok(output_data)
}

fn result_writer(output: &mut Vec<u8>) -> csv::Writer<&mut Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(RESULT_DELIMITER)
        .has_headers(false)
        .from_writer(output)
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temporary, _) in staged {
        let _ = fs::remove_file(temporary);
    }
}

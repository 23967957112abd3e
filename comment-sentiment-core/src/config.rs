use {
    std::{fs::read_to_string, path::PathBuf, time::Duration},
    tracing::warn,
    serde::Deserialize,
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub server: Option<ServerConfig>,
    pub storage: Option<StorageConfig>,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ServerConfig {
    host: Option<String>,
    port: Option<u16>,
    #[serde(default)]
    allowed_origins: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct StorageConfig {
    comments_dir: Option<PathBuf>,
    results_dir: Option<PathBuf>,
    source_extension: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AnalysisConfig {
    progress_interval_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            progress_interval_secs: 10,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::from_toml(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    pub fn server(&self) -> ServerConfig {
        self.server.as_ref().cloned().unwrap_or_default()
    }

    pub fn storage(&self) -> StorageConfig {
        self.storage.as_ref().cloned().unwrap_or_default()
    }

    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }
}

impl ServerConfig {
    pub fn host(&self) -> String {
        self.host.as_ref().cloned().unwrap_or("localhost".to_owned())
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(5000)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

impl StorageConfig {
    pub fn new(comments_dir: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            comments_dir: Some(comments_dir.into()),
            results_dir: Some(results_dir.into()),
            source_extension: None,
        }
    }

    pub fn comments_dir(&self) -> PathBuf {
        self.comments_dir.as_ref().cloned().unwrap_or(PathBuf::from("./comments"))
    }

    pub fn results_dir(&self) -> PathBuf {
        self.results_dir.as_ref().cloned().unwrap_or(PathBuf::from("./result"))
    }

    pub fn source_extension(&self) -> String {
        self.source_extension.as_ref().cloned().unwrap_or("csv".to_owned())
    }
}

impl AnalysisConfig {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_secs(self.progress_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.server().bind_address(), "localhost:5000");
        assert!(config.server().allowed_origins().is_empty());
        assert_eq!(config.storage().comments_dir(), PathBuf::from("./comments"));
        assert_eq!(config.storage().results_dir(), PathBuf::from("./result"));
        assert_eq!(config.storage().source_extension(), "csv");
        assert_eq!(config.analysis().progress_interval(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(r#"
[server]
port = 8080
allowed_origins = ["http://localhost:3000"]

[storage]
comments_dir = "/data/comments"

[analysis]
progress_interval_secs = 2
"#).unwrap();

        assert_eq!(config.server().bind_address(), "localhost:8080");
        assert_eq!(config.server().allowed_origins(), &["http://localhost:3000".to_owned()]);
        assert_eq!(config.storage().comments_dir(), PathBuf::from("/data/comments"));
        assert_eq!(config.storage().results_dir(), PathBuf::from("./result"));
        assert_eq!(config.analysis().progress_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        assert!(Config::from_toml("[server\nport = ").is_err());
    }
}

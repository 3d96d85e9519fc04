use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub seed: Option<String>,
    pub history_file: Option<String>,

    // Feature configs
    pub query: Option<QueryConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct QueryConfig {
    pub suggestion_limit: Option<usize>,
    pub popular_max_rank: Option<u32>,
    pub home_popular_max_rank: Option<u32>,
    pub home_recent_limit: Option<usize>,
    pub top_rated_count: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
seed = "admin"
history_file = "/tmp/catalog_history"

[query]
suggestion_limit = 8
popular_max_rank = 20
top_rated_count = 5
"#
        )
        .unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.seed.as_deref(), Some("admin"));
        assert_eq!(config.history_file.as_deref(), Some("/tmp/catalog_history"));
        let query = config.query.unwrap();
        assert_eq!(query.suggestion_limit, Some(8));
        assert_eq!(query.popular_max_rank, Some(20));
        assert_eq!(query.home_recent_limit, None);
        assert_eq!(query.top_rated_count, Some(5));
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = FileConfig::load(file.path()).unwrap();
        assert!(config.seed.is_none());
        assert!(config.query.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = FileConfig::load(Path::new("/nonexistent/catalog.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "seed = [").unwrap();
        let result = FileConfig::load(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }
}

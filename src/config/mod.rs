mod file_config;

pub use file_config::{FileConfig, QueryConfig};

use crate::catalog::SeedSet;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
pub const DEFAULT_POPULAR_MAX_RANK: u32 = 10;
pub const DEFAULT_HOME_POPULAR_MAX_RANK: u32 = 6;
pub const DEFAULT_HOME_RECENT_LIMIT: usize = 6;
pub const DEFAULT_TOP_RATED_COUNT: usize = 3;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub seed: SeedSet,
    pub history_file: Option<PathBuf>,
    pub suggestion_limit: Option<usize>,
    pub popular_max_rank: Option<u32>,
    pub top_rated_count: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed: SeedSet,
    pub history_file: Option<PathBuf>,
    pub query: QuerySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    /// Typeahead suggestions shown under the search bar.
    pub suggestion_limit: usize,
    /// Lowest rank listed on the popular page.
    pub popular_max_rank: u32,
    /// Lowest rank listed in the home popular carousel.
    pub home_popular_max_rank: u32,
    pub home_recent_limit: usize,
    pub top_rated_count: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            popular_max_rank: DEFAULT_POPULAR_MAX_RANK,
            home_popular_max_rank: DEFAULT_HOME_POPULAR_MAX_RANK,
            home_recent_limit: DEFAULT_HOME_RECENT_LIMIT,
            top_rated_count: DEFAULT_TOP_RATED_COUNT,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let seed = match file.seed {
            Some(s) => match parse_seed(&s) {
                Some(seed) => seed,
                None => bail!(
                    "Invalid seed '{}' in config file. Valid values are: discovery, admin, empty",
                    s
                ),
            },
            None => cli.seed,
        };

        let history_file = file
            .history_file
            .map(PathBuf::from)
            .or_else(|| cli.history_file.clone());

        let defaults = QuerySettings::default();
        let query_file = file.query.unwrap_or_default();
        let query = QuerySettings {
            suggestion_limit: query_file
                .suggestion_limit
                .or(cli.suggestion_limit)
                .unwrap_or(defaults.suggestion_limit),
            popular_max_rank: query_file
                .popular_max_rank
                .or(cli.popular_max_rank)
                .unwrap_or(defaults.popular_max_rank),
            home_popular_max_rank: query_file
                .home_popular_max_rank
                .unwrap_or(defaults.home_popular_max_rank),
            home_recent_limit: query_file
                .home_recent_limit
                .unwrap_or(defaults.home_recent_limit),
            top_rated_count: query_file
                .top_rated_count
                .or(cli.top_rated_count)
                .unwrap_or(defaults.top_rated_count),
        };

        if query.popular_max_rank == 0 || query.home_popular_max_rank == 0 {
            bail!("Popularity ranks start at 1, a max rank of 0 would list nothing");
        }

        Ok(Self {
            seed,
            history_file,
            query,
        })
    }
}

/// Parses a seed name string into SeedSet.
/// Uses clap's ValueEnum trait for parsing.
fn parse_seed(s: &str) -> Option<SeedSet> {
    SeedSet::from_str(s, true).ok()
}

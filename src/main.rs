use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use anime_catalog::catalog::SeedSet;
use anime_catalog::catalog_store::{CatalogStore, InMemoryCatalogStore};
use anime_catalog::cli_style::{self, get_styles};
use anime_catalog::config::{AppConfig, CliConfig, FileConfig};
use anime_catalog::repl::{self, CatalogHelper, CommandExecutionResult, Session};

use rustyline::{history::FileHistory, CompletionType, Config, Editor};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to a TOML config file. Values found there override the
    /// command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Collection the catalog starts from.
    #[clap(long, value_enum, default_value_t = SeedSet::Discovery)]
    pub seed: SeedSet,

    /// Number of typeahead suggestions.
    #[clap(long)]
    pub suggestion_limit: Option<usize>,

    /// Lowest rank listed on the popular page.
    #[clap(long)]
    pub popular_max_rank: Option<u32>,

    /// Number of entries in the top rated list.
    #[clap(long)]
    pub top_rated: Option<usize>,

    /// File where the command history is kept between runs.
    #[clap(long, value_parser = parse_path)]
    pub history_file: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            seed: self.seed,
            history_file: self.history_file.clone(),
            suggestion_limit: self.suggestion_limit,
            popular_max_rank: self.popular_max_rank,
            top_rated_count: self.top_rated,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let cli_args = CliArgs::parse();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let store = InMemoryCatalogStore::from_seed(app_config.seed)
        .with_context(|| format!("Could not load the {:?} seed", app_config.seed))?;
    cli_style::print_banner(
        &format!("{:?}", app_config.seed).to_lowercase(),
        store.len(),
    );
    let mut session = Session::new(Box::new(store), app_config.query.clone());

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<CatalogHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(CatalogHelper::new()));

    if let Some(path) = &app_config.history_file {
        if path.exists() {
            if let Err(err) = rl.load_history(path) {
                warn!("Could not read history file {:?}: {}", path, err);
            }
        }
    }

    loop {
        let readline = rl.readline(&session.prompt());

        match readline {
            Ok(line) => {
                if line.trim() == "help" {
                    repl::print_help()?;
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match repl::execute_command(&line, &mut session) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        cli_style::print_error(&err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }

    if let Some(path) = &app_config.history_file {
        rl.save_history(path)
            .with_context(|| format!("Failed to write history file {:?}", path))?;
    }
    Ok(())
}

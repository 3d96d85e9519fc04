//! Interactive command layer of `catalog-cli`.
//!
//! Each input line is split with shlex and parsed by clap into an
//! `InnerCommand`, which is then run against a `Session`.

use crate::catalog::{AiringStatus, CatalogEntry, EntryId, EntryUpdate, NewEntry, UpdateDay};
use crate::catalog_store::{CatalogError, CatalogStore};
use crate::cli_style::{self, get_styles, TableBuilder};
use crate::config::QuerySettings;
use crate::navigation::{Navigator, Tab, View};
use crate::query::{
    filter_by_day, filter_by_title_and_genre, rank_by_popularity, rank_by_rating,
    recent_updates, DayFilter, GenreFilter, QueryParams, UpdateOrder,
};
use crate::stats;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use rustyline::{completion::Completer, highlight::Highlighter, validate::Validator, Helper};
use tracing::debug;

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a date, expected YYYY-MM-DD", s))
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Typeahead suggestions matching titles and genres.
    Search { term: String },

    /// Opens the Search tab, filtering by term (title, description, genres)
    /// and by exact genre tag.
    Browse {
        term: Option<String>,

        /// Genre tag, or "All".
        #[arg(long)]
        genre: Option<GenreFilter>,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Admin list filter: title (any case) or alternative title (verbatim).
    AdminList {
        term: Option<String>,

        /// Genre tag, or "All".
        #[arg(long, default_value = "All")]
        genre: GenreFilter,
    },

    /// Opens the update feed, newest first.
    Updates {
        /// Day of the week (Su, M, Tu, W, Th, F, Sa, or full names), or "All".
        #[arg(long)]
        day: Option<DayFilter>,

        #[arg(long)]
        limit: Option<usize>,

        /// Keep catalog order instead of sorting by date.
        #[arg(long)]
        source_order: bool,
    },

    /// Opens the Popular tab.
    Popular {
        /// Lowest rank listed, defaults to the configured value.
        #[arg(long, conflicts_with = "all")]
        max_rank: Option<u32>,

        /// List every ranked entry.
        #[arg(long)]
        all: bool,
    },

    /// Best rated entries.
    TopRated {
        #[arg(long)]
        count: Option<usize>,
    },

    /// Opens the Home tab with its popular and recent update carousels.
    Home,

    /// Shows an entry, the selected one if no id is given.
    Show {
        id: Option<EntryId>,

        #[arg(long)]
        json: bool,
    },

    /// Adds an entry at the top of the catalog.
    Add {
        title: String,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Changes the given fields of an entry.
    Update {
        id: EntryId,

        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: EntryFields,

        /// Fields to unset, can be repeated.
        #[arg(long, value_enum)]
        clear: Vec<ClearableField>,
    },

    /// Deletes an entry.
    Delete { id: EntryId },

    /// Dashboard numbers: totals, average rating, top rated.
    Stats,

    /// Lists genres with their entry count, or the entries of one genre.
    Genres { genre: Option<String> },

    /// Number of entries per update day.
    Days,

    /// Switches to a tab.
    Tab {
        #[arg(value_enum)]
        tab: Tab,
    },

    /// Opens the detail view of an entry.
    Select { id: EntryId },

    /// Leaves the detail or update view.
    Back,

    /// Shows the navigation state.
    View,

    /// Close this program.
    Exit,
}

#[derive(Args, Debug, Default)]
struct EntryFields {
    #[arg(long = "alt")]
    alternative_title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Comma separated genre tags.
    #[arg(long, value_delimiter = ',')]
    genres: Vec<String>,

    /// Popularity rank, 1 is the most popular.
    #[arg(long)]
    rank: Option<u32>,

    #[arg(long, value_parser = parse_date)]
    last_update: Option<NaiveDate>,

    #[arg(long)]
    day: Option<UpdateDay>,

    #[arg(long)]
    rating: Option<f64>,

    #[arg(long)]
    episodes: Option<u32>,

    #[arg(long)]
    year: Option<u16>,

    #[arg(long)]
    studio: Option<String>,

    #[arg(long)]
    status: Option<AiringStatus>,

    #[arg(long)]
    format: Option<String>,

    #[arg(long, value_parser = parse_date)]
    premiere: Option<NaiveDate>,

    #[arg(long)]
    image: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ClearableField {
    Alt,
    Rank,
    LastUpdate,
    Day,
    Rating,
    Episodes,
    Year,
    Studio,
    Status,
    Format,
    Premiere,
    Image,
}

impl EntryFields {
    fn into_new_entry(self, title: String) -> NewEntry {
        NewEntry {
            title,
            alternative_title: self.alternative_title,
            description: self.description.unwrap_or_default(),
            genres: self.genres,
            popularity_rank: self.rank,
            last_update: self.last_update,
            update_day: self.day,
            rating: self.rating,
            episode_count: self.episodes,
            year: self.year,
            studio: self.studio,
            status: self.status,
            format: self.format,
            premiere: self.premiere,
            image: self.image,
        }
    }

    /// Cleared fields win over values given in the same command.
    fn into_update(self, title: Option<String>, clear: &[ClearableField]) -> EntryUpdate {
        let mut update = EntryUpdate {
            title,
            alternative_title: self.alternative_title.map(Some),
            description: self.description,
            genres: if self.genres.is_empty() {
                None
            } else {
                Some(self.genres)
            },
            popularity_rank: self.rank.map(Some),
            last_update: self.last_update.map(Some),
            update_day: self.day.map(Some),
            rating: self.rating.map(Some),
            episode_count: self.episodes.map(Some),
            year: self.year.map(Some),
            studio: self.studio.map(Some),
            status: self.status.map(Some),
            format: self.format.map(Some),
            premiere: self.premiere.map(Some),
            image: self.image.map(Some),
        };
        for field in clear {
            match field {
                ClearableField::Alt => update.alternative_title = Some(None),
                ClearableField::Rank => update.popularity_rank = Some(None),
                ClearableField::LastUpdate => update.last_update = Some(None),
                ClearableField::Day => update.update_day = Some(None),
                ClearableField::Rating => update.rating = Some(None),
                ClearableField::Episodes => update.episode_count = Some(None),
                ClearableField::Year => update.year = Some(None),
                ClearableField::Studio => update.studio = Some(None),
                ClearableField::Status => update.status = Some(None),
                ClearableField::Format => update.format = Some(None),
                ClearableField::Premiere => update.premiere = Some(None),
                ClearableField::Image => update.image = Some(None),
            }
        }
        update
    }
}

pub enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

/// Everything a REPL command can read or change.
pub struct Session {
    pub store: Box<dyn CatalogStore>,
    pub navigator: Navigator,
    pub settings: QuerySettings,
    /// Search page state, kept across commands.
    pub params: QueryParams,
}

impl Session {
    pub fn new(store: Box<dyn CatalogStore>, settings: QuerySettings) -> Self {
        Session {
            store,
            navigator: Navigator::new(),
            settings,
            params: QueryParams::default(),
        }
    }

    pub fn prompt(&self) -> String {
        cli_style::get_prompt(&self.navigator.current_view().to_string())
    }
}

pub fn print_help() -> std::io::Result<()> {
    InnerCli::command().print_long_help()
}

pub fn command_names() -> Vec<String> {
    InnerCli::command()
        .get_subcommands()
        .map(|sc| sc.get_name().to_string())
        .collect()
}

pub fn execute_command(line: &str, session: &mut Session) -> CommandExecutionResult {
    let line = line.trim();
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => {
            debug!("Executing: {}", line);
            run(cli.command, session)
        }
        Err(e) => {
            println!("{}", e);
            CommandExecutionResult::Ok
        }
    }
}

fn run(command: InnerCommand, session: &mut Session) -> CommandExecutionResult {
    match command {
        InnerCommand::Search { term } => {
            session.params.search_term = term;
            let params = QueryParams {
                result_limit: Some(session.settings.suggestion_limit),
                ..session.params.clone()
            };
            let results = params.suggestions(session.store.entries());
            print_entries(&format!("Suggestions for \"{}\"", params.search_term), &results);
        }
        InnerCommand::Browse { term, genre, limit } => {
            if let Some(term) = term {
                session.params.search_term = term;
            }
            if let Some(genre) = genre {
                if let GenreFilter::Only(tag) = &genre {
                    if !stats::distinct_genres(session.store.entries()).contains(tag) {
                        cli_style::print_warning(&format!(
                            "No entry is tagged \"{}\", tags are case sensitive",
                            tag
                        ));
                    }
                }
                session.params.genre_filter = genre;
            }
            session.params.result_limit = limit;
            session.navigator.change_tab(Tab::Search);
            let results = session.params.browse(session.store.entries());
            print_entries(
                &format!(
                    "Search \"{}\" in {}",
                    session.params.search_term, session.params.genre_filter
                ),
                &results,
            );
        }
        InnerCommand::AdminList { term, genre } => {
            let term = term.unwrap_or_default();
            let results = filter_by_title_and_genre(session.store.entries(), &term, &genre);
            print_entries("Catalog", &results);
        }
        InnerCommand::Updates {
            day,
            limit,
            source_order,
        } => {
            if let Some(day) = day {
                session.params.day_filter = day;
            }
            session.params.result_limit = limit;
            session.navigator.show_updates();
            let results = if source_order {
                let mut results = filter_by_day(
                    session.store.entries(),
                    session.params.day_filter,
                    UpdateOrder::SourceOrder,
                );
                if let Some(limit) = limit {
                    results.truncate(limit);
                }
                results
            } else {
                session.params.updates(session.store.entries())
            };
            print_entries(
                &format!("Updates: {}", session.params.day_filter),
                &results,
            );
        }
        InnerCommand::Popular { max_rank, all } => {
            session.navigator.show_popular();
            let max_rank = if all {
                None
            } else {
                Some(max_rank.unwrap_or(session.settings.popular_max_rank))
            };
            let results = rank_by_popularity(session.store.entries(), max_rank);
            print_entries("Popular", &results);
        }
        InnerCommand::TopRated { count } => {
            let count = count.unwrap_or(session.settings.top_rated_count);
            let results = rank_by_rating(session.store.entries(), count);
            print_ranking("Top Rated", &results, format_rating_line);
        }
        InnerCommand::Home => {
            session.navigator.change_tab(Tab::Home);
            let entries = session.store.entries();
            let popular = rank_by_popularity(entries, Some(session.settings.home_popular_max_rank));
            print_ranking("Popular", &popular, |e| e.title.clone());
            let recent = recent_updates(entries, session.settings.home_recent_limit);
            print_ranking("Recent Updates", &recent, format_update_line);
        }
        InnerCommand::Show { id, json } => {
            let id = match id.or(session.navigator.selected_id()) {
                Some(id) => id,
                None => return CommandExecutionResult::Error("No entry selected".to_string()),
            };
            let entry = match session.store.get_by_id(id) {
                Some(entry) => entry,
                None => return CommandExecutionResult::Error(CatalogError::NotFound(id).to_string()),
            };
            if json {
                match serde_json::to_string_pretty(entry) {
                    Ok(s) => println!("{}", s),
                    Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                }
            } else {
                print_entry_detail(entry);
            }
        }
        InnerCommand::Add { title, fields } => {
            match session.store.add(fields.into_new_entry(title)) {
                Ok(entry) => cli_style::print_success(&format!(
                    "Added \"{}\" with id {}",
                    entry.title, entry.id
                )),
                Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
            }
        }
        InnerCommand::Update {
            id,
            title,
            fields,
            clear,
        } => {
            let update = fields.into_update(title, &clear);
            if update.is_empty() {
                cli_style::print_warning("Nothing to update");
                return CommandExecutionResult::Ok;
            }
            match session.store.update(id, update) {
                Ok(entry) => cli_style::print_success(&format!("Updated \"{}\"", entry.title)),
                Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
            }
        }
        InnerCommand::Delete { id } => match session.store.delete(id) {
            Ok(entry) => {
                cli_style::print_success(&format!("Deleted \"{}\"", entry.title));
                if session.navigator.selected_id() == Some(id)
                    && session.navigator.current_view() == View::Detail
                {
                    session.navigator.back();
                }
            }
            Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
        },
        InnerCommand::Stats => {
            let dashboard = stats::dashboard(session.store.entries(), session.settings.top_rated_count);
            cli_style::print_section_header("Dashboard");
            cli_style::print_key_value("Total entries", &dashboard.total_entries.to_string());
            cli_style::print_key_value("Rated entries", &dashboard.rated_entries.to_string());
            cli_style::print_key_value(
                "Average rating",
                &format!("{:.1}", dashboard.average_rating),
            );
            cli_style::print_section_footer();
            print_ranking("Top Rated", &dashboard.top_rated, format_rating_line);
        }
        InnerCommand::Genres { genre } => match genre {
            Some(genre) => {
                let results = stats::entries_in_genre(session.store.entries(), &genre);
                print_entries(&genre, &results);
            }
            None => {
                let counts = stats::genre_counts(session.store.entries());
                cli_style::print_section_header("Genres");
                if counts.is_empty() {
                    cli_style::print_empty_list("No genres");
                }
                for gc in counts.iter() {
                    cli_style::print_list_item(&format!("{} ({})", gc.genre, gc.count), 0);
                }
                cli_style::print_section_footer();
            }
        },
        InnerCommand::Days => {
            cli_style::print_section_header("Update Days");
            for (day, count) in stats::day_counts(session.store.entries()) {
                cli_style::print_key_value(day.name(), &count.to_string());
            }
            cli_style::print_section_footer();
        }
        InnerCommand::Tab { tab } => {
            session.navigator.change_tab(tab);
            print_navigation(session);
        }
        InnerCommand::Select { id } => {
            let entry = match session.store.get_by_id(id) {
                Some(entry) => entry,
                None => return CommandExecutionResult::Error(CatalogError::NotFound(id).to_string()),
            };
            print_entry_detail(entry);
            session.navigator.select_entry(id);
        }
        InnerCommand::Back => {
            if session.navigator.back() {
                print_navigation(session);
            } else {
                cli_style::print_warning("Already on a tab");
            }
        }
        InnerCommand::View => print_navigation(session),
        InnerCommand::Exit => return CommandExecutionResult::Exit,
    }
    CommandExecutionResult::Ok
}

// =============================================================================
// Rendering
// =============================================================================

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn format_rating(entry: &CatalogEntry) -> String {
    entry
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "-".to_string())
}

fn format_rating_line(entry: &CatalogEntry) -> String {
    format!("{}  {}", entry.title, format_rating(entry))
}

fn format_update_line(entry: &CatalogEntry) -> String {
    format!("{}  {}", entry.title, or_dash(entry.last_update))
}

fn print_entries(title: &str, entries: &[&CatalogEntry]) {
    cli_style::print_section_header(title);
    if entries.is_empty() {
        cli_style::print_empty_list("No matching entries");
        cli_style::print_section_footer();
        return;
    }

    let mut table = TableBuilder::new(vec![
        "ID", "Title", "Genres", "Rank", "Updated", "Day", "Rating",
    ]);
    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.title.clone(),
            entry.genres.join(", "),
            or_dash(entry.popularity_rank),
            or_dash(entry.last_update),
            or_dash(entry.update_day.map(|d| d.short_tag())),
            format_rating(entry),
        ]);
    }
    table.print();
    cli_style::print_section_footer();
}

fn print_ranking<F>(title: &str, entries: &[&CatalogEntry], line: F)
where
    F: Fn(&CatalogEntry) -> String,
{
    cli_style::print_section_header(title);
    if entries.is_empty() {
        cli_style::print_empty_list("Nothing to show");
    }
    for (i, entry) in entries.iter().enumerate() {
        cli_style::print_ranked_item(i + 1, &line(entry));
    }
    cli_style::print_section_footer();
}

fn print_entry_detail(entry: &CatalogEntry) {
    cli_style::print_section_header(&entry.title);
    cli_style::print_key_value("Id", &entry.id.to_string());
    if let Some(alt) = &entry.alternative_title {
        cli_style::print_key_value("Alternative title", alt);
    }
    cli_style::print_key_value("Genres", &entry.genres.join(", "));
    cli_style::print_key_value("Popularity", &or_dash(entry.popularity_rank));
    cli_style::print_key_value("Rating", &format_rating(entry));
    cli_style::print_key_value("Last update", &or_dash(entry.last_update));
    cli_style::print_key_value("Update day", &or_dash(entry.update_day));
    cli_style::print_key_value("Episodes", &or_dash(entry.episode_count));
    cli_style::print_key_value("Year", &or_dash(entry.year));
    cli_style::print_key_value("Studio", &or_dash(entry.studio.as_deref()));
    cli_style::print_key_value("Status", &or_dash(entry.status.map(|s| s.as_str())));
    cli_style::print_key_value("Format", &or_dash(entry.format.as_deref()));
    cli_style::print_key_value("Premiere", &or_dash(entry.premiere));
    if !entry.description.is_empty() {
        println!();
        cli_style::print_list_item(&entry.description, 1);
    }
    cli_style::print_section_footer();
}

fn print_navigation(session: &Session) {
    let nav = &session.navigator;
    cli_style::print_section_header("Navigation");
    cli_style::print_key_value("View", &nav.current_view().to_string());
    cli_style::print_key_value("Active tab", &View::from(nav.active_tab()).to_string());
    let selected = match nav.selected_entry(session.store.as_ref()) {
        Some(entry) => format!("{} ({})", entry.title, entry.id),
        None => "-".to_string(),
    };
    cli_style::print_key_value("Selected", &selected);
    cli_style::print_key_value(
        "Tab bar",
        if nav.tab_bar_visible() { "shown" } else { "hidden" },
    );
    cli_style::print_key_value("Catalog version", &session.store.version().to_string());
    cli_style::print_section_footer();
}

// =============================================================================
// Line editor helper
// =============================================================================

#[derive(rustyline_derive::Hinter)]
pub struct CatalogHelper {
    commands_names: Vec<String>,
}

impl CatalogHelper {
    pub fn new() -> Self {
        CatalogHelper {
            commands_names: command_names(),
        }
    }
}

impl Default for CatalogHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for CatalogHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for CatalogHelper {}
impl Validator for CatalogHelper {}
impl Helper for CatalogHelper {}

//! gamedesk - command-line admin console for the quiz-game backend.
//!
//! Browses the management tables (users, admins, topics, game stats)
//! through the shared tabular engine, against the built-in seed data or
//! a JSON data file.
//!
//! Usage:
//!   gamedesk users                            # list users
//!   gamedesk users --filter test --sort email # search + sort
//!   gamedesk topics --sort created_at --desc
//!   gamedesk stats --page 2 --page-size 2     # server-paginated table
//!   gamedesk delete users --ids 1,2,3         # bulk delete (policy-checked)
//!   gamedesk --data ./fixtures.json users     # load records from a file

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

use gamedesk_core::engine::{Paging, TableEngine};
use gamedesk_core::models::{AdminRecord, GameStatRecord, TopicRecord, UserRecord, seed};
use gamedesk_core::record::Record;
use gamedesk_core::source::{MemoryStore, PageSource, wire};
use gamedesk_core::view::{TableDisplay, TableViewModel, build_view};

/// Command-line admin console for the quiz-game backend.
#[derive(Parser)]
#[command(name = "gamedesk", about = "Quiz-game administration console")]
struct Cli {
    /// Path to a JSON data file. Built-in seed data is used when omitted.
    #[arg(long, value_name = "PATH", global = true)]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List user accounts.
    Users(ListArgs),
    /// List administrator accounts.
    Admins(ListArgs),
    /// List game topics.
    Topics(ListArgs),
    /// List per-topic game statistics (served page-by-page).
    Stats(ListArgs),
    /// Bulk-delete records by id. Protected rows are skipped, not errors.
    Delete {
        /// Which table to delete from.
        kind: DeleteKind,
        /// Comma-separated record ids.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DeleteKind {
    Users,
    Admins,
    Topics,
}

#[derive(Args)]
struct ListArgs {
    /// Free-text search over the table's searchable fields.
    #[arg(long, default_value = "")]
    filter: String,

    /// Field to sort by (e.g. id, email, created_at).
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long)]
    desc: bool,

    /// Page to display (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Rows per page.
    #[arg(long, default_value_t = 10)]
    page_size: u32,
}

/// Record sets loaded from a JSON data file. Missing sections are empty.
#[derive(Debug, Default, Deserialize)]
struct DataSet {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    admins: Vec<AdminRecord>,
    #[serde(default)]
    topics: Vec<TopicRecord>,
    #[serde(default)]
    stats: Vec<GameStatRecord>,
}

impl DataSet {
    fn builtin() -> Self {
        Self {
            users: seed::users(),
            admins: seed::admins(),
            topics: seed::topics(),
            stats: seed::game_stats(),
        }
    }
}

fn load_data(path: Option<&Path>) -> Result<DataSet, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(DataSet::builtin()),
    }
}

/// Initializes the tracing subscriber. Default level is WARN so table
/// output stays clean; -v raises it.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("gamedesk={}", level).parse().expect("static directive"))
        .add_directive(
            format!("gamedesk_core={}", level)
                .parse()
                .expect("static directive"),
        );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let data = match load_data(cli.data.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: failed to load data file: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Users(args) => list_local("Users", data.users, &args, UserRecord::can_delete),
        Command::Admins(args) => list_local("Admins", data.admins, &args, AdminRecord::can_delete),
        Command::Topics(args) => list_local("Topics", data.topics, &args, TopicRecord::can_delete),
        Command::Stats(args) => list_stats(data.stats, &args),
        Command::Delete { kind, ids } => delete(kind, &ids, data),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Lists a locally-paginated table: the engine filters, sorts, and
/// windows the loaded records itself.
fn list_local<R: TableDisplay>(
    title: &str,
    records: Vec<R>,
    args: &ListArgs,
    policy: impl Fn(&R) -> bool,
) -> Result<(), Box<dyn Error>> {
    let mut engine = TableEngine::new(Paging::Local {
        page_size: args.page_size,
    });
    engine.set_records(records);
    apply_list_args(&mut engine, args)?;

    render(&build_view(title, &engine, policy));
    Ok(())
}

/// Lists the game statistics table in server-pagination mode: parameter
/// changes produce fetch tickets, the store answers them, and the engine
/// displays the response verbatim.
fn list_stats(stats: Vec<GameStatRecord>, args: &ListArgs) -> Result<(), Box<dyn Error>> {
    let mut engine: TableEngine<GameStatRecord> = TableEngine::new(Paging::Server {
        page_size: args.page_size,
    });
    let mut store = MemoryStore::new(stats);

    apply_list_args(&mut engine, args)?;

    while let Some(ticket) = engine.take_fetch() {
        let token = ticket
            .params
            .sort
            .as_ref()
            .and_then(|d| wire::encode_sort(wire::GAME_STAT_SORT_FIELDS, d))
            .unwrap_or_else(|| wire::GAME_STAT_DEFAULT_SORT.to_string());
        debug!(sort = %token, page = ticket.params.page, "fetching stats page");

        let response = store.fetch_page(&ticket.params)?;
        engine.apply_fetch(ticket, response);
    }

    render(&build_view("Game stats", &engine, |_| false));
    Ok(())
}

fn apply_list_args<R: TableDisplay>(
    engine: &mut TableEngine<R>,
    args: &ListArgs,
) -> Result<(), Box<dyn Error>> {
    engine.set_filter(&args.filter);
    if let Some(field) = &args.sort {
        engine.request_sort(field)?;
        if args.desc {
            engine.request_sort(field)?;
        }
    }
    engine.set_page(args.page);
    Ok(())
}

fn delete(kind: DeleteKind, ids: &[i64], data: DataSet) -> Result<(), Box<dyn Error>> {
    match kind {
        DeleteKind::Users => {
            let store = MemoryStore::new(data.users.clone());
            delete_from("Users", data.users, ids, store, UserRecord::can_delete)
        }
        DeleteKind::Admins => {
            let store = MemoryStore::new(data.admins.clone());
            delete_from("Admins", data.admins, ids, store, AdminRecord::can_delete)
        }
        DeleteKind::Topics => {
            let store = MemoryStore::with_transition(data.topics.clone(), |t| t.mark_deleted());
            delete_from("Topics", data.topics, ids, store, TopicRecord::can_delete)
        }
    }
}

fn delete_from<R: TableDisplay + Record<Id = i64>>(
    title: &str,
    records: Vec<R>,
    ids: &[i64],
    mut store: MemoryStore<R>,
    policy: impl Fn(&R) -> bool,
) -> Result<(), Box<dyn Error>> {
    let mut engine = TableEngine::new(Paging::Local { page_size: 100 });
    engine.set_records(records);
    for &id in ids {
        engine.toggle_select(id);
    }

    let deletable = engine.compute_deletable(&policy);
    for id in ids {
        if !deletable.contains(id) {
            println!("skipped {} (protected or unknown)", id);
        }
    }

    let report = engine.commit_delete(&deletable, &mut store);
    for (id, outcome) in &report.outcomes {
        match outcome {
            Ok(()) => println!("deleted {}", id),
            Err(e) => println!("failed {}: {}", id, e),
        }
    }

    render(&build_view(title, &engine, policy));
    Ok(())
}

/// Plain-text table rendering: selection marker column, sort indicator
/// on the active header, width-padded cells.
fn render<Id: std::fmt::Display>(view: &TableViewModel<Id>) {
    let headers: Vec<String> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if view.sort_col == Some(i) {
                let marker = if view.sort_ascending { "^" } else { "v" };
                format!("{}{}", h, marker)
            } else {
                (*h).to_string()
            }
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &view.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.len());
            }
        }
    }

    println!("{}", view.title);
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    println!("  {}", header_line.join("  "));

    for row in &view.rows {
        let marker = if row.selected { "*" } else { " " };
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        println!("{} {}", marker, cells.join("  "));
    }

    let page = view.page;
    println!(
        "page {}/{} ({} per page)",
        page.current_page, page.total_pages, page.page_size
    );
}

use std::path::PathBuf;

use clap::Parser;

use file_open_save::app::FileList;
use file_open_save::config::{AppConfig, ListingConfig, SearchConfig};
use file_open_save::error::Result;
use file_open_save::event::EventChannel;
use file_open_save::listing::{FileNode, SortField};
use file_open_save::{logging, search};

/// Print a folder listing the way the open/save dialog orders it.
#[derive(Parser, Debug)]
#[command(name = "fos", version, about)]
struct Cli {
    /// JSON file holding the folder node and its children
    listing: PathBuf,

    /// Search term; non-empty flattens the tree and lists matches
    #[arg(short, long, default_value = "")]
    search: String,

    /// Column header click, repeatable: name, type or date
    #[arg(long = "sort", value_parser = ["name", "type", "date"])]
    sort: Vec<String>,

    /// Match search terms case-sensitively
    #[arg(long, overrides_with = "no_case_sensitive")]
    case_sensitive: bool,

    /// Match search terms ignoring case, even if the config says otherwise
    #[arg(long, overrides_with = "case_sensitive")]
    no_case_sensitive: bool,

    /// Explicit config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config values set on the command line.
    fn overrides(&self) -> AppConfig {
        let case_sensitive = if self.case_sensitive {
            Some(true)
        } else if self.no_case_sensitive {
            Some(false)
        } else {
            None
        };
        AppConfig {
            listing: ListingConfig {
                sort_by: self.sort.first().cloned(),
            },
            search: SearchConfig { case_sensitive },
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));

    let mut folder = FileNode::from_json_file(&cli.listing)?;
    if !cli.search.is_empty() {
        search::annotate_matches(&mut folder.children, &cli.search, config.case_sensitive());
    }

    let channel = EventChannel::new();
    let mut list = FileList::new(channel.sender());
    list.set_folder(folder);
    list.set_search(&cli.search);

    // The first click comes from the merged config (CLI or file), the rest
    // are replayed in order.
    if let Some(field) = config.sort_by() {
        list.sort_files(field);
    }
    for field in cli.sort.iter().skip(1) {
        list.sort_files(SortField::from_str(field));
    }

    print_listing(&mut list, &config);
    Ok(())
}

fn print_listing(list: &mut FileList, config: &AppConfig) {
    let searching = list.is_searching();
    let rows: Vec<(String, String, i64)> = list
        .get_files()
        .into_iter()
        .map(|f| {
            let label = if searching { f.path.clone() } else { f.name.clone() };
            let marker = if searching && f.in_result { "*" } else { " " };
            (format!("{marker} {label}"), f.kind.clone(), f.date)
        })
        .collect();

    if !list.has_results {
        println!("{}", config.no_results());
        return;
    }

    let width = rows
        .iter()
        .map(|(name, _, _)| name.chars().count())
        .chain(std::iter::once(config.name_header().chars().count() + 2))
        .max()
        .unwrap_or(0);

    println!(
        "  {:<w$}  {:<12}  {}",
        config.name_header(),
        config.type_header(),
        config.last_saved_header(),
        w = width.saturating_sub(2)
    );
    for (name, kind, date) in &rows {
        println!("{:<width$}  {:<12}  {}", name, kind, date);
    }
    if searching {
        println!("{} matching", list.match_count);
    }
}

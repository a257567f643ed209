use std::path::PathBuf;

use clap::Parser;

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::ui::theme::ThemeName;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Browse a book catalog from the terminal")]
pub struct CliArgs {
    /// Dataset JSON file (defaults to the built-in sample catalog)
    #[arg(short = 'f', long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Case-insensitive title substring
    #[arg(short = 't', long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Author id, or "any"
    #[arg(short = 'a', long = "author", value_name = "ID")]
    pub author: Option<String>,

    /// Genre id, or "any"
    #[arg(short = 'g', long = "genre", value_name = "ID")]
    pub genre: Option<String>,

    /// Page of results to print
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page: u64,

    /// Books per page
    #[arg(
        long = "page-size",
        value_name = "N",
        default_value_t = DEFAULT_PAGE_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_size: u64,

    /// Print the detail view of one book from the current matches
    #[arg(long = "show", value_name = "ID")]
    pub show: Option<String>,

    /// Terse output: matching book ids only
    #[arg(long = "terse", conflicts_with = "json")]
    pub terse: bool,

    /// Print the page as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Colour theme (interactive mode); detected from the terminal if omitted
    #[arg(long = "theme", value_enum, value_name = "THEME")]
    pub theme: Option<ThemeName>,

    /// Enter interactive TUI mode
    #[arg(short = 'I', long = "interactive")]
    pub interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

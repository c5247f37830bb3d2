#![forbid(unsafe_code)]

//! Command-line argument parsing for the folio demo.
//!
//! Hand-rolled `--flag=value` parsing; the binary stays free of an argument
//! parser dependency. `FOLIO_DEMO_*` environment variables supply defaults.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Folio Demo — query a portfolio dataset from the command line

USAGE:
    folio-demo --data=PATH [OPTIONS]

OPTIONS:
    --data=PATH          Path to the portfolio JSON dataset (required)
    --query=TEXT         Free-text search over title, description, and tags
    --category=LABEL     Restrict to a category; repeat to select several
    --slug=SLUG          Show the detail view for one project and exit
    --list-categories    Print the facet vocabulary and exit
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    FOLIO_DEMO_DATA      Override --data
    FOLIO_DEMO_LOG       Enable tracing output (value is an env-filter spec)";

/// Parsed command-line options.
pub struct Opts {
    /// Path to the dataset file.
    pub data: PathBuf,
    /// Free-text query, if any.
    pub query: Option<String>,
    /// Selected category labels (repeatable flag).
    pub categories: Vec<String>,
    /// Slug to resolve for a detail view.
    pub slug: Option<String>,
    /// Print the facet vocabulary instead of filtering.
    pub list_categories: bool,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables provide defaults; explicit command-line flags
    /// override them. Prints usage and exits on `--help`, `--version`, or
    /// invalid input.
    pub fn parse() -> Self {
        let mut data: Option<PathBuf> = env::var_os("FOLIO_DEMO_DATA").map(PathBuf::from);
        let mut query = None;
        let mut categories = Vec::new();
        let mut slug = None;
        let mut list_categories = false;

        for arg in env::args().skip(1) {
            if arg == "--help" || arg == "-h" {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            if arg == "--version" || arg == "-V" {
                println!("folio-demo {VERSION}");
                process::exit(0);
            }
            if arg == "--list-categories" {
                list_categories = true;
                continue;
            }
            if let Some(value) = arg.strip_prefix("--data=") {
                data = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--query=") {
                query = Some(value.to_string());
            } else if let Some(value) = arg.strip_prefix("--category=") {
                categories.push(value.to_string());
            } else if let Some(value) = arg.strip_prefix("--slug=") {
                slug = Some(value.to_string());
            } else {
                eprintln!("unknown argument: {arg}");
                eprintln!("{HELP_TEXT}");
                process::exit(2);
            }
        }

        let Some(data) = data else {
            eprintln!("missing required --data=PATH (or FOLIO_DEMO_DATA)");
            eprintln!("{HELP_TEXT}");
            process::exit(2);
        };

        Self {
            data,
            query,
            categories,
            slug,
            list_categories,
        }
    }
}

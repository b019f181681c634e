//! CLI argument definitions for the catalog browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fundcat_model::CatalogKind;

#[derive(Parser)]
#[command(
    name = "fundcat",
    version,
    about = "Browse accelerators, incubators and micro-investors",
    long_about = "Browse accelerators, incubators and micro-investors.\n\n\
                  Filters are expressed as URL queries such as\n\
                  `affiliation=Govt-backed,Private&tags=Equity&search=fintech`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the one in the config directory.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the catalogs and their filters.
    Domains,

    /// Print one filtered view of a catalog and exit.
    Query(QueryArgs),

    /// Browse a catalog interactively.
    Browse(BrowseArgs),
}

/// Which view to open.
#[derive(Args)]
pub struct ViewArgs {
    /// Catalog to open (default from settings).
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<CatalogKind>,

    /// Initial URL query, e.g. `tags=Equity,Grant&search=seed`.
    #[arg(long = "query", value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Use the bundled dataset instead of the catalog API.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Results per page (default from settings).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<u32>,
}

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Number of pages to load.
    #[arg(long = "pages", value_name = "N", default_value_t = 1)]
    pub pages: u32,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

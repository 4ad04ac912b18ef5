//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::logging::LogFormat;

/// Build, check, and serve the CreateX Facilitator Guide.
#[derive(Parser, Debug)]
#[command(name = "createx", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CREATEX_CONFIG")]
    pub config: Option<String>,

    /// Content directory holding `modules/` and `translations/`
    #[arg(long, global = true, env = "CREATEX_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the static site
    Build {
        /// Language to build (defaults to the source language)
        #[arg(short, long, conflicts_with = "all")]
        language: Option<String>,

        /// Output root; each language is written to `<output>/<language>/`
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Build every configured language
        #[arg(long)]
        all: bool,
    },

    /// Build the site, then serve it with the content API under /api
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Language to build and serve
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Check every module; exits non-zero when errors are found
    Validate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print catalog statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export and import module translations
    Translations {
        #[command(subcommand)]
        action: TranslationAction,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `createx translations ...`
#[derive(Subcommand, Debug)]
pub enum TranslationAction {
    /// Print a module's translatable fields as JSON
    Export {
        /// Module id
        id: String,
    },

    /// Store a translation from a JSON file
    Import {
        /// Module id
        id: String,
        /// Target language
        language: String,
        /// File holding `{title, content, learningObjectives, prerequisites}`
        file: PathBuf,
    },

    /// List the languages a module is translated into
    List {
        /// Module id
        id: String,
    },
}

/// `createx config ...`
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show which config file is in effect
    Path,

    /// Print one value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },

    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

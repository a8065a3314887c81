//! Command-line argument definitions for the datasheet generator
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand reads the same catalog document and shares the configuration,
//! path override and verbosity flags in [`CommonArgs`].

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the piping datasheet generator
///
/// Reads an engineering catalog exported as JSON and fills datasheet and
/// pipe class summary templates with its records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "piping-datasheets",
    version,
    about = "Generate piping, gasket, valve and bolt datasheets from catalog records",
    long_about = "Classifies engineering catalog records into datasheet categories, resolves their \
                  loosely named attributes and populates the matching template workbooks. Also \
                  discovers pipe classes in the catalog and writes one summary workbook per class."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List catalog items with their datasheet category
    Items(ItemsArgs),
    /// Generate datasheet workbooks for selected items
    Datasheets(DatasheetsArgs),
    /// List pipe classes found in the catalog
    Classes(ClassesArgs),
    /// Generate one summary workbook per pipe class
    Summary(SummaryArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Catalog document (JSON export of the catalog tree)
    #[arg(long = "catalog", value_name = "FILE", help = "Catalog document in JSON format")]
    pub catalog: PathBuf,

    /// Path to configuration file
    ///
    /// JSON configuration file for template names and layout settings. If not
    /// specified, looks for <config dir>/piping-datasheets/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Project root holding the templates/ and output/ folders
    #[arg(
        long = "project-root",
        value_name = "PATH",
        help = "Project root with templates/ and output/ folders"
    )]
    pub project_root: Option<PathBuf>,

    /// Output directory for generated workbooks
    ///
    /// Defaults to <project root>/output and is created when missing.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated workbooks"
    )]
    pub output_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the items command
#[derive(Debug, Clone, ClapArgs)]
pub struct ItemsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the listing"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the datasheets command
#[derive(Debug, Clone, ClapArgs)]
pub struct DatasheetsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Item codes or names to generate (comma-separated)
    ///
    /// Matched against the item code first, then the catalog node name,
    /// case-insensitively.
    #[arg(
        long = "select",
        value_name = "CODES",
        value_delimiter = ',',
        required_unless_present = "all",
        conflicts_with = "all",
        help = "Comma-separated item codes or names to generate"
    )]
    pub select: Vec<String>,

    /// Generate datasheets for every catalog item
    #[arg(long = "all", help = "Generate datasheets for every catalog item")]
    pub all: bool,
}

/// Arguments for the classes command
#[derive(Debug, Clone, ClapArgs)]
pub struct ClassesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the class listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the class listing"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the summary command
#[derive(Debug, Clone, ClapArgs)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Pipe class codes to summarise (repeatable)
    #[arg(
        long = "class",
        value_name = "CODE",
        required_unless_present = "all_classes",
        conflicts_with = "all_classes",
        help = "Pipe class code to summarise (repeatable)"
    )]
    pub classes: Vec<String>,

    /// Summarise every pipe class discovered in the catalog
    #[arg(
        long = "all-classes",
        help = "Summarise every pipe class discovered in the catalog"
    )]
    pub all_classes: bool,
}

/// Output format options for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// The subcommand, if one was given
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl Commands {
    /// Flags shared by all subcommands
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Items(args) => &args.common,
            Commands::Datasheets(args) => &args.common,
            Commands::Classes(args) => &args.common,
            Commands::Summary(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Validate paths given on the command line
    pub fn validate(&self) -> Result<()> {
        if !self.catalog.is_file() {
            return Err(Error::configuration(format!(
                "Catalog file does not exist: {}",
                self.catalog.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(project_root) = &self.project_root {
            if !project_root.is_dir() {
                return Err(Error::configuration(format!(
                    "Project root is not a directory: {}",
                    project_root.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

//! CLI argument definitions for `GpaCalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_calc::config::ConfigOverrides;
use gpa_calc::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `decimals`, `weight_tolerance`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Output options shared by every calculator
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OutputArgs {
    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// Numeric inputs are taken as raw text so that missing and malformed values
// are reported by the grade input layer rather than by clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate a cumulative GPA from a list of courses.
    Gpa {
        /// Course as NAME,HOURS,GRADE (repeatable, e.g. --course "Calculus I,3,A")
        #[arg(short, long = "course", value_name = "NAME,HOURS,GRADE")]
        courses: Vec<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Calculate a weighted university admission score.
    Admission {
        /// Aptitude test score (0-100)
        #[arg(long, value_name = "SCORE")]
        aptitude: Option<String>,
        /// Achievement test score (0-100)
        #[arg(long, value_name = "SCORE")]
        achievement: Option<String>,
        /// High-school grade (0-100)
        #[arg(long = "high-school", value_name = "SCORE")]
        high_school: Option<String>,
        /// Weights in percent for the three scores (default 30,30,40)
        #[arg(long, value_name = "W1,W2,W3")]
        weights: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Calculate a weighted three-year high-school average.
    HighSchool {
        /// Year one average (0-100)
        #[arg(long, value_name = "SCORE")]
        first: Option<String>,
        /// Year two average (0-100)
        #[arg(long, value_name = "SCORE")]
        second: Option<String>,
        /// Year three average (0-100)
        #[arg(long, value_name = "SCORE")]
        third: Option<String>,
        /// Weights in percent for the three years (default 25,35,40)
        #[arg(long, value_name = "W1,W2,W3")]
        weights: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Find the lowest grade needed next term to reach a target GPA.
    Required {
        /// Current cumulative GPA (0-4.0)
        #[arg(long = "current-gpa", value_name = "GPA")]
        current_gpa: Option<String>,
        /// Credit hours completed so far
        #[arg(long = "current-hours", value_name = "HOURS")]
        current_hours: Option<String>,
        /// Credit hours about to be taken
        #[arg(long = "new-hours", value_name = "HOURS")]
        new_hours: Option<String>,
        /// Target cumulative GPA (0-4.0)
        #[arg(long, value_name = "GPA")]
        target: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Project the GPA if every new hour earns the same letter grade.
    Possible {
        /// Current cumulative GPA (0-4.0)
        #[arg(long = "current-gpa", value_name = "GPA")]
        current_gpa: Option<String>,
        /// Credit hours completed so far
        #[arg(long = "current-hours", value_name = "HOURS")]
        current_hours: Option<String>,
        /// Credit hours about to be taken
        #[arg(long = "new-hours", value_name = "HOURS")]
        new_hours: Option<String>,
        /// Expected letter grade (A+, A, B+, B, C+, C, D+, D, F)
        #[arg(long, value_name = "GRADE")]
        grade: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Show the letter grade to grade-point table.
    Grades {
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Show the high-school letter bands for percentage averages.
    Bands {
        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpacalc",
    about = "Academic GPA and grade calculators",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Report format: text, markdown (md) or html. Falls back to config.
    #[arg(short, long, value_name = "FORMAT", global = true)]
    pub format: Option<String>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the number of decimal places in results
    #[arg(long, value_name = "N")]
    pub decimals: Option<usize>,

    /// Override how far a weight sum may be from 100 (0 = exact)
    #[arg(long = "weight-tolerance", value_name = "EPS")]
    pub weight_tolerance: Option<f64>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that field.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.as_ref().map(ToString::to_string),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            decimals: self.decimals,
            format: self.format.clone(),
            weight_tolerance: self.weight_tolerance,
        }
    }
}

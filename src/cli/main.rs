//! Command-line interface entry point for `GpaCalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::projection::StandingInput;
use commands::weighted::WeightedInput;
use gpa_calc::config::Config;
use gpa_calc::core::report::ReportFormat;
use gpa_calc::core::schemes::Scheme;
use gpa_calc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use gpa_calc::{debug, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    if let Some(Err(e)) = args.format.as_deref().map(str::parse::<ReportFormat>) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    debug!(
        "Effective settings: decimals={}, format={}, weight policy={:?}",
        config.display.decimals,
        config.report_format(),
        config.weight_policy()
    );

    if let Err(message) = dispatch(args.command, &mut config, &defaults) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn dispatch(command: Command, config: &mut Config, defaults: &Config) -> Result<(), String> {
    match command {
        Command::Config { subcommand } => commands::config::run(subcommand, config, defaults),
        Command::Gpa { courses, out } => {
            commands::gpa::run(&courses, out.output.as_deref(), config)
        }
        Command::Admission {
            aptitude,
            achievement,
            high_school,
            weights,
            out,
        } => {
            let input = WeightedInput {
                scores: [
                    aptitude.as_deref(),
                    achievement.as_deref(),
                    high_school.as_deref(),
                ],
                weights: weights.as_deref(),
            };
            commands::weighted::run(Scheme::Admission, &input, out.output.as_deref(), config)
        }
        Command::HighSchool {
            first,
            second,
            third,
            weights,
            out,
        } => {
            let input = WeightedInput {
                scores: [first.as_deref(), second.as_deref(), third.as_deref()],
                weights: weights.as_deref(),
            };
            commands::weighted::run(Scheme::HighSchool, &input, out.output.as_deref(), config)
        }
        Command::Required {
            current_gpa,
            current_hours,
            new_hours,
            target,
            out,
        } => {
            let input = StandingInput {
                current_gpa: current_gpa.as_deref(),
                current_hours: current_hours.as_deref(),
                new_hours: new_hours.as_deref(),
            };
            commands::projection::run_required(
                &input,
                target.as_deref(),
                out.output.as_deref(),
                config,
            )
        }
        Command::Possible {
            current_gpa,
            current_hours,
            new_hours,
            grade,
            out,
        } => {
            let input = StandingInput {
                current_gpa: current_gpa.as_deref(),
                current_hours: current_hours.as_deref(),
                new_hours: new_hours.as_deref(),
            };
            commands::projection::run_possible(
                &input,
                grade.as_deref(),
                out.output.as_deref(),
                config,
            )
        }
        Command::Grades { out } => commands::gpa::run_grades(out.output.as_deref(), config),
        Command::Bands { out } => commands::weighted::run_bands(out.output.as_deref(), config),
    }
}

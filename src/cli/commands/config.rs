//! Config command handler

use crate::args::ConfigSubcommand;
use gpa_calc::config::Config;
use std::io::{self, BufRead, Write};

/// Keys accepted by `config get/set/unset`
const KNOWN_KEYS: [&str; 6] = [
    "level",
    "file",
    "verbose",
    "decimals",
    "format",
    "weight_tolerance",
];

/// Dispatch config subcommands
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            println!("{value}");
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            config
                .save()
                .map_err(|e| format!("Failed to save config: {e}"))?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            config
                .save()
                .map_err(|e| format!("Failed to save config: {e}"))?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: '{key}' (known keys: {})",
        KNOWN_KEYS.join(", ")
    )
}

fn confirmed(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if confirmed(&response) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

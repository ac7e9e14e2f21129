//! `felt cfg`: prints the resolved configuration as JSON, each value paired
//! with where it came from (`default`, `file` or `env`).

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "fold_percent": {
            "value": config.fold_percent,
            "source": sources.fold_percent,
        },
        "raise_amount": {
            "value": config.raise_amount,
            "source": sources.raise_amount,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

use std::{
    env,
    io::{IsTerminal as _, Write as _},
};

use anyhow::Result;
use chrono::{Local, SecondsFormat};
use env_logger::{Builder, WriteStyle};
use log::LevelFilter;

const LOG_ENVIRONMENT_VARIABLE: &str = "TRANSCODER_LOG";

const WORKSPACE_MODULES: &[&str] = &["binary_utils", "block_codec", "transcoder", "types"];

/// Initializes `env_logger` with `info` filters for workspace crates.
///
/// Filters in `TRANSCODER_LOG` are applied after the defaults and thus take precedence.
/// Logs go to stderr so that they never mix with documents written to stdout.
pub fn initialize_logger(module_path: &str, always_write_style: bool) -> Result<()> {
    let mut builder = build_logger(module_path, env::var(LOG_ENVIRONMENT_VARIABLE).ok());

    if always_write_style || std::io::stderr().is_terminal() {
        builder.write_style(WriteStyle::Always);
    } else {
        builder.write_style(WriteStyle::Never);
    }

    builder.try_init()?;

    log::debug!("logger initialized for {module_path}");

    Ok(())
}

fn build_logger(module_path: &str, overrides: Option<String>) -> Builder {
    let mut builder = Builder::new();

    builder.filter_level(LevelFilter::Off);

    for module in WORKSPACE_MODULES.iter().copied().chain([module_path]) {
        builder.filter_module(module, LevelFilter::Info);
    }

    if let Some(filters) = overrides {
        builder.parse_filters(&filters);
    }

    builder.format(|formatter, record| {
        let level_style = formatter.default_level_style(record.level());

        writeln!(
            formatter,
            "[{}] {level_style}{:5}{level_style:#} {}: {}",
            Local::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            record.target(),
            record.args(),
        )
    });

    builder
}

use std::{
    io::{Read as _, Write as _},
    process::ExitCode,
};

use anyhow::{Context as _, Result};
use block_codec::{BlockKind, Error as CodecError};
use clap::{Error as ClapError, Parser as _};
use log::{error, info, warn};
use serde_json::Value;
use types::{
    nonstandard::Phase,
    preset::{Mainnet, Minimal, Preset, PresetName},
};

use crate::transcoder_args::{Input, TranscoderArgs, TranscoderConfig};

mod transcoder_args;

fn main() -> ExitCode {
    if let Err(error) = try_main() {
        error.downcast_ref().map(ClapError::exit);
        error!("{error:?}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    binary_utils::initialize_logger(module_path!(), false)?;

    let TranscoderConfig {
        input,
        phase,
        mut kind,
        preset,
        unsigned,
        pretty,
    } = TranscoderArgs::try_parse()?.try_into_config()?;

    let mut value = read_input(&input)?;

    if unsigned {
        if kind.is_signed() {
            value = block_codec::strip_signature(phase, kind, &value).map_err(report)?;
            kind = kind.unsigned();
            info!("stripped signature, decoding message as {kind}");
        } else {
            warn!("--unsigned has no effect on {kind} objects");
        }
    }

    let output = match preset {
        PresetName::Mainnet => transcode::<Mainnet>(phase, kind, &value, preset),
        PresetName::Minimal => transcode::<Minimal>(phase, kind, &value, preset),
    }
    .map_err(report)?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }?;

    writeln!(std::io::stdout().lock(), "{rendered}").context("failed to write output")?;

    Ok(())
}

fn read_input(input: &Input) -> Result<Value> {
    let text = match input {
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            text
        }
        Input::File(path) => fs_err::read_to_string(path)?,
    };

    serde_json::from_str(&text).context("input is not a JSON document")
}

fn transcode<P: Preset>(
    phase: Phase,
    kind: BlockKind,
    value: &Value,
    preset: PresetName,
) -> Result<Value, CodecError> {
    let generic = block_codec::to_generic::<P>(phase, kind, value)?;

    info!(
        "decoded {} {} (blinded: {}, preset: {})",
        generic.value.phase(),
        generic.value.kind(),
        generic.is_blinded,
        preset,
    );

    block_codec::encode(&generic.value)
}

fn report(error: CodecError) -> CodecError {
    if error.is_invariant_violation() {
        warn!("decoded object could not be encoded: {error}");
    } else {
        warn!("input rejected: {error}");
    }

    error
}

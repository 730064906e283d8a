use core::fmt::Display;
use std::path::PathBuf;

use block_codec::BlockKind;
use clap::{error::ErrorKind, CommandFactory as _, Error as ClapError, Parser, ValueEnum};
use types::{nonstandard::Phase, preset::PresetName};

const STDIN: &str = "-";

/// Decodes a beacon block object in wire JSON form and prints it re-encoded
#[derive(Parser)]
#[clap(name = "transcoder", verbatim_doc_comment)]
pub struct TranscoderArgs {
    /// JSON file to read, or - for standard input
    #[clap(value_name = "FILE", default_value = STDIN)]
    input: PathBuf,

    /// Phase the object belongs to
    #[clap(long)]
    phase: Phase,

    /// Kind of object the input contains
    #[clap(long, value_enum)]
    kind: ObjectKind,

    /// Preset that bounds collection lengths
    #[clap(long, default_value_t = PresetName::Mainnet)]
    preset: PresetName,

    /// Strip the signature envelope before decoding
    #[clap(long)]
    unsigned: bool,

    /// Pretty-print the output
    #[clap(long)]
    pretty: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum ObjectKind {
    Block,
    SignedBlock,
    BlindedBlock,
    SignedBlindedBlock,
    BlockContents,
    SignedBlockContents,
}

impl From<ObjectKind> for BlockKind {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Block => Self::Block,
            ObjectKind::SignedBlock => Self::SignedBlock,
            ObjectKind::BlindedBlock => Self::BlindedBlock,
            ObjectKind::SignedBlindedBlock => Self::SignedBlindedBlock,
            ObjectKind::BlockContents => Self::BlockContents,
            ObjectKind::SignedBlockContents => Self::SignedBlockContents,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TranscoderConfig {
    pub input: Input,
    pub phase: Phase,
    pub kind: BlockKind,
    pub preset: PresetName,
    pub unsigned: bool,
    pub pretty: bool,
}

impl TranscoderArgs {
    pub fn try_into_config(self) -> Result<TranscoderConfig, ClapError> {
        let Self {
            input,
            phase,
            kind,
            preset,
            unsigned,
            pretty,
        } = self;

        let kind = BlockKind::from(kind);

        if !kind.exists_in(phase) {
            return Err(Self::clap_error(format!("{phase} has no {kind} object")));
        }

        let input = if input.as_os_str() == STDIN {
            Input::Stdin
        } else {
            Input::File(input)
        };

        Ok(TranscoderConfig {
            input,
            phase,
            kind,
            preset,
            unsigned,
            pretty,
        })
    }

    fn clap_error(message: impl Display) -> ClapError {
        Self::command().error(ErrorKind::ArgumentConflict, message)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn try_config_from_args<'a>(
        arguments: impl IntoIterator<Item = &'a str>,
    ) -> Result<TranscoderConfig, ClapError> {
        TranscoderArgs::try_parse_from(core::iter::once("transcoder").chain(arguments))?
            .try_into_config()
    }

    #[test]
    fn defaults() -> Result<(), ClapError> {
        let config = try_config_from_args(["--phase", "altair", "--kind", "signed-block"])?;

        assert_eq!(
            config,
            TranscoderConfig {
                input: Input::Stdin,
                phase: Phase::Altair,
                kind: BlockKind::SignedBlock,
                preset: PresetName::Mainnet,
                unsigned: false,
                pretty: false,
            },
        );

        Ok(())
    }

    #[test]
    fn every_option() -> Result<(), ClapError> {
        let config = try_config_from_args([
            "block.json",
            "--phase",
            "deneb",
            "--kind",
            "signed-block-contents",
            "--preset",
            "minimal",
            "--unsigned",
            "--pretty",
        ])?;

        assert_eq!(config.input, Input::File("block.json".into()));
        assert_eq!(config.phase, Phase::Deneb);
        assert_eq!(config.kind, BlockKind::SignedBlockContents);
        assert_eq!(config.preset, PresetName::Minimal);
        assert!(config.unsigned);
        assert!(config.pretty);

        Ok(())
    }

    #[test_case(&["--kind", "block"]                                    ; "phase is required")]
    #[test_case(&["--phase", "capella"]                                 ; "kind is required")]
    #[test_case(&["--phase", "electra", "--kind", "block"]              ; "unknown phase")]
    #[test_case(&["--phase", "capella", "--kind", "sidecar"]            ; "unknown kind")]
    #[test_case(&["--phase", "capella", "--kind", "block", "--preset", "gnosis"] ; "unknown preset")]
    fn invalid_arguments_are_rejected(arguments: &[&str]) {
        try_config_from_args(arguments.iter().copied()).expect_err("arguments are invalid");
    }

    #[test_case("phase0", "blinded-block",         "phase0 has no blinded-block object")]
    #[test_case("altair", "signed-blinded-block",  "altair has no signed-blinded-block object")]
    #[test_case("capella", "block-contents",       "capella has no block-contents object")]
    fn kind_must_exist_in_phase(phase: &str, kind: &str, message: &str) {
        let error = try_config_from_args(["--phase", phase, "--kind", kind])
            .expect_err("kind does not exist in phase");

        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        assert!(error.to_string().contains(message));
    }
}

//! Entry points that select the phase-specific codec at runtime.
//!
//! Wire objects do not identify their phase, so every function here takes it explicitly. Input is
//! accepted as a parsed JSON document and converted directly into the wire struct of the selected
//! phase.

use derive_more::From;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};
use thiserror::Error;
use types::{
    combined::{
        BeaconBlock, BlindedBeaconBlock, BlockContents, SignedBeaconBlock,
        SignedBlindedBeaconBlock, SignedBlockContents,
    },
    nonstandard::{Generic, Phase},
    preset::Preset,
};

use crate::{
    altair::containers as altair_json,
    bellatrix::containers as bellatrix_json,
    capella::containers as capella_json,
    deneb::containers as deneb_json,
    error::{required, DecodeError, EncodeError, WithPath as _},
    phase0::containers as phase0_json,
    traits::{Decode, Encode as _, ToUnsigned, TryEncode as _},
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, AsRefStr, Display)]
#[cfg_attr(test, derive(enum_iterator::Sequence))]
#[strum(serialize_all = "kebab-case")]
pub enum BlockKind {
    Block,
    SignedBlock,
    BlindedBlock,
    SignedBlindedBlock,
    BlockContents,
    SignedBlockContents,
}

impl BlockKind {
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::SignedBlock | Self::SignedBlindedBlock | Self::SignedBlockContents,
        )
    }

    #[must_use]
    pub const fn is_blinded(self) -> bool {
        matches!(self, Self::BlindedBlock | Self::SignedBlindedBlock)
    }

    /// The kind of object left after removing the signature envelope.
    #[must_use]
    pub const fn unsigned(self) -> Self {
        match self {
            Self::Block | Self::SignedBlock => Self::Block,
            Self::BlindedBlock | Self::SignedBlindedBlock => Self::BlindedBlock,
            Self::BlockContents | Self::SignedBlockContents => Self::BlockContents,
        }
    }

    #[must_use]
    pub fn exists_in(self, phase: Phase) -> bool {
        match self {
            Self::Block | Self::SignedBlock => true,
            Self::BlindedBlock | Self::SignedBlindedBlock => phase.has_execution_payload(),
            Self::BlockContents | Self::SignedBlockContents => phase >= Phase::Deneb,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("input is not a wire {phase} {kind}: {source}")]
    Shape {
        phase: Phase,
        kind: BlockKind,
        source: serde_json::Error,
    },
    #[error("{phase} has no {kind} object")]
    Unsupported { phase: Phase, kind: BlockKind },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("could not represent wire object as JSON: {0}")]
    Serialize(serde_json::Error),
}

impl Error {
    /// Whether the error was caused by a corrupted internal object rather than by the input.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Encode(_) | Self::Serialize(_))
    }
}

/// A decoded object of any kind.
#[derive(Clone, PartialEq, Eq, Debug, From)]
pub enum AnyBlock<P: Preset> {
    Block(BeaconBlock<P>),
    SignedBlock(SignedBeaconBlock<P>),
    BlindedBlock(BlindedBeaconBlock<P>),
    SignedBlindedBlock(SignedBlindedBeaconBlock<P>),
    BlockContents(BlockContents<P>),
    SignedBlockContents(SignedBlockContents<P>),
}

impl<P: Preset> AnyBlock<P> {
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Block(_) => BlockKind::Block,
            Self::SignedBlock(_) => BlockKind::SignedBlock,
            Self::BlindedBlock(_) => BlockKind::BlindedBlock,
            Self::SignedBlindedBlock(_) => BlockKind::SignedBlindedBlock,
            Self::BlockContents(_) => BlockKind::BlockContents,
            Self::SignedBlockContents(_) => BlockKind::SignedBlockContents,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Block(block) => block.phase(),
            Self::SignedBlock(block) => block.phase(),
            Self::BlindedBlock(block) => block.phase(),
            Self::SignedBlindedBlock(block) => block.phase(),
            Self::BlockContents(_) | Self::SignedBlockContents(_) => Phase::Deneb,
        }
    }
}

pub fn decode<P: Preset>(
    phase: Phase,
    kind: BlockKind,
    value: &Value,
) -> Result<AnyBlock<P>, Error> {
    let block = match kind {
        BlockKind::Block => decode_block(phase, value)?.into(),
        BlockKind::SignedBlock => decode_signed_block(phase, value)?.into(),
        BlockKind::BlindedBlock => decode_blinded_block(phase, value)?.into(),
        BlockKind::SignedBlindedBlock => decode_signed_blinded_block(phase, value)?.into(),
        BlockKind::BlockContents => decode_block_contents(phase, value)?.into(),
        BlockKind::SignedBlockContents => decode_signed_block_contents(phase, value)?.into(),
    };

    Ok(block)
}

pub fn encode<P: Preset>(block: &AnyBlock<P>) -> Result<Value, Error> {
    match block {
        AnyBlock::Block(block) => encode_block(block),
        AnyBlock::SignedBlock(block) => encode_signed_block(block),
        AnyBlock::BlindedBlock(block) => encode_blinded_block(block),
        AnyBlock::SignedBlindedBlock(block) => encode_signed_blinded_block(block),
        AnyBlock::BlockContents(contents) => encode_block_contents(contents),
        AnyBlock::SignedBlockContents(contents) => encode_signed_block_contents(contents),
    }
}

/// Decodes an object and tags it with whether its execution payload is blinded.
///
/// The value of a payload cannot be recovered from its header, so it is zero for every object this
/// returns.
pub fn to_generic<P: Preset>(
    phase: Phase,
    kind: BlockKind,
    value: &Value,
) -> Result<Generic<AnyBlock<P>>, Error> {
    let block = decode(phase, kind, value)?;

    if kind.is_blinded() {
        Ok(Generic::blinded(block))
    } else {
        Ok(Generic::full(block))
    }
}

/// Replaces a signed wire object with the message it signs.
///
/// Unsigned kinds are returned unchanged. Nothing but the envelope is validated.
pub fn strip_signature(phase: Phase, kind: BlockKind, value: &Value) -> Result<Value, Error> {
    ensure_exists(phase, kind)?;

    match (kind, phase) {
        (BlockKind::Block | BlockKind::BlindedBlock | BlockKind::BlockContents, _) => {
            Ok(value.clone())
        }
        (BlockKind::SignedBlock, Phase::Phase0) => {
            strip_block::<phase0_json::SignedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlock, Phase::Altair) => {
            strip_block::<altair_json::SignedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlock, Phase::Bellatrix) => {
            strip_block::<bellatrix_json::SignedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlock, Phase::Capella) => {
            strip_block::<capella_json::SignedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlock, Phase::Deneb) => {
            strip_block::<deneb_json::SignedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlindedBlock, Phase::Bellatrix) => {
            strip_block::<bellatrix_json::SignedBlindedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlindedBlock, Phase::Capella) => {
            strip_block::<capella_json::SignedBlindedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlindedBlock, Phase::Deneb) => {
            strip_block::<deneb_json::SignedBlindedBeaconBlock, _>(phase, kind, value)
        }
        (BlockKind::SignedBlockContents, _) => {
            let contents =
                deserialize::<deneb_json::SignedBeaconBlockContents>(phase, kind, value)?;

            to_json(&contents.to_unsigned())
        }
        (BlockKind::SignedBlindedBlock, Phase::Phase0 | Phase::Altair) => {
            Err(Error::Unsupported { phase, kind })
        }
    }
}

pub fn decode_block<P: Preset>(phase: Phase, value: &Value) -> Result<BeaconBlock<P>, Error> {
    let kind = BlockKind::Block;

    let block = match phase {
        Phase::Phase0 => BeaconBlock::Phase0(decode_wire(phase, kind, value)?),
        Phase::Altair => BeaconBlock::Altair(decode_wire(phase, kind, value)?),
        Phase::Bellatrix => BeaconBlock::Bellatrix(decode_wire(phase, kind, value)?),
        Phase::Capella => BeaconBlock::Capella(decode_wire(phase, kind, value)?),
        Phase::Deneb => BeaconBlock::Deneb(decode_wire(phase, kind, value)?),
    };

    Ok(block)
}

pub fn decode_signed_block<P: Preset>(
    phase: Phase,
    value: &Value,
) -> Result<SignedBeaconBlock<P>, Error> {
    let kind = BlockKind::SignedBlock;

    let block = match phase {
        Phase::Phase0 => SignedBeaconBlock::Phase0(decode_wire(phase, kind, value)?),
        Phase::Altair => SignedBeaconBlock::Altair(decode_wire(phase, kind, value)?),
        Phase::Bellatrix => SignedBeaconBlock::Bellatrix(decode_wire(phase, kind, value)?),
        Phase::Capella => SignedBeaconBlock::Capella(decode_wire(phase, kind, value)?),
        Phase::Deneb => SignedBeaconBlock::Deneb(decode_wire(phase, kind, value)?),
    };

    Ok(block)
}

pub fn decode_blinded_block<P: Preset>(
    phase: Phase,
    value: &Value,
) -> Result<BlindedBeaconBlock<P>, Error> {
    let kind = BlockKind::BlindedBlock;

    let block = match phase {
        Phase::Phase0 | Phase::Altair => return Err(Error::Unsupported { phase, kind }),
        Phase::Bellatrix => BlindedBeaconBlock::Bellatrix(decode_wire(phase, kind, value)?),
        Phase::Capella => BlindedBeaconBlock::Capella(decode_wire(phase, kind, value)?),
        Phase::Deneb => BlindedBeaconBlock::Deneb(decode_wire(phase, kind, value)?),
    };

    Ok(block)
}

pub fn decode_signed_blinded_block<P: Preset>(
    phase: Phase,
    value: &Value,
) -> Result<SignedBlindedBeaconBlock<P>, Error> {
    let kind = BlockKind::SignedBlindedBlock;

    let block = match phase {
        Phase::Phase0 | Phase::Altair => return Err(Error::Unsupported { phase, kind }),
        Phase::Bellatrix => SignedBlindedBeaconBlock::Bellatrix(decode_wire(phase, kind, value)?),
        Phase::Capella => SignedBlindedBeaconBlock::Capella(decode_wire(phase, kind, value)?),
        Phase::Deneb => SignedBlindedBeaconBlock::Deneb(decode_wire(phase, kind, value)?),
    };

    Ok(block)
}

pub fn decode_block_contents<P: Preset>(
    phase: Phase,
    value: &Value,
) -> Result<BlockContents<P>, Error> {
    let kind = BlockKind::BlockContents;
    ensure_exists(phase, kind)?;
    decode_wire(phase, kind, value)
}

pub fn decode_signed_block_contents<P: Preset>(
    phase: Phase,
    value: &Value,
) -> Result<SignedBlockContents<P>, Error> {
    let kind = BlockKind::SignedBlockContents;
    ensure_exists(phase, kind)?;
    decode_wire(phase, kind, value)
}

pub fn encode_block<P: Preset>(block: &BeaconBlock<P>) -> Result<Value, Error> {
    match block {
        BeaconBlock::Phase0(block) => to_json(&block.encode()),
        BeaconBlock::Altair(block) => to_json(&block.encode()),
        BeaconBlock::Bellatrix(block) => to_json(&block.try_encode()?),
        BeaconBlock::Capella(block) => to_json(&block.try_encode()?),
        BeaconBlock::Deneb(block) => to_json(&block.try_encode()?),
    }
}

pub fn encode_signed_block<P: Preset>(block: &SignedBeaconBlock<P>) -> Result<Value, Error> {
    match block {
        SignedBeaconBlock::Phase0(block) => to_json(&block.encode()),
        SignedBeaconBlock::Altair(block) => to_json(&block.encode()),
        SignedBeaconBlock::Bellatrix(block) => to_json(&block.try_encode()?),
        SignedBeaconBlock::Capella(block) => to_json(&block.try_encode()?),
        SignedBeaconBlock::Deneb(block) => to_json(&block.try_encode()?),
    }
}

pub fn encode_blinded_block<P: Preset>(block: &BlindedBeaconBlock<P>) -> Result<Value, Error> {
    match block {
        BlindedBeaconBlock::Bellatrix(block) => to_json(&block.try_encode()?),
        BlindedBeaconBlock::Capella(block) => to_json(&block.try_encode()?),
        BlindedBeaconBlock::Deneb(block) => to_json(&block.try_encode()?),
    }
}

pub fn encode_signed_blinded_block<P: Preset>(
    block: &SignedBlindedBeaconBlock<P>,
) -> Result<Value, Error> {
    match block {
        SignedBlindedBeaconBlock::Bellatrix(block) => to_json(&block.try_encode()?),
        SignedBlindedBeaconBlock::Capella(block) => to_json(&block.try_encode()?),
        SignedBlindedBeaconBlock::Deneb(block) => to_json(&block.try_encode()?),
    }
}

pub fn encode_block_contents<P: Preset>(contents: &BlockContents<P>) -> Result<Value, Error> {
    to_json(&contents.try_encode()?)
}

pub fn encode_signed_block_contents<P: Preset>(
    contents: &SignedBlockContents<P>,
) -> Result<Value, Error> {
    to_json(&contents.try_encode()?)
}

fn ensure_exists(phase: Phase, kind: BlockKind) -> Result<(), Error> {
    if kind.exists_in(phase) {
        Ok(())
    } else {
        Err(Error::Unsupported { phase, kind })
    }
}

fn deserialize<W: DeserializeOwned>(
    phase: Phase,
    kind: BlockKind,
    value: &Value,
) -> Result<W, Error> {
    <W as Deserialize>::deserialize(value).map_err(|source| Error::Shape {
        phase,
        kind,
        source,
    })
}

fn decode_wire<T>(phase: Phase, kind: BlockKind, value: &Value) -> Result<T, Error>
where
    T: Decode,
    T::Wire: DeserializeOwned,
{
    let wire = deserialize(phase, kind, value)?;
    Ok(T::decode(&wire)?)
}

fn strip_block<W, U>(phase: Phase, kind: BlockKind, value: &Value) -> Result<Value, Error>
where
    W: DeserializeOwned + ToUnsigned<Unsigned = Option<U>>,
    U: Serialize,
{
    let signed = deserialize::<W>(phase, kind, value)?;
    let message = required(signed.to_unsigned()).at("Message")?;
    to_json(&message)
}

fn to_json(wire: &impl Serialize) -> Result<Value, Error> {
    serde_json::to_value(wire).map_err(Error::Serialize)
}

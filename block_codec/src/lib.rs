//! Conversion between beacon block objects in wire form and their typed internal representations.
//!
//! Wire objects carry every integer as a decimal string and every byte sequence as a `0x`-prefixed
//! hex string. Decoding validates lengths and list bounds for the selected preset and reports the
//! first failure together with the path of the offending field.

pub use crate::{
    combined::{
        decode, decode_blinded_block, decode_block, decode_block_contents,
        decode_signed_blinded_block, decode_signed_block, decode_signed_block_contents, encode,
        encode_blinded_block, encode_block, encode_block_contents, encode_signed_blinded_block,
        encode_signed_block, encode_signed_block_contents, strip_signature, to_generic, AnyBlock,
        BlockKind, Error,
    },
    error::{DecodeError, EncodeError, FieldError, FieldPath, InvariantViolation, PathSegment},
    traits::{Decode, Encode, ToUnsigned, TryEncode},
};

pub mod combined;
pub mod error;
pub mod traits;

pub mod phase0 {
    pub mod containers;

    mod codec;
}

pub mod altair {
    pub mod containers;

    mod codec;
}

pub mod bellatrix {
    pub mod containers;

    mod codec;
}

pub mod capella {
    pub mod containers;

    mod codec;
}

pub mod deneb {
    pub mod containers;

    mod codec;
}

mod blocks;
mod bodies;
mod bounded;
mod nested;
mod nullable;
mod payloads;
mod scalar;
mod uint256;

#[cfg(test)]
mod fixtures;

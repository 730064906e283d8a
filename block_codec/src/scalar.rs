//! Conversions of individual wire strings.
//!
//! Integers are unsigned decimal strings. Byte buffers are `0x`-prefixed hex strings with an even
//! number of digits. An empty string is reported as [`FieldError::Required`] rather than as an
//! invalid value.

use duplicate::duplicate_item;
use typenum::Unsigned;
use types::{
    collections::{ByteList, ByteVector},
    deneb::primitives::KzgCommitment,
    phase0::primitives::{PublicKeyBytes, SignatureBytes, H160, H256, H32},
};

use crate::error::FieldError;

/// Fixed-size byte types that appear on the wire as hex strings of a known length.
pub trait FixedBytes: Sized {
    const LENGTH: usize;

    fn from_exact_slice(bytes: &[u8]) -> Self;

    fn bytes(&self) -> &[u8];
}

#[duplicate_item(
    implementor;
    [H32];
    [H160];
    [H256];
    [KzgCommitment];
    [PublicKeyBytes];
    [SignatureBytes];
)]
impl FixedBytes for implementor {
    const LENGTH: usize = Self::len_bytes();

    // Callers guarantee the length, which is what `from_slice` asserts.
    fn from_exact_slice(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }

    fn bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

pub fn decode_hex(string: &str) -> Result<Vec<u8>, FieldError> {
    if string.is_empty() {
        return Err(FieldError::Required);
    }

    let digits = string
        .strip_prefix("0x")
        .ok_or(FieldError::MissingHexPrefix)?;

    Ok(hex::decode(digits)?)
}

pub fn decode_hex_fixed(string: &str, length: usize) -> Result<Vec<u8>, FieldError> {
    let bytes = decode_hex(string)?;

    if bytes.len() != length {
        return Err(FieldError::LengthMismatch {
            expected: length,
            actual: bytes.len(),
        });
    }

    Ok(bytes)
}

pub fn decode_hex_bounded(string: &str, maximum: usize) -> Result<Vec<u8>, FieldError> {
    let bytes = decode_hex(string)?;

    if bytes.len() > maximum {
        return Err(FieldError::TooLong {
            maximum,
            actual: bytes.len(),
        });
    }

    Ok(bytes)
}

pub fn decode_fixed<T: FixedBytes>(string: &str) -> Result<T, FieldError> {
    decode_hex_fixed(string, T::LENGTH).map(|bytes| T::from_exact_slice(&bytes))
}

pub fn decode_byte_vector<N: Unsigned>(string: &str) -> Result<ByteVector<N>, FieldError> {
    Ok(decode_hex_fixed(string, N::USIZE)?.try_into()?)
}

pub fn decode_byte_list<N: Unsigned>(string: &str) -> Result<ByteList<N>, FieldError> {
    Ok(decode_hex_bounded(string, N::USIZE)?.try_into()?)
}

/// Parses a base 10 integer that fits in 64 bits.
///
/// Signs and whitespace are rejected even though [`str::parse`] would accept a leading `+`.
pub fn parse_decimal_u64(string: &str) -> Result<u64, FieldError> {
    if string.is_empty() || !string.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(FieldError::InvalidDecimal);
    }

    string.parse().map_err(|_| FieldError::InvalidDecimal)
}

#[must_use]
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    const_hex::encode_prefixed(bytes)
}

#[must_use]
pub fn encode_fixed(value: &impl FixedBytes) -> String {
    encode_hex(value.bytes())
}

#[must_use]
pub fn encode_decimal(value: u64) -> String {
    value.to_string()
}

//! Conversions of 256-bit integers.
//!
//! These are the only integers that do not fit in 64 bits. The wire form is a decimal string like
//! every other integer, but the internal form is 32 little-endian bytes rather than big-endian
//! hex.

use num_bigint::BigUint;
use num_traits::Num as _;
use types::bellatrix::primitives::Wei;

use crate::error::{FieldError, InvariantViolation};

const BYTES: usize = 32;
const BITS: u64 = 256;

pub fn decode(string: &str) -> Result<Wei, FieldError> {
    if string.is_empty() {
        return Err(FieldError::Required);
    }

    // A well-formed negative number is out of range rather than unparseable.
    if let Some(digits) = string.strip_prefix('-') {
        return Err(if is_decimal(digits) {
            FieldError::Uint256OutOfRange {
                value: string.to_owned(),
            }
        } else {
            FieldError::Uint256Unparseable
        });
    }

    if !is_decimal(string) {
        return Err(FieldError::Uint256Unparseable);
    }

    let value = BigUint::from_str_radix(string, 10).map_err(|_| FieldError::Uint256Unparseable)?;

    if value.bits() > BITS {
        return Err(FieldError::Uint256OutOfRange {
            value: string.to_owned(),
        });
    }

    let mut bytes = value.to_bytes_le();

    bytes.resize(BYTES, 0);

    let mut array = [0; BYTES];
    array.copy_from_slice(&bytes);

    Ok(Wei::from_le_bytes(array))
}

// `from_str_radix` also accepts a leading `+` and digit separators, neither of which is valid on
// the wire.
fn is_decimal(string: &str) -> bool {
    !string.is_empty() && string.bytes().all(|byte| byte.is_ascii_digit())
}

pub fn encode(value: Wei) -> Result<String, InvariantViolation> {
    encode_le_bytes(&value.to_le_bytes())
}

/// Renders little-endian bytes of any length as a decimal string.
///
/// Accepting more than 32 bytes lets corrupted buffers be reported instead of truncated.
pub fn encode_le_bytes(bytes: &[u8]) -> Result<String, InvariantViolation> {
    let value = BigUint::from_bytes_le(bytes);

    if value.bits() > BITS {
        return Err(InvariantViolation::Uint256OutOfRange {
            value: value.to_string(),
        });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use test_case::test_case;

    use super::*;

    const MAX: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    const OVERFLOW: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639936";

    #[test_case("0",   [0; 32])]
    #[test_case("7",   hex!("0700000000000000000000000000000000000000000000000000000000000000"))]
    #[test_case("256", hex!("0001000000000000000000000000000000000000000000000000000000000000"))]
    #[test_case(MAX,   [0xff; 32])]
    fn decoding_produces_little_endian_bytes(string: &str, expected: [u8; 32]) {
        assert_eq!(decode(string), Ok(Wei::from_le_bytes(expected)));
    }

    #[test_case("",         FieldError::Required)]
    #[test_case("abc",      FieldError::Uint256Unparseable)]
    #[test_case("-",        FieldError::Uint256Unparseable)]
    #[test_case("1_000",    FieldError::Uint256Unparseable)]
    #[test_case("0x10",     FieldError::Uint256Unparseable)]
    #[test_case(" 1",       FieldError::Uint256Unparseable)]
    #[test_case("+7",       FieldError::Uint256Unparseable)]
    #[test_case("-+7",      FieldError::Uint256Unparseable)]
    #[test_case("-1",       FieldError::Uint256OutOfRange { value: "-1".to_owned() })]
    #[test_case("-0",       FieldError::Uint256OutOfRange { value: "-0".to_owned() })]
    #[test_case(OVERFLOW,   FieldError::Uint256OutOfRange { value: OVERFLOW.to_owned() })]
    fn decoding_rejects(string: &str, expected: FieldError) {
        assert_eq!(decode(string), Err(expected));
    }

    #[test_case("0")]
    #[test_case("1000000000")]
    #[test_case(MAX)]
    fn round_trip_preserves_canonical_strings(string: &str) -> anyhow::Result<()> {
        assert_eq!(encode(decode(string)?)?, string);
        Ok(())
    }

    #[test]
    fn encoding_rejects_values_past_the_ceiling() {
        let mut corrupted = [0; 33];
        corrupted[32] = 1;

        assert_eq!(
            encode_le_bytes(&corrupted),
            Err(InvariantViolation::Uint256OutOfRange {
                value: OVERFLOW.to_owned(),
            }),
        );
    }

    #[test]
    fn encoding_accepts_short_buffers() {
        assert_eq!(encode_le_bytes(&[]), Ok("0".to_owned()));
        assert_eq!(encode_le_bytes(&[0, 1]), Ok("256".to_owned()));
    }
}

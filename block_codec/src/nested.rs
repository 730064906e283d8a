use types::phase0::primitives::SignatureBytes;

use crate::{
    error::{required, DecodeError, WithPath as _},
    scalar::decode_fixed,
    traits::Decode,
};

/// Decodes a nested object that must be present.
///
/// The caller attaches the field name, so absence and invalid contents share a path prefix.
pub fn decode_required<T: Decode>(wire: Option<&T::Wire>) -> Result<T, DecodeError> {
    T::decode(required(wire)?)
}

/// Decodes both halves of a signed envelope, signature first.
pub fn decode_signed<T: Decode>(
    message: Option<&T::Wire>,
    signature: &str,
) -> Result<(T, SignatureBytes), DecodeError> {
    let signature = decode_fixed(signature).at("Signature")?;
    let message = decode_required(message).at("Message")?;
    Ok((message, signature))
}

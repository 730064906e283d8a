use crate::error::{DecodeError, EncodeError};

/// Conversion from wire form.
///
/// Implemented on internal types. The first invalid field aborts the conversion and is reported
/// with its path relative to `wire`.
pub trait Decode: Sized {
    type Wire;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError>;
}

/// Conversion to wire form for objects where every value is representable by construction.
pub trait Encode {
    type Wire;

    fn encode(&self) -> Self::Wire;
}

/// Conversion to wire form for objects containing 256-bit integers.
///
/// Those are stored as raw bytes, so a corrupted value can only be detected while encoding.
pub trait TryEncode {
    type Wire;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError>;
}

/// Strips the signature from a signed wire object.
pub trait ToUnsigned {
    type Unsigned;

    fn to_unsigned(&self) -> Self::Unsigned;
}

use derive_more::AsRef;
use fixed_hash::construct_fixed_hash;

use crate::{collections::ByteList, preset::Preset};

construct_fixed_hash! {
    /// 256-bit unsigned integer stored as 32 little-endian bytes.
    ///
    /// Arithmetic is never performed on these values, so only the byte layout is fixed.
    #[derive(AsRef)]
    pub struct Uint256Bytes(32);
}

impl Uint256Bytes {
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 32] {
        self.0
    }
}

pub type Gas = u64;
pub type Transaction<P> = ByteList<<P as Preset>::MaxBytesPerTransaction>;
pub type Wei = Uint256Bytes;

use derive_more::AsRef;
use fixed_hash::construct_fixed_hash;

pub use ethereum_types::{H160, H256, H32};

pub type CommitteeIndex = u64;
pub type DepositIndex = u64;
pub type Epoch = u64;
pub type ExecutionAddress = H160;
pub type ExecutionBlockHash = H256;
pub type ExecutionBlockNumber = u64;
pub type Gwei = u64;
pub type Slot = u64;
pub type UnixSeconds = u64;
pub type ValidatorIndex = u64;
pub type Version = H32;

construct_fixed_hash! {
    /// Compressed BLS public key.
    ///
    /// Kept as raw bytes because the point is never decompressed here.
    #[derive(AsRef)]
    pub struct PublicKeyBytes(48);
}

construct_fixed_hash! {
    /// Compressed BLS signature.
    #[derive(AsRef)]
    pub struct SignatureBytes(96);
}

use crate::{
    capella::containers::{
        BeaconBlock, BlindedBeaconBlock, SignedBeaconBlock, SignedBlindedBeaconBlock,
    },
    phase0::primitives::SignatureBytes,
    preset::Preset,
};

impl<P: Preset> BeaconBlock<P> {
    #[must_use]
    pub const fn with_signature(self, signature: SignatureBytes) -> SignedBeaconBlock<P> {
        SignedBeaconBlock {
            message: self,
            signature,
        }
    }
}

impl<P: Preset> BlindedBeaconBlock<P> {
    #[must_use]
    pub const fn with_signature(self, signature: SignatureBytes) -> SignedBlindedBeaconBlock<P> {
        SignedBlindedBeaconBlock {
            message: self,
            signature,
        }
    }
}

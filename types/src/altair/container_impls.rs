use crate::{
    altair::containers::{BeaconBlock, SignedBeaconBlock},
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

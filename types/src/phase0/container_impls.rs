use crate::{
    phase0::{
        containers::{BeaconBlock, SignedBeaconBlock},
        primitives::SignatureBytes,
    },
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

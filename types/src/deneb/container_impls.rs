use crate::{
    deneb::containers::{
        BeaconBlock, BeaconBlockContents, BlindedBeaconBlock, SignedBeaconBlock,
        SignedBeaconBlockContents, SignedBlindedBeaconBlock,
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

impl<P: Preset> SignedBeaconBlockContents<P> {
    /// Drops the signature while keeping the proofs and blobs.
    #[must_use]
    pub fn into_unsigned(self) -> BeaconBlockContents<P> {
        let Self {
            signed_block,
            kzg_proofs,
            blobs,
        } = self;

        BeaconBlockContents {
            block: signed_block.message,
            kzg_proofs,
            blobs,
        }
    }
}

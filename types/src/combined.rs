use derive_more::From;
use enum_iterator::Sequence as _;
use static_assertions::const_assert_eq;
use variant_count::VariantCount;

use crate::{
    altair::containers::{
        BeaconBlock as AltairBeaconBlock, SignedBeaconBlock as AltairSignedBeaconBlock,
    },
    bellatrix::containers::{
        BeaconBlock as BellatrixBeaconBlock, BlindedBeaconBlock as BellatrixBlindedBeaconBlock,
        SignedBeaconBlock as BellatrixSignedBeaconBlock,
        SignedBlindedBeaconBlock as BellatrixSignedBlindedBeaconBlock,
    },
    capella::containers::{
        BeaconBlock as CapellaBeaconBlock, BlindedBeaconBlock as CapellaBlindedBeaconBlock,
        SignedBeaconBlock as CapellaSignedBeaconBlock,
        SignedBlindedBeaconBlock as CapellaSignedBlindedBeaconBlock,
    },
    deneb::containers::{
        BeaconBlock as DenebBeaconBlock, BeaconBlockContents,
        BlindedBeaconBlock as DenebBlindedBeaconBlock,
        SignedBeaconBlock as DenebSignedBeaconBlock, SignedBeaconBlockContents,
        SignedBlindedBeaconBlock as DenebSignedBlindedBeaconBlock,
    },
    nonstandard::Phase,
    phase0::{
        containers::{
            BeaconBlock as Phase0BeaconBlock, SignedBeaconBlock as Phase0SignedBeaconBlock,
        },
        primitives::{SignatureBytes, Slot},
    },
    preset::{Mainnet, Preset},
};

// Blobs are only submitted alongside blocks starting with Deneb.
pub type BlockContents<P> = BeaconBlockContents<P>;
pub type SignedBlockContents<P> = SignedBeaconBlockContents<P>;

#[derive(Clone, PartialEq, Eq, Debug, From, VariantCount)]
pub enum BeaconBlock<P: Preset> {
    Phase0(Phase0BeaconBlock<P>),
    Altair(AltairBeaconBlock<P>),
    Bellatrix(BellatrixBeaconBlock<P>),
    Capella(CapellaBeaconBlock<P>),
    Deneb(DenebBeaconBlock<P>),
}

const_assert_eq!(BeaconBlock::<Mainnet>::VARIANT_COUNT, Phase::CARDINALITY);

#[derive(Clone, PartialEq, Eq, Debug, From, VariantCount)]
pub enum SignedBeaconBlock<P: Preset> {
    Phase0(Phase0SignedBeaconBlock<P>),
    Altair(AltairSignedBeaconBlock<P>),
    Bellatrix(BellatrixSignedBeaconBlock<P>),
    Capella(CapellaSignedBeaconBlock<P>),
    Deneb(DenebSignedBeaconBlock<P>),
}

const_assert_eq!(SignedBeaconBlock::<Mainnet>::VARIANT_COUNT, Phase::CARDINALITY);

#[derive(Clone, PartialEq, Eq, Debug, From, VariantCount)]
pub enum BlindedBeaconBlock<P: Preset> {
    Bellatrix(BellatrixBlindedBeaconBlock<P>),
    Capella(CapellaBlindedBeaconBlock<P>),
    Deneb(DenebBlindedBeaconBlock<P>),
}

// Phase 0 and Altair blocks have no execution payload to blind.
const_assert_eq!(BlindedBeaconBlock::<Mainnet>::VARIANT_COUNT, Phase::CARDINALITY - 2);

#[derive(Clone, PartialEq, Eq, Debug, From, VariantCount)]
pub enum SignedBlindedBeaconBlock<P: Preset> {
    Bellatrix(BellatrixSignedBlindedBeaconBlock<P>),
    Capella(CapellaSignedBlindedBeaconBlock<P>),
    Deneb(DenebSignedBlindedBeaconBlock<P>),
}

const_assert_eq!(
    SignedBlindedBeaconBlock::<Mainnet>::VARIANT_COUNT,
    BlindedBeaconBlock::<Mainnet>::VARIANT_COUNT,
);

impl<P: Preset> BeaconBlock<P> {
    #[must_use]
    pub fn with_signature(self, signature: SignatureBytes) -> SignedBeaconBlock<P> {
        match self {
            Self::Phase0(message) => message.with_signature(signature).into(),
            Self::Altair(message) => message.with_signature(signature).into(),
            Self::Bellatrix(message) => message.with_signature(signature).into(),
            Self::Capella(message) => message.with_signature(signature).into(),
            Self::Deneb(message) => message.with_signature(signature).into(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Phase0(_) => Phase::Phase0,
            Self::Altair(_) => Phase::Altair,
            Self::Bellatrix(_) => Phase::Bellatrix,
            Self::Capella(_) => Phase::Capella,
            Self::Deneb(_) => Phase::Deneb,
        }
    }

    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::Phase0(block) => block.slot,
            Self::Altair(block) => block.slot,
            Self::Bellatrix(block) => block.slot,
            Self::Capella(block) => block.slot,
            Self::Deneb(block) => block.slot,
        }
    }
}

impl<P: Preset> SignedBeaconBlock<P> {
    #[must_use]
    pub fn split(self) -> (BeaconBlock<P>, SignatureBytes) {
        match self {
            Self::Phase0(block) => (block.message.into(), block.signature),
            Self::Altair(block) => (block.message.into(), block.signature),
            Self::Bellatrix(block) => (block.message.into(), block.signature),
            Self::Capella(block) => (block.message.into(), block.signature),
            Self::Deneb(block) => (block.message.into(), block.signature),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Phase0(_) => Phase::Phase0,
            Self::Altair(_) => Phase::Altair,
            Self::Bellatrix(_) => Phase::Bellatrix,
            Self::Capella(_) => Phase::Capella,
            Self::Deneb(_) => Phase::Deneb,
        }
    }

    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::Phase0(block) => block.message.slot,
            Self::Altair(block) => block.message.slot,
            Self::Bellatrix(block) => block.message.slot,
            Self::Capella(block) => block.message.slot,
            Self::Deneb(block) => block.message.slot,
        }
    }
}

impl<P: Preset> BlindedBeaconBlock<P> {
    #[must_use]
    pub fn with_signature(self, signature: SignatureBytes) -> SignedBlindedBeaconBlock<P> {
        match self {
            Self::Bellatrix(message) => message.with_signature(signature).into(),
            Self::Capella(message) => message.with_signature(signature).into(),
            Self::Deneb(message) => message.with_signature(signature).into(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Bellatrix(_) => Phase::Bellatrix,
            Self::Capella(_) => Phase::Capella,
            Self::Deneb(_) => Phase::Deneb,
        }
    }
}

impl<P: Preset> SignedBlindedBeaconBlock<P> {
    #[must_use]
    pub fn split(self) -> (BlindedBeaconBlock<P>, SignatureBytes) {
        match self {
            Self::Bellatrix(block) => (block.message.into(), block.signature),
            Self::Capella(block) => (block.message.into(), block.signature),
            Self::Deneb(block) => (block.message.into(), block.signature),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Bellatrix(_) => Phase::Bellatrix,
            Self::Capella(_) => Phase::Capella,
            Self::Deneb(_) => Phase::Deneb,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::preset::Minimal;

    use super::*;

    #[test]
    fn signing_and_splitting_preserves_block() {
        let block = BeaconBlock::<Minimal>::from(CapellaBeaconBlock {
            slot: 42,
            ..CapellaBeaconBlock::default()
        });
        let signature = SignatureBytes::repeat_byte(7);

        let signed = block.clone().with_signature(signature);

        assert_eq!(signed.phase(), Phase::Capella);
        assert_eq!(signed.slot(), 42);
        assert_eq!(signed.split(), (block, signature));
    }

    #[test]
    fn blinded_block_phase_matches_variant() {
        let block = BlindedBeaconBlock::<Minimal>::from(DenebBlindedBeaconBlock::default());
        let signed = block.with_signature(SignatureBytes::zero());

        assert_eq!(signed.phase(), Phase::Deneb);
        assert_eq!(signed.split().0.phase(), Phase::Deneb);
    }
}

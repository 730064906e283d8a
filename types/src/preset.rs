#![allow(clippy::module_name_repetitions)]

use core::{fmt::Debug, hash::Hash};

use static_assertions::const_assert_eq;
use strum::{Display, EnumString};
use typenum::{
    Add1, NonZero, Prod, Quot, Unsigned, U1048576, U1073741824, U128, U16, U2, U2048, U256,
    U32, U4, U4096, U512, U6, U8,
};

use crate::{altair::consts::SyncCommitteeSubnetCount, deneb::consts::BytesPerFieldElement};

#[cfg(test)]
use ::{enum_iterator::Sequence, strum::VariantNames};

/// Compile-time configuration variables.
///
/// Only the maximum sizes that bound block contents are included.
/// See [presets in `consensus-specs`](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets).
pub trait Preset: Copy + Eq + Ord + Hash + Default + Debug + Send + Sync + 'static {
    // Phase 0
    type MaxAttestations: Unsigned + Eq + Debug + Send + Sync;
    type MaxAttesterSlashings: Unsigned + Eq + Debug + Send + Sync;
    type MaxDeposits: Unsigned + Eq + Debug + Send + Sync;
    type MaxProposerSlashings: Unsigned + Eq + Debug + Send + Sync;
    type MaxValidatorsPerCommittee: Unsigned + NonZero + Eq + Ord + Debug + Send + Sync;
    type MaxVoluntaryExits: Unsigned + Eq + Debug + Send + Sync;

    // Altair
    type SyncCommitteeSize: Unsigned + NonZero + Eq + Debug + Send + Sync;

    // Bellatrix
    type BytesPerLogsBloom: Unsigned + Eq + Debug + Send + Sync;
    type MaxBytesPerTransaction: Unsigned + Send + Sync;
    type MaxExtraDataBytes: Unsigned + Eq + Debug + Send + Sync;
    type MaxTransactionsPerPayload: Unsigned + Eq + Debug + Send + Sync;

    // Capella
    type MaxBlsToExecutionChanges: Unsigned + Eq + Debug + Send + Sync;
    type MaxWithdrawalsPerPayload: Unsigned + NonZero + Eq + Debug + Send + Sync;

    // Deneb
    type FieldElementsPerBlob: Unsigned + NonZero;
    type MaxBlobCommitmentsPerBlock: Unsigned + Eq + Debug + Send + Sync;
    type MaxBlobsPerBlock: Unsigned + Eq + Debug + Send + Sync;

    // Derived type-level variables
    type BytesPerBlob: Unsigned + Eq + Debug + Send + Sync;
    type MaxAggregationBitsBytes: Unsigned + Eq + Debug + Send + Sync;
    type SyncCommitteeBitsBytes: Unsigned + Eq + Debug + Send + Sync;
    type SyncSubcommitteeBitsBytes: Unsigned + Eq + Debug + Send + Sync;
}

/// [Mainnet preset](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets/mainnet).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Mainnet;

impl Preset for Mainnet {
    // Phase 0
    type MaxAttestations = U128;
    type MaxAttesterSlashings = U2;
    type MaxDeposits = U16;
    type MaxProposerSlashings = U16;
    type MaxValidatorsPerCommittee = U2048;
    type MaxVoluntaryExits = U16;

    // Altair
    type SyncCommitteeSize = U512;

    // Bellatrix
    type BytesPerLogsBloom = U256;
    type MaxBytesPerTransaction = U1073741824;
    type MaxExtraDataBytes = U32;
    type MaxTransactionsPerPayload = U1048576;

    // Capella
    type MaxBlsToExecutionChanges = U16;
    type MaxWithdrawalsPerPayload = U16;

    // Deneb
    type FieldElementsPerBlob = U4096;
    type MaxBlobCommitmentsPerBlock = U4096;
    type MaxBlobsPerBlock = U6;

    // Derived type-level variables
    type BytesPerBlob = Prod<BytesPerFieldElement, Self::FieldElementsPerBlob>;
    type MaxAggregationBitsBytes = Add1<Quot<Self::MaxValidatorsPerCommittee, U8>>;
    type SyncCommitteeBitsBytes = Quot<Self::SyncCommitteeSize, U8>;
    type SyncSubcommitteeBitsBytes =
        Quot<Quot<Self::SyncCommitteeSize, SyncCommitteeSubnetCount>, U8>;
}

// `delegate_preset_items!` cannot be used with associated types that depend on other ones,
// so derived items are spelled out in every preset.
macro_rules! delegate_preset_items {
    (
        super $base_preset: ident;
        $(type $associated_type: ident;)*
    ) => {
        $(type $associated_type = <$base_preset as Preset>::$associated_type;)*
    };
}

/// [Minimal preset](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets/minimal).
///
/// Differs from [`Mainnet`] only in the sizes that depend on the sync committee,
/// withdrawals and blob commitments.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Minimal;

impl Preset for Minimal {
    delegate_preset_items! {
        super Mainnet;

        // Phase 0
        type MaxAttestations;
        type MaxAttesterSlashings;
        type MaxDeposits;
        type MaxProposerSlashings;
        type MaxValidatorsPerCommittee;
        type MaxVoluntaryExits;

        // Bellatrix
        type BytesPerLogsBloom;
        type MaxBytesPerTransaction;
        type MaxExtraDataBytes;
        type MaxTransactionsPerPayload;

        // Capella
        type MaxBlsToExecutionChanges;

        // Deneb
        type FieldElementsPerBlob;
        type MaxBlobsPerBlock;
        type BytesPerBlob;
        type MaxAggregationBitsBytes;
    }

    // Altair
    type SyncCommitteeSize = U32;

    // Capella
    type MaxWithdrawalsPerPayload = U4;

    // Deneb
    type MaxBlobCommitmentsPerBlock = U16;

    // Derived type-level variables
    type SyncCommitteeBitsBytes = Quot<Self::SyncCommitteeSize, U8>;
    type SyncSubcommitteeBitsBytes =
        Quot<Quot<Self::SyncCommitteeSize, SyncCommitteeSubnetCount>, U8>;
}

const_assert_eq!(<Mainnet as Preset>::MaxAttesterSlashings::USIZE, 2);
const_assert_eq!(<Mainnet as Preset>::BytesPerBlob::USIZE, 131_072);
const_assert_eq!(<Mainnet as Preset>::MaxAggregationBitsBytes::USIZE, 257);
const_assert_eq!(<Mainnet as Preset>::SyncCommitteeBitsBytes::USIZE, 64);
const_assert_eq!(<Mainnet as Preset>::SyncSubcommitteeBitsBytes::USIZE, 16);
const_assert_eq!(<Minimal as Preset>::SyncCommitteeBitsBytes::USIZE, 4);
const_assert_eq!(<Minimal as Preset>::SyncSubcommitteeBitsBytes::USIZE, 1);

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Display, EnumString)]
#[cfg_attr(test, derive(Sequence, VariantNames))]
#[strum(serialize_all = "lowercase")]
pub enum PresetName {
    #[default]
    Mainnet,
    Minimal,
}

#[cfg(test)]
mod tests {
    use core::str::FromStr as _;

    use enum_iterator::all;

    use super::*;

    #[test]
    fn preset_name_round_trips_through_strings() -> Result<(), strum::ParseError> {
        for name in all::<PresetName>() {
            assert_eq!(PresetName::from_str(&name.to_string())?, name);
        }

        Ok(())
    }

    #[test]
    fn preset_names_are_lowercase() {
        assert_eq!(PresetName::VARIANTS, ["mainnet", "minimal"]);
    }

    #[test]
    fn operation_limits_are_shared_by_presets() {
        assert_eq!(<Mainnet as Preset>::MaxProposerSlashings::USIZE, 16);
        assert_eq!(<Mainnet as Preset>::MaxAttesterSlashings::USIZE, 2);
        assert_eq!(<Minimal as Preset>::MaxAttesterSlashings::USIZE, 2);
        assert_eq!(<Minimal as Preset>::MaxDeposits::USIZE, 16);
        assert_eq!(<Minimal as Preset>::MaxVoluntaryExits::USIZE, 16);
    }

    #[test]
    fn minimal_preset_shrinks_only_bounded_sizes() {
        assert_eq!(<Minimal as Preset>::MaxAttestations::USIZE, 128);
        assert_eq!(<Minimal as Preset>::MaxWithdrawalsPerPayload::USIZE, 4);
        assert_eq!(<Minimal as Preset>::MaxBlobCommitmentsPerBlock::USIZE, 16);
        assert_eq!(<Mainnet as Preset>::MaxBlobCommitmentsPerBlock::USIZE, 4096);
    }
}

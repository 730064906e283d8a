use crate::{
    altair::primitives::SubcommitteeIndex,
    collections::{ByteVector, ContiguousList},
    phase0::{
        containers::{
            Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit,
        },
        primitives::{SignatureBytes, Slot, ValidatorIndex, H256},
    },
    preset::Preset,
};

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BeaconBlock<P: Preset> {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: H256,
    pub state_root: H256,
    pub body: BeaconBlockBody<P>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BeaconBlockBody<P: Preset> {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: H256,
    pub proposer_slashings: ContiguousList<ProposerSlashing, P::MaxProposerSlashings>,
    pub attester_slashings: ContiguousList<AttesterSlashing<P>, P::MaxAttesterSlashings>,
    pub attestations: ContiguousList<Attestation<P>, P::MaxAttestations>,
    pub deposits: ContiguousList<Deposit, P::MaxDeposits>,
    pub voluntary_exits: ContiguousList<SignedVoluntaryExit, P::MaxVoluntaryExits>,
    pub sync_aggregate: SyncAggregate<P>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ContributionAndProof<P: Preset> {
    pub aggregator_index: ValidatorIndex,
    pub contribution: SyncCommitteeContribution<P>,
    pub selection_proof: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SignedBeaconBlock<P: Preset> {
    pub message: BeaconBlock<P>,
    pub signature: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SignedContributionAndProof<P: Preset> {
    pub message: ContributionAndProof<P>,
    pub signature: SignatureBytes,
}

/// Participation bits are stored packed, one bit per sync committee member.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SyncAggregate<P: Preset> {
    pub sync_committee_bits: ByteVector<P::SyncCommitteeBitsBytes>,
    pub sync_committee_signature: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SyncCommitteeContribution<P: Preset> {
    pub slot: Slot,
    pub beacon_block_root: H256,
    pub subcommittee_index: SubcommitteeIndex,
    pub aggregation_bits: ByteVector<P::SyncSubcommitteeBitsBytes>,
    pub signature: SignatureBytes,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct SyncCommitteeMessage {
    pub slot: Slot,
    pub beacon_block_root: H256,
    pub validator_index: ValidatorIndex,
    pub signature: SignatureBytes,
}


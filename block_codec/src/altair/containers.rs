use serde::{Deserialize, Serialize};

use crate::{
    nullable,
    phase0::containers::{
        Attestation, AttesterSlashing, Deposit, Eth1Data, ProposerSlashing, SignedVoluntaryExit,
    },
};

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BeaconBlock {
    #[serde(deserialize_with = "nullable::string")]
    pub slot: String,
    #[serde(deserialize_with = "nullable::string")]
    pub proposer_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub parent_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub state_root: String,
    pub body: Option<BeaconBlockBody>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BeaconBlockBody {
    #[serde(deserialize_with = "nullable::string")]
    pub randao_reveal: String,
    pub eth1_data: Option<Eth1Data>,
    #[serde(deserialize_with = "nullable::string")]
    pub graffiti: String,
    pub proposer_slashings: Option<Vec<Option<ProposerSlashing>>>,
    pub attester_slashings: Option<Vec<Option<AttesterSlashing>>>,
    pub attestations: Option<Vec<Option<Attestation>>>,
    pub deposits: Option<Vec<Option<Deposit>>>,
    pub voluntary_exits: Option<Vec<Option<SignedVoluntaryExit>>>,
    pub sync_aggregate: Option<SyncAggregate>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ContributionAndProof {
    #[serde(deserialize_with = "nullable::string")]
    pub aggregator_index: String,
    pub contribution: Option<SyncCommitteeContribution>,
    #[serde(deserialize_with = "nullable::string")]
    pub selection_proof: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SignedBeaconBlock {
    pub message: Option<BeaconBlock>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SignedContributionAndProof {
    pub message: Option<ContributionAndProof>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncAggregate {
    #[serde(deserialize_with = "nullable::string")]
    pub sync_committee_bits: String,
    #[serde(deserialize_with = "nullable::string")]
    pub sync_committee_signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncCommitteeContribution {
    #[serde(deserialize_with = "nullable::string")]
    pub slot: String,
    #[serde(deserialize_with = "nullable::string")]
    pub beacon_block_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub subcommittee_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub aggregation_bits: String,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncCommitteeMessage {
    #[serde(deserialize_with = "nullable::string")]
    pub slot: String,
    #[serde(deserialize_with = "nullable::string")]
    pub beacon_block_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub validator_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

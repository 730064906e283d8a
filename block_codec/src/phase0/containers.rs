//! Phase 0 objects in wire form.
//!
//! Every scalar is a string. Nested objects that a valid object must contain are optional here so
//! that their absence can be reported by the decoder instead of by `serde`. A `null` field is read
//! as if it were absent.

use serde::{Deserialize, Serialize};

use crate::nullable;

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregateAndProof {
    #[serde(deserialize_with = "nullable::string")]
    pub aggregator_index: String,
    pub aggregate: Option<Attestation>,
    #[serde(deserialize_with = "nullable::string")]
    pub selection_proof: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Attestation {
    #[serde(deserialize_with = "nullable::string")]
    pub aggregation_bits: String,
    pub data: Option<AttestationData>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AttestationData {
    #[serde(deserialize_with = "nullable::string")]
    pub slot: String,
    #[serde(deserialize_with = "nullable::string")]
    pub index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub beacon_block_root: String,
    pub source: Option<Checkpoint>,
    pub target: Option<Checkpoint>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AttesterSlashing {
    pub attestation_1: Option<IndexedAttestation>,
    pub attestation_2: Option<IndexedAttestation>,
}

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
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BeaconBlockHeader {
    #[serde(deserialize_with = "nullable::string")]
    pub slot: String,
    #[serde(deserialize_with = "nullable::string")]
    pub proposer_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub parent_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub state_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub body_root: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Checkpoint {
    #[serde(deserialize_with = "nullable::string")]
    pub epoch: String,
    #[serde(deserialize_with = "nullable::string")]
    pub root: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Deposit {
    #[serde(deserialize_with = "nullable::strings")]
    pub proof: Vec<String>,
    pub data: Option<DepositData>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DepositData {
    #[serde(deserialize_with = "nullable::string")]
    pub pubkey: String,
    #[serde(deserialize_with = "nullable::string")]
    pub withdrawal_credentials: String,
    #[serde(deserialize_with = "nullable::string")]
    pub amount: String,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Eth1Data {
    #[serde(deserialize_with = "nullable::string")]
    pub deposit_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub deposit_count: String,
    #[serde(deserialize_with = "nullable::string")]
    pub block_hash: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Fork {
    #[serde(deserialize_with = "nullable::string")]
    pub previous_version: String,
    #[serde(deserialize_with = "nullable::string")]
    pub current_version: String,
    #[serde(deserialize_with = "nullable::string")]
    pub epoch: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexedAttestation {
    #[serde(deserialize_with = "nullable::strings")]
    pub attesting_indices: Vec<String>,
    pub data: Option<AttestationData>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProposerSlashing {
    pub signed_header_1: Option<SignedBeaconBlockHeader>,
    pub signed_header_2: Option<SignedBeaconBlockHeader>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SignedAggregateAndProof {
    pub message: Option<AggregateAndProof>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
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
pub struct SignedBeaconBlockHeader {
    pub message: Option<BeaconBlockHeader>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SignedVoluntaryExit {
    pub message: Option<VoluntaryExit>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct VoluntaryExit {
    #[serde(deserialize_with = "nullable::string")]
    pub epoch: String,
    #[serde(deserialize_with = "nullable::string")]
    pub validator_index: String,
}

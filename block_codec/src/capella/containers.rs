use serde::{Deserialize, Serialize};

use crate::{
    altair::containers::SyncAggregate,
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
    pub execution_payload: Option<ExecutionPayload>,
    pub bls_to_execution_changes: Option<Vec<Option<SignedBlsToExecutionChange>>>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BlindedBeaconBlock {
    #[serde(deserialize_with = "nullable::string")]
    pub slot: String,
    #[serde(deserialize_with = "nullable::string")]
    pub proposer_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub parent_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub state_root: String,
    pub body: Option<BlindedBeaconBlockBody>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BlindedBeaconBlockBody {
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
    pub execution_payload_header: Option<ExecutionPayloadHeader>,
    pub bls_to_execution_changes: Option<Vec<Option<SignedBlsToExecutionChange>>>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BlsToExecutionChange {
    #[serde(deserialize_with = "nullable::string")]
    pub validator_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub from_bls_pubkey: String,
    #[serde(deserialize_with = "nullable::string")]
    pub to_execution_address: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ExecutionPayload {
    #[serde(deserialize_with = "nullable::string")]
    pub parent_hash: String,
    #[serde(deserialize_with = "nullable::string")]
    pub fee_recipient: String,
    #[serde(deserialize_with = "nullable::string")]
    pub state_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub receipts_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub logs_bloom: String,
    #[serde(deserialize_with = "nullable::string")]
    pub prev_randao: String,
    #[serde(deserialize_with = "nullable::string")]
    pub block_number: String,
    #[serde(deserialize_with = "nullable::string")]
    pub gas_limit: String,
    #[serde(deserialize_with = "nullable::string")]
    pub gas_used: String,
    #[serde(deserialize_with = "nullable::string")]
    pub timestamp: String,
    #[serde(deserialize_with = "nullable::string")]
    pub extra_data: String,
    #[serde(deserialize_with = "nullable::string")]
    pub base_fee_per_gas: String,
    #[serde(deserialize_with = "nullable::string")]
    pub block_hash: String,
    #[serde(deserialize_with = "nullable::strings")]
    pub transactions: Vec<String>,
    #[serde(deserialize_with = "nullable::list")]
    pub withdrawals: Vec<Option<Withdrawal>>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ExecutionPayloadHeader {
    #[serde(deserialize_with = "nullable::string")]
    pub parent_hash: String,
    #[serde(deserialize_with = "nullable::string")]
    pub fee_recipient: String,
    #[serde(deserialize_with = "nullable::string")]
    pub state_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub receipts_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub logs_bloom: String,
    #[serde(deserialize_with = "nullable::string")]
    pub prev_randao: String,
    #[serde(deserialize_with = "nullable::string")]
    pub block_number: String,
    #[serde(deserialize_with = "nullable::string")]
    pub gas_limit: String,
    #[serde(deserialize_with = "nullable::string")]
    pub gas_used: String,
    #[serde(deserialize_with = "nullable::string")]
    pub timestamp: String,
    #[serde(deserialize_with = "nullable::string")]
    pub extra_data: String,
    #[serde(deserialize_with = "nullable::string")]
    pub base_fee_per_gas: String,
    #[serde(deserialize_with = "nullable::string")]
    pub block_hash: String,
    #[serde(deserialize_with = "nullable::string")]
    pub transactions_root: String,
    #[serde(deserialize_with = "nullable::string")]
    pub withdrawals_root: String,
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
pub struct SignedBlindedBeaconBlock {
    pub message: Option<BlindedBeaconBlock>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SignedBlsToExecutionChange {
    pub message: Option<BlsToExecutionChange>,
    #[serde(deserialize_with = "nullable::string")]
    pub signature: String,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Withdrawal {
    #[serde(deserialize_with = "nullable::string")]
    pub index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub validator_index: String,
    #[serde(deserialize_with = "nullable::string")]
    pub address: String,
    #[serde(deserialize_with = "nullable::string")]
    pub amount: String,
}

//! Canonical wire objects for tests.
//!
//! Every value here is in the form the encoder produces, so decoding and re-encoding a fixture
//! must return it unchanged.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use typenum::Unsigned as _;
use types::{nonstandard::Phase, preset::Preset};

use crate::{error::DecodeError, traits::Decode};

/// Deserializes `value` into wire form and decodes it.
///
/// The outer result fails only if `value` does not have the shape of `T::Wire`.
pub fn decode_value<T: Decode>(value: Value) -> anyhow::Result<Result<T, DecodeError>>
where
    T::Wire: DeserializeOwned,
{
    Ok(T::decode(&serde_json::from_value(value)?))
}

pub fn bytes(byte: u8, length: usize) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(length))
}

pub fn checkpoint(epoch: u64) -> Value {
    json!({
        "epoch": epoch.to_string(),
        "root": bytes(0x0c, 32),
    })
}

pub fn attestation_data() -> Value {
    json!({
        "slot": "31",
        "index": "2",
        "beacon_block_root": bytes(0x0b, 32),
        "source": checkpoint(2),
        "target": checkpoint(3),
    })
}

pub fn attestation() -> Value {
    json!({
        "aggregation_bits": "0x0f01",
        "data": attestation_data(),
        "signature": bytes(0xa1, 96),
    })
}

pub fn indexed_attestation() -> Value {
    json!({
        "attesting_indices": ["1", "4", "9"],
        "data": attestation_data(),
        "signature": bytes(0xa2, 96),
    })
}

pub fn attester_slashing() -> Value {
    json!({
        "attestation_1": indexed_attestation(),
        "attestation_2": indexed_attestation(),
    })
}

pub fn block_header() -> Value {
    json!({
        "slot": "17",
        "proposer_index": "3",
        "parent_root": bytes(0x11, 32),
        "state_root": bytes(0x12, 32),
        "body_root": bytes(0x13, 32),
    })
}

pub fn proposer_slashing() -> Value {
    json!({
        "signed_header_1": signed(block_header()),
        "signed_header_2": signed(block_header()),
    })
}

pub fn deposit() -> Value {
    json!({
        "proof": vec![bytes(0x44, 32); 33],
        "data": {
            "pubkey": bytes(0x45, 48),
            "withdrawal_credentials": bytes(0x46, 32),
            "amount": "32000000000",
            "signature": bytes(0x47, 96),
        },
    })
}

pub fn signed_voluntary_exit() -> Value {
    signed(json!({
        "epoch": "256",
        "validator_index": "42",
    }))
}

pub fn signed_aggregate_and_proof() -> Value {
    signed(json!({
        "aggregator_index": "8",
        "aggregate": attestation(),
        "selection_proof": bytes(0xa3, 96),
    }))
}

pub fn sync_aggregate<P: Preset>() -> Value {
    json!({
        "sync_committee_bits": bytes(0xff, P::SyncCommitteeBitsBytes::USIZE),
        "sync_committee_signature": bytes(0xa4, 96),
    })
}

pub fn signed_contribution_and_proof<P: Preset>() -> Value {
    signed(json!({
        "aggregator_index": "6",
        "contribution": {
            "slot": "33",
            "beacon_block_root": bytes(0x0d, 32),
            "subcommittee_index": "1",
            "aggregation_bits": bytes(0x03, P::SyncSubcommitteeBitsBytes::USIZE),
            "signature": bytes(0xa5, 96),
        },
        "selection_proof": bytes(0xa6, 96),
    }))
}

pub fn sync_committee_message() -> Value {
    json!({
        "slot": "34",
        "beacon_block_root": bytes(0x0e, 32),
        "validator_index": "19",
        "signature": bytes(0xa7, 96),
    })
}

pub fn signed_validator_registration() -> Value {
    signed(json!({
        "fee_recipient": bytes(0x55, 20),
        "gas_limit": "30000000",
        "timestamp": "1700000000",
        "pubkey": bytes(0x56, 48),
    }))
}

pub fn withdrawal() -> Value {
    json!({
        "index": "1000",
        "validator_index": "77",
        "address": bytes(0x57, 20),
        "amount": "1234567",
    })
}

pub fn signed_bls_to_execution_change() -> Value {
    signed(json!({
        "validator_index": "78",
        "from_bls_pubkey": bytes(0x58, 48),
        "to_execution_address": bytes(0x59, 20),
    }))
}

pub fn execution_payload(phase: Phase) -> Value {
    let mut payload = payload_common();

    payload["transactions"] = json!(["0x02f870", bytes(0x60, 100), "0x"]);

    if phase >= Phase::Capella {
        payload["withdrawals"] = json!([withdrawal(), withdrawal()]);
    }

    add_blob_gas(&mut payload, phase);

    payload
}

pub fn execution_payload_header(phase: Phase) -> Value {
    let mut header = payload_common();

    header["transactions_root"] = bytes(0x61, 32).into();

    if phase >= Phase::Capella {
        header["withdrawals_root"] = bytes(0x62, 32).into();
    }

    add_blob_gas(&mut header, phase);

    header
}

pub fn body<P: Preset>(phase: Phase, blinded: bool) -> Value {
    let mut body = json!({
        "randao_reveal": bytes(0xb1, 96),
        "eth1_data": {
            "deposit_root": bytes(0xb2, 32),
            "deposit_count": "5",
            "block_hash": bytes(0xb3, 32),
        },
        "graffiti": bytes(0xb4, 32),
        "proposer_slashings": [proposer_slashing()],
        "attester_slashings": [attester_slashing()],
        "attestations": [attestation(), attestation()],
        "deposits": [deposit()],
        "voluntary_exits": [signed_voluntary_exit()],
    });

    if phase >= Phase::Altair {
        body["sync_aggregate"] = sync_aggregate::<P>();
    }

    if phase >= Phase::Bellatrix {
        if blinded {
            body["execution_payload_header"] = execution_payload_header(phase);
        } else {
            body["execution_payload"] = execution_payload(phase);
        }
    }

    if phase >= Phase::Capella {
        body["bls_to_execution_changes"] = json!([signed_bls_to_execution_change()]);
    }

    if phase >= Phase::Deneb {
        body["blob_kzg_commitments"] = json!([bytes(0xc1, 48), bytes(0xc2, 48)]);
    }

    body
}

pub fn phase0_body<P: Preset>() -> Value {
    body::<P>(Phase::Phase0, false)
}

pub fn block<P: Preset>(phase: Phase, blinded: bool) -> Value {
    json!({
        "slot": "12",
        "proposer_index": "5",
        "parent_root": bytes(0x01, 32),
        "state_root": bytes(0x02, 32),
        "body": body::<P>(phase, blinded),
    })
}

pub fn signed(message: Value) -> Value {
    json!({
        "message": message,
        "signature": bytes(0x99, 96),
    })
}

pub fn blob_sidecar<P: Preset>() -> Value {
    json!({
        "block_root": bytes(0xd1, 32),
        "index": "0",
        "slot": "12",
        "block_parent_root": bytes(0xd2, 32),
        "proposer_index": "5",
        "blob": bytes(0xd3, P::BytesPerBlob::USIZE),
        "kzg_commitment": bytes(0xd4, 48),
        "kzg_proof": bytes(0xd5, 48),
    })
}

pub fn blinded_blob_sidecar() -> Value {
    json!({
        "block_root": bytes(0xd1, 32),
        "index": "1",
        "slot": "12",
        "block_parent_root": bytes(0xd2, 32),
        "proposer_index": "5",
        "blob_root": bytes(0xd6, 32),
        "kzg_commitment": bytes(0xd4, 48),
        "kzg_proof": bytes(0xd5, 48),
    })
}

pub fn block_contents<P: Preset>() -> Value {
    json!({
        "block": block::<P>(Phase::Deneb, false),
        "kzg_proofs": [bytes(0xe1, 48)],
        "blobs": [bytes(0xe2, P::BytesPerBlob::USIZE)],
    })
}

pub fn signed_block_contents<P: Preset>() -> Value {
    json!({
        "signed_block": signed(block::<P>(Phase::Deneb, false)),
        "kzg_proofs": [bytes(0xe1, 48)],
        "blobs": [bytes(0xe2, P::BytesPerBlob::USIZE)],
    })
}

fn payload_common() -> Value {
    json!({
        "parent_hash": bytes(0x51, 32),
        "fee_recipient": bytes(0x52, 20),
        "state_root": bytes(0x53, 32),
        "receipts_root": bytes(0x54, 32),
        "logs_bloom": bytes(0x00, 256),
        "prev_randao": bytes(0x5a, 32),
        "block_number": "7",
        "gas_limit": "30000000",
        "gas_used": "21000",
        "timestamp": "1700000000",
        "extra_data": "0x6772616e64",
        "base_fee_per_gas": "1000000007",
        "block_hash": bytes(0x5b, 32),
    })
}

fn add_blob_gas(payload: &mut Value, phase: Phase) {
    if phase >= Phase::Deneb {
        payload["blob_gas_used"] = json!("131072");
        payload["excess_blob_gas"] = json!("0");
    }
}

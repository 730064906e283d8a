use types::{
    phase0::containers::{
        AggregateAndProof, Attestation, AttestationData, AttesterSlashing, BeaconBlockHeader,
        Checkpoint, Deposit, DepositData, Eth1Data, Fork, IndexedAttestation, ProposerSlashing,
        SignedAggregateAndProof, SignedBeaconBlockHeader, SignedVoluntaryExit, VoluntaryExit,
    },
    preset::Preset,
};

use crate::{
    bounded::decode_list_with,
    error::{required, DecodeError, WithPath as _},
    nested::{decode_required, decode_signed},
    phase0::containers as json,
    scalar::{
        decode_byte_list, decode_fixed, encode_decimal, encode_fixed, encode_hex,
        parse_decimal_u64,
    },
    traits::{Decode, Encode},
};

impl Decode for Checkpoint {
    type Wire = json::Checkpoint;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            epoch: parse_decimal_u64(&wire.epoch).at("Epoch")?,
            root: decode_fixed(&wire.root).at("Root")?,
        })
    }
}

impl Encode for Checkpoint {
    type Wire = json::Checkpoint;

    fn encode(&self) -> Self::Wire {
        json::Checkpoint {
            epoch: encode_decimal(self.epoch),
            root: encode_fixed(&self.root),
        }
    }
}

impl Decode for Fork {
    type Wire = json::Fork;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            previous_version: decode_fixed(&wire.previous_version).at("PreviousVersion")?,
            current_version: decode_fixed(&wire.current_version).at("CurrentVersion")?,
            epoch: parse_decimal_u64(&wire.epoch).at("Epoch")?,
        })
    }
}

impl Encode for Fork {
    type Wire = json::Fork;

    fn encode(&self) -> Self::Wire {
        json::Fork {
            previous_version: encode_fixed(&self.previous_version),
            current_version: encode_fixed(&self.current_version),
            epoch: encode_decimal(self.epoch),
        }
    }
}

impl Decode for AttestationData {
    type Wire = json::AttestationData;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            index: parse_decimal_u64(&wire.index).at("CommitteeIndex")?,
            beacon_block_root: decode_fixed(&wire.beacon_block_root).at("BeaconBlockRoot")?,
            source: decode_required(wire.source.as_ref()).at("Source")?,
            target: decode_required(wire.target.as_ref()).at("Target")?,
        })
    }
}

impl Encode for AttestationData {
    type Wire = json::AttestationData;

    fn encode(&self) -> Self::Wire {
        json::AttestationData {
            slot: encode_decimal(self.slot),
            index: encode_decimal(self.index),
            beacon_block_root: encode_fixed(&self.beacon_block_root),
            source: Some(self.source.encode()),
            target: Some(self.target.encode()),
        }
    }
}

impl<P: Preset> Decode for Attestation<P> {
    type Wire = json::Attestation;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            aggregation_bits: decode_byte_list(&wire.aggregation_bits).at("AggregationBits")?,
            data: decode_required(wire.data.as_ref()).at("Data")?,
            signature: decode_fixed(&wire.signature).at("Signature")?,
        })
    }
}

impl<P: Preset> Encode for Attestation<P> {
    type Wire = json::Attestation;

    fn encode(&self) -> Self::Wire {
        json::Attestation {
            aggregation_bits: encode_hex(self.aggregation_bits.as_bytes()),
            data: Some(self.data.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

// The signature comes first to match the order in which slashings are checked in blocks.
impl<P: Preset> Decode for IndexedAttestation<P> {
    type Wire = json::IndexedAttestation;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let signature = decode_fixed(&wire.signature).at("Signature")?;

        let attesting_indices =
            decode_list_with(&wire.attesting_indices, |index| parse_decimal_u64(index))
                .at("AttestingIndices")?;

        let data = decode_required(wire.data.as_ref()).at("Data")?;

        Ok(Self {
            attesting_indices,
            data,
            signature,
        })
    }
}

impl<P: Preset> Encode for IndexedAttestation<P> {
    type Wire = json::IndexedAttestation;

    fn encode(&self) -> Self::Wire {
        json::IndexedAttestation {
            attesting_indices: self
                .attesting_indices
                .iter()
                .copied()
                .map(encode_decimal)
                .collect(),
            data: Some(self.data.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

impl<P: Preset> Decode for AttesterSlashing<P> {
    type Wire = json::AttesterSlashing;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let attestation_1 = required(wire.attestation_1.as_ref()).at("Attestation1")?;
        let attestation_2 = required(wire.attestation_2.as_ref()).at("Attestation2")?;

        Ok(Self {
            attestation_1: IndexedAttestation::decode(attestation_1).at("Attestation1")?,
            attestation_2: IndexedAttestation::decode(attestation_2).at("Attestation2")?,
        })
    }
}

impl<P: Preset> Encode for AttesterSlashing<P> {
    type Wire = json::AttesterSlashing;

    fn encode(&self) -> Self::Wire {
        json::AttesterSlashing {
            attestation_1: Some(self.attestation_1.encode()),
            attestation_2: Some(self.attestation_2.encode()),
        }
    }
}

impl Decode for BeaconBlockHeader {
    type Wire = json::BeaconBlockHeader;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            proposer_index: parse_decimal_u64(&wire.proposer_index).at("ProposerIndex")?,
            parent_root: decode_fixed(&wire.parent_root).at("ParentRoot")?,
            state_root: decode_fixed(&wire.state_root).at("StateRoot")?,
            body_root: decode_fixed(&wire.body_root).at("BodyRoot")?,
        })
    }
}

impl Encode for BeaconBlockHeader {
    type Wire = json::BeaconBlockHeader;

    fn encode(&self) -> Self::Wire {
        json::BeaconBlockHeader {
            slot: encode_decimal(self.slot),
            proposer_index: encode_decimal(self.proposer_index),
            parent_root: encode_fixed(&self.parent_root),
            state_root: encode_fixed(&self.state_root),
            body_root: encode_fixed(&self.body_root),
        }
    }
}

impl Decode for SignedBeaconBlockHeader {
    type Wire = json::SignedBeaconBlockHeader;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl Encode for SignedBeaconBlockHeader {
    type Wire = json::SignedBeaconBlockHeader;

    fn encode(&self) -> Self::Wire {
        json::SignedBeaconBlockHeader {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

impl Decode for ProposerSlashing {
    type Wire = json::ProposerSlashing;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let signed_header_1 = required(wire.signed_header_1.as_ref()).at("SignedHeader1")?;

        required(signed_header_1.message.as_ref())
            .at("Message")
            .at("SignedHeader1")?;

        let signed_header_2 = required(wire.signed_header_2.as_ref()).at("SignedHeader2")?;

        required(signed_header_2.message.as_ref())
            .at("Message")
            .at("SignedHeader2")?;

        Ok(Self {
            signed_header_1: SignedBeaconBlockHeader::decode(signed_header_1)
                .at("SignedHeader1")?,
            signed_header_2: SignedBeaconBlockHeader::decode(signed_header_2)
                .at("SignedHeader2")?,
        })
    }
}

impl Encode for ProposerSlashing {
    type Wire = json::ProposerSlashing;

    fn encode(&self) -> Self::Wire {
        json::ProposerSlashing {
            signed_header_1: Some(self.signed_header_1.encode()),
            signed_header_2: Some(self.signed_header_2.encode()),
        }
    }
}

impl Decode for DepositData {
    type Wire = json::DepositData;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            pubkey: decode_fixed(&wire.pubkey).at("Pubkey")?,
            withdrawal_credentials: decode_fixed(&wire.withdrawal_credentials)
                .at("WithdrawalCredentials")?,
            amount: parse_decimal_u64(&wire.amount).at("Amount")?,
            signature: decode_fixed(&wire.signature).at("Signature")?,
        })
    }
}

impl Encode for DepositData {
    type Wire = json::DepositData;

    fn encode(&self) -> Self::Wire {
        json::DepositData {
            pubkey: encode_fixed(&self.pubkey),
            withdrawal_credentials: encode_fixed(&self.withdrawal_credentials),
            amount: encode_decimal(self.amount),
            signature: encode_fixed(&self.signature),
        }
    }
}

impl Decode for Deposit {
    type Wire = json::Deposit;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let data = required(wire.data.as_ref()).at("Data")?;
        let proof = decode_list_with(&wire.proof, |node| decode_fixed(node)).at("Proof")?;
        let data = DepositData::decode(data).at("Data")?;

        Ok(Self { proof, data })
    }
}

impl Encode for Deposit {
    type Wire = json::Deposit;

    fn encode(&self) -> Self::Wire {
        json::Deposit {
            proof: self.proof.iter().map(encode_fixed).collect(),
            data: Some(self.data.encode()),
        }
    }
}

impl Decode for Eth1Data {
    type Wire = json::Eth1Data;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            deposit_root: decode_fixed(&wire.deposit_root).at("DepositRoot")?,
            deposit_count: parse_decimal_u64(&wire.deposit_count).at("DepositCount")?,
            block_hash: decode_fixed(&wire.block_hash).at("BlockHash")?,
        })
    }
}

impl Encode for Eth1Data {
    type Wire = json::Eth1Data;

    fn encode(&self) -> Self::Wire {
        json::Eth1Data {
            deposit_root: encode_fixed(&self.deposit_root),
            deposit_count: encode_decimal(self.deposit_count),
            block_hash: encode_fixed(&self.block_hash),
        }
    }
}

impl Decode for VoluntaryExit {
    type Wire = json::VoluntaryExit;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            epoch: parse_decimal_u64(&wire.epoch).at("Epoch")?,
            validator_index: parse_decimal_u64(&wire.validator_index).at("ValidatorIndex")?,
        })
    }
}

impl Encode for VoluntaryExit {
    type Wire = json::VoluntaryExit;

    fn encode(&self) -> Self::Wire {
        json::VoluntaryExit {
            epoch: encode_decimal(self.epoch),
            validator_index: encode_decimal(self.validator_index),
        }
    }
}

impl Decode for SignedVoluntaryExit {
    type Wire = json::SignedVoluntaryExit;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl Encode for SignedVoluntaryExit {
    type Wire = json::SignedVoluntaryExit;

    fn encode(&self) -> Self::Wire {
        json::SignedVoluntaryExit {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

impl<P: Preset> Decode for AggregateAndProof<P> {
    type Wire = json::AggregateAndProof;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            aggregator_index: parse_decimal_u64(&wire.aggregator_index).at("AggregatorIndex")?,
            aggregate: decode_required(wire.aggregate.as_ref()).at("Aggregate")?,
            selection_proof: decode_fixed(&wire.selection_proof).at("SelectionProof")?,
        })
    }
}

impl<P: Preset> Encode for AggregateAndProof<P> {
    type Wire = json::AggregateAndProof;

    fn encode(&self) -> Self::Wire {
        json::AggregateAndProof {
            aggregator_index: encode_decimal(self.aggregator_index),
            aggregate: Some(self.aggregate.encode()),
            selection_proof: encode_fixed(&self.selection_proof),
        }
    }
}

impl<P: Preset> Decode for SignedAggregateAndProof<P> {
    type Wire = json::SignedAggregateAndProof;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl<P: Preset> Encode for SignedAggregateAndProof<P> {
    type Wire = json::SignedAggregateAndProof;

    fn encode(&self) -> Self::Wire {
        json::SignedAggregateAndProof {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;
    use types::{
        phase0::containers::BeaconBlockBody,
        preset::{Mainnet, Minimal},
    };

    use crate::fixtures::{self, decode_value};

    use super::*;

    #[test]
    fn checkpoint_round_trip() -> anyhow::Result<()> {
        let value = fixtures::checkpoint(3);
        let checkpoint = decode_value::<Checkpoint>(value.clone())??;

        assert_eq!(checkpoint.epoch, 3);
        assert_eq!(serde_json::to_value(checkpoint.encode())?, value);

        Ok(())
    }

    #[test]
    fn fork_versions_are_four_bytes() -> anyhow::Result<()> {
        let error = decode_value::<Fork>(json!({
            "previous_version": "0x00000001",
            "current_version": "0x0000000002",
            "epoch": "1",
        }))?
        .expect_err("current version is too long");

        assert_eq!(
            error.to_string(),
            "could not decode CurrentVersion: expected 4 bytes, found 5 bytes",
        );

        Ok(())
    }

    #[test_case(31, Some("expected 32 bytes, found 31 bytes"))]
    #[test_case(32, None)]
    #[test_case(33, Some("expected 32 bytes, found 33 bytes"))]
    fn header_roots_have_fixed_length(length: usize, message: Option<&str>) -> anyhow::Result<()> {
        let mut value = fixtures::block_header();
        value["state_root"] = fixtures::bytes(0x22, length).into();

        let result = decode_value::<BeaconBlockHeader>(value)?;

        match message {
            Some(message) => assert_eq!(
                result.map_err(|error| error.to_string()),
                Err(format!("could not decode StateRoot: {message}")),
            ),
            None => assert!(result.is_ok()),
        }

        Ok(())
    }

    #[test]
    fn proposer_slashing_checks_both_messages_before_any_field() -> anyhow::Result<()> {
        let mut value = fixtures::proposer_slashing();
        value["signed_header_1"]["signature"] = json!("invalid");
        value["signed_header_2"]["message"] = json!(null);

        let error = decode_value::<ProposerSlashing>(value)?.expect_err("message is missing");

        assert_eq!(
            error.to_string(),
            "could not decode SignedHeader2.Message: nil value",
        );

        Ok(())
    }

    #[test]
    fn attester_slashing_reports_signature_before_indices() -> anyhow::Result<()> {
        let mut value = fixtures::attester_slashing();
        value["attestation_2"]["attesting_indices"] = json!(["x"]);
        value["attestation_2"]["signature"] = json!("0x1");

        let error = decode_value::<AttesterSlashing<Mainnet>>(value)?
            .expect_err("signature is invalid");

        assert_eq!(
            error.to_string(),
            "could not decode Attestation2.Signature: invalid hex string: Odd number of digits",
        );

        Ok(())
    }

    #[test]
    fn attesting_indices_are_bounded() -> anyhow::Result<()> {
        let mut value = fixtures::indexed_attestation();
        value["attesting_indices"] = json!(vec!["1"; 2049]);

        let error = decode_value::<IndexedAttestation<Minimal>>(value)?
            .expect_err("too many indices");

        assert_eq!(
            error.to_string(),
            "could not decode AttestingIndices: \
             expected list to have no more than 2048 elements, found 2049 elements",
        );

        Ok(())
    }

    #[test_case(33, None)]
    #[test_case(34, Some("could not decode Proof: expected list to have no more than 33 elements, found 34 elements"))]
    fn deposit_proof_is_bounded(length: usize, message: Option<&str>) -> anyhow::Result<()> {
        let mut value = fixtures::deposit();
        value["proof"] = json!(vec![fixtures::bytes(0x44, 32); length]);

        let result = decode_value::<Deposit>(value)?.map_err(|error| error.to_string());

        match message {
            Some(message) => assert_eq!(result, Err(message.to_owned())),
            None => assert_eq!(result.map(|deposit| deposit.proof.len()), Ok(length)),
        }

        Ok(())
    }

    #[test]
    fn deposit_data_is_checked_before_proof() -> anyhow::Result<()> {
        let mut value = fixtures::deposit();
        value["proof"] = json!(["invalid"]);
        value["data"] = json!(null);

        let error = decode_value::<Deposit>(value)?.expect_err("data is missing");

        assert_eq!(error.to_string(), "could not decode Data: nil value");

        Ok(())
    }

    #[test]
    fn empty_hex_string_is_required() -> anyhow::Result<()> {
        let mut value = fixtures::signed_voluntary_exit();
        value["message"]["epoch"] = json!("");
        value["signature"] = json!("");

        let error = decode_value::<SignedVoluntaryExit>(value)?.expect_err("signature is empty");

        assert_eq!(error.to_string(), "could not decode Signature: value is required");

        Ok(())
    }

    #[test]
    fn attestation_data_uses_committee_index_path() -> anyhow::Result<()> {
        let mut value = fixtures::attestation();
        value["data"]["index"] = json!("-1");

        let error = decode_value::<Attestation<Mainnet>>(value)?.expect_err("index is negative");

        assert_eq!(
            error.to_string(),
            "could not decode Data.CommitteeIndex: invalid unsigned decimal integer",
        );

        Ok(())
    }

    #[test]
    fn aggregation_bits_are_bounded() -> anyhow::Result<()> {
        let mut value = fixtures::attestation();
        value["aggregation_bits"] = fixtures::bytes(0xff, 258).into();

        let error = decode_value::<Attestation<Mainnet>>(value)?.expect_err("too many bits");

        assert_eq!(
            error.to_string(),
            "could not decode AggregationBits: expected no more than 257 bytes, found 258 bytes",
        );

        Ok(())
    }

    #[test]
    fn signed_aggregate_round_trip() -> anyhow::Result<()> {
        let value = fixtures::signed_aggregate_and_proof();
        let aggregate = decode_value::<SignedAggregateAndProof<Minimal>>(value.clone())??;

        assert_eq!(serde_json::to_value(aggregate.encode())?, value);

        Ok(())
    }

    #[test]
    fn body_requires_operation_lists() -> anyhow::Result<()> {
        let mut value = fixtures::phase0_body::<Mainnet>();
        value["attestations"] = json!(null);

        let error = decode_value::<BeaconBlockBody<Mainnet>>(value)?
            .expect_err("attestations are missing");

        assert_eq!(error.to_string(), "could not decode Attestations: nil value");

        Ok(())
    }

    #[test]
    fn body_round_trip() -> anyhow::Result<()> {
        let value = fixtures::phase0_body::<Mainnet>();
        let body = decode_value::<BeaconBlockBody<Mainnet>>(value.clone())??;

        assert_eq!(body.deposits.len(), 1);
        assert_eq!(serde_json::to_value(body.encode())?, value);

        Ok(())
    }
}

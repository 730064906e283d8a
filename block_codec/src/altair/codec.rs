use types::{
    altair::containers::{
        ContributionAndProof, SignedContributionAndProof, SyncAggregate, SyncCommitteeContribution,
        SyncCommitteeMessage,
    },
    preset::Preset,
};

use crate::{
    altair::containers as json,
    error::{DecodeError, WithPath as _},
    nested::{decode_required, decode_signed},
    scalar::{
        decode_byte_vector, decode_fixed, encode_decimal, encode_fixed, encode_hex,
        parse_decimal_u64,
    },
    traits::{Decode, Encode},
};

impl<P: Preset> Decode for SyncAggregate<P> {
    type Wire = json::SyncAggregate;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            sync_committee_bits: decode_byte_vector(&wire.sync_committee_bits)
                .at("SyncCommitteeBits")?,
            sync_committee_signature: decode_fixed(&wire.sync_committee_signature)
                .at("SyncCommitteeSignature")?,
        })
    }
}

impl<P: Preset> Encode for SyncAggregate<P> {
    type Wire = json::SyncAggregate;

    fn encode(&self) -> Self::Wire {
        json::SyncAggregate {
            sync_committee_bits: encode_hex(self.sync_committee_bits.as_bytes()),
            sync_committee_signature: encode_fixed(&self.sync_committee_signature),
        }
    }
}

impl Decode for SyncCommitteeMessage {
    type Wire = json::SyncCommitteeMessage;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            beacon_block_root: decode_fixed(&wire.beacon_block_root).at("BeaconBlockRoot")?,
            validator_index: parse_decimal_u64(&wire.validator_index).at("ValidatorIndex")?,
            signature: decode_fixed(&wire.signature).at("Signature")?,
        })
    }
}

impl Encode for SyncCommitteeMessage {
    type Wire = json::SyncCommitteeMessage;

    fn encode(&self) -> Self::Wire {
        json::SyncCommitteeMessage {
            slot: encode_decimal(self.slot),
            beacon_block_root: encode_fixed(&self.beacon_block_root),
            validator_index: encode_decimal(self.validator_index),
            signature: encode_fixed(&self.signature),
        }
    }
}

impl<P: Preset> Decode for SyncCommitteeContribution<P> {
    type Wire = json::SyncCommitteeContribution;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            beacon_block_root: decode_fixed(&wire.beacon_block_root).at("BeaconBlockRoot")?,
            subcommittee_index: parse_decimal_u64(&wire.subcommittee_index)
                .at("SubcommitteeIndex")?,
            aggregation_bits: decode_byte_vector(&wire.aggregation_bits).at("AggregationBits")?,
            signature: decode_fixed(&wire.signature).at("Signature")?,
        })
    }
}

impl<P: Preset> Encode for SyncCommitteeContribution<P> {
    type Wire = json::SyncCommitteeContribution;

    fn encode(&self) -> Self::Wire {
        json::SyncCommitteeContribution {
            slot: encode_decimal(self.slot),
            beacon_block_root: encode_fixed(&self.beacon_block_root),
            subcommittee_index: encode_decimal(self.subcommittee_index),
            aggregation_bits: encode_hex(self.aggregation_bits.as_bytes()),
            signature: encode_fixed(&self.signature),
        }
    }
}

// The contribution is decoded first, before the index of the aggregator that produced it.
impl<P: Preset> Decode for ContributionAndProof<P> {
    type Wire = json::ContributionAndProof;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let contribution = decode_required(wire.contribution.as_ref()).at("Contribution")?;
        let aggregator_index = parse_decimal_u64(&wire.aggregator_index).at("AggregatorIndex")?;
        let selection_proof = decode_fixed(&wire.selection_proof).at("SelectionProof")?;

        Ok(Self {
            aggregator_index,
            contribution,
            selection_proof,
        })
    }
}

impl<P: Preset> Encode for ContributionAndProof<P> {
    type Wire = json::ContributionAndProof;

    fn encode(&self) -> Self::Wire {
        json::ContributionAndProof {
            aggregator_index: encode_decimal(self.aggregator_index),
            contribution: Some(self.contribution.encode()),
            selection_proof: encode_fixed(&self.selection_proof),
        }
    }
}

impl<P: Preset> Decode for SignedContributionAndProof<P> {
    type Wire = json::SignedContributionAndProof;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl<P: Preset> Encode for SignedContributionAndProof<P> {
    type Wire = json::SignedContributionAndProof;

    fn encode(&self) -> Self::Wire {
        json::SignedContributionAndProof {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

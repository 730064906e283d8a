//! Blocks and signed blocks of every phase.
//!
//! All block types share the same outer fields, so their conversions are generated. A block checks
//! that its body and every nested object the body requires are present before converting any
//! field.

use duplicate::duplicate_item;
use types::{
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
        BeaconBlock as DenebBeaconBlock, BlindedBeaconBlock as DenebBlindedBeaconBlock,
        SignedBeaconBlock as DenebSignedBeaconBlock,
        SignedBlindedBeaconBlock as DenebSignedBlindedBeaconBlock,
    },
    phase0::containers::{
        BeaconBlock as Phase0BeaconBlock, SignedBeaconBlock as Phase0SignedBeaconBlock,
    },
    preset::Preset,
};

use crate::{
    altair::containers as altair_json,
    bellatrix::containers as bellatrix_json,
    capella::containers as capella_json,
    deneb::containers as deneb_json,
    error::{required, DecodeError, EncodeError, WithPath as _},
    nested::{decode_required, decode_signed},
    phase0::containers as phase0_json,
    scalar::{decode_fixed, encode_decimal, encode_fixed, parse_decimal_u64},
    traits::{Decode, Encode, ToUnsigned, TryEncode},
};

#[duplicate_item(
    block                           wire_block;
    [Phase0BeaconBlock]             [phase0_json::BeaconBlock];
    [AltairBeaconBlock]             [altair_json::BeaconBlock];
    [BellatrixBeaconBlock]          [bellatrix_json::BeaconBlock];
    [BellatrixBlindedBeaconBlock]   [bellatrix_json::BlindedBeaconBlock];
    [CapellaBeaconBlock]            [capella_json::BeaconBlock];
    [CapellaBlindedBeaconBlock]     [capella_json::BlindedBeaconBlock];
    [DenebBeaconBlock]              [deneb_json::BeaconBlock];
    [DenebBlindedBeaconBlock]       [deneb_json::BlindedBeaconBlock];
)]
impl<P: Preset> Decode for block<P> {
    type Wire = wire_block;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let body = required(wire.body.as_ref()).at("Body")?;

        body.check_presence().at("Body")?;

        Ok(Self {
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            proposer_index: parse_decimal_u64(&wire.proposer_index).at("ProposerIndex")?,
            parent_root: decode_fixed(&wire.parent_root).at("ParentRoot")?,
            state_root: decode_fixed(&wire.state_root).at("StateRoot")?,
            body: decode_required(Some(body)).at("Body")?,
        })
    }
}

#[duplicate_item(
    block                   wire_block;
    [Phase0BeaconBlock]     [phase0_json::BeaconBlock];
    [AltairBeaconBlock]     [altair_json::BeaconBlock];
)]
impl<P: Preset> Encode for block<P> {
    type Wire = wire_block;

    fn encode(&self) -> Self::Wire {
        wire_block {
            slot: encode_decimal(self.slot),
            proposer_index: encode_decimal(self.proposer_index),
            parent_root: encode_fixed(&self.parent_root),
            state_root: encode_fixed(&self.state_root),
            body: Some(self.body.encode()),
        }
    }
}

#[duplicate_item(
    block                           wire_block;
    [BellatrixBeaconBlock]          [bellatrix_json::BeaconBlock];
    [BellatrixBlindedBeaconBlock]   [bellatrix_json::BlindedBeaconBlock];
    [CapellaBeaconBlock]            [capella_json::BeaconBlock];
    [CapellaBlindedBeaconBlock]     [capella_json::BlindedBeaconBlock];
    [DenebBeaconBlock]              [deneb_json::BeaconBlock];
    [DenebBlindedBeaconBlock]       [deneb_json::BlindedBeaconBlock];
)]
impl<P: Preset> TryEncode for block<P> {
    type Wire = wire_block;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError> {
        Ok(wire_block {
            slot: encode_decimal(self.slot),
            proposer_index: encode_decimal(self.proposer_index),
            parent_root: encode_fixed(&self.parent_root),
            state_root: encode_fixed(&self.state_root),
            body: Some(self.body.try_encode().at("Body")?),
        })
    }
}

#[duplicate_item(
    signed_block                            wire_signed_block;
    [Phase0SignedBeaconBlock]               [phase0_json::SignedBeaconBlock];
    [AltairSignedBeaconBlock]               [altair_json::SignedBeaconBlock];
    [BellatrixSignedBeaconBlock]            [bellatrix_json::SignedBeaconBlock];
    [BellatrixSignedBlindedBeaconBlock]     [bellatrix_json::SignedBlindedBeaconBlock];
    [CapellaSignedBeaconBlock]              [capella_json::SignedBeaconBlock];
    [CapellaSignedBlindedBeaconBlock]       [capella_json::SignedBlindedBeaconBlock];
    [DenebSignedBeaconBlock]                [deneb_json::SignedBeaconBlock];
    [DenebSignedBlindedBeaconBlock]         [deneb_json::SignedBlindedBeaconBlock];
)]
impl<P: Preset> Decode for signed_block<P> {
    type Wire = wire_signed_block;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

#[duplicate_item(
    signed_block                wire_signed_block;
    [Phase0SignedBeaconBlock]   [phase0_json::SignedBeaconBlock];
    [AltairSignedBeaconBlock]   [altair_json::SignedBeaconBlock];
)]
impl<P: Preset> Encode for signed_block<P> {
    type Wire = wire_signed_block;

    fn encode(&self) -> Self::Wire {
        wire_signed_block {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

#[duplicate_item(
    signed_block                            wire_signed_block;
    [BellatrixSignedBeaconBlock]            [bellatrix_json::SignedBeaconBlock];
    [BellatrixSignedBlindedBeaconBlock]     [bellatrix_json::SignedBlindedBeaconBlock];
    [CapellaSignedBeaconBlock]              [capella_json::SignedBeaconBlock];
    [CapellaSignedBlindedBeaconBlock]       [capella_json::SignedBlindedBeaconBlock];
    [DenebSignedBeaconBlock]                [deneb_json::SignedBeaconBlock];
    [DenebSignedBlindedBeaconBlock]         [deneb_json::SignedBlindedBeaconBlock];
)]
impl<P: Preset> TryEncode for signed_block<P> {
    type Wire = wire_signed_block;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError> {
        Ok(wire_signed_block {
            message: Some(self.message.try_encode().at("Message")?),
            signature: encode_fixed(&self.signature),
        })
    }
}

#[duplicate_item(
    wire_signed_block                           wire_block;
    [phase0_json::SignedBeaconBlock]            [phase0_json::BeaconBlock];
    [altair_json::SignedBeaconBlock]            [altair_json::BeaconBlock];
    [bellatrix_json::SignedBeaconBlock]         [bellatrix_json::BeaconBlock];
    [bellatrix_json::SignedBlindedBeaconBlock]  [bellatrix_json::BlindedBeaconBlock];
    [capella_json::SignedBeaconBlock]           [capella_json::BeaconBlock];
    [capella_json::SignedBlindedBeaconBlock]    [capella_json::BlindedBeaconBlock];
    [deneb_json::SignedBeaconBlock]             [deneb_json::BeaconBlock];
    [deneb_json::SignedBlindedBeaconBlock]      [deneb_json::BlindedBeaconBlock];
)]
impl ToUnsigned for wire_signed_block {
    type Unsigned = Option<wire_block>;

    fn to_unsigned(&self) -> Self::Unsigned {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;
    use types::{
        nonstandard::Phase,
        preset::{Mainnet, Minimal},
    };

    use crate::fixtures::{self, decode_value};

    use super::*;

    #[test]
    fn missing_body_is_reported_before_slot() -> anyhow::Result<()> {
        let mut value = fixtures::block::<Mainnet>(Phase::Phase0, false);
        value["slot"] = json!("");
        value["body"] = json!(null);

        let error = decode_value::<Phase0BeaconBlock<Mainnet>>(value)?
            .expect_err("body is missing");

        assert_eq!(error.to_string(), "could not decode Body: nil value");

        Ok(())
    }

    #[test_case("eth1_data",         "could not decode Body.Eth1Data: nil value")]
    #[test_case("sync_aggregate",    "could not decode Body.SyncAggregate: nil value")]
    #[test_case("execution_payload", "could not decode Body.ExecutionPayload: nil value")]
    fn nested_presence_is_checked_before_slot(field: &str, message: &str) -> anyhow::Result<()> {
        let mut value = fixtures::block::<Minimal>(Phase::Capella, false);
        value["slot"] = json!("not a slot");
        value["body"][field] = json!(null);

        let error = decode_value::<CapellaBeaconBlock<Minimal>>(value)?
            .expect_err("nested object is missing");

        assert_eq!(error.to_string(), message);

        Ok(())
    }

    #[test_case("attester_slashings", "could not decode Body.AttesterSlashings[1]: nil value")]
    #[test_case("attestations",       "could not decode Body.Attestations[1]: nil value")]
    #[test_case("deposits",           "could not decode Body.Deposits[1]: nil value")]
    #[test_case("voluntary_exits",    "could not decode Body.VoluntaryExits[1]: nil value")]
    fn null_operations_are_nil_at_their_index(field: &str, message: &str) -> anyhow::Result<()> {
        let mut value = fixtures::block::<Mainnet>(Phase::Altair, false);
        let first = value["body"][field][0].clone();
        value["body"][field] = json!([first, null]);

        let error = decode_value::<AltairBeaconBlock<Mainnet>>(value)?
            .expect_err("second operation is null");

        assert_eq!(error.to_string(), message);

        Ok(())
    }

    #[test]
    fn null_fields_decode_like_missing_ones() -> anyhow::Result<()> {
        let mut null = fixtures::block::<Mainnet>(Phase::Phase0, false);
        null["parent_root"] = json!(null);

        let mut missing = null.clone();
        if let Some(fields) = missing.as_object_mut() {
            fields.remove("parent_root");
        }

        let null_error = decode_value::<Phase0BeaconBlock<Mainnet>>(null)?
            .expect_err("parent root is null");
        let missing_error = decode_value::<Phase0BeaconBlock<Mainnet>>(missing)?
            .expect_err("parent root is missing");

        assert_eq!(null_error, missing_error);
        assert_eq!(
            null_error.to_string(),
            "could not decode ParentRoot: value is required",
        );

        Ok(())
    }

    #[test]
    fn blinded_block_requires_header() -> anyhow::Result<()> {
        let mut value = fixtures::block::<Mainnet>(Phase::Deneb, true);
        value["body"]["execution_payload_header"] = json!(null);

        let error = decode_value::<DenebBlindedBeaconBlock<Mainnet>>(value)?
            .expect_err("header is missing");

        assert_eq!(
            error.to_string(),
            "could not decode Body.ExecutionPayloadHeader: nil value",
        );

        Ok(())
    }

    #[test]
    fn signed_block_paths_start_with_message() -> anyhow::Result<()> {
        let mut value = fixtures::signed(fixtures::block::<Mainnet>(Phase::Bellatrix, false));
        value["message"]["body"]["execution_payload"]["timestamp"] = json!("noon");

        let error = decode_value::<BellatrixSignedBeaconBlock<Mainnet>>(value)?
            .expect_err("timestamp is invalid");

        assert_eq!(
            error.to_string(),
            "could not decode Message.Body.ExecutionPayload.Timestamp: \
             invalid unsigned decimal integer",
        );

        Ok(())
    }

    #[test]
    fn unsigned_block_drops_only_the_signature() -> anyhow::Result<()> {
        let block = fixtures::block::<Mainnet>(Phase::Altair, false);
        let signed_value = fixtures::signed(block.clone());
        let signed = serde_json::from_value::<altair_json::SignedBeaconBlock>(signed_value)?;

        assert_eq!(serde_json::to_value(signed.to_unsigned())?, block);
        assert_eq!(altair_json::SignedBeaconBlock::default().to_unsigned(), None);

        Ok(())
    }

    #[test]
    fn signed_blinded_round_trip() -> anyhow::Result<()> {
        let value = fixtures::signed(fixtures::block::<Minimal>(Phase::Capella, true));
        let block = decode_value::<CapellaSignedBlindedBeaconBlock<Minimal>>(value.clone())??;

        assert_eq!(block.message.slot, 12);
        assert_eq!(serde_json::to_value(block.try_encode()?)?, value);

        Ok(())
    }
}

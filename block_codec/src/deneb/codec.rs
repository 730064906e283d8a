use types::{
    deneb::{
        containers::{
            BeaconBlockContents, BlindedBlobSidecar, BlobSidecar, SignedBeaconBlockContents,
            SignedBlindedBlobSidecar, SignedBlobSidecar,
        },
        primitives::Blob,
    },
    preset::Preset,
};

use crate::{
    bounded::decode_list_with,
    deneb::containers as json,
    error::{DecodeError, EncodeError, FieldError, WithPath as _},
    nested::{decode_required, decode_signed},
    scalar::{
        decode_byte_vector, decode_fixed, encode_decimal, encode_fixed, encode_hex,
        parse_decimal_u64,
    },
    traits::{Decode, Encode, ToUnsigned, TryEncode},
};

fn decode_blob<P: Preset>(string: &str) -> Result<Blob<P>, FieldError> {
    decode_byte_vector(string).map(Box::new)
}

fn encode_blob<P: Preset>(blob: &Blob<P>) -> String {
    encode_hex(blob.as_bytes())
}

impl<P: Preset> Decode for BlobSidecar<P> {
    type Wire = json::BlobSidecar;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            block_root: decode_fixed(&wire.block_root).at("BlockRoot")?,
            index: parse_decimal_u64(&wire.index).at("Index")?,
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            block_parent_root: decode_fixed(&wire.block_parent_root).at("BlockParentRoot")?,
            proposer_index: parse_decimal_u64(&wire.proposer_index).at("ProposerIndex")?,
            blob: decode_blob::<P>(&wire.blob).at("Blob")?,
            kzg_commitment: decode_fixed(&wire.kzg_commitment).at("KzgCommitment")?,
            kzg_proof: decode_fixed(&wire.kzg_proof).at("KzgProof")?,
        })
    }
}

impl<P: Preset> Encode for BlobSidecar<P> {
    type Wire = json::BlobSidecar;

    fn encode(&self) -> Self::Wire {
        json::BlobSidecar {
            block_root: encode_fixed(&self.block_root),
            index: encode_decimal(self.index),
            slot: encode_decimal(self.slot),
            block_parent_root: encode_fixed(&self.block_parent_root),
            proposer_index: encode_decimal(self.proposer_index),
            blob: encode_blob::<P>(&self.blob),
            kzg_commitment: encode_fixed(&self.kzg_commitment),
            kzg_proof: encode_fixed(&self.kzg_proof),
        }
    }
}

impl Decode for BlindedBlobSidecar {
    type Wire = json::BlindedBlobSidecar;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            block_root: decode_fixed(&wire.block_root).at("BlockRoot")?,
            index: parse_decimal_u64(&wire.index).at("Index")?,
            slot: parse_decimal_u64(&wire.slot).at("Slot")?,
            block_parent_root: decode_fixed(&wire.block_parent_root).at("BlockParentRoot")?,
            proposer_index: parse_decimal_u64(&wire.proposer_index).at("ProposerIndex")?,
            blob_root: decode_fixed(&wire.blob_root).at("BlobRoot")?,
            kzg_commitment: decode_fixed(&wire.kzg_commitment).at("KzgCommitment")?,
            kzg_proof: decode_fixed(&wire.kzg_proof).at("KzgProof")?,
        })
    }
}

impl Encode for BlindedBlobSidecar {
    type Wire = json::BlindedBlobSidecar;

    fn encode(&self) -> Self::Wire {
        json::BlindedBlobSidecar {
            block_root: encode_fixed(&self.block_root),
            index: encode_decimal(self.index),
            slot: encode_decimal(self.slot),
            block_parent_root: encode_fixed(&self.block_parent_root),
            proposer_index: encode_decimal(self.proposer_index),
            blob_root: encode_fixed(&self.blob_root),
            kzg_commitment: encode_fixed(&self.kzg_commitment),
            kzg_proof: encode_fixed(&self.kzg_proof),
        }
    }
}

impl<P: Preset> Decode for SignedBlobSidecar<P> {
    type Wire = json::SignedBlobSidecar;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl<P: Preset> Encode for SignedBlobSidecar<P> {
    type Wire = json::SignedBlobSidecar;

    fn encode(&self) -> Self::Wire {
        json::SignedBlobSidecar {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

impl Decode for SignedBlindedBlobSidecar {
    type Wire = json::SignedBlindedBlobSidecar;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl Encode for SignedBlindedBlobSidecar {
    type Wire = json::SignedBlindedBlobSidecar;

    fn encode(&self) -> Self::Wire {
        json::SignedBlindedBlobSidecar {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

// The block is decoded before the proofs and blobs that accompany it.
impl<P: Preset> Decode for BeaconBlockContents<P> {
    type Wire = json::BeaconBlockContents;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let block = decode_required(wire.block.as_ref()).at("Block")?;
        let kzg_proofs =
            decode_list_with(&wire.kzg_proofs, |proof| decode_fixed(proof)).at("KzgProofs")?;
        let blobs = decode_list_with(&wire.blobs, |blob| decode_blob::<P>(blob)).at("Blobs")?;

        Ok(Self {
            block,
            kzg_proofs,
            blobs,
        })
    }
}

impl<P: Preset> TryEncode for BeaconBlockContents<P> {
    type Wire = json::BeaconBlockContents;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError> {
        Ok(json::BeaconBlockContents {
            block: Some(self.block.try_encode().at("Block")?),
            kzg_proofs: self.kzg_proofs.iter().map(encode_fixed).collect(),
            blobs: self.blobs.iter().map(encode_blob::<P>).collect(),
        })
    }
}

impl<P: Preset> Decode for SignedBeaconBlockContents<P> {
    type Wire = json::SignedBeaconBlockContents;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let signed_block = decode_required(wire.signed_block.as_ref()).at("SignedBlock")?;
        let kzg_proofs =
            decode_list_with(&wire.kzg_proofs, |proof| decode_fixed(proof)).at("KzgProofs")?;
        let blobs = decode_list_with(&wire.blobs, |blob| decode_blob::<P>(blob)).at("Blobs")?;

        Ok(Self {
            signed_block,
            kzg_proofs,
            blobs,
        })
    }
}

impl<P: Preset> TryEncode for SignedBeaconBlockContents<P> {
    type Wire = json::SignedBeaconBlockContents;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError> {
        Ok(json::SignedBeaconBlockContents {
            signed_block: Some(self.signed_block.try_encode().at("SignedBlock")?),
            kzg_proofs: self.kzg_proofs.iter().map(encode_fixed).collect(),
            blobs: self.blobs.iter().map(encode_blob::<P>).collect(),
        })
    }
}

impl ToUnsigned for json::SignedBeaconBlockContents {
    type Unsigned = json::BeaconBlockContents;

    fn to_unsigned(&self) -> Self::Unsigned {
        json::BeaconBlockContents {
            block: self
                .signed_block
                .as_ref()
                .and_then(|signed_block| signed_block.message.clone()),
            kzg_proofs: self.kzg_proofs.clone(),
            blobs: self.blobs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use types::{
        deneb::containers::{
            BeaconBlockBody, BlindedBeaconBlockBody, ExecutionPayload, ExecutionPayloadHeader,
        },
        nonstandard::Phase,
        preset::{Mainnet, Minimal},
    };

    use crate::fixtures::{self, decode_value};

    use super::*;

    #[test]
    fn blob_gas_follows_withdrawals() -> anyhow::Result<()> {
        let mut value = fixtures::execution_payload(Phase::Deneb);
        value["blob_gas_used"] = json!("lots");
        value["withdrawals"][0]["amount"] = json!("");

        let error = decode_value::<ExecutionPayload<Mainnet>>(value)?
            .expect_err("withdrawal amount is empty");

        assert_eq!(
            error.to_string(),
            "could not decode Withdrawals[0].Amount: invalid unsigned decimal integer",
        );

        Ok(())
    }

    #[test]
    fn header_blob_gas_uses_header_path() -> anyhow::Result<()> {
        let mut value = fixtures::body::<Mainnet>(Phase::Deneb, true);
        value["execution_payload_header"]["excess_blob_gas"] = json!("-1");

        let error = decode_value::<BlindedBeaconBlockBody<Mainnet>>(value)?
            .expect_err("excess blob gas is negative");

        assert_eq!(
            error.to_string(),
            "could not decode ExecutionPayloadHeader.ExcessBlobGas: \
             invalid unsigned decimal integer",
        );

        Ok(())
    }

    #[test]
    fn commitments_are_bounded_by_preset() -> anyhow::Result<()> {
        let mut value = fixtures::body::<Minimal>(Phase::Deneb, false);
        value["blob_kzg_commitments"] = json!(vec![fixtures::bytes(0xc1, 48); 17]);

        let error = decode_value::<BeaconBlockBody<Minimal>>(value)?
            .expect_err("too many commitments");

        assert_eq!(
            error.to_string(),
            "could not decode BlobKzgCommitments: \
             expected list to have no more than 16 elements, found 17 elements",
        );

        Ok(())
    }

    #[test]
    fn commitment_errors_carry_index() -> anyhow::Result<()> {
        let mut value = fixtures::body::<Mainnet>(Phase::Deneb, false);
        value["blob_kzg_commitments"][1] = fixtures::bytes(0xc2, 32).into();

        let error = decode_value::<BeaconBlockBody<Mainnet>>(value)?
            .expect_err("commitment is too short");

        assert_eq!(
            error.to_string(),
            "could not decode BlobKzgCommitments[1]: expected 48 bytes, found 32 bytes",
        );

        Ok(())
    }

    #[test]
    fn null_commitment_is_required() -> anyhow::Result<()> {
        let mut value = fixtures::body::<Mainnet>(Phase::Deneb, true);
        value["blob_kzg_commitments"][0] = json!(null);

        let error = decode_value::<BlindedBeaconBlockBody<Mainnet>>(value)?
            .expect_err("first commitment is null");

        assert_eq!(
            error.to_string(),
            "could not decode BlobKzgCommitments[0]: value is required",
        );

        Ok(())
    }

    #[test]
    fn blob_sidecar_round_trip() -> anyhow::Result<()> {
        let value = fixtures::signed(fixtures::blob_sidecar::<Minimal>());
        let sidecar = decode_value::<SignedBlobSidecar<Minimal>>(value.clone())??;

        assert_eq!(sidecar.message.blob.len(), 131_072);
        assert_eq!(serde_json::to_value(sidecar.encode())?, value);

        Ok(())
    }

    #[test]
    fn blinded_blob_sidecar_checks_signature_first() -> anyhow::Result<()> {
        let mut value = fixtures::signed(fixtures::blinded_blob_sidecar());
        value["signature"] = json!("0x99");
        value["message"]["blob_root"] = json!("0x");

        let error = decode_value::<SignedBlindedBlobSidecar>(value)?
            .expect_err("signature is too short");

        assert_eq!(
            error.to_string(),
            "could not decode Signature: expected 96 bytes, found 1 bytes",
        );

        Ok(())
    }

    #[test]
    fn blinded_blob_sidecar_round_trip() -> anyhow::Result<()> {
        let value = fixtures::signed(fixtures::blinded_blob_sidecar());
        let sidecar = decode_value::<SignedBlindedBlobSidecar>(value.clone())??;

        assert_eq!(sidecar.message.index, 1);
        assert_eq!(serde_json::to_value(sidecar.encode())?, value);

        Ok(())
    }

    #[test]
    fn contents_decode_block_before_proofs() -> anyhow::Result<()> {
        let mut value = fixtures::block_contents::<Mainnet>();
        value["block"]["slot"] = json!("twelve");
        value["kzg_proofs"] = json!([fixtures::bytes(0xe1, 48), "0xe1"]);

        let error = decode_value::<BeaconBlockContents<Mainnet>>(value)?
            .expect_err("block slot and second proof are both invalid");

        assert_eq!(
            error.to_string(),
            "could not decode Block.Slot: invalid unsigned decimal integer",
        );

        Ok(())
    }

    #[test]
    fn signed_contents_decode_signed_block_before_blobs() -> anyhow::Result<()> {
        let mut value = fixtures::signed_block_contents::<Minimal>();
        value["signed_block"]["signature"] = json!("0x99");
        value["blobs"] = json!(["0xe2"]);

        let error = decode_value::<SignedBeaconBlockContents<Minimal>>(value)?
            .expect_err("signature and blob are both too short");

        assert_eq!(
            error.to_string(),
            "could not decode SignedBlock.Signature: expected 96 bytes, found 1 bytes",
        );

        Ok(())
    }

    #[test]
    fn contents_proofs_are_checked_once_block_is_valid() -> anyhow::Result<()> {
        let mut value = fixtures::block_contents::<Mainnet>();
        value["kzg_proofs"] = json!([fixtures::bytes(0xe1, 48), "0xe1"]);

        let error = decode_value::<BeaconBlockContents<Mainnet>>(value)?
            .expect_err("second proof is too short");

        assert_eq!(
            error.to_string(),
            "could not decode KzgProofs[1]: expected 48 bytes, found 1 bytes",
        );

        Ok(())
    }

    #[test]
    fn contents_blobs_have_fixed_length() -> anyhow::Result<()> {
        let mut value = fixtures::signed_block_contents::<Minimal>();
        value["blobs"] = json!(["0xe2"]);

        let error = decode_value::<SignedBeaconBlockContents<Minimal>>(value)?
            .expect_err("blob is too short");

        assert_eq!(
            error.to_string(),
            "could not decode Blobs[0]: expected 131072 bytes, found 1 bytes",
        );

        Ok(())
    }

    #[test]
    fn contents_blobs_are_bounded() -> anyhow::Result<()> {
        let mut value = fixtures::block_contents::<Mainnet>();
        value["blobs"] = json!(vec!["invalid"; 7]);

        let error = decode_value::<BeaconBlockContents<Mainnet>>(value)?
            .expect_err("too many blobs");

        assert_eq!(
            error.to_string(),
            "could not decode Blobs: expected list to have no more than 6 elements, found 7 elements",
        );

        Ok(())
    }

    #[test]
    fn missing_signed_block_is_nil() -> anyhow::Result<()> {
        let mut value = fixtures::signed_block_contents::<Mainnet>();
        value["signed_block"] = json!(null);

        let error = decode_value::<SignedBeaconBlockContents<Mainnet>>(value)?
            .expect_err("signed block is missing");

        assert_eq!(error.to_string(), "could not decode SignedBlock: nil value");

        Ok(())
    }

    #[test]
    fn contents_round_trip() -> anyhow::Result<()> {
        let value = fixtures::signed_block_contents::<Minimal>();
        let contents = decode_value::<SignedBeaconBlockContents<Minimal>>(value.clone())??;

        assert_eq!(contents.blobs.len(), 1);
        assert_eq!(serde_json::to_value(contents.try_encode()?)?, value);

        Ok(())
    }

    #[test]
    fn unsigned_contents_keep_proofs_and_blobs() -> anyhow::Result<()> {
        let signed = serde_json::from_value::<json::SignedBeaconBlockContents>(
            fixtures::signed_block_contents::<Minimal>(),
        )?;

        assert_eq!(
            serde_json::to_value(signed.to_unsigned())?,
            fixtures::block_contents::<Minimal>(),
        );

        let decoded_signed = SignedBeaconBlockContents::<Minimal>::decode(&signed)?;
        let decoded_unsigned = BeaconBlockContents::<Minimal>::decode(&signed.to_unsigned())?;

        assert_eq!(decoded_signed.into_unsigned(), decoded_unsigned);

        Ok(())
    }
}

//! Block bodies of every phase.
//!
//! Every body starts with the phase 0 operations, so their conversions are generated. Fields added
//! by later phases follow the shared ones in the order they were introduced.

use duplicate::duplicate_item;
use types::{
    altair::containers::BeaconBlockBody as AltairBeaconBlockBody,
    bellatrix::containers::{
        BeaconBlockBody as BellatrixBeaconBlockBody,
        BlindedBeaconBlockBody as BellatrixBlindedBeaconBlockBody,
    },
    capella::containers::{
        BeaconBlockBody as CapellaBeaconBlockBody,
        BlindedBeaconBlockBody as CapellaBlindedBeaconBlockBody,
    },
    deneb::containers::{
        BeaconBlockBody as DenebBeaconBlockBody,
        BlindedBeaconBlockBody as DenebBlindedBeaconBlockBody,
    },
    phase0::containers::BeaconBlockBody as Phase0BeaconBlockBody,
    preset::Preset,
};

use crate::{
    altair::containers as altair_json,
    bellatrix::containers as bellatrix_json,
    bounded::{decode_list_with, decode_required_list, encode_list},
    capella::containers as capella_json,
    deneb::containers as deneb_json,
    error::{required, DecodeError, EncodeError, WithPath as _},
    nested::decode_required,
    phase0::containers as phase0_json,
    scalar::{decode_fixed, encode_fixed},
    traits::{Decode, Encode, TryEncode},
};

// Nested objects are checked before any field is converted so that a missing one is reported even
// when an earlier scalar is invalid.
#[duplicate_item(
    [
        wire_body [phase0_json::BeaconBlockBody]
        later_checks []
    ]
    [
        wire_body [altair_json::BeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
        ]
    ]
    [
        wire_body [bellatrix_json::BeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
            required(self.execution_payload.as_ref()).at("ExecutionPayload")?;
        ]
    ]
    [
        wire_body [bellatrix_json::BlindedBeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
            required(self.execution_payload_header.as_ref()).at("ExecutionPayloadHeader")?;
        ]
    ]
    [
        wire_body [capella_json::BeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
            required(self.execution_payload.as_ref()).at("ExecutionPayload")?;
        ]
    ]
    [
        wire_body [capella_json::BlindedBeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
            required(self.execution_payload_header.as_ref()).at("ExecutionPayloadHeader")?;
        ]
    ]
    [
        wire_body [deneb_json::BeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
            required(self.execution_payload.as_ref()).at("ExecutionPayload")?;
        ]
    ]
    [
        wire_body [deneb_json::BlindedBeaconBlockBody]
        later_checks [
            required(self.sync_aggregate.as_ref()).at("SyncAggregate")?;
            required(self.execution_payload_header.as_ref()).at("ExecutionPayloadHeader")?;
        ]
    ]
)]
impl wire_body {
    pub(crate) fn check_presence(&self) -> Result<(), DecodeError> {
        required(self.eth1_data.as_ref()).at("Eth1Data")?;
        { later_checks }
        Ok(())
    }
}

#[duplicate_item(
    [
        body [Phase0BeaconBlockBody]
        wire_body [phase0_json::BeaconBlockBody]
        later_fields []
    ]
    [
        body [AltairBeaconBlockBody]
        wire_body [altair_json::BeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
        ]
    ]
    [
        body [BellatrixBeaconBlockBody]
        wire_body [bellatrix_json::BeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
            execution_payload: decode_required(wire.execution_payload.as_ref())
                .at("ExecutionPayload")?,
        ]
    ]
    [
        body [BellatrixBlindedBeaconBlockBody]
        wire_body [bellatrix_json::BlindedBeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
            execution_payload_header: decode_required(wire.execution_payload_header.as_ref())
                .at("ExecutionPayloadHeader")?,
        ]
    ]
    [
        body [CapellaBeaconBlockBody]
        wire_body [capella_json::BeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
            execution_payload: decode_required(wire.execution_payload.as_ref())
                .at("ExecutionPayload")?,
            bls_to_execution_changes: decode_required_list(
                wire.bls_to_execution_changes.as_ref(),
            )
            .at("BLSToExecutionChanges")?,
        ]
    ]
    [
        body [CapellaBlindedBeaconBlockBody]
        wire_body [capella_json::BlindedBeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
            execution_payload_header: decode_required(wire.execution_payload_header.as_ref())
                .at("ExecutionPayloadHeader")?,
            bls_to_execution_changes: decode_required_list(
                wire.bls_to_execution_changes.as_ref(),
            )
            .at("BLSToExecutionChanges")?,
        ]
    ]
    [
        body [DenebBeaconBlockBody]
        wire_body [deneb_json::BeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
            execution_payload: decode_required(wire.execution_payload.as_ref())
                .at("ExecutionPayload")?,
            bls_to_execution_changes: decode_required_list(
                wire.bls_to_execution_changes.as_ref(),
            )
            .at("BLSToExecutionChanges")?,
            blob_kzg_commitments: decode_list_with(&wire.blob_kzg_commitments, |commitment| {
                decode_fixed(commitment)
            })
            .at("BlobKzgCommitments")?,
        ]
    ]
    [
        body [DenebBlindedBeaconBlockBody]
        wire_body [deneb_json::BlindedBeaconBlockBody]
        later_fields [
            sync_aggregate: decode_required(wire.sync_aggregate.as_ref()).at("SyncAggregate")?,
            execution_payload_header: decode_required(wire.execution_payload_header.as_ref())
                .at("ExecutionPayloadHeader")?,
            bls_to_execution_changes: decode_required_list(
                wire.bls_to_execution_changes.as_ref(),
            )
            .at("BLSToExecutionChanges")?,
            blob_kzg_commitments: decode_list_with(&wire.blob_kzg_commitments, |commitment| {
                decode_fixed(commitment)
            })
            .at("BlobKzgCommitments")?,
        ]
    ]
)]
impl<P: Preset> Decode for body<P> {
    type Wire = wire_body;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        wire.check_presence()?;

        Ok(Self {
            randao_reveal: decode_fixed(&wire.randao_reveal).at("RandaoReveal")?,
            eth1_data: decode_required(wire.eth1_data.as_ref()).at("Eth1Data")?,
            graffiti: decode_fixed(&wire.graffiti).at("Graffiti")?,
            proposer_slashings: decode_required_list(wire.proposer_slashings.as_ref())
                .at("ProposerSlashings")?,
            attester_slashings: decode_required_list(wire.attester_slashings.as_ref())
                .at("AttesterSlashings")?,
            attestations: decode_required_list(wire.attestations.as_ref()).at("Attestations")?,
            deposits: decode_required_list(wire.deposits.as_ref()).at("Deposits")?,
            voluntary_exits: decode_required_list(wire.voluntary_exits.as_ref())
                .at("VoluntaryExits")?,
            later_fields
        })
    }
}

#[duplicate_item(
    [
        body [Phase0BeaconBlockBody]
        wire_body [phase0_json::BeaconBlockBody]
        later_fields []
    ]
    [
        body [AltairBeaconBlockBody]
        wire_body [altair_json::BeaconBlockBody]
        later_fields [
            sync_aggregate: Some(self.sync_aggregate.encode()),
        ]
    ]
)]
impl<P: Preset> Encode for body<P> {
    type Wire = wire_body;

    fn encode(&self) -> Self::Wire {
        wire_body {
            randao_reveal: encode_fixed(&self.randao_reveal),
            eth1_data: Some(self.eth1_data.encode()),
            graffiti: encode_fixed(&self.graffiti),
            proposer_slashings: Some(encode_list(&self.proposer_slashings)),
            attester_slashings: Some(encode_list(&self.attester_slashings)),
            attestations: Some(encode_list(&self.attestations)),
            deposits: Some(encode_list(&self.deposits)),
            voluntary_exits: Some(encode_list(&self.voluntary_exits)),
            later_fields
        }
    }
}

#[duplicate_item(
    [
        body [BellatrixBeaconBlockBody]
        wire_body [bellatrix_json::BeaconBlockBody]
        later_fields [
            execution_payload: Some(self.execution_payload.try_encode().at("ExecutionPayload")?),
        ]
    ]
    [
        body [BellatrixBlindedBeaconBlockBody]
        wire_body [bellatrix_json::BlindedBeaconBlockBody]
        later_fields [
            execution_payload_header: Some(
                self.execution_payload_header
                    .try_encode()
                    .at("ExecutionPayloadHeader")?,
            ),
        ]
    ]
    [
        body [CapellaBeaconBlockBody]
        wire_body [capella_json::BeaconBlockBody]
        later_fields [
            execution_payload: Some(self.execution_payload.try_encode().at("ExecutionPayload")?),
            bls_to_execution_changes: Some(encode_list(&self.bls_to_execution_changes)),
        ]
    ]
    [
        body [CapellaBlindedBeaconBlockBody]
        wire_body [capella_json::BlindedBeaconBlockBody]
        later_fields [
            execution_payload_header: Some(
                self.execution_payload_header
                    .try_encode()
                    .at("ExecutionPayloadHeader")?,
            ),
            bls_to_execution_changes: Some(encode_list(&self.bls_to_execution_changes)),
        ]
    ]
    [
        body [DenebBeaconBlockBody]
        wire_body [deneb_json::BeaconBlockBody]
        later_fields [
            execution_payload: Some(self.execution_payload.try_encode().at("ExecutionPayload")?),
            bls_to_execution_changes: Some(encode_list(&self.bls_to_execution_changes)),
            blob_kzg_commitments: self.blob_kzg_commitments.iter().map(encode_fixed).collect(),
        ]
    ]
    [
        body [DenebBlindedBeaconBlockBody]
        wire_body [deneb_json::BlindedBeaconBlockBody]
        later_fields [
            execution_payload_header: Some(
                self.execution_payload_header
                    .try_encode()
                    .at("ExecutionPayloadHeader")?,
            ),
            bls_to_execution_changes: Some(encode_list(&self.bls_to_execution_changes)),
            blob_kzg_commitments: self.blob_kzg_commitments.iter().map(encode_fixed).collect(),
        ]
    ]
)]
impl<P: Preset> TryEncode for body<P> {
    type Wire = wire_body;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError> {
        Ok(wire_body {
            randao_reveal: encode_fixed(&self.randao_reveal),
            eth1_data: Some(self.eth1_data.encode()),
            graffiti: encode_fixed(&self.graffiti),
            proposer_slashings: Some(encode_list(&self.proposer_slashings)),
            attester_slashings: Some(encode_list(&self.attester_slashings)),
            attestations: Some(encode_list(&self.attestations)),
            deposits: Some(encode_list(&self.deposits)),
            voluntary_exits: Some(encode_list(&self.voluntary_exits)),
            sync_aggregate: Some(self.sync_aggregate.encode()),
            later_fields
        })
    }
}

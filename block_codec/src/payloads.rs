//! Execution payloads and payload headers of every phase that has them.
//!
//! A header differs from its payload only in carrying roots instead of transactions and
//! withdrawals, so both share the same leading fields.

use duplicate::duplicate_item;
use types::{
    bellatrix::containers::{
        ExecutionPayload as BellatrixExecutionPayload,
        ExecutionPayloadHeader as BellatrixExecutionPayloadHeader,
    },
    capella::containers::{
        ExecutionPayload as CapellaExecutionPayload,
        ExecutionPayloadHeader as CapellaExecutionPayloadHeader,
    },
    deneb::containers::{
        ExecutionPayload as DenebExecutionPayload,
        ExecutionPayloadHeader as DenebExecutionPayloadHeader,
    },
    preset::Preset,
};

use crate::{
    bellatrix::containers as bellatrix_json,
    bounded::{decode_list, decode_list_with, encode_list},
    capella::containers as capella_json,
    deneb::containers as deneb_json,
    error::{DecodeError, EncodeError, WithPath as _},
    scalar::{
        decode_byte_list, decode_byte_vector, decode_fixed, encode_decimal, encode_fixed,
        encode_hex, parse_decimal_u64,
    },
    traits::{Decode, TryEncode},
    uint256,
};

#[duplicate_item(
    [
        payload [BellatrixExecutionPayload]
        wire_payload [bellatrix_json::ExecutionPayload]
        later_fields [
            transactions: decode_list_with(&wire.transactions, |transaction| {
                decode_byte_list(transaction)
            })
            .at("Transactions")?,
        ]
    ]
    [
        payload [BellatrixExecutionPayloadHeader]
        wire_payload [bellatrix_json::ExecutionPayloadHeader]
        later_fields [
            transactions_root: decode_fixed(&wire.transactions_root).at("TransactionsRoot")?,
        ]
    ]
    [
        payload [CapellaExecutionPayload]
        wire_payload [capella_json::ExecutionPayload]
        later_fields [
            transactions: decode_list_with(&wire.transactions, |transaction| {
                decode_byte_list(transaction)
            })
            .at("Transactions")?,
            withdrawals: decode_list(&wire.withdrawals).at("Withdrawals")?,
        ]
    ]
    [
        payload [CapellaExecutionPayloadHeader]
        wire_payload [capella_json::ExecutionPayloadHeader]
        later_fields [
            transactions_root: decode_fixed(&wire.transactions_root).at("TransactionsRoot")?,
            withdrawals_root: decode_fixed(&wire.withdrawals_root).at("WithdrawalsRoot")?,
        ]
    ]
    [
        payload [DenebExecutionPayload]
        wire_payload [deneb_json::ExecutionPayload]
        later_fields [
            transactions: decode_list_with(&wire.transactions, |transaction| {
                decode_byte_list(transaction)
            })
            .at("Transactions")?,
            withdrawals: decode_list(&wire.withdrawals).at("Withdrawals")?,
            blob_gas_used: parse_decimal_u64(&wire.blob_gas_used).at("BlobGasUsed")?,
            excess_blob_gas: parse_decimal_u64(&wire.excess_blob_gas).at("ExcessBlobGas")?,
        ]
    ]
    [
        payload [DenebExecutionPayloadHeader]
        wire_payload [deneb_json::ExecutionPayloadHeader]
        later_fields [
            transactions_root: decode_fixed(&wire.transactions_root).at("TransactionsRoot")?,
            withdrawals_root: decode_fixed(&wire.withdrawals_root).at("WithdrawalsRoot")?,
            blob_gas_used: parse_decimal_u64(&wire.blob_gas_used).at("BlobGasUsed")?,
            excess_blob_gas: parse_decimal_u64(&wire.excess_blob_gas).at("ExcessBlobGas")?,
        ]
    ]
)]
impl<P: Preset> Decode for payload<P> {
    type Wire = wire_payload;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            parent_hash: decode_fixed(&wire.parent_hash).at("ParentHash")?,
            fee_recipient: decode_fixed(&wire.fee_recipient).at("FeeRecipient")?,
            state_root: decode_fixed(&wire.state_root).at("StateRoot")?,
            receipts_root: decode_fixed(&wire.receipts_root).at("ReceiptsRoot")?,
            logs_bloom: decode_byte_vector(&wire.logs_bloom).at("LogsBloom")?,
            prev_randao: decode_fixed(&wire.prev_randao).at("PrevRandao")?,
            block_number: parse_decimal_u64(&wire.block_number).at("BlockNumber")?,
            gas_limit: parse_decimal_u64(&wire.gas_limit).at("GasLimit")?,
            gas_used: parse_decimal_u64(&wire.gas_used).at("GasUsed")?,
            timestamp: parse_decimal_u64(&wire.timestamp).at("Timestamp")?,
            extra_data: decode_byte_list(&wire.extra_data).at("ExtraData")?,
            base_fee_per_gas: uint256::decode(&wire.base_fee_per_gas).at("BaseFeePerGas")?,
            block_hash: decode_fixed(&wire.block_hash).at("BlockHash")?,
            later_fields
        })
    }
}

#[duplicate_item(
    [
        payload [BellatrixExecutionPayload]
        wire_payload [bellatrix_json::ExecutionPayload]
        later_fields [
            transactions: self
                .transactions
                .iter()
                .map(|transaction| encode_hex(transaction.as_bytes()))
                .collect(),
        ]
    ]
    [
        payload [BellatrixExecutionPayloadHeader]
        wire_payload [bellatrix_json::ExecutionPayloadHeader]
        later_fields [
            transactions_root: encode_fixed(&self.transactions_root),
        ]
    ]
    [
        payload [CapellaExecutionPayload]
        wire_payload [capella_json::ExecutionPayload]
        later_fields [
            transactions: self
                .transactions
                .iter()
                .map(|transaction| encode_hex(transaction.as_bytes()))
                .collect(),
            withdrawals: encode_list(&self.withdrawals),
        ]
    ]
    [
        payload [CapellaExecutionPayloadHeader]
        wire_payload [capella_json::ExecutionPayloadHeader]
        later_fields [
            transactions_root: encode_fixed(&self.transactions_root),
            withdrawals_root: encode_fixed(&self.withdrawals_root),
        ]
    ]
    [
        payload [DenebExecutionPayload]
        wire_payload [deneb_json::ExecutionPayload]
        later_fields [
            transactions: self
                .transactions
                .iter()
                .map(|transaction| encode_hex(transaction.as_bytes()))
                .collect(),
            withdrawals: encode_list(&self.withdrawals),
            blob_gas_used: encode_decimal(self.blob_gas_used),
            excess_blob_gas: encode_decimal(self.excess_blob_gas),
        ]
    ]
    [
        payload [DenebExecutionPayloadHeader]
        wire_payload [deneb_json::ExecutionPayloadHeader]
        later_fields [
            transactions_root: encode_fixed(&self.transactions_root),
            withdrawals_root: encode_fixed(&self.withdrawals_root),
            blob_gas_used: encode_decimal(self.blob_gas_used),
            excess_blob_gas: encode_decimal(self.excess_blob_gas),
        ]
    ]
)]
impl<P: Preset> TryEncode for payload<P> {
    type Wire = wire_payload;

    fn try_encode(&self) -> Result<Self::Wire, EncodeError> {
        Ok(wire_payload {
            parent_hash: encode_fixed(&self.parent_hash),
            fee_recipient: encode_fixed(&self.fee_recipient),
            state_root: encode_fixed(&self.state_root),
            receipts_root: encode_fixed(&self.receipts_root),
            logs_bloom: encode_hex(self.logs_bloom.as_bytes()),
            prev_randao: encode_fixed(&self.prev_randao),
            block_number: encode_decimal(self.block_number),
            gas_limit: encode_decimal(self.gas_limit),
            gas_used: encode_decimal(self.gas_used),
            timestamp: encode_decimal(self.timestamp),
            extra_data: encode_hex(self.extra_data.as_bytes()),
            base_fee_per_gas: uint256::encode(self.base_fee_per_gas).at("BaseFeePerGas")?,
            block_hash: encode_fixed(&self.block_hash),
            later_fields
        })
    }
}

use types::capella::containers::{BlsToExecutionChange, SignedBlsToExecutionChange, Withdrawal};

use crate::{
    capella::containers as json,
    error::{DecodeError, WithPath as _},
    nested::decode_signed,
    scalar::{decode_fixed, encode_decimal, encode_fixed, parse_decimal_u64},
    traits::{Decode, Encode},
};

impl Decode for Withdrawal {
    type Wire = json::Withdrawal;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            index: parse_decimal_u64(&wire.index).at("WithdrawalIndex")?,
            validator_index: parse_decimal_u64(&wire.validator_index).at("ValidatorIndex")?,
            address: decode_fixed(&wire.address).at("ExecutionAddress")?,
            amount: parse_decimal_u64(&wire.amount).at("Amount")?,
        })
    }
}

impl Encode for Withdrawal {
    type Wire = json::Withdrawal;

    fn encode(&self) -> Self::Wire {
        json::Withdrawal {
            index: encode_decimal(self.index),
            validator_index: encode_decimal(self.validator_index),
            address: encode_fixed(&self.address),
            amount: encode_decimal(self.amount),
        }
    }
}

impl Decode for BlsToExecutionChange {
    type Wire = json::BlsToExecutionChange;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        Ok(Self {
            validator_index: parse_decimal_u64(&wire.validator_index).at("ValidatorIndex")?,
            from_bls_pubkey: decode_fixed(&wire.from_bls_pubkey).at("FromBLSPubkey")?,
            to_execution_address: decode_fixed(&wire.to_execution_address)
                .at("ToExecutionAddress")?,
        })
    }
}

impl Encode for BlsToExecutionChange {
    type Wire = json::BlsToExecutionChange;

    fn encode(&self) -> Self::Wire {
        json::BlsToExecutionChange {
            validator_index: encode_decimal(self.validator_index),
            from_bls_pubkey: encode_fixed(&self.from_bls_pubkey),
            to_execution_address: encode_fixed(&self.to_execution_address),
        }
    }
}

impl Decode for SignedBlsToExecutionChange {
    type Wire = json::SignedBlsToExecutionChange;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl Encode for SignedBlsToExecutionChange {
    type Wire = json::SignedBlsToExecutionChange;

    fn encode(&self) -> Self::Wire {
        json::SignedBlsToExecutionChange {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

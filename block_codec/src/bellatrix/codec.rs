use types::bellatrix::containers::{SignedValidatorRegistration, ValidatorRegistration};

use crate::{
    bellatrix::containers as json,
    error::{DecodeError, WithPath as _},
    nested::decode_signed,
    scalar::{decode_fixed, encode_decimal, encode_fixed, parse_decimal_u64},
    traits::{Decode, Encode},
};

// The fee recipient and public key are checked before the numeric fields.
impl Decode for ValidatorRegistration {
    type Wire = json::ValidatorRegistration;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let fee_recipient = decode_fixed(&wire.fee_recipient).at("FeeRecipient")?;
        let pubkey = decode_fixed(&wire.pubkey).at("Pubkey")?;
        let gas_limit = parse_decimal_u64(&wire.gas_limit).at("GasLimit")?;
        let timestamp = parse_decimal_u64(&wire.timestamp).at("Timestamp")?;

        Ok(Self {
            fee_recipient,
            gas_limit,
            timestamp,
            pubkey,
        })
    }
}

impl Encode for ValidatorRegistration {
    type Wire = json::ValidatorRegistration;

    fn encode(&self) -> Self::Wire {
        json::ValidatorRegistration {
            fee_recipient: encode_fixed(&self.fee_recipient),
            gas_limit: encode_decimal(self.gas_limit),
            timestamp: encode_decimal(self.timestamp),
            pubkey: encode_fixed(&self.pubkey),
        }
    }
}

impl Decode for SignedValidatorRegistration {
    type Wire = json::SignedValidatorRegistration;

    fn decode(wire: &Self::Wire) -> Result<Self, DecodeError> {
        let (message, signature) = decode_signed(wire.message.as_ref(), &wire.signature)?;
        Ok(Self { message, signature })
    }
}

impl Encode for SignedValidatorRegistration {
    type Wire = json::SignedValidatorRegistration;

    fn encode(&self) -> Self::Wire {
        json::SignedValidatorRegistration {
            message: Some(self.message.encode()),
            signature: encode_fixed(&self.signature),
        }
    }
}

//! Range checks and the validated transaction model.

use serde::Deserialize;
use vbk_address::Address;
use vbk_codec::VarLenInt;

use crate::errors::ValidationError;
use crate::types::{Output, OutputList, SpendEffects, TxType};

/// Largest amount in atomic units.
pub const MAX_AMOUNT: u64 = i64::MAX as u64;

/// Largest signature index.
pub const MAX_SIGNATURE_INDEX: u64 = i64::MAX as u64;

/// Checks an amount is within `0..=MAX_AMOUNT`.
pub fn check_amount(field: &'static str, value: i128) -> Result<u64, ValidationError> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_AMOUNT)
        .ok_or(ValidationError::AmountOutOfRange { field, value })
}

/// Checks a value fits in a single byte field.
pub fn check_byte(field: &'static str, value: u64) -> Result<u8, ValidationError> {
    u8::try_from(value).map_err(|_| ValidationError::ByteOutOfRange { field, value })
}

/// Checks a signature index is within `0..=MAX_SIGNATURE_INDEX`.
pub fn check_signature_index(value: i128) -> Result<u64, ValidationError> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_SIGNATURE_INDEX)
        .ok_or(ValidationError::IndexOutOfRange(value))
}

/// Unvalidated output, as it comes from a caller.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputInput {
    /// Destination address string.
    pub address: String,

    /// Amount in atomic units.
    pub amount: i128,
}

/// Unvalidated transaction, as it comes from a caller.
#[derive(Clone, Debug, Deserialize)]
pub struct TxInput {
    /// Transaction type byte.
    #[serde(default = "default_tx_type")]
    pub tx_type: u64,

    /// Address the funds come from.
    pub source_address: String,

    /// Amount leaving the source address, outputs plus fee.
    pub source_amount: i128,

    /// Where the funds go.
    #[serde(default)]
    pub outputs: Vec<OutputInput>,
}

fn default_tx_type() -> u64 {
    TxType::Standard as u64
}

impl TxInput {
    /// Checks every field, producing effects that are safe to serialize.
    pub fn validate(&self) -> Result<TransactionEffects, ValidationError> {
        let tx_type = TxType::try_from(check_byte("tx_type", self.tx_type)?)?;
        let source_address = Address::parse(&self.source_address)?;
        let source_amount = check_amount("source", self.source_amount)?;

        if self.outputs.len() > crate::MAX_OUTPUTS {
            return Err(ValidationError::TooManyOutputs(self.outputs.len()));
        }

        let outputs = self
            .outputs
            .iter()
            .map(|o| {
                Ok(Output::new(
                    Address::parse(&o.address)?,
                    VarLenInt::new(check_amount("output", o.amount)?),
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(TransactionEffects {
            tx_type,
            source_address,
            source_amount,
            outputs: OutputList::from_vec(outputs)?,
        })
    }
}

/// Validated spend effects, missing only the signature index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionEffects {
    tx_type: TxType,
    source_address: Address,
    source_amount: u64,
    outputs: OutputList,
}

impl TransactionEffects {
    /// Constructs a new instance, checking the amounts.
    pub fn new(
        tx_type: TxType,
        source_address: Address,
        source_amount: u64,
        outputs: Vec<Output>,
    ) -> Result<Self, ValidationError> {
        let source_amount = check_amount("source", i128::from(source_amount))?;
        for o in &outputs {
            check_amount("output", i128::from(o.amount().inner()))?;
        }

        Ok(Self {
            tx_type,
            source_address,
            source_amount,
            outputs: OutputList::from_vec(outputs)?,
        })
    }

    /// Gets the transaction type.
    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    /// Gets the source address.
    pub fn source_address(&self) -> &Address {
        &self.source_address
    }

    /// Gets the source amount.
    pub fn source_amount(&self) -> u64 {
        self.source_amount
    }

    /// Gets the outputs.
    pub fn outputs(&self) -> &[Output] {
        self.outputs.as_slice()
    }

    /// Sum of the output amounts.
    pub fn total_output(&self) -> u128 {
        self.outputs
            .as_slice()
            .iter()
            .map(|o| u128::from(o.amount().inner()))
            .sum()
    }

    /// Builds the wire record for a signature index.
    pub fn to_spend_effects(&self, signature_index: u64) -> Result<SpendEffects, ValidationError> {
        let signature_index = check_signature_index(i128::from(signature_index))?;
        Ok(SpendEffects::new(
            self.tx_type,
            self.source_address.clone(),
            VarLenInt::new(self.source_amount),
            self.outputs.clone(),
            VarLenInt::new(signature_index),
        ))
    }
}

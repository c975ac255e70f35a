//! Transfer request building.

use rbridge_converter::from_display;
use rbridge_types::{ChainId, DecimalSpec, EvmAddress, NativeAmount};
use serde::{Deserialize, Serialize};

use crate::config::BridgeConfig;
use crate::error::TransferError;

/// Parameters of a native-token bridge transfer, ready for submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Raw amount in native base units.
    pub amount: NativeAmount,
    pub recipient: EvmAddress,
    pub dest_chain: ChainId,
}

impl TransferRequest {
    /// The recipient in EIP-55 checksummed form, for echoing back to the user.
    pub fn recipient_checksummed(&self) -> String {
        let lower = self.recipient.to_string();
        rbridge_crypto::to_checksum_address(&lower).unwrap_or(lower)
    }
}

/// Collects raw input and validates it into a [`TransferRequest`].
///
/// Checks run in this order and stop at the first failure: recipient
/// present, recipient valid, amount present, amount non-zero, amount within
/// the sender's transferable balance (when known).
#[derive(Clone, Debug, Default)]
pub struct TransferBuilder {
    dest_chain: ChainId,
    decimals: DecimalSpec,
    recipient: Option<String>,
    amount: Option<NativeAmount>,
    available: Option<NativeAmount>,
}

impl TransferBuilder {
    pub fn new(dest_chain: ChainId, decimals: DecimalSpec) -> Self {
        Self {
            dest_chain,
            decimals,
            ..Self::default()
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.dest_chain, config.decimals)
    }

    pub fn recipient(mut self, raw: impl Into<String>) -> Self {
        self.recipient = Some(raw.into());
        self
    }

    /// Amount already expressed in native base units.
    pub fn amount(mut self, amount: NativeAmount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Amount as typed by the user in display units.
    pub fn display_amount(mut self, input: &str) -> Result<Self, TransferError> {
        self.amount = Some(from_display(input, self.decimals)?);
        Ok(self)
    }

    /// The sender's transferable balance, if it has been fetched.
    pub fn available(mut self, available: NativeAmount) -> Self {
        self.available = Some(available);
        self
    }

    pub fn build(self) -> Result<TransferRequest, TransferError> {
        let raw_recipient = self.recipient.ok_or(TransferError::MissingRecipient)?;
        if raw_recipient.is_empty() {
            return Err(TransferError::MissingRecipient);
        }
        let recipient = rbridge_crypto::parse_address(&raw_recipient)?;

        let amount = self.amount.ok_or(TransferError::MissingAmount)?;
        if amount.is_zero() {
            return Err(TransferError::ZeroAmount);
        }
        if let Some(available) = self.available {
            if amount > available {
                return Err(TransferError::InsufficientBalance {
                    needed: amount,
                    available,
                });
            }
        }

        tracing::info!(
            recipient = %recipient,
            amount = %amount,
            dest_chain = self.dest_chain.as_u8(),
            "built bridge transfer"
        );
        Ok(TransferRequest {
            amount,
            recipient,
            dest_chain: self.dest_chain,
        })
    }
}

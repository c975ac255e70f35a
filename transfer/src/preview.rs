//! Amount previews shown before a transfer is submitted.
//!
//! The bridge withdraws its fee from the transferred amount once the
//! transaction is finalised, so the recipient receives `amount - fee`. The fee
//! is an estimate supplied by the caller; the arriving amount floors at zero.

use rbridge_converter::to_display_with;
use rbridge_types::{DecimalSpec, DisplayMode, NativeAmount};
use serde::Serialize;

use crate::request::TransferRequest;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransferPreview {
    pub amount: String,
    pub fee: Option<String>,
    pub receive: String,
    pub recipient: String,
    pub dest_chain: String,
}

impl TransferPreview {
    pub fn new(
        request: &TransferRequest,
        fee: Option<&NativeAmount>,
        spec: DecimalSpec,
        mode: DisplayMode,
    ) -> Self {
        let receive = match fee {
            Some(fee) => request.amount.saturating_sub(fee),
            None => request.amount.clone(),
        };
        Self {
            amount: to_display_with(&request.amount, spec, mode),
            fee: fee.map(|f| to_display_with(f, spec, mode)),
            receive: to_display_with(&receive, spec, mode),
            recipient: request.recipient_checksummed(),
            dest_chain: request.dest_chain.to_string(),
        }
    }

    /// Whether the estimated fee consumes the whole amount.
    pub fn receives_nothing(&self) -> bool {
        self.receive.bytes().all(|b| b == b'0' || b == b'.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::TransferBuilder;
    use rbridge_types::ChainId;

    fn request(amount: u64) -> TransferRequest {
        TransferBuilder::new(ChainId::ETHEREUM, DecimalSpec::default())
            .recipient("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359")
            .amount(NativeAmount::from(amount))
            .build()
            .unwrap()
    }

    #[test]
    fn preview_without_fee() {
        let p = TransferPreview::new(
            &request(2_500_000_000_000),
            None,
            DecimalSpec::default(),
            DisplayMode::Trimmed,
        );
        assert_eq!(p.amount, "2.5");
        assert_eq!(p.fee, None);
        assert_eq!(p.receive, "2.5");
        assert_eq!(p.recipient, "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
        assert_eq!(p.dest_chain, "2 (ethereum)");
        assert!(!p.receives_nothing());
    }

    #[test]
    fn preview_subtracts_fee() {
        let fee = NativeAmount::from(500_000_000_000u64);
        let p = TransferPreview::new(
            &request(2_500_000_000_000),
            Some(&fee),
            DecimalSpec::default(),
            DisplayMode::Fixed,
        );
        assert_eq!(p.amount, "2.500000");
        assert_eq!(p.fee.as_deref(), Some("0.500000"));
        assert_eq!(p.receive, "2.000000");
    }

    #[test]
    fn fee_above_amount_floors_at_zero() {
        let fee = NativeAmount::from(3_000_000_000_000u64);
        let p = TransferPreview::new(
            &request(1_000_000_000_000),
            Some(&fee),
            DecimalSpec::default(),
            DisplayMode::Trimmed,
        );
        assert_eq!(p.receive, "0");
        assert!(p.receives_nothing());
    }
}

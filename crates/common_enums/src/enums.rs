//! Refund channel and lifecycle enumerations.
//!
//! The `Display` strings of [`RefundMode`] are the customer-facing channel
//! names interpolated verbatim into generated messages, so changing them
//! changes message wording.

use serde::{Deserialize, Serialize};

/// The payment/refund channel a refund settles to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum RefundMode {
    /// Refund to the credit card used for the payment.
    #[default]
    #[strum(serialize = "Credit Card")]
    CreditCard,
    /// Refund to a credit card paid through an EMI plan.
    #[strum(serialize = "Credit Card EMI")]
    CreditCardEmi,
    /// Refund to the customer's UPI handle.
    #[strum(serialize = "UPI")]
    Upi,
    /// Refund to the debit card used for the payment.
    #[strum(serialize = "Debit Card")]
    DebitCard,
    /// Refund to the bank account used over net banking.
    #[strum(serialize = "NetBanking")]
    NetBanking,
    /// Refund settled as a NEFT bank transfer.
    #[strum(serialize = "NEFT")]
    Neft,
    /// Refund settled as an IMPS bank transfer.
    #[strum(serialize = "IMPS")]
    Imps,
    /// Refund to the Flipkart-issued UPI handle.
    #[strum(serialize = "Flipkart UPI")]
    FlipkartUpi,
    /// Refund issued as a gift card into the customer's wallet.
    #[strum(serialize = "Gift Card Wallet")]
    GiftCardWallet,
    /// Refund issued as a quick-credit gift card. Never inferred from free
    /// text; only settable by the caller.
    #[strum(serialize = "Gift Card QC")]
    GiftCardQc,
    /// Refund credited as SuperCoins.
    #[strum(serialize = "SuperCoins")]
    SuperCoins,
}

/// Lifecycle state of a refund relative to its SLA window.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefundStatus {
    /// Refund initiated but not yet settled.
    #[default]
    Processing,
    /// Refund settled inside the promised SLA window.
    CompletedWithinSla,
    /// Refund settled, but the SLA window has already lapsed.
    CompletedPostSla,
}

/// Statement surface a settled refund lands on, used to pick the
/// verification wording of completed-refund messages.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SettlementGroup {
    /// Visible on the bank account statement.
    BankAccount,
    /// Visible on the bank account statement, with UPI-specific guidance.
    Upi,
    /// Visible on the credit card statement (billed and unbilled sections).
    CreditCard,
    /// Delivered as a gift card to the wallet.
    GiftCardWallet,
    /// Delivered as a quick-credit gift card.
    GiftCardQc,
    /// Credited as SuperCoins.
    SuperCoins,
}

impl RefundMode {
    /// The statement surface this channel settles to.
    pub fn settlement_group(self) -> SettlementGroup {
        match self {
            Self::NetBanking | Self::Neft | Self::Imps | Self::DebitCard => {
                SettlementGroup::BankAccount
            }
            Self::Upi | Self::FlipkartUpi => SettlementGroup::Upi,
            Self::CreditCard | Self::CreditCardEmi => SettlementGroup::CreditCard,
            Self::GiftCardWallet => SettlementGroup::GiftCardWallet,
            Self::GiftCardQc => SettlementGroup::GiftCardQc,
            Self::SuperCoins => SettlementGroup::SuperCoins,
        }
    }

    /// Whether the channel name carries UPI semantics.
    pub fn is_upi_channel(self) -> bool {
        matches!(self, Self::Upi | Self::FlipkartUpi)
    }
}

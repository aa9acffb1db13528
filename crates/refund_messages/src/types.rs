//! Data model shared by the extraction and response engines.

use common_enums::{RefundMode, RefundStatus};
use common_utils::{consts, ext_traits::OptionStringExt};
use serde::{Deserialize, Serialize};

/// Working record for a single generate cycle.
///
/// Built from caller input (optionally pre-filled by the extractor),
/// consumed once by the responder and then discarded; it has no identity
/// or lifecycle beyond that cycle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RefundRecord {
    /// Refund amount as textual digits, without currency symbol or decimals.
    pub amount: String,
    /// Bank-issued refund reference number, when one has been shared.
    pub reference_number: Option<String>,
    /// Free-text initiation timestamp in the order-tracking display format.
    pub initiated_at: Option<String>,
    /// Channel the refund settles to.
    pub mode: RefundMode,
    /// Lifecycle state relative to the SLA window.
    pub status: RefundStatus,
    /// Free-text SLA deadline in the order-tracking display format.
    pub sla_deadline: Option<String>,
    /// Current SuperCoins balance; only consulted when `mode` is SuperCoins.
    pub super_coins_balance: Option<String>,
}

impl RefundRecord {
    /// A record with the given channel and status and every optional field
    /// unset, matching the refund form's initial state.
    pub fn new(amount: impl Into<String>, mode: RefundMode, status: RefundStatus) -> Self {
        Self {
            amount: amount.into(),
            reference_number: None,
            initiated_at: None,
            mode,
            status,
            sla_deadline: None,
            super_coins_balance: None,
        }
    }

    /// The reference number with whitespace trimmed, when present and
    /// non-blank.
    pub(crate) fn trimmed_reference(&self) -> Option<&str> {
        self.reference_number.trimmed()
    }

    /// SLA display text: the record's own value, or the fixed fallback
    /// phrase when none is present.
    pub(crate) fn sla_display(&self) -> &str {
        self.sla_deadline
            .trimmed()
            .unwrap_or(consts::DEFAULT_SLA_TEXT)
    }
}

/// Best-effort subset of record fields recovered from pasted text.
///
/// Every field is optional; absence means "not found", not "empty". The
/// extractor never guesses, so defaulting absent fields is the caller's
/// responsibility.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedRefund {
    /// Recovered refund amount, digits only.
    pub amount: Option<String>,
    /// Recovered refund channel.
    pub mode: Option<RefundMode>,
    /// Recovered lifecycle state.
    pub status: Option<RefundStatus>,
    /// Recovered SLA deadline text, verbatim.
    pub sla_deadline: Option<String>,
    /// Recovered initiation timestamp text.
    pub initiated_at: Option<String>,
    /// Recovered bank reference number.
    pub reference_number: Option<String>,
}

impl ExtractedRefund {
    /// Whether nothing at all was recovered.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.mode.is_none()
            && self.status.is_none()
            && self.sla_deadline.is_none()
            && self.initiated_at.is_none()
            && self.reference_number.is_none()
    }

    /// Overwrites on `record` exactly the fields this extraction found,
    /// leaving the rest untouched. This is the merge the paste-to-fill
    /// widget performs before the caller fills remaining gaps.
    pub fn apply_to(&self, record: &mut RefundRecord) {
        if let Some(amount) = &self.amount {
            record.amount.clone_from(amount);
        }
        if let Some(mode) = self.mode {
            record.mode = mode;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(sla) = &self.sla_deadline {
            record.sla_deadline = Some(sla.clone());
        }
        if let Some(initiated_at) = &self.initiated_at {
            record.initiated_at = Some(initiated_at.clone());
        }
        if let Some(reference) = &self.reference_number {
            record.reference_number = Some(reference.clone());
        }
    }
}

//! Anchor-based field recovery from pasted refund-status text.
//!
//! Each rule scans the whole input independently for a fixed anchor phrase
//! and captures the value next to it; a missing or malformed anchor leaves
//! the field absent, never fails the call. When an anchor occurs more than
//! once, the first occurrence in document order wins, keeping extraction
//! idempotent.

use std::sync::LazyLock;

use common_enums::{RefundMode, RefundStatus};
use regex::Regex;

use crate::types::ExtractedRefund;

/// `Amount (Rs)` label with tolerated parenthesis/spacing variants; the
/// value is the digits token on the same or the following line.
static AMOUNT_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)amount\s*\(\s*rs\.?\s*\)\s*:?\s*(\d+)")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile amount anchor");
        })
        .ok()
});

/// `Mode` label inside the `Payments and Refunds` section, capturing the
/// line immediately after the label. This is the transaction-level mode.
static SCOPED_MODE_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?is)payments\s+and\s+refunds.*?\bmode[ \t]*\r?\n[ \t]*([^\r\n]+)")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile scoped mode anchor");
        })
        .ok()
});

/// Unscoped `Mode` label fallback, anywhere in the text.
static MODE_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\bmode[ \t]*\r?\n[ \t]*([^\r\n]+)")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile mode anchor");
        })
        .ok()
});

/// `SLA` label with an optional colon separator; the value is the rest of
/// the label line or the immediately following line, kept verbatim.
static SLA_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsla\b[ \t]*:?[ \t]*\r?\n?[ \t]*([^\r\n]+)")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile sla anchor");
        })
        .ok()
});

/// Line beginning with `Init`, as emitted by the tracking UI for the
/// initiation timestamp (`Init28 Jan 26, 08:47 AM`).
static INIT_DATE_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*init[ \t]*:?[ \t]*(.*)$")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile init date anchor");
        })
        .ok()
});

/// Fallback for the initiation timestamp: a line beginning with
/// `Processing` followed directly by a digit.
static PROCESSING_DATE_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*processing(\d[^\r\n]*)$")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile processing date anchor");
        })
        .ok()
});

/// `Bank reference no` label, the only recognized reference-number anchor.
static REFERENCE_ANCHOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)bank reference no\.?\s*:?\s*(\w+)")
        .map_err(|error| {
            tracing::error!(?error, "failed to compile bank reference anchor");
        })
        .ok()
});

/// Recovers whatever refund record fields the anchor rules can find in
/// `text`. Never fails: at worst every field comes back absent.
#[tracing::instrument(skip_all)]
pub fn extract(text: &str) -> ExtractedRefund {
    let (status, initiated_at) = extract_status(text);
    let extracted = ExtractedRefund {
        amount: capture(&AMOUNT_ANCHOR, text),
        mode: extract_mode(text),
        status,
        sla_deadline: capture(&SLA_ANCHOR, text),
        initiated_at,
        reference_number: capture(&REFERENCE_ANCHOR, text),
    };
    if extracted.is_empty() {
        tracing::debug!("no anchor phrases recognized in pasted text");
    }
    extracted
}

/// First capture of `anchor` in `text`, trimmed; `None` when the anchor is
/// absent or its pattern failed to compile.
fn capture(anchor: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let value = anchor
        .as_ref()?
        .captures(text)?
        .get(1)?
        .as_str()
        .trim()
        .to_string();
    (!value.is_empty()).then_some(value)
}

/// Resolves the refund mode, preferring the `Mode` label scoped under the
/// `Payments and Refunds` section over the first unscoped one.
fn extract_mode(text: &str) -> Option<RefundMode> {
    capture(&SCOPED_MODE_ANCHOR, text)
        .or_else(|| capture(&MODE_ANCHOR, text))
        .and_then(|value| normalize_mode(&value))
}

/// Maps free-text mode wording onto the closed channel set by
/// case-insensitive substring matching, first match winning.
///
/// Any gift-card variant lands in the wallet bucket; the quick-credit
/// gift card is only ever set manually. Unrecognized wording yields
/// `None` rather than a guess.
fn normalize_mode(value: &str) -> Option<RefundMode> {
    let value = value.to_lowercase();
    if value.contains("credit card emi") {
        Some(RefundMode::CreditCardEmi)
    } else if value.contains("credit card") {
        Some(RefundMode::CreditCard)
    } else if value.contains("fk upi") || value.contains("flipkart upi") {
        Some(RefundMode::FlipkartUpi)
    } else if value.contains("upi") {
        Some(RefundMode::Upi)
    } else if value.contains("debit") {
        Some(RefundMode::DebitCard)
    } else if value.contains("net") && value.contains("banking") {
        Some(RefundMode::NetBanking)
    } else if value.contains("neft") {
        Some(RefundMode::Neft)
    } else if value.contains("imps") {
        Some(RefundMode::Imps)
    } else if value.contains("coin") {
        Some(RefundMode::SuperCoins)
    } else if value.contains("gift card") || value.contains("gc") {
        Some(RefundMode::GiftCardWallet)
    } else {
        tracing::debug!(mode_text = %value, "unrecognized refund mode text");
        None
    }
}

/// Detects the lifecycle state from the literal `Processing` / `Completed`
/// tokens, and for processing refunds also recovers the initiation
/// timestamp from its companion line.
fn extract_status(text: &str) -> (Option<RefundStatus>, Option<String>) {
    if text.contains("Processing") {
        let initiated_at =
            capture(&INIT_DATE_ANCHOR, text).or_else(|| capture(&PROCESSING_DATE_ANCHOR, text));
        (Some(RefundStatus::Processing), initiated_at)
    } else if text.contains("Completed") {
        // deliberate default; a time-based rule elsewhere may promote it
        (Some(RefundStatus::CompletedWithinSla), None)
    } else {
        (None, None)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    const COMPLETED_DUMP: &str = "Associated Refunds\nTotal Amount (Rs)\n953\nAll refund modes\nRefund ID\nCR26012808473823383443701\nCompleted\nMode\nCredit Card\nAmount(Rs)\n953\nRefund Id - CR26012808473823383443701\nCompleted\nPayments and Refunds\nPayment reference no.\nPZT2601280832OYEAD04\nType\nRefund\nMode\nCredit Card\nSLA\n03 Feb 26, 08:47 AM\nReason\nCourier Return\nComment\nBeneficiary Details\nCard No.************8288\nCard BankFLIPKARTAXISBANK\nCard NetworkMASTERCARD";

    const PROCESSING_DUMP: &str = "Associated Refunds\nTotal Amount (Rs)\n953\nRefund ID\nCR26012808473823383443701\nProcessing\nPayments and Refunds\nType\nRefund\nMode\nCredit Card\nSLA\n03 Feb 26, 08:47 AM\nInit28 Jan 26, 08:47 AM\n\nProcessing28 Jan 26, 08:47 AM";

    const AMBIGUOUS_MODE_DUMP: &str = "Associated Refunds\nTotal Amount (Rs)\n144\nAll refund modes\nRefund ID\nCR2601281952077724172507\nCompleted\nMode\nUpi Intent\nAmount(Rs)\n144\nRefund Id - CR2601281952077724172507\nCompleted\nPayments and Refunds\nPayment reference no.\nPZT26012818541M35G02\nType\nRefund\nMode\nCredit Card\nSLA\n28 Jan 26, 08:53 PM\nReason\nCourier Return\nComment\nBank reference no\n622085790286";

    #[test]
    fn amount_label_captures_next_line_digits() {
        let extracted = extract("Amount (Rs)\n953");
        assert_eq!(extracted.amount.as_deref(), Some("953"));
    }

    #[test_case("Amount(Rs) 953"; "same line, no space before parenthesis")]
    #[test_case("Amount ( Rs ) : 953"; "colon separator")]
    #[test_case("amount (rs)\n953"; "lowercase label")]
    fn amount_label_variants_capture(text: &str) {
        assert_eq!(extract(text).amount.as_deref(), Some("953"));
    }

    #[test]
    fn first_amount_label_wins() {
        let extracted = extract("Total Amount (Rs)\n953\nAmount(Rs)\n144");
        assert_eq!(extracted.amount.as_deref(), Some("953"));
    }

    #[test]
    fn scoped_mode_wins_over_earlier_unscoped_mode() {
        let extracted = extract(AMBIGUOUS_MODE_DUMP);
        assert_eq!(extracted.mode, Some(RefundMode::CreditCard));
    }

    #[test]
    fn unscoped_mode_is_used_without_a_payments_section() {
        let extracted = extract("Mode\nUpi Intent\nCompleted");
        assert_eq!(extracted.mode, Some(RefundMode::Upi));
    }

    #[test_case("Credit Card EMI", RefundMode::CreditCardEmi; "credit card emi before credit card")]
    #[test_case("Credit Card", RefundMode::CreditCard; "credit card")]
    #[test_case("FK UPI", RefundMode::FlipkartUpi; "fk upi before upi")]
    #[test_case("Flipkart UPI", RefundMode::FlipkartUpi; "flipkart upi")]
    #[test_case("Upi Intent", RefundMode::Upi; "upi intent")]
    #[test_case("Debit Card", RefundMode::DebitCard; "debit card")]
    #[test_case("Net Banking", RefundMode::NetBanking; "net banking with space")]
    #[test_case("NetBanking", RefundMode::NetBanking; "net banking joined")]
    #[test_case("NEFT", RefundMode::Neft; "neft")]
    #[test_case("IMPS transfer", RefundMode::Imps; "imps")]
    #[test_case("SuperCoin", RefundMode::SuperCoins; "supercoin")]
    #[test_case("Gift Card", RefundMode::GiftCardWallet; "gift card defaults to wallet")]
    #[test_case("GC refund", RefundMode::GiftCardWallet; "gc abbreviation")]
    fn mode_wording_normalizes(text: &str, expected: RefundMode) {
        assert_eq!(normalize_mode(text), Some(expected));
    }

    #[test]
    fn gift_card_qc_is_never_inferred() {
        assert_eq!(normalize_mode("Gift Card QC"), Some(RefundMode::GiftCardWallet));
    }

    #[test]
    fn unrecognized_mode_stays_absent() {
        assert_eq!(normalize_mode("Cheque"), None);
        let extracted = extract("Mode\nCheque\nCompleted");
        assert_eq!(extracted.mode, None);
        assert_eq!(extracted.status, Some(RefundStatus::CompletedWithinSla));
    }

    #[test]
    fn sla_value_is_kept_verbatim_with_time() {
        let extracted = extract(COMPLETED_DUMP);
        assert_eq!(extracted.sla_deadline.as_deref(), Some("03 Feb 26, 08:47 AM"));
    }

    #[test]
    fn sla_accepts_colon_separator_on_the_same_line() {
        let extracted = extract("SLA: 05 Feb 26, 10:00 AM");
        assert_eq!(extracted.sla_deadline.as_deref(), Some("05 Feb 26, 10:00 AM"));
    }

    #[test]
    fn processing_token_sets_status_and_init_date() {
        let extracted = extract(PROCESSING_DUMP);
        assert_eq!(extracted.status, Some(RefundStatus::Processing));
        assert_eq!(extracted.initiated_at.as_deref(), Some("28 Jan 26, 08:47 AM"));
    }

    #[test]
    fn processing_line_with_digits_is_the_fallback_init_source() {
        let extracted = extract("Refund\nProcessing28 Jan 26, 08:47 AM");
        assert_eq!(extracted.status, Some(RefundStatus::Processing));
        assert_eq!(extracted.initiated_at.as_deref(), Some("28 Jan 26, 08:47 AM"));
    }

    #[test]
    fn processing_takes_precedence_over_completed() {
        let extracted = extract(PROCESSING_DUMP);
        assert_eq!(extracted.status, Some(RefundStatus::Processing));
    }

    #[test]
    fn completed_token_defaults_to_within_sla() {
        let extracted = extract(COMPLETED_DUMP);
        assert_eq!(extracted.status, Some(RefundStatus::CompletedWithinSla));
        assert_eq!(extracted.initiated_at, None);
    }

    #[test]
    fn bank_reference_label_captures_token() {
        let extracted = extract("Bank reference no\n622085790286");
        assert_eq!(extracted.reference_number.as_deref(), Some("622085790286"));
    }

    #[test]
    fn other_reference_labels_are_ignored() {
        let extracted = extract("Payment reference no.\nPZT2601280832OYEAD04");
        assert_eq!(extracted.reference_number, None);
    }

    #[test]
    fn full_completed_dump_extracts_every_field() {
        let extracted = extract(AMBIGUOUS_MODE_DUMP);
        assert_eq!(extracted.amount.as_deref(), Some("144"));
        assert_eq!(extracted.mode, Some(RefundMode::CreditCard));
        assert_eq!(extracted.status, Some(RefundStatus::CompletedWithinSla));
        assert_eq!(extracted.sla_deadline.as_deref(), Some("28 Jan 26, 08:53 PM"));
        assert_eq!(extracted.reference_number.as_deref(), Some("622085790286"));
    }

    #[test]
    fn empty_and_anchorless_input_extract_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("no recognizable anchors here").is_empty());
        assert!(extract("text without any newline at all").is_empty());
    }

    proptest! {
        #[test]
        fn extraction_never_panics(text in "\\PC*") {
            let _ = extract(&text);
        }

        #[test]
        fn extraction_is_idempotent(text in "\\PC*") {
            prop_assert_eq!(extract(&text), extract(&text));
        }
    }
}

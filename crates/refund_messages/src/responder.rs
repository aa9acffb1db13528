//! Deterministic rendering of support messages from a completed refund
//! record.
//!
//! Selection runs in priority order: SuperCoins first regardless of
//! status, then the lifecycle state. Dispatch is exhaustive over the
//! closed enums, so every well-formed record renders to a message. Lines
//! within a message are joined by a single `\n` and the result carries no
//! trailing line terminator.

use common_enums::{RefundMode, RefundStatus, SettlementGroup};
use common_utils::{consts, date_time, ext_traits::OptionStringExt};
use time::Date;

use crate::{dates, types::RefundRecord};

const SEARCH_KEYWORD_LINE: &str = "Search for a refund with the keyword 'Flipkart'.";

const UPI_STATEMENT_LINE: &str = "For any UPI transaction, I request you to check the bank \
                                  account statement for a refund. Search for a refund with the \
                                  keyword 'Flipkart'.";

const CARD_STATEMENT_LINE: &str = "For the credit card transaction, verify both the billed and \
                                   unbilled sections of the bank statement to view the refund \
                                   amount. Search for a refund with the keyword 'Flipkart'.";

/// Renders the support message for `record` against today's civil date in
/// IST. Thin wall-clock wrapper over [`generate_at`].
pub fn generate(record: &RefundRecord) -> String {
    generate_at(record, date_time::now_ist().date())
}

/// Renders the support message for `record`, with `today` injected as the
/// reference civil date. Pure and total over the closed enums.
#[tracing::instrument(skip_all, fields(mode = %record.mode, status = %record.status))]
pub fn generate_at(record: &RefundRecord, today: Date) -> String {
    if record.mode == RefundMode::SuperCoins {
        return super_coins_message(record);
    }
    match record.status {
        RefundStatus::Processing => pending_message(record),
        RefundStatus::CompletedWithinSla => completed_within_sla_message(record, today),
        RefundStatus::CompletedPostSla => completed_post_sla_message(record, today),
    }
}

/// SuperCoins wording ignores the SLA grouping entirely: the coins either
/// have been credited (post-SLA) or will be credited by the SLA deadline.
fn super_coins_message(record: &RefundRecord) -> String {
    let balance = record
        .super_coins_balance
        .trimmed()
        .unwrap_or(consts::SUPER_COINS_BALANCE_PLACEHOLDER);
    let opening = if record.status == RefundStatus::CompletedPostSla {
        format!(
            "{} SuperCoins have been credited for your Minutes order, and the balance of \
             SuperCoins is {balance}.",
            record.amount
        )
    } else {
        format!(
            "{} SuperCoins will be credited for your Minutes order by {}, and the balance of \
             SuperCoins is {balance}.",
            record.amount,
            record.sla_display()
        )
    };
    format!(
        "{opening}\nYou can see the balance here: 1. Log in to the app and tap 'Accounts,' and \
         the balance is available on the top right corner of the page. 2. SuperCoins balance is \
         also available on the 'Orders' page."
    )
}

fn pending_message(record: &RefundRecord) -> String {
    let initiated = dates::format_display_date(record.initiated_at.as_deref().unwrap_or_default());
    [
        format!(
            "The refund of Rs {} for the order, although it was initiated to {} on {initiated}, \
             is still pending.",
            record.amount, record.mode
        ),
        "Usually refund should be completed or update will be shared within 2-4 hours."
            .to_string(),
        format!(
            "Once the refund process is completed, you'll receive an SMS. Meanwhile, you can \
             also track it here: {}.",
            consts::ORDERS_TRACKING_URL
        ),
    ]
    .join("\n")
}

fn completed_within_sla_message(record: &RefundRecord, today: Date) -> String {
    let today = dates::long_form_date(today);
    match record.mode.settlement_group() {
        SettlementGroup::BankAccount => {
            settled_message(record, &today, "bank account", SEARCH_KEYWORD_LINE)
        }
        SettlementGroup::Upi => settled_message(record, &today, "bank account", UPI_STATEMENT_LINE),
        SettlementGroup::CreditCard => {
            settled_message(record, &today, "credit card", CARD_STATEMENT_LINE)
        }
        SettlementGroup::GiftCardWallet => gift_card_wallet_message(record, &today),
        SettlementGroup::GiftCardQc => gift_card_qc_message(record, &today),
        SettlementGroup::SuperCoins => super_coins_message(record),
    }
}

/// The three statement-backed groups share one settled template, branching
/// only on reference-number presence and on the closing guidance line.
fn settled_message(record: &RefundRecord, today: &str, statement: &str, closing: &str) -> String {
    let opening = match record.trimmed_reference() {
        Some(reference) => format!(
            "Rs {} for your Minutes order will be refunded to your {} in the next {} with your \
             bank reference number {reference}.",
            record.amount,
            record.mode,
            record.sla_display()
        ),
        None => format!(
            "Rs {} for your Minutes order will be refunded to your {} in the next {}.",
            record.amount,
            record.mode,
            record.sla_display()
        ),
    };
    format!("{opening}\n{}\n{closing}", statement_check_line(statement, today))
}

fn statement_check_line(statement: &str, today: &str) -> String {
    format!(
        "Check the {statement} statement from {today} date to the present date (use the bank's \
         app/website/ or contact customer care/bank statement or passbook)."
    )
}

fn gift_card_wallet_message(record: &RefundRecord, today: &str) -> String {
    format!(
        "I can see that the Gift Card refund of Rs {} has been completed on {today}, and sent to \
         the registered email address.\n\nTo view Gift Card balance: - {{For App}} Go to 'Saved \
         credit/Debit & gift cards' under 'Account'. - {{For Website}} Go to 'My Profile' >> \
         Select 'Gift Cards' under Payments.\n\nGift Card is valid for one year from the date of \
         purchase.\nSMS will be sent every time a customer uses a Gift Card or a refund of the \
         Gift Card is initiated (easy transaction tracking).",
        record.amount
    )
}

fn gift_card_qc_message(record: &RefundRecord, today: &str) -> String {
    format!(
        "I can see that the refund of Rs {} for your order was added to the Gift Card on \
         {today}, and the details have been sent to the registered email address used to buy the \
         Gift Card.\n\nSteps to check Gift Card balance [Website Only]: Go to 'Gift Card' \
         section >>> 'Check Gift Card Balance' >>> Enter the Gift Card number and PIN\n\nYou can \
         add the Card to the 'Wallet' section for ease of usage.\n\nIf you are unable to find \
         it, please follow these steps: - Click here: {} - Select the particular order. - Tap \
         'Resend Gift Card' option.",
        record.amount,
        consts::ORDERS_TRACKING_URL
    )
}

/// Post-SLA messages are unified across modes apart from the statement
/// wording, always state the reference number value as given (even when
/// empty), and close with the fixed escalation guidance.
fn completed_post_sla_message(record: &RefundRecord, today: Date) -> String {
    let today = dates::long_form_date(today);
    let mut lines = vec![format!(
        "Rs {} for the item was refunded to {} and should reflect in your account latest by \
         {today}.",
        record.amount, record.mode
    )];

    if record.mode.settlement_group() == SettlementGroup::CreditCard {
        lines.push(statement_check_line("credit card", &today));
        lines.push(CARD_STATEMENT_LINE.to_string());
    } else {
        lines.push(statement_check_line("bank account", &today));
        lines.push(
            if record.mode.is_upi_channel() {
                UPI_STATEMENT_LINE
            } else {
                SEARCH_KEYWORD_LINE
            }
            .to_string(),
        );
    }

    lines.push(format!(
        "We've sent an SMS with the refund reference number {} that confirms that the refund has \
         been received by your bank.",
        record.reference_number.as_deref().map(str::trim).unwrap_or_default()
    ));
    lines.push(
        "If the refund amount is not visible then, I request you to contact the bank using the \
         phone number on the back of your card and provide the refund reference number."
            .to_string(),
    );
    lines.push("If the bank does not assist you, escalate the issue to the bank's grievance cell.".to_string());
    lines.join("\n")
}

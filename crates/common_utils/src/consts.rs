//! Commonly used constants: fixed phrases and URLs interpolated into
//! generated support messages.

/// Rendered in place of the initiation date when the record carries none.
pub const MISSING_INIT_DATE_PLACEHOLDER: &str = "[Refund Initiated Date and Time]";

/// Fallback SLA display text when the record carries no SLA value.
pub const DEFAULT_SLA_TEXT: &str = "2-4 hours";

/// Rendered in place of the SuperCoins balance when the record carries none.
pub const SUPER_COINS_BALANCE_PLACEHOLDER: &str = "XX";

/// Order tracking page linked from pending-refund messages.
pub const ORDERS_TRACKING_URL: &str = "https://www.flipkart.com/account/orders";

/// Help centre page linked from SMS previews.
pub const HELP_CENTRE_URL: &str = "https://www.flipkart.com/helpcentre";

/// Quick snippet: SMS confirmation wording when a reference number exists.
pub const SNIPPET_SMS_WITH_RRN: &str = "We've sent an SMS with the refund reference number.";

/// Quick snippet: SMS confirmation wording without a reference number.
pub const SNIPPET_SMS_WITHOUT_RRN: &str = "We've sent an SMS with the refund details.";

/// Quick snippet: closing line thanking the customer for their patience.
pub const SNIPPET_EMPATHY_CLOSING: &str =
    "I really appreciate you being so patient while I helped.";

/// SMS consent wording suggested during late hours (9 PM to 9 AM IST).
pub const SMS_CONSENT_LATE_HOURS: &str =
    "Could you please confirm if I can share the refund details with you via SMS?";

/// SMS consent wording suggested during day hours.
pub const SMS_CONSENT_DAY_HOURS: &str = "Let me share the refund details over SMS too.";

/// First IST hour (inclusive) considered late for SMS consent.
pub const LATE_HOURS_START: u8 = 21;

/// First IST hour (inclusive) considered day time for SMS consent.
pub const LATE_HOURS_END: u8 = 9;

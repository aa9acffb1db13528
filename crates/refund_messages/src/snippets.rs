//! Quick-snippet texts and derived SMS suggestions for the support
//! sidebar.
//!
//! Pure derived-value computations over generated messages and the IST
//! hour of day; the wall clock is only read in the `*_now` wrapper.

use common_utils::{consts, date_time};

pub use common_utils::consts::{
    SNIPPET_EMPATHY_CLOSING, SNIPPET_SMS_WITHOUT_RRN, SNIPPET_SMS_WITH_RRN,
};

/// Builds the SMS body previewed in the sidebar from a generated message:
/// its first non-empty line wrapped in the fixed update template. A blank
/// message yields no preview.
pub fn sms_preview(message: &str) -> Option<String> {
    let first_line = message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())?;
    Some(format!(
        "Flipkart Update: Thanks for reaching us. {first_line} For more details, click here: {}",
        consts::HELP_CENTRE_URL
    ))
}

/// Whether `hour` (0-23, IST) falls in the late window where SMS consent
/// must be asked for first: 9 PM up to 9 AM.
pub fn is_late_hours(hour: u8) -> bool {
    hour >= consts::LATE_HOURS_START || hour < consts::LATE_HOURS_END
}

/// The SMS consent wording suggested for the given IST hour.
pub fn sms_consent_suggestion(hour: u8) -> &'static str {
    if is_late_hours(hour) {
        consts::SMS_CONSENT_LATE_HOURS
    } else {
        consts::SMS_CONSENT_DAY_HOURS
    }
}

/// [`sms_consent_suggestion`] against the current IST hour.
pub fn sms_consent_suggestion_now() -> &'static str {
    sms_consent_suggestion(date_time::now_ist().hour())
}

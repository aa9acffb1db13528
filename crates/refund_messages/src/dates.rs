//! Shared date helpers: the order-tracking display-date format, SLA display
//! trimming, and SLA-driven status promotion.
//!
//! Every function here is pure; the reference instant is always a parameter.

use std::sync::LazyLock;

use common_enums::RefundStatus;
use common_utils::{
    consts,
    errors::{CustomResult, ParsingError},
};
use error_stack::{report, IntoReport, ResultExt};
use regex::Regex;
use time::{Date, Duration, Month, PrimitiveDateTime, Time};

/// Order-tracking display format: `28 Dec 25, 02:44 am`, with the time
/// component optional and a 2- or 4-digit year.
static DISPLAY_DATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\d{1,2})\s+([a-z]{3,9})\s+(\d{2}|\d{4})(?:\s*,\s*(\d{1,2}):(\d{2})\s*([ap]m))?\s*$",
    )
    .map_err(|error| {
        tracing::error!(?error, "failed to compile display date pattern");
    })
    .ok()
});

/// Refund SLA deadlines this close in the future keep their time component
/// in display text.
const SLA_FULL_TEXT_WINDOW: Duration = Duration::hours(3);

/// A display-format timestamp split into its parsed parts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DisplayDate {
    pub(crate) date: Date,
    pub(crate) time: Option<Time>,
}

impl DisplayDate {
    /// Long-form rendering: `December 28, 2025` plus `, 2:44 am` when a
    /// time component was present.
    pub(crate) fn long_form(&self) -> String {
        let date = long_form_date(self.date);
        match self.time {
            Some(time) => format!("{date}, {}", lower_twelve_hour(time)),
            None => date,
        }
    }
}

/// Long-form civil date: `February 3, 2026`.
pub fn long_form_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

fn lower_twelve_hour(time: Time) -> String {
    let (hour, meridiem) = match time.hour() {
        0 => (12, "am"),
        hour @ 1..=11 => (hour, "am"),
        12 => (12, "pm"),
        hour => (hour - 12, "pm"),
    };
    format!("{hour}:{:02} {meridiem}", time.minute())
}

fn month_from_name(name: &str) -> Option<Month> {
    match name.to_lowercase().as_str() {
        "jan" | "january" => Some(Month::January),
        "feb" | "february" => Some(Month::February),
        "mar" | "march" => Some(Month::March),
        "apr" | "april" => Some(Month::April),
        "may" => Some(Month::May),
        "jun" | "june" => Some(Month::June),
        "jul" | "july" => Some(Month::July),
        "aug" | "august" => Some(Month::August),
        "sep" | "sept" | "september" => Some(Month::September),
        "oct" | "october" => Some(Month::October),
        "nov" | "november" => Some(Month::November),
        "dec" | "december" => Some(Month::December),
        _ => None,
    }
}

fn parse_component<T: std::str::FromStr>(
    captures: &regex::Captures<'_>,
    index: usize,
) -> CustomResult<T, ParsingError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    captures
        .get(index)
        .ok_or_else(|| report!(ParsingError::DateParsingFailed))?
        .as_str()
        .parse::<T>()
        .into_report()
        .change_context(ParsingError::DateParsingFailed)
}

/// Parses display-format text into its calendar parts, validating the
/// calendar date and clock time.
pub(crate) fn parse_display_date(input: &str) -> CustomResult<DisplayDate, ParsingError> {
    let pattern = DISPLAY_DATE
        .as_ref()
        .ok_or_else(|| report!(ParsingError::DateParsingFailed))?;
    let captures = pattern
        .captures(input)
        .ok_or_else(|| report!(ParsingError::DateParsingFailed))?;

    let day: u8 = parse_component(&captures, 1)?;
    let month = captures
        .get(2)
        .and_then(|name| month_from_name(name.as_str()))
        .ok_or_else(|| report!(ParsingError::DateParsingFailed))?;
    let year: i32 = parse_component(&captures, 3)?;
    let year = if year < 100 { year + 2000 } else { year };

    let date = Date::from_calendar_date(year, month, day)
        .into_report()
        .change_context(ParsingError::DateParsingFailed)
        .attach_printable_lazy(|| format!("invalid calendar date in {input:?}"))?;

    let time = match captures.get(6) {
        Some(meridiem) => {
            let hour: u8 = parse_component(&captures, 4)?;
            let minute: u8 = parse_component(&captures, 5)?;
            if !(1..=12).contains(&hour) {
                return Err(report!(ParsingError::DateParsingFailed));
            }
            let is_pm = meridiem.as_str().eq_ignore_ascii_case("pm");
            let hour = match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (hour, false) => hour,
                (hour, true) => hour + 12,
            };
            Some(
                Time::from_hms(hour, minute, 0)
                    .into_report()
                    .change_context(ParsingError::DateParsingFailed)?,
            )
        }
        None => None,
    };

    Ok(DisplayDate { date, time })
}

/// Formats free-text date input for message interpolation.
///
/// Valid display-format input renders long-form (with a lowercase 12-hour
/// time when one was present), anything unparseable echoes back verbatim,
/// and empty input renders the fixed bracketed placeholder. Never fails.
pub fn format_display_date(input: &str) -> String {
    if input.trim().is_empty() {
        return consts::MISSING_INIT_DATE_PLACEHOLDER.to_string();
    }
    match parse_display_date(input) {
        Ok(parsed) => parsed.long_form(),
        Err(error) => {
            tracing::debug!(?error, "display date did not parse, echoing verbatim");
            input.to_string()
        }
    }
}

/// Trims a verbatim SLA deadline down to what support agents display.
///
/// A deadline with a time component keeps its full text only while it is
/// at most three hours away from `now` (and not already past); otherwise
/// the date-only prefix before the first comma is kept. Unparseable text
/// passes through verbatim.
pub fn sla_display_text(sla: &str, now: PrimitiveDateTime) -> String {
    match parse_display_date(sla) {
        Ok(DisplayDate {
            date,
            time: Some(time),
        }) => {
            let lead = PrimitiveDateTime::new(date, time) - now;
            if lead > Duration::ZERO && lead <= SLA_FULL_TEXT_WINDOW {
                sla.trim().to_string()
            } else {
                date_only_prefix(sla)
            }
        }
        Ok(_) => date_only_prefix(sla),
        Err(_) => sla.to_string(),
    }
}

fn date_only_prefix(sla: &str) -> String {
    sla.split(',').next().unwrap_or(sla).trim().to_string()
}

/// Promotes a completed-within-SLA status to completed-post-SLA once the
/// parsed deadline is behind `now`.
///
/// Date-only deadlines expire when the deadline date is strictly before
/// `now`'s date. Absent or unparseable deadlines never promote, and other
/// statuses pass through unchanged.
pub fn effective_status(
    status: RefundStatus,
    sla_deadline: Option<&str>,
    now: PrimitiveDateTime,
) -> RefundStatus {
    if status != RefundStatus::CompletedWithinSla {
        return status;
    }
    let Some(sla) = sla_deadline else {
        return status;
    };
    match parse_display_date(sla) {
        Ok(DisplayDate {
            date,
            time: Some(time),
        }) if now > PrimitiveDateTime::new(date, time) => RefundStatus::CompletedPostSla,
        Ok(DisplayDate { date, time: None }) if now.date() > date => {
            RefundStatus::CompletedPostSla
        }
        _ => status,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use test_case::test_case;
    use time::macros::datetime;

    use super::*;

    #[test_case("28 Dec 25, 02:44 am" => "December 28, 2025, 2:44 am"; "leading zero hour drops")]
    #[test_case("03 Feb 26, 08:47 AM" => "February 3, 2026, 8:47 am"; "uppercase meridiem lowers")]
    #[test_case("3 feb 2026, 12:05 pm" => "February 3, 2026, 12:05 pm"; "noon stays twelve")]
    #[test_case("1 Jan 26, 12:30 am" => "January 1, 2026, 12:30 am"; "midnight renders as twelve am")]
    #[test_case("03 Feb 26" => "February 3, 2026"; "date only")]
    #[test_case("28 December 25, 02:44 am" => "December 28, 2025, 2:44 am"; "full month name")]
    fn format_display_date_renders_long_form(input: &str) -> String {
        format_display_date(input)
    }

    #[test_case("tomorrow morning"; "free text")]
    #[test_case("31 Feb 26, 02:44 am"; "invalid calendar date")]
    #[test_case("28 Dec 25, 13:44 pm"; "hour outside twelve hour clock")]
    #[test_case("28 Dec 25, 02:61 am"; "minute out of range")]
    #[test_case("28 Foo 25"; "unknown month")]
    fn format_display_date_echoes_unparseable_input(input: &str) {
        assert_eq!(format_display_date(input), input);
    }

    #[test]
    fn format_display_date_uses_placeholder_for_empty_input() {
        assert_eq!(format_display_date(""), "[Refund Initiated Date and Time]");
        assert_eq!(
            format_display_date("   "),
            "[Refund Initiated Date and Time]"
        );
    }

    #[test]
    fn sla_text_keeps_time_component_only_close_to_deadline() {
        let sla = "03 Feb 26, 08:47 AM";
        // two hours ahead: keep the full text
        assert_eq!(
            sla_display_text(sla, datetime!(2026-02-03 06:47)),
            "03 Feb 26, 08:47 AM"
        );
        // a day ahead: strip down to the date
        assert_eq!(
            sla_display_text(sla, datetime!(2026-02-02 06:47)),
            "03 Feb 26"
        );
        // already past: strip down to the date
        assert_eq!(
            sla_display_text(sla, datetime!(2026-02-03 09:00)),
            "03 Feb 26"
        );
    }

    #[test]
    fn sla_text_passes_unparseable_input_through() {
        assert_eq!(
            sla_display_text("by end of day", datetime!(2026-02-03 06:47)),
            "by end of day"
        );
    }

    #[test]
    fn effective_status_promotes_past_deadlines() {
        let now = datetime!(2026-02-03 09:00);
        assert_eq!(
            effective_status(
                RefundStatus::CompletedWithinSla,
                Some("03 Feb 26, 08:47 AM"),
                now
            ),
            RefundStatus::CompletedPostSla
        );
        assert_eq!(
            effective_status(
                RefundStatus::CompletedWithinSla,
                Some("03 Feb 26, 09:47 AM"),
                now
            ),
            RefundStatus::CompletedWithinSla
        );
        // date-only deadlines expire at the end of the deadline date
        assert_eq!(
            effective_status(RefundStatus::CompletedWithinSla, Some("03 Feb 26"), now),
            RefundStatus::CompletedWithinSla
        );
        assert_eq!(
            effective_status(
                RefundStatus::CompletedWithinSla,
                Some("02 Feb 26"),
                now
            ),
            RefundStatus::CompletedPostSla
        );
    }

    #[test]
    fn effective_status_leaves_other_inputs_alone() {
        let now = datetime!(2026-02-03 09:00);
        assert_eq!(
            effective_status(RefundStatus::Processing, Some("02 Feb 26"), now),
            RefundStatus::Processing
        );
        assert_eq!(
            effective_status(RefundStatus::CompletedWithinSla, None, now),
            RefundStatus::CompletedWithinSla
        );
        assert_eq!(
            effective_status(RefundStatus::CompletedWithinSla, Some("soon"), now),
            RefundStatus::CompletedWithinSla
        );
    }

    #[test]
    fn long_form_date_is_unpadded() {
        assert_eq!(
            long_form_date(time::macros::date!(2026 - 02 - 03)),
            "February 3, 2026"
        );
    }
}

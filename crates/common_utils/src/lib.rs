#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", "README.md"))]

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod validation;

/// Date-time utilities.
pub mod date_time {
    use time::{macros::offset, OffsetDateTime, PrimitiveDateTime, UtcOffset};

    /// Indian Standard Time civil offset. Hour-of-day and today's-date
    /// decisions in generated output are taken against this offset.
    pub const IST: UtcOffset = offset!(+5:30);

    /// Create a new [`PrimitiveDateTime`] with the current date and time in UTC.
    pub fn now() -> PrimitiveDateTime {
        let utc_date_time = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }

    /// The current civil date and time in IST.
    pub fn now_ist() -> PrimitiveDateTime {
        convert_to_pdt(OffsetDateTime::now_utc().to_offset(IST))
    }

    /// Convert from [`OffsetDateTime`] to [`PrimitiveDateTime`], discarding
    /// the offset.
    pub fn convert_to_pdt(offset_time: OffsetDateTime) -> PrimitiveDateTime {
        PrimitiveDateTime::new(offset_time.date(), offset_time.time())
    }

}

#![forbid(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

//! Closed enumerations shared by the refund message engines.

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", "README.md"))]

pub mod enums;

pub use enums::{RefundMode, RefundStatus, SettlementGroup};

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::panic,
    clippy::panicking_unwrap,
    clippy::unwrap_used
)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", "README.md"))]

pub mod dates;
pub mod extractor;
pub mod responder;
pub mod snippets;
pub mod types;

pub use extractor::extract;
pub use responder::{generate, generate_at};
pub use types::{ExtractedRefund, RefundRecord};

//! Extension traits for commonly used foreign types.

use error_stack::{IntoReport, ResultExt};
use serde::Deserialize;

use crate::errors::{self, CustomResult};

/// Extending functionalities of `String` for parsing into stronger types.
pub trait StringExt<T> {
    /// Convert `String` into type `<T>` (which being an `enum`).
    fn parse_enum(self, enum_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: std::str::FromStr,
        // Requirement for converting the `Err` variant of `FromStr` to `Report<Err>`
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static;

    /// Convert a JSON string into type `<T>` by using `serde::Deserialize`.
    fn parse_struct<'de>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl<T> StringExt<T> for String {
    fn parse_enum(self, enum_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: std::str::FromStr,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        T::from_str(&self)
            .into_report()
            .change_context(errors::ParsingError::EnumParseFailure(enum_name))
            .attach_printable_lazy(|| format!("Invalid enum variant {self:?} for enum {enum_name}"))
    }

    fn parse_struct<'de>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_str::<T>(self)
            .into_report()
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from string"))
    }
}

/// Extending functionalities of `Option<String>` for trimmed access.
pub trait OptionStringExt {
    /// The contained string with surrounding whitespace removed, or `None`
    /// when absent or blank.
    fn trimmed(&self) -> Option<&str>;
}

impl OptionStringExt for Option<String> {
    fn trimmed(&self) -> Option<&str> {
        self.as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

//! Core value types: style values, responsive values, requests and output objects.

mod keyword;
mod object;
mod value;

pub use object::{StyleEntry, StyleObject};
pub use value::{ResponsiveValue, StyleRequest, StyleValue, format_number};
pub(crate) use keyword::keyword_enum;
pub(crate) use value::impl_scalar_from;
